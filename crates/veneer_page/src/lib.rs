//! Veneer Page Model
//!
//! A headless stand-in for the platform surface a browser page provides:
//!
//! - **Element tree**: slotmap-keyed nodes with tag, id, classes,
//!   attributes, inline styles, text content, and a layout rectangle
//! - **Root variables**: the named style-variable namespace themes publish
//!   into
//! - **Selectors**: the fixed tag / class / attribute grammar the
//!   enhancement layer scans with
//! - **Observation**: insertion records and threshold-based viewport
//!   intersection, drained by the driving loop
//!
//! Nothing here renders. Layout rectangles are set by the embedder (or by
//! tests) and the document only does the bookkeeping a behavior layer needs.

pub mod document;
pub mod node;
pub mod selector;

pub use document::{Document, ScrollBehavior};
pub use node::Node;
pub use selector::Selector;

pub use veneer_core::NodeId;
