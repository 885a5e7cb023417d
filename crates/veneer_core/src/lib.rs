//! Veneer Core Primitives
//!
//! This crate provides the foundational types for the Veneer page-enhancement
//! engine:
//!
//! - **Colors**: integer sRGB triples with the channel arithmetic every
//!   derived theme value is built from
//! - **Geometry**: points and rectangles for pointer math and visibility
//! - **Event Dispatch**: target-keyed listener registration with disposal
//!   handles
//!
//! # Example
//!
//! ```rust
//! use veneer_core::Color;
//!
//! let primary = Color::from_hex_str("#6c5ce7").unwrap();
//! let soft = primary.tint(0.7);
//! assert_eq!(soft, Color::from_hex_str(&soft.to_hex()).unwrap());
//! ```

pub mod color;
pub mod events;
pub mod geometry;

pub use color::{Color, ColorParseError};
pub use events::{event_types, Event, EventData, EventDispatcher, EventType, ListenerId};
pub use geometry::{Point, Rect};

slotmap::new_key_type! {
    /// Identity of an element in a page tree
    pub struct NodeId;
}
