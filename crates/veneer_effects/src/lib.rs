//! Veneer Effects
//!
//! The decorative behavior layer of the page engine:
//!
//! - **Attachers**: idempotent routines that scan for marked elements and
//!   bind one behavior each (press ripple, pointer tilt, smooth-scroll
//!   anchors, reveal-on-scroll, typed text, the rotating hero gradient,
//!   accent wiring, theme toggling)
//! - **Attachment registry**: the side-table that makes repeated scans safe
//! - **Mutation watcher**: re-runs the attachers whenever new elements are
//!   inserted, so dynamic content gains the same behaviors
//! - **[`Enhancer`]**: the engine owning the document, listener table,
//!   timers, frames, and theme state, driven from a single-threaded loop
//!
//! # Quick Start
//!
//! ```rust
//! use veneer_effects::Enhancer;
//! use veneer_page::Document;
//! use veneer_theme::MemoryThemeStore;
//!
//! let mut doc = Document::new();
//! let button = doc.create_element("button");
//! doc.add_class(button, "btn");
//! let body = doc.body();
//! doc.append_child(body, button);
//!
//! let mut enhancer = Enhancer::new(doc, Box::new(MemoryThemeStore::new()));
//! enhancer.enhance();
//! assert_eq!(enhancer.get_theme(), "dark");
//! ```

pub mod enhancer;
pub mod hero;
pub mod marks;
pub mod ripple;
pub mod selectors;
pub mod tilt;
pub mod typed;

pub use enhancer::{Enhancer, REVEAL_THRESHOLD};
pub use marks::{AttachmentRegistry, BehaviorMarks};
pub use typed::TypedCycle;
