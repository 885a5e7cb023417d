//! Veneer
//!
//! A palette-driven theming layer plus a set of idempotent decorative
//! behaviors (press ripple, pointer tilt, smooth-scroll anchors,
//! reveal-on-scroll, typed text, a rotating hero gradient) attached to
//! elements of a headless page model. Dynamically inserted elements gain
//! the same behaviors through the mutation watcher.
//!
//! # Quick Start
//!
//! ```rust
//! use veneer::{Enhancer, Document, MemoryThemeStore, PartialPalette};
//!
//! // Build a page: markup opts into behaviors via classes and attributes
//! let mut doc = Document::new();
//! let body = doc.body();
//! let headline = doc.create_element("span");
//! doc.set_attr(headline, "data-typed", "Fast,Small,Yours");
//! doc.append_child(body, headline);
//!
//! // Boot the engine: variables, stored theme, attachers, watcher
//! let mut enhancer = Enhancer::new(doc, Box::new(MemoryThemeStore::new()));
//! enhancer.enhance();
//!
//! // Drive it from your loop
//! enhancer.advance(80.0);
//! assert_eq!(enhancer.document().text(headline), "F");
//!
//! // Retheme at runtime
//! enhancer.set_theme("light");
//! enhancer.apply_palette(PartialPalette {
//!     accent: Some("#ff8800".parse().unwrap()),
//!     ..PartialPalette::default()
//! });
//! ```
//!
//! # Architecture
//!
//! The engine is single-threaded and cooperative: pointer events, timers,
//! frame ticks, and observation sweeps are all delivered explicitly by the
//! embedder. See the member crates for the pieces:
//!
//! - `veneer_core`: colors, geometry, event dispatch
//! - `veneer_page`: the headless element tree and its observers
//! - `veneer_theme`: palette derivation, schemes, persistence
//! - `veneer_motion`: timer and frame scheduling
//! - `veneer_effects`: the attachers and the [`Enhancer`] engine

pub use veneer_core::{event_types, Color, ColorParseError, Event, EventData, NodeId, Point, Rect};
pub use veneer_effects::{selectors, Enhancer, TypedCycle, REVEAL_THRESHOLD};
pub use veneer_motion::{FrameHandle, FrameScheduler, TimerQueue};
pub use veneer_page::{Document, ScrollBehavior, Selector};
pub use veneer_theme::{
    ColorScheme, FileThemeStore, MemoryThemeStore, Palette, PaletteStore, PartialPalette,
    ThemeController, ThemeStore,
};
