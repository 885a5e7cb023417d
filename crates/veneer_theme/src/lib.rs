//! Veneer Theme System
//!
//! Palette-driven theming for the headless page engine:
//!
//! - **Palette**: the six named base colors driving the whole theme, with
//!   partial-merge updates
//! - **Derived colors**: tints, gradient stops, and shadow values computed
//!   from the base colors and published as root style variables
//! - **Color scheme**: the dark/light flag, its root class pair, and the
//!   scheme-dependent body recolor
//! - **Persistence**: the single stored flag behind [`ThemeStore`], with
//!   file-backed and in-memory implementations
//!
//! # Quick Start
//!
//! ```rust
//! use veneer_page::Document;
//! use veneer_theme::{ColorScheme, Palette, PaletteStore, PartialPalette};
//!
//! let mut doc = Document::new();
//! let mut store = PaletteStore::new(Palette::default());
//! store.apply(&mut doc, ColorScheme::Dark, PartialPalette::default());
//! assert!(doc.variable("hero-stop-a").is_some());
//! ```

pub mod controller;
pub mod palette;
pub mod scheme;
pub mod store;

pub use controller::ThemeController;
pub use palette::{Palette, PaletteStore, PartialPalette};
pub use scheme::ColorScheme;
pub use store::{FileThemeStore, MemoryThemeStore, StoreError, ThemeStore, THEME_KEY};
