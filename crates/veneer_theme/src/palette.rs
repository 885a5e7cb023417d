//! Palette state and derived color publication

use serde::{Deserialize, Serialize};
use veneer_core::Color;
use veneer_page::Document;

use crate::scheme::ColorScheme;

/// The six named base colors driving the whole theme
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
    pub background: Color,
    pub surface: Color,
    pub text: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            primary: Color::from_hex(0x6C5CE7),
            secondary: Color::from_hex(0x00CEC9),
            accent: Color::from_hex(0xFD79A8),
            background: Color::from_hex(0x10131A),
            surface: Color::from_hex(0x1A2029),
            text: Color::from_hex(0xE8ECF4),
        }
    }
}

/// A partial palette update. Unset fields keep their previous values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialPalette {
    pub primary: Option<Color>,
    pub secondary: Option<Color>,
    pub accent: Option<Color>,
    pub background: Option<Color>,
    pub surface: Option<Color>,
    pub text: Option<Color>,
}

impl Palette {
    /// Merge set fields from `partial`, keeping everything else
    pub fn merge(&mut self, partial: PartialPalette) {
        if let Some(c) = partial.primary {
            self.primary = c;
        }
        if let Some(c) = partial.secondary {
            self.secondary = c;
        }
        if let Some(c) = partial.accent {
            self.accent = c;
        }
        if let Some(c) = partial.background {
            self.background = c;
        }
        if let Some(c) = partial.surface {
            self.surface = c;
        }
        if let Some(c) = partial.text {
            self.text = c;
        }
    }
}

/// Holds the current palette and publishes it, plus its derived values, as
/// named variables on the document root.
pub struct PaletteStore {
    palette: Palette,
}

impl PaletteStore {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    /// A copy of the current palette
    pub fn palette(&self) -> Palette {
        self.palette
    }

    /// Merge a partial update, republish every variable, and re-apply the
    /// scheme-dependent body colors.
    pub fn apply(&mut self, doc: &mut Document, scheme: ColorScheme, partial: PartialPalette) {
        self.palette.merge(partial);
        self.publish(doc);
        self.apply_scheme(doc, scheme);
        tracing::debug!(scheme = %scheme, "palette applied");
    }

    /// Publish the six base colors and the four derived values
    pub fn publish(&self, doc: &mut Document) {
        let p = &self.palette;
        doc.set_variable("primary", p.primary.to_hex());
        doc.set_variable("secondary", p.secondary.to_hex());
        doc.set_variable("accent", p.accent.to_hex());
        doc.set_variable("background", p.background.to_hex());
        doc.set_variable("surface", p.surface.to_hex());
        doc.set_variable("text", p.text.to_hex());

        doc.set_variable("primary-soft", p.primary.tint(0.7).to_hex());
        doc.set_variable("hero-stop-a", p.primary.rgba(0.85));
        doc.set_variable("hero-stop-b", p.secondary.rgba(0.75));
        doc.set_variable("card-shadow", p.background.rgba(0.6));
    }

    /// Recolor the body for the active scheme: dark uses the raw
    /// background/text pair, light pulls the background toward white by 90%
    /// and the text toward black by 30%.
    pub fn apply_scheme(&self, doc: &mut Document, scheme: ColorScheme) {
        let (bg, fg) = match scheme {
            ColorScheme::Dark => (self.palette.background, self.palette.text),
            ColorScheme::Light => (
                self.palette.background.tint(0.9),
                self.palette.text.darken(0.7),
            ),
        };
        let body = doc.body();
        doc.set_style(body, "background-color", bg.to_hex());
        doc.set_style(body, "color", fg.to_hex());
    }
}
