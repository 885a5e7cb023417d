//! Scheme state and switching

use veneer_page::Document;

use crate::palette::PaletteStore;
use crate::scheme::ColorScheme;
use crate::store::{ThemeStore, THEME_KEY};

/// Holds the active color scheme, persists it, and applies the root class
/// pair plus the scheme-dependent body colors when it changes.
pub struct ThemeController {
    scheme: ColorScheme,
    store: Box<dyn ThemeStore>,
}

impl ThemeController {
    /// Read the stored flag once, defaulting to dark when absent
    pub fn new(store: Box<dyn ThemeStore>) -> Self {
        let scheme = store
            .load(THEME_KEY)
            .map(|value| ColorScheme::normalize(&value))
            .unwrap_or_default();
        Self { scheme, store }
    }

    pub fn scheme(&self) -> ColorScheme {
        self.scheme
    }

    /// Switch to `scheme`: persist it, swap the `theme-dark`/`theme-light`
    /// root class pair, and recolor the body. Store failures are logged and
    /// otherwise ignored; the page recolor is never blocked on persistence.
    pub fn set_scheme(
        &mut self,
        doc: &mut Document,
        palette: &PaletteStore,
        scheme: ColorScheme,
    ) {
        tracing::debug!(from = %self.scheme, to = %scheme, "switching color scheme");
        self.scheme = scheme;

        if let Err(err) = self.store.save(THEME_KEY, scheme.as_str()) {
            tracing::warn!(%err, "failed to persist theme flag");
        }

        let root = doc.root();
        doc.remove_class(root, scheme.toggle().root_class());
        doc.add_class(root, scheme.root_class());

        palette.apply_scheme(doc, scheme);
    }

    /// Flip between dark and light
    pub fn toggle(&mut self, doc: &mut Document, palette: &PaletteStore) {
        self.set_scheme(doc, palette, self.scheme.toggle());
    }
}
