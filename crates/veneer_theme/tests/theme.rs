use veneer_core::Color;
use veneer_page::Document;
use veneer_theme::{
    ColorScheme, FileThemeStore, MemoryThemeStore, Palette, PaletteStore, PartialPalette,
    ThemeController, ThemeStore, THEME_KEY,
};

fn default_store() -> PaletteStore {
    PaletteStore::new(Palette::default())
}

#[test]
fn publish_exposes_base_and_derived_variables() {
    let mut doc = Document::new();
    default_store().publish(&mut doc);

    assert_eq!(doc.variable("primary"), Some("#6c5ce7"));
    assert_eq!(doc.variable("secondary"), Some("#00cec9"));
    assert_eq!(doc.variable("accent"), Some("#fd79a8"));
    assert_eq!(doc.variable("background"), Some("#10131a"));
    assert_eq!(doc.variable("surface"), Some("#1a2029"));
    assert_eq!(doc.variable("text"), Some("#e8ecf4"));

    // Derived values use the plain channel arithmetic from veneer_core
    assert_eq!(doc.variable("primary-soft"), Some("#d3cef8"));
    assert_eq!(doc.variable("hero-stop-a"), Some("rgba(108, 92, 231, 0.85)"));
    assert_eq!(doc.variable("hero-stop-b"), Some("rgba(0, 206, 201, 0.75)"));
    assert_eq!(doc.variable("card-shadow"), Some("rgba(16, 19, 26, 0.6)"));
}

#[test]
fn apply_merges_and_recomputes_derived_values() {
    let mut doc = Document::new();
    let mut store = default_store();
    store.apply(
        &mut doc,
        ColorScheme::Dark,
        PartialPalette {
            primary: Some(Color::from_hex(0xFF0000)),
            ..PartialPalette::default()
        },
    );

    assert_eq!(doc.variable("primary"), Some("#ff0000"));
    assert_eq!(
        doc.variable("primary-soft"),
        Some(Color::from_hex(0xFF0000).tint(0.7).to_hex().as_str())
    );
    assert_eq!(doc.variable("hero-stop-a"), Some("rgba(255, 0, 0, 0.85)"));
    // Untouched fields keep publishing their previous values
    assert_eq!(doc.variable("secondary"), Some("#00cec9"));
}

#[test]
fn dark_scheme_uses_raw_body_colors() {
    let mut doc = Document::new();
    let store = default_store();
    store.apply_scheme(&mut doc, ColorScheme::Dark);

    let body = doc.body();
    assert_eq!(doc.style(body, "background-color"), Some("#10131a"));
    assert_eq!(doc.style(body, "color"), Some("#e8ecf4"));
}

#[test]
fn light_scheme_lightens_background_and_darkens_text() {
    let mut doc = Document::new();
    let store = default_store();
    store.apply_scheme(&mut doc, ColorScheme::Light);

    let body = doc.body();
    let palette = store.palette();
    assert_eq!(
        doc.style(body, "background-color"),
        Some(palette.background.tint(0.9).to_hex().as_str())
    );
    assert_eq!(
        doc.style(body, "color"),
        Some(palette.text.darken(0.7).to_hex().as_str())
    );
}

#[test]
fn controller_defaults_to_dark_and_round_trips_light() {
    let mut doc = Document::new();
    let palette = default_store();
    let mut controller = ThemeController::new(Box::new(MemoryThemeStore::new()));
    assert_eq!(controller.scheme(), ColorScheme::Dark);

    controller.set_scheme(&mut doc, &palette, ColorScheme::normalize("light"));
    assert_eq!(controller.scheme(), ColorScheme::Light);
    assert!(doc.has_class(doc.root(), "theme-light"));
    assert!(!doc.has_class(doc.root(), "theme-dark"));

    controller.set_scheme(&mut doc, &palette, ColorScheme::normalize("speckled"));
    assert_eq!(controller.scheme(), ColorScheme::Dark);
    assert!(doc.has_class(doc.root(), "theme-dark"));
    assert!(!doc.has_class(doc.root(), "theme-light"));
}

#[test]
fn controller_reads_the_stored_flag_once_at_startup() {
    let store = MemoryThemeStore::with_entry(THEME_KEY, "light");
    let controller = ThemeController::new(Box::new(store));
    assert_eq!(controller.scheme(), ColorScheme::Light);

    // A stale or mangled stored value normalizes to dark
    let store = MemoryThemeStore::with_entry(THEME_KEY, "solarized");
    let controller = ThemeController::new(Box::new(store));
    assert_eq!(controller.scheme(), ColorScheme::Dark);
}

#[test]
fn file_store_persists_across_instances() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("theme.toml");

    let mut store = FileThemeStore::new(&path);
    assert_eq!(store.load(THEME_KEY), None);
    store.save(THEME_KEY, "light").unwrap();

    let reopened = FileThemeStore::new(&path);
    assert_eq!(reopened.load(THEME_KEY), Some("light".to_string()));

    let controller = ThemeController::new(Box::new(reopened));
    assert_eq!(controller.scheme(), ColorScheme::Light);
}

#[test]
fn file_store_ignores_garbage_content() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("theme.toml");
    std::fs::write(&path, "not = [valid").unwrap();

    let store = FileThemeStore::new(&path);
    assert_eq!(store.load(THEME_KEY), None);
}
