//! A headless landing page driven for a few simulated seconds.
//!
//! Run with logging to watch the engine work:
//!
//! ```sh
//! RUST_LOG=debug cargo run --example landing
//! ```

use anyhow::Result;
use tracing_subscriber::EnvFilter;
use veneer::{event_types, Document, Enhancer, Event, MemoryThemeStore, PartialPalette, Rect};

fn build_page(doc: &mut Document) -> (veneer::NodeId, veneer::NodeId) {
    let body = doc.body();

    let hero = doc.create_element("div");
    doc.add_class(hero, "hero");
    doc.set_rect(hero, Rect::new(0.0, 0.0, 1280.0, 480.0));
    doc.append_child(body, hero);

    let headline = doc.create_element("span");
    doc.set_attr(headline, "data-typed", "Ship it,Theme it,Enjoy it");
    doc.append_child(hero, headline);

    let cta = doc.create_element("button");
    doc.add_class(cta, "btn");
    doc.set_rect(cta, Rect::new(540.0, 380.0, 200.0, 56.0));
    doc.append_child(hero, cta);

    let features = doc.create_element("section");
    doc.set_element_id(features, "features");
    doc.set_rect(features, Rect::new(0.0, 900.0, 1280.0, 600.0));
    doc.append_child(body, features);

    for i in 0..3 {
        let card = doc.create_element("div");
        doc.add_class(card, "card");
        doc.set_attr(card, "data-reveal", "");
        doc.set_rect(card, Rect::new(80.0 + 400.0 * i as f32, 960.0, 360.0, 220.0));
        doc.append_child(features, card);
    }

    let nav = doc.create_element("a");
    doc.set_attr(nav, "data-smooth", "");
    doc.set_attr(nav, "href", "#features");
    doc.append_child(body, nav);

    (cta, nav)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut doc = Document::new();
    let (cta, nav) = build_page(&mut doc);

    let mut enhancer = Enhancer::new(doc, Box::new(MemoryThemeStore::new()));
    enhancer.enhance();

    // The headline types itself out
    for _ in 0..10 {
        enhancer.advance(80.0);
    }
    let hero = enhancer.document().query_all(&veneer::selectors::hero())[0];
    println!("headline so far: {:?}", {
        let doc = enhancer.document();
        doc.node(hero)
            .and_then(|n| n.children().first().map(|c| doc.text(*c).to_string()))
            .unwrap_or_default()
    });

    // A press ripples the call-to-action button
    enhancer.dispatch(Event::pointer(
        event_types::POINTER_DOWN,
        cta,
        640.0,
        408.0,
    ));

    // Navigation scrolls to the feature grid, revealing its cards
    enhancer.dispatch(Event::click(nav));
    enhancer.pump();
    let revealed = enhancer
        .document()
        .query_all(&veneer::Selector::class("revealed"))
        .len();
    println!("cards revealed after scroll: {revealed}");

    // The hero gradient spins while frames run
    for _ in 0..120 {
        enhancer.run_frame();
    }
    println!(
        "hero background: {}",
        enhancer
            .document()
            .style(hero, "background")
            .unwrap_or("none")
    );

    // Retheme on the fly
    enhancer.set_theme("light");
    enhancer.apply_palette(PartialPalette {
        accent: Some("#ff8800".parse()?),
        ..PartialPalette::default()
    });
    println!("theme is now {}", enhancer.get_theme());

    Ok(())
}
