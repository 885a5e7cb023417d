//! The selector contract
//!
//! A fixed set of class names and data attributes decides which elements
//! receive which behavior. Page markup opts in by carrying a marker; the
//! attachers never guess beyond this list.

use veneer_page::Selector;

pub const BUTTON_CLASS: &str = "btn";
pub const CARD_CLASS: &str = "card";
pub const HERO_CLASS: &str = "hero";
pub const ACCENT_CLASS: &str = "accent";
pub const RIPPLE_CLASS: &str = "ripple";
pub const REVEALED_CLASS: &str = "revealed";

pub const REVEAL_ATTR: &str = "data-reveal";
pub const TYPED_ATTR: &str = "data-typed";
pub const SMOOTH_ATTR: &str = "data-smooth";
pub const THEME_TOGGLE_ATTR: &str = "data-theme-toggle";

pub fn buttons() -> Selector {
    Selector::class(BUTTON_CLASS)
}

pub fn cards() -> Selector {
    Selector::class(CARD_CLASS)
}

pub fn hero() -> Selector {
    Selector::class(HERO_CLASS)
}

pub fn accents() -> Selector {
    Selector::class(ACCENT_CLASS)
}

pub fn reveals() -> Selector {
    Selector::attr(REVEAL_ATTR)
}

pub fn typed() -> Selector {
    Selector::attr(TYPED_ATTR)
}

pub fn smooth_anchors() -> Selector {
    Selector::tag_attr("a", SMOOTH_ATTR)
}

pub fn theme_toggles() -> Selector {
    Selector::attr(THEME_TOGGLE_ATTR)
}
