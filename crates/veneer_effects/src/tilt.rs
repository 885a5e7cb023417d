//! Pointer-driven card tilt
//!
//! The cursor's normalized offset from the card center (-0.5..0.5 on each
//! axis) maps to a rotation of at most 8 degrees per axis plus a slight
//! scale-up, expressed as a 3-D transform string.

use veneer_core::Rect;

pub const MAX_TILT_DEG: f32 = 8.0;
pub const HOVER_SCALE: f32 = 1.02;
pub const PERSPECTIVE_PX: f32 = 800.0;

/// Transform for a pointer at page-absolute coordinates over `card`.
/// Degenerate rectangles produce no transform.
pub fn transform(card: Rect, pointer_x: f32, pointer_y: f32) -> Option<String> {
    if card.width <= 0.0 || card.height <= 0.0 {
        return None;
    }
    let nx = ((pointer_x - card.x) / card.width - 0.5).clamp(-0.5, 0.5);
    let ny = ((pointer_y - card.y) / card.height - 0.5).clamp(-0.5, 0.5);
    let rotate_y = nx * 2.0 * MAX_TILT_DEG;
    let rotate_x = -ny * 2.0 * MAX_TILT_DEG;
    Some(format!(
        "perspective({PERSPECTIVE_PX:.0}px) rotateX({rotate_x:.2}deg) rotateY({rotate_y:.2}deg) scale({HOVER_SCALE})"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARD: Rect = Rect::new(0.0, 0.0, 200.0, 100.0);

    #[test]
    fn center_produces_no_rotation() {
        let transform = transform(CARD, 100.0, 50.0).unwrap();
        assert!(transform.contains("rotateX(0.00deg)") || transform.contains("rotateX(-0.00deg)"));
        assert!(transform.contains("rotateY(0.00deg)"));
        assert!(transform.contains("scale(1.02)"));
    }

    #[test]
    fn corners_hit_the_tilt_limits() {
        let transform = transform(CARD, 200.0, 0.0).unwrap();
        assert!(transform.contains("rotateY(8.00deg)"));
        assert!(transform.contains("rotateX(8.00deg)"));
    }

    #[test]
    fn offsets_clamp_outside_the_card() {
        let inside = transform(CARD, 200.0, 100.0).unwrap();
        let outside = transform(CARD, 900.0, 900.0).unwrap();
        assert_eq!(inside, outside);
    }

    #[test]
    fn degenerate_cards_are_skipped() {
        assert_eq!(transform(Rect::new(0.0, 0.0, 0.0, 100.0), 10.0, 10.0), None);
    }
}
