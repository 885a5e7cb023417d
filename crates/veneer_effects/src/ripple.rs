//! Ripple geometry and timing
//!
//! A press inside a button spawns a circular overlay centered on the
//! pointer. The overlay holds briefly, fades, and removes itself; its two
//! timers are independent per ripple and run to completion once scheduled.

use veneer_core::Rect;

/// Milliseconds the overlay holds at full presence before fading
pub const HOLD_MS: f64 = 250.0;
/// Milliseconds from fade start until the overlay is removed
pub const FADE_MS: f64 = 700.0;

/// Ratio of the overlay diameter to the element's longer dimension
pub const SIZE_FACTOR: f32 = 1.2;

/// Placement of a ripple overlay inside its host element
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayGeometry {
    pub size: f32,
    /// Offset of the overlay's left edge from the host's left edge
    pub left: f32,
    /// Offset of the overlay's top edge from the host's top edge
    pub top: f32,
}

/// Size the overlay to 1.2x the host's longer dimension and center it on
/// the pointer position (page-absolute coordinates).
pub fn overlay_geometry(host: Rect, pointer_x: f32, pointer_y: f32) -> OverlayGeometry {
    let size = SIZE_FACTOR * host.width.max(host.height);
    OverlayGeometry {
        size,
        left: pointer_x - host.x - size / 2.0,
        top: pointer_y - host.y - size / 2.0,
    }
}
