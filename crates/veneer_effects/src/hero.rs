//! Rotating hero gradient
//!
//! While a hero element exists, each animation frame advances the gradient
//! angle and repaints the background. The gradient references the published
//! hero-stop and accent variables, so a palette change recolors the running
//! loop without restarting it.

/// Degrees advanced per animation frame
pub const ANGLE_STEP_DEG: f32 = 0.2;

/// Advance the angle one frame, wrapping at 360
pub fn advance(angle: f32) -> f32 {
    (angle + ANGLE_STEP_DEG) % 360.0
}

/// Background value for the current angle
pub fn gradient(angle: f32) -> String {
    format!("linear-gradient({angle:.1}deg, var(hero-stop-a), var(hero-stop-b), var(accent))")
}
