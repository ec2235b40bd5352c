// Numeric helpers for the simulation

/// Snap `value` to exactly zero when its magnitude is below `threshold`
///
/// Values at or above the threshold pass through untouched.
pub fn snap_below(value: f32, threshold: f32) -> f32 {
    if value.abs() < threshold {
        0.0
    } else {
        value
    }
}
