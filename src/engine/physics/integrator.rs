// Fixed-step kinematic integration with linear drag

use super::body::KinematicBody;

/// Advance `body` by one step of length `dt`
///
/// Drag is folded into the acceleration first (linear in velocity), then the
/// drag-adjusted acceleration moves the position and finally the velocity.
/// The adjusted acceleration is left on the body; the owner resets it at the
/// end of the tick.
pub fn integrate(body: &mut KinematicBody, air_resistance: f32, dt: f32) {
    debug_assert!(
        body.acceleration.is_finite() && body.velocity.is_finite(),
        "non-finite motion: velocity {}, acceleration {}",
        body.velocity,
        body.acceleration
    );

    body.acceleration -= body.velocity * air_resistance;

    body.rect.position += body.velocity * dt + 0.5 * body.acceleration * dt * dt;
    body.velocity += body.acceleration * dt;
}
