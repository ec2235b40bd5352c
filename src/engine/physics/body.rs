use glam::Vec2;

use crate::core::math::snap_below;
use crate::core::Rect;

/// Kinematic state of a single moving body
///
/// Acceleration is a per-tick value: the owner writes it before integration
/// and resets it afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KinematicBody {
    /// Bounding rectangle (top-left position + fixed size)
    pub rect: Rect,
    /// Velocity in units/second
    pub velocity: Vec2,
    /// Acceleration in units/second² for the current tick
    pub acceleration: Vec2,
}

impl KinematicBody {
    /// Create a body at rest
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
        }
    }

    /// Set the initial velocity
    pub fn with_velocity(mut self, x: f32, y: f32) -> Self {
        self.velocity = Vec2::new(x, y);
        self
    }

    /// Set the initial acceleration
    pub fn with_acceleration(mut self, x: f32, y: f32) -> Self {
        self.acceleration = Vec2::new(x, y);
        self
    }

    /// Top-left corner
    pub fn position(&self) -> Vec2 {
        self.rect.position
    }

    /// Force velocity components below `threshold` to exactly zero
    pub fn snap_velocity(&mut self, threshold: f32) {
        self.velocity.x = snap_below(self.velocity.x, threshold);
        self.velocity.y = snap_below(self.velocity.y, threshold);
    }
}
