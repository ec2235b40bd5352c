use serde::{Deserialize, Serialize};

use crate::core::Rect;

/// Static axis-aligned obstacle the actor can stand on or run into
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Bounds in screen space
    pub rect: Rect,
    /// Upward rebound speed applied on landing (`None` or <= 0 = not bouncy)
    #[serde(default)]
    pub bounce: Option<f32>,
}

impl Obstacle {
    /// Create a solid, non-bouncy obstacle with its top-left corner at (x, y)
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        debug_assert!(
            width > 0.0 && height > 0.0,
            "obstacle size must be positive, got {width}x{height}"
        );
        Self {
            rect: Rect::new(x, y, width, height),
            bounce: None,
        }
    }

    /// Make the obstacle bouncy with the given rebound speed
    pub fn with_bounce(mut self, strength: f32) -> Self {
        self.bounce = Some(strength);
        self
    }

    /// Rebound speed if this obstacle is bouncy
    pub fn bounce_strength(&self) -> Option<f32> {
        self.bounce.filter(|strength| *strength > 0.0)
    }

    pub fn is_bouncy(&self) -> bool {
        self.bounce_strength().is_some()
    }
}
