// World edges: a solid left wall, a lethal floor line and a lethal ceiling line

use std::fmt;

use super::body::KinematicBody;
use super::{CEILING_DEATH_Y, LEFT_WALL_X};

/// Why a body left the playable area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundsViolation {
    /// Top edge went below the floor line
    BelowFloor,
    /// Top edge went above the ceiling line
    AboveCeiling,
}

impl fmt::Display for BoundsViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BelowFloor => write!(f, "fell below the floor"),
            Self::AboveCeiling => write!(f, "flew off the top"),
        }
    }
}

/// Fixed bounds for one run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldBounds {
    /// Lowest allowed y for the body's top edge
    pub floor_y: f32,
    /// Highest allowed y for the body's top edge
    pub ceiling_y: f32,
    /// Left wall x
    pub left_x: f32,
}

impl WorldBounds {
    /// Bounds for a body of `body_height` on a surface `surface_height` tall
    ///
    /// The floor line is where the body would rest on the bottom of the surface.
    pub fn for_surface(surface_height: f32, body_height: f32) -> Self {
        Self {
            floor_y: surface_height - body_height,
            ceiling_y: CEILING_DEATH_Y,
            left_x: LEFT_WALL_X,
        }
    }

    /// Clamp against the left wall, then check the death lines
    ///
    /// Returns the violation if the body is out of the world.
    pub fn apply(&self, body: &mut KinematicBody) -> Option<BoundsViolation> {
        if body.rect.left() < self.left_x {
            body.rect.set_left(self.left_x);
            body.velocity.x = 0.0;
        }

        let y = body.rect.top();
        if y > self.floor_y {
            Some(BoundsViolation::BelowFloor)
        } else if y < self.ceiling_y {
            Some(BoundsViolation::AboveCeiling)
        } else {
            None
        }
    }
}
