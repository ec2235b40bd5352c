// Actor stats - the single tuning table for the controllable body

use serde::{Deserialize, Serialize};

use crate::engine::physics::TICKS_PER_SECOND;

/// Movement and size properties of an actor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActorStats {
    // Movement
    /// Horizontal acceleration while a move intent is held (units/second²)
    pub move_acceleration: f32,
    /// Upward acceleration applied for one tick by a jump (units/second²)
    pub jump_acceleration: f32,
    /// Downward acceleration applied every tick (units/second²)
    pub gravity: f32,

    // Dimensions
    /// Width in world units
    pub width: f32,
    /// Height in world units
    pub height: f32,
}

/// Default stats
pub const BASE_STATS: ActorStats = ActorStats {
    move_acceleration: 1000.0,
    jump_acceleration: 50_000.0,
    gravity: 100_000.0 / TICKS_PER_SECOND as f32,

    width: 30.0,
    height: 60.0,
};

impl Default for ActorStats {
    fn default() -> Self {
        BASE_STATS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_stats() {
        let stats = ActorStats::default();
        assert_eq!(stats.move_acceleration, 1000.0);
        assert_eq!(stats.jump_acceleration, 50_000.0);
        assert_eq!(stats.width, 30.0);
        assert_eq!(stats.height, 60.0);
    }

    #[test]
    fn test_gravity_is_per_tick_scaled() {
        assert_relative_eq!(BASE_STATS.gravity, 1666.6666, epsilon = 1e-3);
    }

    #[test]
    fn test_jump_beats_gravity() {
        assert!(BASE_STATS.jump_acceleration > BASE_STATS.gravity);
    }
}
