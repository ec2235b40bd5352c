// Level layout: surface size, obstacles and where the actor starts

use std::path::{Path, PathBuf};
use std::sync::Arc;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::engine::physics::Obstacle;

use super::actor::Actor;
use super::stats::ActorStats;

/// Side length of the square play surface
pub const SURFACE_SIZE: f32 = 480.0;

/// Thickness of the default level's walls
const WALL_HEIGHT: f32 = 20.0;

/// Errors raised while loading a level description
#[derive(Debug, Error)]
pub enum LevelError {
    #[error("failed to read level file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid level JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("obstacle {index} has non-positive size {width}x{height}")]
    InvalidObstacle {
        index: usize,
        width: f32,
        height: f32,
    },

    #[error("surface size must be positive, got {0}")]
    InvalidSurface(f32),
}

/// A playable layout
///
/// Obstacles are shared read-only with every actor spawned from the level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    /// Height (and width) of the play surface
    #[serde(default = "default_surface_size")]
    pub surface_size: f32,
    /// Static obstacles, resolved in this order
    pub obstacles: Vec<Obstacle>,
    /// Where the actor's bottom-left corner starts, so the same spot works
    /// for any actor height; `None` spawns on the floor line at x = 0
    #[serde(default)]
    pub spawn: Option<Vec2>,
}

fn default_surface_size() -> f32 {
    SURFACE_SIZE
}

impl Level {
    /// Parse and validate a level from JSON
    pub fn from_json_str(json: &str) -> Result<Self, LevelError> {
        let level: Level = serde_json::from_str(json)?;
        level.validate()?;
        Ok(level)
    }

    /// Read a level file from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LevelError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| LevelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let level = Self::from_json_str(&json)?;
        log::info!(
            "Loaded level {} ({} obstacles)",
            path.display(),
            level.obstacles.len()
        );
        Ok(level)
    }

    fn validate(&self) -> Result<(), LevelError> {
        if !(self.surface_size > 0.0) {
            return Err(LevelError::InvalidSurface(self.surface_size));
        }

        for (index, obstacle) in self.obstacles.iter().enumerate() {
            let (width, height) = (obstacle.rect.width(), obstacle.rect.height());
            if !(width > 0.0 && height > 0.0) {
                return Err(LevelError::InvalidObstacle {
                    index,
                    width,
                    height,
                });
            }
        }

        Ok(())
    }

    /// Create an actor standing at this level's spawn point
    pub fn spawn_actor(&self, name: &str, stats: ActorStats) -> Actor {
        let obstacles: Arc<[Obstacle]> = self.obstacles.clone().into();
        let position = self.spawn.map(|feet| Vec2::new(feet.x, feet.y - stats.height));
        Actor::new(name, position, stats, self.surface_size, obstacles)
    }
}

impl Default for Level {
    /// Three walls, the middle one bouncy, with the actor standing on the first
    fn default() -> Self {
        let wall_top = |height_above_floor: f32| SURFACE_SIZE - height_above_floor;

        Self {
            surface_size: SURFACE_SIZE,
            obstacles: vec![
                Obstacle::new(0.0, wall_top(100.0), 100.0, WALL_HEIGHT),
                Obstacle::new(150.0, wall_top(200.0), 100.0, WALL_HEIGHT).with_bounce(500.0),
                Obstacle::new(400.0, wall_top(120.0), 100.0, WALL_HEIGHT),
            ],
            spawn: Some(Vec2::new(0.0, wall_top(100.0))),
        }
    }
}
