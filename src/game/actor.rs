// The controllable actor: owns its kinematic body and runs one tick per update

use std::fmt;
use std::sync::Arc;

use glam::Vec2;

use crate::core::Rect;
use crate::engine::input::Controllable;
use crate::engine::physics::{
    integrate, resolve_contacts, KinematicBody, Obstacle, WorldBounds, AIR_RESISTANCE,
    FIXED_TIMESTEP, LEFT_WALL_X, VELOCITY_FLOOR,
};

use super::stats::ActorStats;

/// A single player-controlled body moving through static obstacles
///
/// Intents (`jump`, `move_left`, `move_right`) only set acceleration for
/// the next `update`; the caller re-asserts held intents every tick.
#[derive(Debug, Clone)]
pub struct Actor {
    /// Display name
    name: String,
    /// Size and movement tuning
    stats: ActorStats,
    /// Position, velocity and this tick's acceleration
    body: KinematicBody,
    /// Floor/ceiling/left-wall policy for this run
    bounds: WorldBounds,
    /// Read view of the current level's obstacles
    obstacles: Arc<[Obstacle]>,
    /// Whether the last update ended standing on something
    grounded: bool,
    /// Goes false once and stays false
    alive: bool,
    /// Acceleration restored at the end of every tick
    gravity: f32,
}

impl Actor {
    /// Create an actor
    ///
    /// Without a position the actor starts at x = 0 on the floor line of a
    /// surface `surface_height` tall. Acceleration starts at gravity, the
    /// same state every later tick starts from.
    pub fn new(
        name: &str,
        position: Option<Vec2>,
        stats: ActorStats,
        surface_height: f32,
        obstacles: Arc<[Obstacle]>,
    ) -> Self {
        let bounds = WorldBounds::for_surface(surface_height, stats.height);
        let mut position = position.unwrap_or(Vec2::new(LEFT_WALL_X, bounds.floor_y));
        position.x = position.x.max(LEFT_WALL_X);

        let rect = Rect::new(position.x, position.y, stats.width, stats.height);
        let body = KinematicBody::new(rect).with_acceleration(0.0, stats.gravity);

        Self {
            name: name.to_string(),
            body,
            bounds,
            obstacles,
            grounded: false,
            alive: true,
            gravity: stats.gravity,
            stats,
        }
    }

    /// Run one fixed tick
    ///
    /// Integrate, resolve contacts, apply world bounds, snap small
    /// velocities, then reset acceleration to gravity for the next tick.
    pub fn update(&mut self) {
        integrate(&mut self.body, AIR_RESISTANCE, FIXED_TIMESTEP);

        let grounded = resolve_contacts(&mut self.body, &self.obstacles);
        if grounded && !self.grounded {
            log::debug!("{} landed at {}", self.name, self.body.position());
        }
        self.grounded = grounded;

        if let Some(violation) = self.bounds.apply(&mut self.body) {
            if self.alive {
                log::info!("{} died: {} at {}", self.name, violation, self.body.position());
            }
            self.alive = false;
        }

        self.body.snap_velocity(VELOCITY_FLOOR);

        self.body.acceleration = Vec2::new(0.0, self.gravity);
    }

    /// Jump if the last update ended on the ground
    pub fn jump(&mut self) {
        if self.grounded {
            self.body.acceleration.y = -self.stats.jump_acceleration;
        }
    }

    pub fn move_left(&mut self) {
        self.body.acceleration.x = -self.stats.move_acceleration;
    }

    pub fn move_right(&mut self) {
        self.body.acceleration.x = self.stats.move_acceleration;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Top-left corner
    pub fn position(&self) -> Vec2 {
        self.body.position()
    }

    pub fn velocity(&self) -> Vec2 {
        self.body.velocity
    }

    pub fn acceleration(&self) -> Vec2 {
        self.body.acceleration
    }

    /// Bounding rectangle, for rendering
    pub fn rect(&self) -> Rect {
        self.body.rect
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    pub fn gravity(&self) -> f32 {
        self.gravity
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }
}

impl Controllable for Actor {
    fn jump(&mut self) {
        Actor::jump(self);
    }

    fn move_left(&mut self) {
        Actor::move_left(self);
    }

    fn move_right(&mut self) {
        Actor::move_right(self);
    }
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let position = self.position();
        let velocity = self.velocity();
        let acceleration = self.acceleration();
        writeln!(f, "Actor {}", self.name)?;
        writeln!(f, "Position     ({}, {})", position.x, position.y)?;
        writeln!(f, "Velocity     ({}, {})", velocity.x, velocity.y)?;
        write!(f, "Acceleration ({}, {})", acceleration.x, acceleration.y)
    }
}
