// Physics for a single kinematic actor against static obstacles
//
// One tick: integrate -> resolve contacts -> apply world bounds -> snap
// small velocities. The constants below are part of the numeric behaviour:
// changing any of them changes trajectories.

pub mod body;
pub mod bounds;
pub mod contact;
pub mod integrator;
pub mod obstacle;

pub use body::KinematicBody;
pub use bounds::{BoundsViolation, WorldBounds};
pub use contact::{resolve_contacts, Contact, ContactPoints, Corner};
pub use integrator::integrate;
pub use obstacle::Obstacle;

/// Simulation rate (ticks per second)
pub const TICKS_PER_SECOND: u32 = 60;

/// Length of one tick in seconds
pub const FIXED_TIMESTEP: f32 = 1.0 / TICKS_PER_SECOND as f32;

/// Linear drag coefficient subtracted as `velocity * AIR_RESISTANCE`
pub const AIR_RESISTANCE: f32 = 3.0;

/// Velocity components below this magnitude are zeroed every tick
pub const VELOCITY_FLOOR: f32 = 10.0;

/// Above this line (y smaller) the actor has left the world
pub const CEILING_DEATH_Y: f32 = -200.0;

/// Left world edge
pub const LEFT_WALL_X: f32 = 0.0;
