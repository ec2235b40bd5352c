// Fixed-timestep 2D platformer physics for one actor among static obstacles
//
// The presentation layer feeds intents in (`Actor::jump`, `move_left`,
// `move_right`, usually through `InputState::apply`), calls `Actor::update`
// once per tick, and reads positions back out for drawing.

pub mod core;
pub mod engine;
pub mod game;

pub use engine::clock::TickClock;
pub use engine::input::{Action, Controllable, InputConfig, InputState};
pub use engine::physics::Obstacle;
pub use game::{Actor, ActorStats, Level, LevelError};
