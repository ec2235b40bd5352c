// Game layer
//
// - `actor`: the controllable body and its per-tick update
// - `stats`: size and movement tuning
// - `level`: obstacle layout and spawn point

pub mod actor;
pub mod level;
pub mod stats;

pub use actor::Actor;
pub use level::{Level, LevelError, SURFACE_SIZE};
pub use stats::{ActorStats, BASE_STATS};
