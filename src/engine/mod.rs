// Engine modules: physics, input, tick pacing

pub mod clock;
pub mod input;
pub mod physics;
