// Input handling
//
// - `action`: intents and their default keys
// - `config`: key bindings and remapping
// - `state`: held intents, re-applied to the actor every tick

pub mod action;
pub mod config;
pub mod state;

pub use action::Action;
pub use config::InputConfig;
pub use state::{Controllable, InputState};
