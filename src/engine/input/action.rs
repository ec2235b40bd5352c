// Intents the actor understands and their default keys

use winit::keyboard::KeyCode;

/// Discrete per-tick intents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Jump,
    MoveLeft,
    MoveRight,
    /// Stop the run loop
    Quit,
}

impl Action {
    /// Intents that drive the actor, in the order they are applied each tick
    pub const MOVEMENT: [Action; 3] = [Action::Jump, Action::MoveLeft, Action::MoveRight];

    /// Whether this intent is forwarded to the actor
    pub fn is_movement(&self) -> bool {
        !matches!(self, Self::Quit)
    }
}

/// Default keyboard bindings (W/A/D to move, Q to quit)
pub fn default_bindings() -> Vec<(KeyCode, Action)> {
    vec![
        (KeyCode::KeyW, Action::Jump),
        (KeyCode::KeyA, Action::MoveLeft),
        (KeyCode::KeyD, Action::MoveRight),
        (KeyCode::KeyQ, Action::Quit),
    ]
}
