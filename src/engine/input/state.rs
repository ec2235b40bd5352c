// Held-intent tracking
//
// Movement intents are level-triggered: while a key is held the matching
// intent is re-applied to the actor on every tick.

use super::action::Action;
use super::config::InputConfig;
use std::collections::HashSet;
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::PhysicalKey;

/// Anything that accepts per-tick movement intents
pub trait Controllable {
    fn jump(&mut self);
    fn move_left(&mut self);
    fn move_right(&mut self);
}

/// Currently held intents
#[derive(Debug, Default)]
pub struct InputState {
    /// Key bindings used to translate keyboard events
    config: InputConfig,
    /// Actions whose key is down
    held: HashSet<Action>,
}

impl InputState {
    pub fn new(config: InputConfig) -> Self {
        Self {
            config,
            held: HashSet::new(),
        }
    }

    /// Translate a winit keyboard event through the bindings
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        let PhysicalKey::Code(key) = event.physical_key else {
            return;
        };
        let Some(action) = self.config.action_for(key) else {
            return;
        };

        match event.state {
            ElementState::Pressed => self.press(action),
            ElementState::Released => self.release(action),
        }
    }

    /// Mark an action as held
    pub fn press(&mut self, action: Action) {
        if self.held.insert(action) {
            log::trace!("{action:?} pressed");
        }
    }

    /// Mark an action as released
    pub fn release(&mut self, action: Action) {
        if self.held.remove(&action) {
            log::trace!("{action:?} released");
        }
    }

    pub fn is_held(&self, action: Action) -> bool {
        self.held.contains(&action)
    }

    pub fn quit_requested(&self) -> bool {
        self.is_held(Action::Quit)
    }

    /// Re-assert every held movement intent on `target` for this tick
    pub fn apply<T: Controllable + ?Sized>(&self, target: &mut T) {
        for action in Action::MOVEMENT {
            if !self.is_held(action) {
                continue;
            }
            match action {
                Action::Jump => target.jump(),
                Action::MoveLeft => target.move_left(),
                Action::MoveRight => target.move_right(),
                Action::Quit => {}
            }
        }
    }

    /// Forget all held actions (e.g. on focus loss)
    pub fn clear(&mut self) {
        self.held.clear();
    }
}
