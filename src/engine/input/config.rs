// Key-to-intent mapping with rebinding

use super::action::{default_bindings, Action};
use std::collections::HashMap;
use winit::keyboard::KeyCode;

/// Maps keyboard keys to intents
#[derive(Debug, Clone)]
pub struct InputConfig {
    /// Mapping from keys to actions
    bindings: HashMap<KeyCode, Action>,
}

impl InputConfig {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Create a configuration from a list of bindings
    pub fn from_bindings(bindings: Vec<(KeyCode, Action)>) -> Self {
        let mut config = Self::new();
        for (key, action) in bindings {
            config.bind(key, action);
        }
        config
    }

    /// Bind a key to an action, replacing any previous binding of that key
    pub fn bind(&mut self, key: KeyCode, action: Action) {
        if let Some(previous) = self.bindings.insert(key, action) {
            if previous != action {
                log::debug!("Rebound {key:?}: {previous:?} -> {action:?}");
            }
        }
    }

    /// Remove a key's binding
    pub fn unbind(&mut self, key: KeyCode) {
        self.bindings.remove(&key);
    }

    /// Get the action bound to a key
    pub fn action_for(&self, key: KeyCode) -> Option<Action> {
        self.bindings.get(&key).copied()
    }

    /// All keys bound to an action
    pub fn keys_for(&self, action: Action) -> Vec<KeyCode> {
        self.bindings
            .iter()
            .filter(|(_, bound)| **bound == action)
            .map(|(key, _)| *key)
            .collect()
    }

    /// Restore the default W/A/D/Q layout
    pub fn reset_to_defaults(&mut self) {
        self.bindings.clear();
        for (key, action) in default_bindings() {
            self.bind(key, action);
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self::from_bindings(default_bindings())
    }
}
