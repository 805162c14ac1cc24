// Input bindings and remapping

use super::action::{default_bindings, Action, InputSource};
use std::collections::HashMap;

/// Maps input sources (keys/buttons) to game actions
#[derive(Debug, Clone)]
pub struct InputBindings {
    /// Mapping from input sources to actions
    bindings: HashMap<InputSource, Action>,
}

impl InputBindings {
    /// Create an empty binding table
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Create a table from a list of bindings
    pub fn from_bindings(bindings: Vec<(InputSource, Action)>) -> Self {
        let mut table = Self::new();
        for (source, action) in bindings {
            table.bind(source, action);
        }
        table
    }

    /// Bind an input source to an action, replacing any previous binding of that source
    pub fn bind(&mut self, source: InputSource, action: Action) {
        if let Some(previous) = self.bindings.insert(source, action) {
            log::debug!("Rebound {:?} from {:?} to {:?}", source, previous, action);
        }
    }

    /// Unbind an input source
    pub fn unbind(&mut self, source: InputSource) {
        self.bindings.remove(&source);
    }

    /// Get the action bound to an input source
    pub fn action_for(&self, source: InputSource) -> Option<Action> {
        self.bindings.get(&source).copied()
    }
}

impl Default for InputBindings {
    fn default() -> Self {
        Self::from_bindings(default_bindings())
    }
}
