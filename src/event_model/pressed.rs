use std::collections::HashSet;

use super::event::{InputEvent, KeyState};
use crate::key::InputCode;

/// Inputs currently held down, fed by whatever captures input.
#[derive(Debug, Clone, Default)]
pub struct PressedKeys {
    held: HashSet<InputCode>,
}

impl PressedKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one event; returns whether the set changed.
    pub fn apply(&mut self, event: &InputEvent) -> bool {
        match event.input() {
            Some((code, KeyState::Pressed)) => self.held.insert(code),
            Some((code, KeyState::Released)) => self.held.remove(&code),
            None => false,
        }
    }

    pub fn is_pressed(&self, code: InputCode) -> bool {
        self.held.contains(&code)
    }

    pub fn len(&self) -> usize {
        self.held.len()
    }

    pub fn is_empty(&self) -> bool {
        self.held.is_empty()
    }

    pub fn clear(&mut self) {
        self.held.clear();
    }
}
