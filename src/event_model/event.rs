use crate::key::{InputCode, MouseButton};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyState {
    Pressed,
    Released,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyboardEvent {
    pub code: u32,
    pub state: KeyState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseButtonEvent {
    pub button: MouseButton,
    pub state: KeyState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Keyboard(KeyboardEvent),
    MouseButton(MouseButtonEvent),
    Unknown,
}

impl InputEvent {
    pub fn key(code: u32, state: KeyState) -> Self {
        Self::Keyboard(KeyboardEvent { code, state })
    }

    pub fn mouse(button: MouseButton, state: KeyState) -> Self {
        Self::MouseButton(MouseButtonEvent { button, state })
    }

    /// The input this event is about, if any.
    pub fn input(&self) -> Option<(InputCode, KeyState)> {
        match *self {
            InputEvent::Keyboard(e) => Some((InputCode::Key(e.code), e.state)),
            InputEvent::MouseButton(e) => Some((InputCode::Mouse(e.button), e.state)),
            InputEvent::Unknown => None,
        }
    }
}

impl Default for InputEvent {
    fn default() -> Self {
        Self::Unknown
    }
}
