/// 输入事件的抽象
pub mod event;
mod pressed;

pub use event::{InputEvent, KeyState, KeyboardEvent, MouseButtonEvent};
pub use pressed::PressedKeys;
