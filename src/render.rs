//! 绘制接口
//!
//! The crate does not draw anything itself. A backend implements [`Surface`]
//! and [`Painter`] turns keys, styles and the pressed set into calls on it.

use crate::event_model::PressedKeys;
use crate::geometry::Point;
use crate::key::{KeyDefinition, KeyKind};
use crate::layout::Layout;
use crate::style::{Color, Font, StyleSheet};

/// Drawing backend.
pub trait Surface {
    fn clear(&mut self, color: Color);

    fn fill_polygon(&mut self, points: &[Point], color: Color);

    fn outline_polygon(&mut self, points: &[Point], color: Color, width: u32);

    /// Width and height of `text` when drawn with `font`.
    fn measure_text(&self, text: &str, font: &Font) -> (i32, i32);

    /// Draws `text` with its top-left corner at `at`.
    fn draw_text(&mut self, text: &str, at: Point, font: &Font, color: Color);
}

/// Modifier state that changes key labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub caps_lock: bool,
}

/// Everything a frame needs, passed in explicitly.
pub struct Painter<'a> {
    pub styles: &'a StyleSheet,
    pub pressed: &'a PressedKeys,
    pub modifiers: Modifiers,
}

impl<'a> Painter<'a> {
    pub fn new(styles: &'a StyleSheet, pressed: &'a PressedKeys) -> Self {
        Self {
            styles,
            pressed,
            modifiers: Modifiers::default(),
        }
    }

    pub fn with_modifiers(self, modifiers: Modifiers) -> Self {
        Self { modifiers, ..self }
    }

    pub fn paint_layout<S: Surface>(&self, surface: &mut S, layout: &Layout) {
        surface.clear(self.styles.background);
        for key in layout.keys() {
            self.paint_key(surface, key);
        }
    }

    pub fn paint_key<S: Surface>(&self, surface: &mut S, key: &KeyDefinition) {
        let pressed = self.pressed.is_pressed(key.input_code());
        let style = self.styles.resolve(key).state(pressed);
        let outline = key.boundary.points();

        surface.fill_polygon(outline, style.background);
        if style.show_outline {
            surface.outline_polygon(outline, style.outline, style.outline_width);
        }

        let text = self.label(key);
        if text.is_empty() {
            return;
        }
        let (w, h) = surface.measure_text(text, &style.font);
        let at = key.text_position().translate(-w / 2, -h / 2);
        surface.draw_text(text, at, &style.font, style.text);
    }

    /// Label for the current modifier state.
    pub fn label<'k>(&self, key: &'k KeyDefinition) -> &'k str {
        match &key.kind {
            KeyKind::Keyboard(k) => {
                let shifted = if k.change_on_caps {
                    self.modifiers.shift != self.modifiers.caps_lock
                } else {
                    self.modifiers.shift
                };
                match (&k.shift_text, shifted) {
                    (Some(shift_text), true) => shift_text,
                    _ => &key.text,
                }
            }
            KeyKind::Mouse(_) => &key.text,
        }
    }
}
