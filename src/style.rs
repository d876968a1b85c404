//! 按键样式
//!
//! A style sheet maps key ids to styles. Keys without an entry fall back to
//! the default for their kind, so a fresh layout renders without any setup.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config;
use crate::error::{ColorError, ConfigError};
use crate::key::{KeyDefinition, KeyId, KeyKind};

/// RGBA colour, written as `#rrggbb` or `#rrggbbaa` in style files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        let hex = s.strip_prefix('#').ok_or_else(|| ColorError(s.clone()))?;
        if !(hex.len() == 6 || hex.len() == 8) || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError(s));
        }
        let byte = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| ColorError(s.clone()))
        };
        let a = if hex.len() == 8 { byte(6)? } else { 0xFF };
        Ok(Color::rgba(byte(0)?, byte(2)?, byte(4)?, a))
    }
}

impl From<Color> for String {
    fn from(c: Color) -> Self {
        c.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
        if self.a != 0xFF {
            write!(f, "{:02x}", self.a)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Font {
    pub family: String,
    pub size: u32,
    #[serde(default)]
    pub bold: bool,
}

impl Default for Font {
    fn default() -> Self {
        Self {
            family: "Sans".to_string(),
            size: 12,
            bold: false,
        }
    }
}

/// How a key looks in one state (released or pressed).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StateStyle {
    pub background: Color,
    pub text: Color,
    pub outline: Color,
    pub outline_width: u32,
    pub show_outline: bool,
    pub font: Font,
}

impl StateStyle {
    fn loose() -> Self {
        Self {
            background: Color::rgb(0x64, 0x64, 0x64),
            text: Color::rgb(0x00, 0x00, 0x00),
            outline: Color::rgb(0x00, 0xFF, 0x00),
            outline_width: 1,
            show_outline: false,
            font: Font::default(),
        }
    }

    fn pressed() -> Self {
        Self {
            background: Color::rgb(0xFF, 0xFF, 0xFF),
            ..Self::loose()
        }
    }
}

impl Default for StateStyle {
    fn default() -> Self {
        Self::loose()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyStyle {
    #[serde(default = "StateStyle::loose")]
    pub loose: StateStyle,
    #[serde(default = "StateStyle::pressed")]
    pub pressed: StateStyle,
}

impl KeyStyle {
    pub fn state(&self, pressed: bool) -> &StateStyle {
        if pressed { &self.pressed } else { &self.loose }
    }
}

impl Default for KeyStyle {
    fn default() -> Self {
        Self {
            loose: StateStyle::loose(),
            pressed: StateStyle::pressed(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyStyleEntry {
    pub id: KeyId,
    #[serde(flatten)]
    pub style: KeyStyle,
}

/// Style lookup handed to the painter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleSheet {
    pub background: Color,
    pub default_key: KeyStyle,
    pub default_mouse: KeyStyle,
    #[serde(rename = "key", skip_serializing_if = "Vec::is_empty")]
    pub keys: Vec<KeyStyleEntry>,
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self {
            background: Color::rgb(0x00, 0x00, 0x64),
            default_key: KeyStyle::default(),
            default_mouse: KeyStyle::default(),
            keys: Vec::new(),
        }
    }
}

impl StyleSheet {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        config::read_toml(path)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        config::write_toml(path, self)
    }

    /// Style registered for exactly this id.
    pub fn get(&self, id: KeyId) -> Option<&KeyStyle> {
        self.keys.iter().find(|e| e.id == id).map(|e| &e.style)
    }

    /// Registers or replaces the style for `id`.
    pub fn set(&mut self, id: KeyId, style: KeyStyle) {
        match self.keys.iter_mut().find(|e| e.id == id) {
            Some(entry) => entry.style = style,
            None => self.keys.push(KeyStyleEntry { id, style }),
        }
    }

    pub fn remove(&mut self, id: KeyId) -> Option<KeyStyle> {
        let pos = self.keys.iter().position(|e| e.id == id)?;
        Some(self.keys.remove(pos).style)
    }

    /// Per-key style, or the default for the key's kind.
    pub fn resolve(&self, key: &KeyDefinition) -> &KeyStyle {
        self.get(key.id).unwrap_or(match key.kind {
            KeyKind::Keyboard(_) => &self.default_key,
            KeyKind::Mouse(_) => &self.default_mouse,
        })
    }
}
