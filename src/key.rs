use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};

use crate::error::{GeometryError, MergeError};
use crate::geometry::{Boundary, Point, Rect, clip};

pub type KeyId = u32;

/// Mouse buttons a key can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(TryFromPrimitive, IntoPrimitive, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum MouseButton {
    Left = 1,
    Right = 2,
    Middle = 3,
    Back = 4,
    Forward = 5,
}

/// What a key listens to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputCode {
    Key(u32),
    Mouse(MouseButton),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyboardKey {
    /// Platform key code.
    pub code: u32,
    /// Label shown while shift is held.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shift_text: Option<String>,
    /// Whether caps lock switches the label to `shift_text`.
    #[serde(default)]
    pub change_on_caps: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MouseKey {
    pub button: MouseButton,
}

/// Key variants. Geometry never looks at this; the painter does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum KeyKind {
    Keyboard(KeyboardKey),
    Mouse(MouseKey),
}

impl KeyKind {
    pub fn input_code(&self) -> InputCode {
        match self {
            KeyKind::Keyboard(k) => InputCode::Key(k.code),
            KeyKind::Mouse(m) => InputCode::Mouse(m.button),
        }
    }
}

/// A key on the overlay: an outline, a label and the input it shows.
///
/// Geometric operations return new keys and never touch `self`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyDefinition {
    pub id: KeyId,
    pub text: String,
    pub boundary: Boundary,
    /// Explicit label position; the bounding box centre when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_position: Option<Point>,
    #[serde(flatten)]
    pub kind: KeyKind,
}

impl KeyDefinition {
    pub fn new(id: KeyId, text: impl Into<String>, boundary: Boundary, kind: KeyKind) -> Self {
        Self {
            id,
            text: text.into(),
            boundary,
            text_position: None,
            kind,
        }
    }

    pub fn keyboard(id: KeyId, text: impl Into<String>, boundary: Boundary, code: u32) -> Self {
        let kind = KeyKind::Keyboard(KeyboardKey {
            code,
            shift_text: None,
            change_on_caps: false,
        });
        Self::new(id, text, boundary, kind)
    }

    pub fn mouse(
        id: KeyId,
        text: impl Into<String>,
        boundary: Boundary,
        button: MouseButton,
    ) -> Self {
        Self::new(id, text, boundary, KeyKind::Mouse(MouseKey { button }))
    }

    pub fn input_code(&self) -> InputCode {
        self.kind.input_code()
    }

    pub fn bounding_box(&self) -> Rect {
        self.boundary.bounding_box()
    }

    /// Centre of the bounding box, recomputed from the current outline.
    pub fn anchor(&self) -> Point {
        self.boundary.anchor()
    }

    /// Where the label goes.
    pub fn text_position(&self) -> Point {
        self.text_position.unwrap_or_else(|| self.anchor())
    }

    pub fn contains(&self, p: Point) -> bool {
        self.boundary.contains(p)
    }

    /// Copy of this key moved by `(dx, dy)`, label override included.
    pub fn translate(&self, dx: i32, dy: i32) -> Result<Self, GeometryError> {
        let text_position = match self.text_position {
            Some(p) => Some(
                p.checked_translate(dx, dy)
                    .ok_or(GeometryError::CoordinateOverflow)?,
            ),
            None => None,
        };
        Ok(Self {
            boundary: self.boundary.translate(dx, dy)?,
            text_position,
            ..self.clone()
        })
    }

    /// Copy of this key with another outline.
    pub fn with_boundary(&self, boundary: Boundary) -> Self {
        Self {
            boundary,
            ..self.clone()
        }
    }

    /// Whether this key and `other` share an edge or overlap, i.e. their
    /// union is a single region.
    pub fn borders_with(&self, other: &KeyDefinition) -> bool {
        matches!(clip::region_count(&[&self.boundary, &other.boundary]), Ok(1))
    }

    /// Merges `others` into this key.
    ///
    /// The result keeps this key's id, text and kind and gets the union
    /// outline, wound the same way as this key's outline. With no `others`
    /// the key is returned unchanged.
    pub fn union_with(&self, others: &[KeyDefinition]) -> Result<Self, MergeError> {
        if others.is_empty() {
            return Ok(self.clone());
        }

        let shapes: Vec<&Boundary> = std::iter::once(&self.boundary)
            .chain(others.iter().map(|k| &k.boundary))
            .collect();
        let mut outlines = clip::union(&shapes)?;
        if outlines.len() != 1 {
            tracing::warn!(
                key = self.id,
                others = others.len(),
                regions = outlines.len(),
                "rejected merge of disconnected keys"
            );
            return Err(MergeError::Disconnected {
                regions: outlines.len(),
            });
        }

        let merged = Boundary::new(outlines.remove(0))?;
        let merged = if merged.winding() == self.boundary.winding() {
            merged
        } else {
            merged.reversed()
        };
        tracing::debug!(key = self.id, vertices = merged.len(), "merged keys");
        Ok(self.with_boundary(merged))
    }
}
