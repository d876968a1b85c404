//! 键盘布局
//!
//! A layout owns its keys and keeps their ids unique. Edits replace keys with
//! new values produced by the geometry engine; nothing is mutated in place.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config;
use crate::error::LayoutError;
use crate::geometry::Point;
use crate::key::{KeyDefinition, KeyId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "LayoutFile", into = "LayoutFile")]
pub struct Layout {
    pub name: String,
    pub width: u32,
    pub height: u32,
    keys: Vec<KeyDefinition>,
}

/// On-disk form; ids are checked when converting into a [`Layout`].
#[derive(Debug, Clone, Serialize, Deserialize)]
struct LayoutFile {
    name: String,
    width: u32,
    height: u32,
    #[serde(default, rename = "key")]
    keys: Vec<KeyDefinition>,
}

impl TryFrom<LayoutFile> for Layout {
    type Error = LayoutError;

    fn try_from(file: LayoutFile) -> Result<Self, Self::Error> {
        let mut layout = Layout::new(file.name, file.width, file.height);
        for key in file.keys {
            layout.add(key)?;
        }
        Ok(layout)
    }
}

impl From<Layout> for LayoutFile {
    fn from(layout: Layout) -> Self {
        Self {
            name: layout.name,
            width: layout.width,
            height: layout.height,
            keys: layout.keys,
        }
    }
}

impl Layout {
    pub fn new(name: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            name: name.into(),
            width,
            height,
            keys: Vec::new(),
        }
    }

    pub fn load(path: &Path) -> Result<Self, LayoutError> {
        let layout: Layout = config::read_toml(path)?;
        tracing::info!(name = %layout.name, keys = layout.keys.len(), "loaded layout");
        Ok(layout)
    }

    pub fn save(&self, path: &Path) -> Result<(), LayoutError> {
        Ok(config::write_toml(path, self)?)
    }

    /// Keys in drawing order.
    pub fn keys(&self) -> &[KeyDefinition] {
        &self.keys
    }

    pub fn get(&self, id: KeyId) -> Option<&KeyDefinition> {
        self.keys.iter().find(|k| k.id == id)
    }

    /// Smallest id greater than every id in use.
    pub fn next_id(&self) -> Result<KeyId, LayoutError> {
        match self.keys.iter().map(|k| k.id).max() {
            Some(id) => id.checked_add(1).ok_or(LayoutError::IdsExhausted),
            None => Ok(0),
        }
    }

    pub fn add(&mut self, key: KeyDefinition) -> Result<(), LayoutError> {
        if self.get(key.id).is_some() {
            return Err(LayoutError::DuplicateId(key.id));
        }
        self.keys.push(key);
        Ok(())
    }

    pub fn remove(&mut self, id: KeyId) -> Result<KeyDefinition, LayoutError> {
        let pos = self.position(id)?;
        Ok(self.keys.remove(pos))
    }

    /// Swaps in a new version of an existing key (matched by id).
    pub fn replace(&mut self, key: KeyDefinition) -> Result<KeyDefinition, LayoutError> {
        let pos = self.position(key.id)?;
        Ok(std::mem::replace(&mut self.keys[pos], key))
    }

    /// Top-most key under `p`: later keys are drawn over earlier ones.
    pub fn key_at(&self, p: Point) -> Option<&KeyDefinition> {
        self.keys.iter().rev().find(|k| k.contains(p))
    }

    pub fn move_key(&mut self, id: KeyId, dx: i32, dy: i32) -> Result<(), LayoutError> {
        let pos = self.position(id)?;
        self.keys[pos] = self.keys[pos].translate(dx, dy)?;
        Ok(())
    }

    pub fn borders(&self, a: KeyId, b: KeyId) -> Result<bool, LayoutError> {
        let a = self.get(a).ok_or(LayoutError::UnknownKey(a))?;
        let b = self.get(b).ok_or(LayoutError::UnknownKey(b))?;
        Ok(a.borders_with(b))
    }

    /// Ids of every key that borders `id`.
    pub fn neighbours(&self, id: KeyId) -> Result<Vec<KeyId>, LayoutError> {
        let key = self.get(id).ok_or(LayoutError::UnknownKey(id))?;
        let bbox = key.bounding_box();
        Ok(self
            .keys
            .iter()
            .filter(|k| k.id != id && k.bounding_box().intersects(&bbox) && key.borders_with(k))
            .map(|k| k.id)
            .collect())
    }

    /// Merges `others` into `primary`.
    ///
    /// The primary keeps its place in drawing order and its identity; the
    /// other keys are removed. On error the layout is left as it was.
    pub fn merge(
        &mut self,
        primary: KeyId,
        others: &[KeyId],
    ) -> Result<&KeyDefinition, LayoutError> {
        let pos = self.position(primary)?;
        let mut ids: Vec<KeyId> = others.iter().copied().filter(|&id| id != primary).collect();
        ids.sort_unstable();
        ids.dedup();

        let rest = ids
            .iter()
            .map(|&id| self.get(id).cloned().ok_or(LayoutError::UnknownKey(id)))
            .collect::<Result<Vec<_>, _>>()?;
        let merged = self.keys[pos]
            .union_with(&rest)
            .map_err(|source| LayoutError::Merge { primary, source })?;

        self.keys[pos] = merged;
        self.keys.retain(|k| !ids.contains(&k.id));
        tracing::info!(primary, merged = ids.len(), "merged keys in layout");
        self.get(primary).ok_or(LayoutError::UnknownKey(primary))
    }

    fn position(&self, id: KeyId) -> Result<usize, LayoutError> {
        self.keys
            .iter()
            .position(|k| k.id == id)
            .ok_or(LayoutError::UnknownKey(id))
    }
}
