//! 错误类型
//!
//! Geometry and merge errors are raised by the engine itself; layout errors
//! wrap them together with the file-level failures of loading and saving.

use std::{io, path::PathBuf};

use thiserror::Error;

use crate::key::KeyId;

/// A boundary that does not describe a simple closed polygon.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    #[error("boundary needs at least 3 points, got {count}")]
    TooFewPoints { count: usize },

    #[error("edge {index} has zero length")]
    ZeroLengthEdge { index: usize },

    #[error("boundary encloses no area")]
    ZeroArea,

    #[error("edges {first} and {second} intersect")]
    SelfIntersecting { first: usize, second: usize },

    #[error("vertex index {index} out of range for a boundary of {len} points")]
    VertexOutOfRange { index: usize, len: usize },

    #[error("coordinate outside the i32 range")]
    CoordinateOverflow,
}

/// Keys whose regions cannot be combined into one polygon.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MergeError {
    /// The union consists of several disjoint regions (or a region with holes).
    #[error("keys do not form a single connected region (union has {regions} parts)")]
    Disconnected { regions: usize },

    /// The keys lie too far apart for the union to be computed exactly.
    #[error("keys span {span} units, more than the {max} the union supports")]
    OutOfRange { span: i64, max: i64 },

    /// The union produced a polygon that fails boundary validation.
    #[error("merged boundary is invalid: {0}")]
    Degenerate(#[from] GeometryError),
}

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("key id {0} is already used in this layout")]
    DuplicateId(KeyId),

    #[error("no key with id {0}")]
    UnknownKey(KeyId),

    #[error("every key id is in use")]
    IdsExhausted,

    #[error("cannot merge keys into {primary}: {source}")]
    Merge {
        primary: KeyId,
        #[source]
        source: MergeError,
    },

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Reading or writing a TOML layout or style file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize TOML: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid color {0:?}, expected #rrggbb or #rrggbbaa")]
pub struct ColorError(pub String);
