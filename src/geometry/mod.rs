//! 键位几何引擎
//!
//! Integer points, validated key outlines and the polygon union used to
//! decide whether keys border each other and to merge them.

mod boundary;
pub mod clip;
mod point;
mod rect;
pub(crate) mod segment;

pub use boundary::{Boundary, Winding};
pub use point::Point;
pub use rect::Rect;
