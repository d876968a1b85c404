use serde::{Deserialize, Serialize};

use super::Point;

/// Axis-aligned rectangle, inclusive of both corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Rectangle with `a` and `b` as opposite corners.
    pub fn spanning(a: Point, b: Point) -> Self {
        Rect::new(a.x.min(b.x), a.y.min(b.y), a.x.max(b.x), a.y.max(b.y))
    }

    /// Smallest rectangle containing every point, `None` for an empty slice.
    pub fn enclosing(points: &[Point]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let init = Rect::new(first.x, first.y, first.x, first.y);
        Some(rest.iter().fold(init, |r, p| Rect {
            left: r.left.min(p.x),
            top: r.top.min(p.y),
            right: r.right.max(p.x),
            bottom: r.bottom.max(p.y),
        }))
    }

    /// Smallest rectangle containing both.
    pub fn covering(&self, other: &Rect) -> Self {
        Rect::new(
            self.left.min(other.left),
            self.top.min(other.top),
            self.right.max(other.right),
            self.bottom.max(other.bottom),
        )
    }

    pub const fn width(&self) -> i64 {
        self.right as i64 - self.left as i64
    }

    pub const fn height(&self) -> i64 {
        self.bottom as i64 - self.top as i64
    }

    /// Centre of the rectangle.
    ///
    /// Integer division truncates toward zero, so odd extents bias toward the
    /// top-left for positive coordinates. Existing layouts position their
    /// labels with this exact rounding.
    pub const fn center(&self) -> Point {
        // The midpoint of two i32 values is itself an i32.
        let x = (self.left as i64 + self.right as i64) / 2;
        let y = (self.top as i64 + self.bottom as i64) / 2;
        Point::new(x as i32, y as i32)
    }

    /// `None` if a corner leaves the `i32` range.
    pub const fn checked_translate(&self, dx: i32, dy: i32) -> Option<Self> {
        match (
            Point::new(self.left, self.top).checked_translate(dx, dy),
            Point::new(self.right, self.bottom).checked_translate(dx, dy),
        ) {
            (Some(tl), Some(br)) => Some(Rect::new(tl.x, tl.y, br.x, br.y)),
            _ => None,
        }
    }

    pub const fn contains(&self, p: Point) -> bool {
        p.x >= self.left && p.x <= self.right && p.y >= self.top && p.y <= self.bottom
    }

    /// Closed-interval intersection test; touching edges count.
    pub const fn intersects(&self, other: &Rect) -> bool {
        self.left <= other.right
            && other.left <= self.right
            && self.top <= other.bottom
            && other.top <= self.bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enclosing_reduces_min_max() {
        let pts = [Point::new(5, -2), Point::new(-1, 8), Point::new(3, 3)];
        assert_eq!(Rect::enclosing(&pts), Some(Rect::new(-1, -2, 5, 8)));
        assert_eq!(Rect::enclosing(&[]), None);
    }

    #[test]
    fn center_truncates() {
        assert_eq!(Rect::new(0, 0, 10, 20).center(), Point::new(5, 10));
        assert_eq!(Rect::new(0, 0, 5, 3).center(), Point::new(2, 1));
        assert_eq!(Rect::new(-5, -3, 0, 0).center(), Point::new(-2, -1));
    }

    #[test]
    fn center_and_extent_near_i32_limits() {
        let r = Rect::new(i32::MAX - 10, 0, i32::MAX, 10);
        assert_eq!(r.center(), Point::new(i32::MAX - 5, 5));
        let full = Rect::new(i32::MIN, i32::MIN, i32::MAX, i32::MAX);
        assert_eq!(full.center(), Point::new(0, 0));
        assert_eq!(full.width(), u32::MAX as i64);
        assert_eq!(r.checked_translate(11, 0), None);
        assert_eq!(
            r.checked_translate(-10, 0),
            Some(Rect::new(i32::MAX - 20, 0, i32::MAX - 10, 10))
        );
    }

    #[test]
    fn touching_rects_intersect() {
        let a = Rect::new(0, 0, 10, 10);
        assert!(a.intersects(&Rect::new(10, 0, 20, 10)));
        assert!(!a.intersects(&Rect::new(11, 0, 20, 10)));
    }
}
