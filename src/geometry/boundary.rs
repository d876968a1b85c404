use serde::{Deserialize, Serialize};

use super::segment::{self, Crossing, Location, Wide};
use super::{Point, Rect};
use crate::error::GeometryError;

/// Direction a boundary runs, as seen on screen (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winding {
    Clockwise,
    CounterClockwise,
}

/// Outline of a key: a simple closed polygon.
///
/// The last vertex connects back to the first. Construction rejects anything
/// that is not a simple polygon with a non-zero area, so every operation on a
/// `Boundary` can rely on that.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Point>", into = "Vec<Point>")]
pub struct Boundary {
    points: Vec<Point>,
}

impl Boundary {
    pub fn new(points: Vec<Point>) -> Result<Self, GeometryError> {
        validate(&points)?;
        Ok(Self { points })
    }

    /// Axis-aligned rectangle `(x, y)`-`(x + width, y + height)`, clockwise on screen.
    pub fn rectangle(x: i32, y: i32, width: i32, height: i32) -> Result<Self, GeometryError> {
        let right = x.checked_add(width).ok_or(GeometryError::CoordinateOverflow)?;
        let bottom = y.checked_add(height).ok_or(GeometryError::CoordinateOverflow)?;
        Self::new(vec![
            Point::new(x, y),
            Point::new(right, y),
            Point::new(right, bottom),
            Point::new(x, bottom),
        ])
    }
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Edges as `(start, end)` pairs, the closing edge last.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }

    pub fn bounding_box(&self) -> Rect {
        Rect::enclosing(&self.points).unwrap_or(Rect::new(0, 0, 0, 0))
    }

    /// Label anchor: the centre of the bounding box.
    pub fn anchor(&self) -> Point {
        self.bounding_box().center()
    }

    /// Copy moved by `(dx, dy)`. Fails if a vertex leaves the `i32` range.
    pub fn translate(&self, dx: i32, dy: i32) -> Result<Self, GeometryError> {
        let points = self
            .points
            .iter()
            .map(|p| p.checked_translate(dx, dy))
            .collect::<Option<Vec<_>>>()
            .ok_or(GeometryError::CoordinateOverflow)?;
        Ok(Self { points })
    }

    /// Twice the signed area; positive for clockwise boundaries.
    pub fn signed_area2(&self) -> i128 {
        segment::signed_area2(&self.points)
    }

    pub fn winding(&self) -> Winding {
        if self.signed_area2() > 0 {
            Winding::Clockwise
        } else {
            Winding::CounterClockwise
        }
    }

    /// Same outline, opposite winding. The first vertex stays first.
    pub fn reversed(&self) -> Self {
        let mut points = self.points.clone();
        points[1..].reverse();
        Self { points }
    }

    /// Hit-test; points on the outline count as inside.
    pub fn contains(&self, p: Point) -> bool {
        self.bounding_box().contains(p)
            && segment::locate(Wide::from(p), &self.points, 1) != Location::Outside
    }

    /// Index `i` of the edge `points[i]`-`points[i + 1]` closest to `p`.
    pub fn nearest_edge(&self, p: Point) -> usize {
        self.edges()
            .map(|(a, b)| distance_sq(p, a, b))
            .enumerate()
            .min_by(|(_, a), (_, b)| a.total_cmp(b))
            .map_or(0, |(i, _)| i)
    }

    pub fn with_vertex_moved(&self, index: usize, to: Point) -> Result<Self, GeometryError> {
        self.check_index(index)?;
        let mut points = self.points.clone();
        points[index] = to;
        Self::new(points)
    }

    /// Inserts `at` so it becomes vertex `index`; `index == len()` appends.
    pub fn with_vertex_inserted(&self, index: usize, at: Point) -> Result<Self, GeometryError> {
        if index > self.points.len() {
            return Err(GeometryError::VertexOutOfRange {
                index,
                len: self.points.len(),
            });
        }
        let mut points = self.points.clone();
        points.insert(index, at);
        Self::new(points)
    }

    pub fn with_vertex_removed(&self, index: usize) -> Result<Self, GeometryError> {
        self.check_index(index)?;
        let mut points = self.points.clone();
        points.remove(index);
        Self::new(points)
    }

    fn check_index(&self, index: usize) -> Result<(), GeometryError> {
        if index < self.points.len() {
            Ok(())
        } else {
            Err(GeometryError::VertexOutOfRange {
                index,
                len: self.points.len(),
            })
        }
    }
}

impl TryFrom<Vec<Point>> for Boundary {
    type Error = GeometryError;

    fn try_from(points: Vec<Point>) -> Result<Self, Self::Error> {
        Self::new(points)
    }
}

impl From<Boundary> for Vec<Point> {
    fn from(b: Boundary) -> Self {
        b.points
    }
}

fn validate(points: &[Point]) -> Result<(), GeometryError> {
    let n = points.len();
    if n < 3 {
        return Err(GeometryError::TooFewPoints { count: n });
    }
    if let Some(index) = (0..n).find(|&i| points[i] == points[(i + 1) % n]) {
        return Err(GeometryError::ZeroLengthEdge { index });
    }
    if segment::signed_area2(points) == 0 {
        return Err(GeometryError::ZeroArea);
    }

    let edge = |i: usize| (points[i], points[(i + 1) % n]);
    for first in 0..n {
        let (a1, a2) = edge(first);
        let bbox = Rect::spanning(a1, a2);
        for second in first + 1..n {
            let (b1, b2) = edge(second);
            if !bbox.intersects(&Rect::spanning(b1, b2)) {
                continue;
            }
            let adjacent = second == first + 1 || (first == 0 && second == n - 1);
            let bad = match segment::intersect(a1, a2, b1, b2) {
                Crossing::None => false,
                // Neighbours always share their common vertex; only a fold back is bad.
                Crossing::Point(_) => !adjacent,
                Crossing::Overlap(..) => true,
            };
            if bad {
                return Err(GeometryError::SelfIntersecting { first, second });
            }
        }
    }
    Ok(())
}

fn distance_sq(p: Point, a: Point, b: Point) -> f64 {
    let (px, py) = (f64::from(p.x), f64::from(p.y));
    let (ax, ay) = (f64::from(a.x), f64::from(a.y));
    let (dx, dy) = (f64::from(b.x) - ax, f64::from(b.y) - ay);
    let len_sq = dx * dx + dy * dy;
    let t = (((px - ax) * dx + (py - ay) * dy) / len_sq).clamp(0.0, 1.0);
    let (cx, cy) = (ax + t * dx - px, ay + t * dy - py);
    cx * cx + cy * cy
}
