//! Polygon union over integer boundaries.
//!
//! The overlay itself is `i_overlay`'s integer union. Inputs are shifted to a
//! local origin and scaled up first, so crossings that fall between grid
//! points keep their topology; only the final outlines are rounded back.
//!
//! Regions that only share a vertex come out as separate outlines, so
//! "the union is a single outline" means the inputs share at least part of an
//! edge or overlap.

use std::collections::HashMap;

use i_overlay::core::fill_rule::FillRule;
use i_overlay::core::overlay::Overlay;
use i_overlay::core::overlay_rule::OverlayRule;
use i_overlay::i_float::int::point::IntPoint;

use super::segment;
use super::{Boundary, Point};
use crate::error::MergeError;

/// Largest width or height, in layout units, of the area the inputs cover.
pub const MAX_SPAN: i64 = 1 << 26;

/// Upper bound for the sub-grid scale factor.
const MAX_SCALE: i64 = 1 << 10;

/// Maps layout coordinates to overlay coordinates and back.
#[derive(Debug, Clone, Copy)]
struct Frame {
    origin: Point,
    scale: i64,
}

impl Frame {
    fn new(origin: Point, span: i64) -> Self {
        let mut scale = MAX_SCALE;
        while scale > 1 && span * scale > MAX_SPAN {
            scale /= 2;
        }
        Self { origin, scale }
    }

    fn to_overlay(self, p: Point) -> IntPoint {
        let x = (i64::from(p.x) - i64::from(self.origin.x)) * self.scale;
        let y = (i64::from(p.y) - i64::from(self.origin.y)) * self.scale;
        // Bounded by MAX_SPAN.
        IntPoint::new(x as i32, y as i32)
    }

    /// Rounds to the nearest layout point, halves rounding up.
    fn to_layout(self, p: Point) -> Point {
        let round = |v: i32, origin: i32| {
            let v = (2 * i64::from(v) + self.scale).div_euclid(2 * self.scale);
            // Stays inside the input extent, so it fits back into i32.
            (v + i64::from(origin)) as i32
        };
        Point::new(round(p.x, self.origin.x), round(p.y, self.origin.y))
    }

    /// Layout points at the corners of the grid cell holding `p`, closest
    /// first. A single point when `p` is already on the grid.
    fn cell_corners(self, p: Point) -> Vec<Point> {
        let axis = |v: i32, origin: i32| {
            let v = i64::from(v);
            let lo = v.div_euclid(self.scale);
            let hi = lo + i64::from(v.rem_euclid(self.scale) != 0);
            [lo, hi].map(|c| ((c + i64::from(origin)) as i32, (v - c * self.scale).abs()))
        };
        let mut corners = Vec::with_capacity(4);
        for (x, dx) in axis(p.x, self.origin.x) {
            for (y, dy) in axis(p.y, self.origin.y) {
                corners.push((dx * dx + dy * dy, Point::new(x, y)));
            }
        }
        corners.sort_unstable();
        corners.dedup();
        corners.into_iter().map(|(_, c)| c).collect()
    }
}

/// Union of the given regions as a list of closed outlines.
///
/// Outer outlines run clockwise on screen (positive area), holes the other
/// way. Collinear vertices are removed, each outline starts at its top-most,
/// then left-most vertex, and outlines are ordered by that vertex.
pub fn union(shapes: &[&Boundary]) -> Result<Vec<Vec<Point>>, MergeError> {
    let Some((first, rest)) = shapes.split_first() else {
        return Ok(Vec::new());
    };
    let extent = rest
        .iter()
        .fold(first.bounding_box(), |r, b| r.covering(&b.bounding_box()));
    let span = extent.width().max(extent.height());
    if span > MAX_SPAN {
        return Err(MergeError::OutOfRange {
            span,
            max: MAX_SPAN,
        });
    }
    let frame = Frame::new(Point::new(extent.left, extent.top), span);

    // Same winding everywhere, otherwise overlapping inputs cancel out
    // under the non-zero rule.
    let subject: Vec<Vec<IntPoint>> = shapes
        .iter()
        .map(|b| {
            let ring = if b.signed_area2() > 0 {
                b.points().to_vec()
            } else {
                b.reversed().points().to_vec()
            };
            ring.into_iter().map(|p| frame.to_overlay(p)).collect()
        })
        .collect();
    let clip: Vec<Vec<IntPoint>> = Vec::new();
    let result =
        Overlay::with_contours(&subject, &clip).overlay(OverlayRule::Union, FillRule::NonZero);

    let mut outlines = Vec::new();
    for shape in result {
        for (i, contour) in shape.into_iter().enumerate() {
            let mut ring: Vec<Point> =
                contour.into_iter().map(|p| Point::new(p.x, p.y)).collect();
            // The first contour of a shape is its outer outline.
            if (segment::signed_area2(&ring) > 0) != (i == 0) {
                ring.reverse();
            }
            for part in split_pinched(ring) {
                outlines.push(start_top_left(simplify(round_loop(frame, &part))));
            }
        }
    }
    outlines.sort_by_key(|l| l.first().map(|p| (p.y, p.x)));

    tracing::trace!(
        inputs = shapes.len(),
        outlines = outlines.len(),
        scale = frame.scale,
        "polygon union"
    );
    Ok(outlines)
}

/// Number of separate outlines in the union of `shapes`.
pub fn region_count(shapes: &[&Boundary]) -> Result<usize, MergeError> {
    union(shapes).map(|outlines| outlines.len())
}

/// Rounds a scaled loop back to layout units.
///
/// Every vertex goes to the nearest grid point. Two crossings a fraction of a
/// unit apart can land on the same point and pinch the outline; then one
/// crossing at a time is tried at the other corners of its grid cell until
/// the outline is simple again. If none works the nearest rounding is kept.
fn round_loop(frame: Frame, scaled: &[Point]) -> Vec<Point> {
    let nearest: Vec<Point> = scaled.iter().map(|&p| frame.to_layout(p)).collect();
    let simple = |ring: &[Point]| Boundary::new(simplify(ring.to_vec())).is_ok();
    if simple(&nearest) {
        return nearest;
    }
    for (i, &p) in scaled.iter().enumerate() {
        for corner in frame.cell_corners(p) {
            if corner == nearest[i] {
                continue;
            }
            let mut ring = nearest.clone();
            ring[i] = corner;
            if simple(&ring) {
                tracing::debug!(vertex = %corner, "moved rounded crossing off a pinch");
                return ring;
            }
        }
    }
    nearest
}

/// Splits an outline that passes through the same vertex more than once
/// into loops that visit each vertex once.
fn split_pinched(ring: Vec<Point>) -> Vec<Vec<Point>> {
    let mut loops = Vec::new();
    let mut open: Vec<Point> = Vec::with_capacity(ring.len());
    let mut seen: HashMap<Point, usize> = HashMap::new();
    for p in ring {
        if let Some(&at) = seen.get(&p) {
            let closed = open.split_off(at);
            for q in &closed {
                seen.remove(q);
            }
            loops.push(closed);
        }
        seen.insert(p, open.len());
        open.push(p);
    }
    loops.push(open);
    loops.retain(|l| l.len() >= 3);
    loops
}

/// Removes repeated vertices and vertices that lie on the line through their
/// neighbours.
fn simplify(mut ring: Vec<Point>) -> Vec<Point> {
    let mut changed = true;
    while changed && ring.len() >= 3 {
        changed = false;
        let n = ring.len();
        for i in 0..n {
            let prev = ring[(i + n - 1) % n];
            let next = ring[(i + 1) % n];
            let cur = ring[i];
            if segment::cross(segment::delta(prev, cur), segment::delta(cur, next)) == 0 {
                ring.remove(i);
                changed = true;
                break;
            }
        }
    }
    ring
}

fn start_top_left(mut ring: Vec<Point>) -> Vec<Point> {
    let start = ring
        .iter()
        .enumerate()
        .min_by_key(|(_, p)| (p.y, p.x))
        .map_or(0, |(i, _)| i);
    ring.rotate_left(start);
    ring
}
