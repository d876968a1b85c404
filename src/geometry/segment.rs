//! Exact integer predicates on segments and rings.
//!
//! Coordinates are widened to `i64` and products to `i128`, so every test here
//! is exact for the whole `i32` input range.

use std::cmp::Ordering;

use super::Point;

/// A point in widened coordinates, optionally scaled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Wide {
    pub x: i64,
    pub y: i64,
}

impl Wide {
    pub fn scaled(p: Point, k: i64) -> Self {
        Self {
            x: i64::from(p.x) * k,
            y: i64::from(p.y) * k,
        }
    }
}

impl From<Point> for Wide {
    fn from(p: Point) -> Self {
        Wide::scaled(p, 1)
    }
}

pub(crate) fn delta(a: Point, b: Point) -> (i64, i64) {
    (
        i64::from(b.x) - i64::from(a.x),
        i64::from(b.y) - i64::from(a.y),
    )
}

pub(crate) fn cross(u: (i64, i64), v: (i64, i64)) -> i128 {
    i128::from(u.0) * i128::from(v.1) - i128::from(u.1) * i128::from(v.0)
}

pub(crate) fn dot(u: (i64, i64), v: (i64, i64)) -> i128 {
    i128::from(u.0) * i128::from(v.0) + i128::from(u.1) * i128::from(v.1)
}

/// Twice the signed area of a ring (shoelace). Positive for clockwise rings
/// on a y-down screen.
pub(crate) fn signed_area2(ring: &[Point]) -> i128 {
    let n = ring.len();
    (0..n)
        .map(|i| {
            let a = ring[i];
            let b = ring[(i + 1) % n];
            i128::from(a.x) * i128::from(b.y) - i128::from(b.x) * i128::from(a.y)
        })
        .sum()
}

/// Whether `p` lies on the closed segment `a`-`b`.
pub(crate) fn on_segment(p: Point, a: Point, b: Point) -> bool {
    cross(delta(a, b), delta(a, p)) == 0
        && p.x >= a.x.min(b.x)
        && p.x <= a.x.max(b.x)
        && p.y >= a.y.min(b.y)
        && p.y <= a.y.max(b.y)
}

/// How two closed segments meet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Crossing {
    None,
    /// A single shared point. Proper crossings off the integer grid are rounded.
    Point(Point),
    /// Collinear overlap between two distinct points.
    Overlap(Point, Point),
}

/// Round `n / d` to the nearest integer, halves rounding up. `d` must be positive.
fn div_round(n: i128, d: i128) -> i128 {
    (2 * n + d).div_euclid(2 * d)
}

pub(crate) fn intersect(p1: Point, p2: Point, q1: Point, q2: Point) -> Crossing {
    let r = delta(p1, p2);
    let s = delta(q1, q2);
    let qp = delta(p1, q1);
    let denom = cross(r, s);

    if denom == 0 {
        if cross(qp, r) != 0 {
            return Crossing::None;
        }
        // Collinear: compare positions projected onto p's direction.
        let rr = dot(r, r);
        let t0 = dot(qp, r);
        let t1 = dot(delta(p1, q2), r);
        let lo = t0.min(t1).max(0);
        let hi = t0.max(t1).min(rr);
        let at = |t: i128| -> Point {
            if t == 0 {
                p1
            } else if t == rr {
                p2
            } else if t == t0 {
                q1
            } else {
                q2
            }
        };
        return match lo.cmp(&hi) {
            Ordering::Greater => Crossing::None,
            Ordering::Equal => Crossing::Point(at(lo)),
            Ordering::Less => Crossing::Overlap(at(lo), at(hi)),
        };
    }

    let (mut t, mut u, mut d) = (cross(qp, s), cross(qp, r), denom);
    if d < 0 {
        t = -t;
        u = -u;
        d = -d;
    }
    if t < 0 || t > d || u < 0 || u > d {
        return Crossing::None;
    }

    let point = if t == 0 {
        p1
    } else if t == d {
        p2
    } else if u == 0 {
        q1
    } else if u == d {
        q2
    } else {
        let x = i128::from(p1.x) + div_round(i128::from(r.0) * t, d);
        let y = i128::from(p1.y) + div_round(i128::from(r.1) * t, d);
        // Stays between the endpoints, so it fits back into i32.
        Point::new(x as i32, y as i32)
    };
    Crossing::Point(point)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Location {
    Inside,
    OnBoundary,
    Outside,
}

/// Locate `q` relative to `ring`, whose vertices are multiplied by `scale`
/// (so a doubled midpoint is located against a ring scaled by 2).
pub(crate) fn locate(q: Wide, ring: &[Point], scale: i64) -> Location {
    let n = ring.len();
    let mut inside = false;
    for i in 0..n {
        let a = Wide::scaled(ring[i], scale);
        let b = Wide::scaled(ring[(i + 1) % n], scale);
        let ab = (b.x - a.x, b.y - a.y);
        let aq = (q.x - a.x, q.y - a.y);
        if cross(ab, aq) == 0
            && q.x >= a.x.min(b.x)
            && q.x <= a.x.max(b.x)
            && q.y >= a.y.min(b.y)
            && q.y <= a.y.max(b.y)
        {
            return Location::OnBoundary;
        }
        if (a.y > q.y) != (b.y > q.y) {
            // Is q left of the edge's crossing with the horizontal through q?
            let lhs = i128::from(q.x - a.x) * i128::from(b.y - a.y);
            let rhs = i128::from(q.y - a.y) * i128::from(b.x - a.x);
            let left = if b.y > a.y { lhs < rhs } else { lhs > rhs };
            if left {
                inside = !inside;
            }
        }
    }
    if inside {
        Location::Inside
    } else {
        Location::Outside
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn proper_crossing() {
        assert_eq!(
            intersect(p(0, 0), p(10, 10), p(0, 10), p(10, 0)),
            Crossing::Point(p(5, 5))
        );
    }

    #[test]
    fn off_grid_crossing_rounds() {
        // Exact crossing is (1.5, 1.5).
        assert_eq!(
            intersect(p(0, 0), p(3, 3), p(0, 3), p(3, 0)),
            Crossing::Point(p(2, 2))
        );
    }

    #[test]
    fn endpoint_touch_is_exact() {
        assert_eq!(
            intersect(p(0, 0), p(10, 0), p(10, 0), p(10, 10)),
            Crossing::Point(p(10, 0))
        );
        assert_eq!(
            intersect(p(0, 5), p(10, 5), p(5, 5), p(5, 20)),
            Crossing::Point(p(5, 5))
        );
    }

    #[test]
    fn collinear_cases() {
        assert_eq!(
            intersect(p(0, 0), p(10, 0), p(5, 0), p(20, 0)),
            Crossing::Overlap(p(5, 0), p(10, 0))
        );
        assert_eq!(
            intersect(p(0, 0), p(10, 0), p(20, 0), p(10, 0)),
            Crossing::Point(p(10, 0))
        );
        assert_eq!(
            intersect(p(0, 0), p(10, 0), p(11, 0), p(20, 0)),
            Crossing::None
        );
        assert_eq!(
            intersect(p(0, 0), p(10, 0), p(0, 1), p(10, 1)),
            Crossing::None
        );
    }

    #[test]
    fn locate_square() {
        let sq = [p(0, 0), p(10, 0), p(10, 10), p(0, 10)];
        assert_eq!(locate(Wide::from(p(5, 5)), &sq, 1), Location::Inside);
        assert_eq!(locate(Wide::from(p(10, 5)), &sq, 1), Location::OnBoundary);
        assert_eq!(locate(Wide::from(p(0, 0)), &sq, 1), Location::OnBoundary);
        assert_eq!(locate(Wide::from(p(11, 5)), &sq, 1), Location::Outside);
        // doubled (19, 1) is (9.5, 0.5)
        assert_eq!(locate(Wide { x: 19, y: 1 }, &sq, 2), Location::Inside);
    }
}
