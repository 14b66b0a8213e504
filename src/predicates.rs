//! Exact geometric predicates on planar points.

use core::cmp::Ordering;

use glam::DVec2;
use thiserror::Error;

/// The orientation of an ordered triple of points `(p, q, r)`.
///
/// Equivalently, the side of the directed line `p -> q` on which `r` lies:
/// to the right (`Clockwise`), on it (`Collinear`), or to the left (`Counterclockwise`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// `r` lies to the right of the directed line `p -> q`.
    Clockwise,
    /// `p`, `q` and `r` lie on a common line.
    Collinear,
    /// `r` lies to the left of the directed line `p -> q`.
    Counterclockwise,
}

/// The reason a point set has no two-dimensional convex hull.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DegenerateInput {
    /// Fewer than three points were given.
    #[error("fewer than three points")]
    TooFewPoints,
    /// All points lie on a single line (this includes all points being equal).
    #[error("all points are collinear")]
    Collinear,
}

/// Returns the orientation of the triple `(p, q, r)`.
///
/// This is the sign of the cross product `(q - p) × (r - p)`. The sign is computed
/// with an adaptive-precision predicate, so `Collinear` is returned exactly when
/// the three input points are collinear.
#[inline]
pub fn orientation(p: DVec2, q: DVec2, r: DVec2) -> Orientation {
    let value = orient2d(p, q, r);

    if value > 0.0 {
        Orientation::Counterclockwise
    } else if value < 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

/// Returns `true` if `r` lies strictly to the right of the directed line `p -> q`.
#[inline]
pub(crate) fn is_cw(p: DVec2, q: DVec2, r: DVec2) -> bool {
    orient2d(p, q, r) < 0.0
}

/// Twice the signed area of the triangle `p, q, r`.
#[inline]
fn orient2d(p: DVec2, q: DVec2, r: DVec2) -> f64 {
    use robust::Coord;
    robust::orient2d(
        Coord { x: p.x, y: p.y },
        Coord { x: q.x, y: q.y },
        Coord { x: r.x, y: r.y },
    )
}

/// Returns the squared distance of `r` from the segment `p, q`.
///
/// This is the squared perpendicular distance if the projection of `r` onto the
/// line through `p` and `q` falls within the segment, and the squared distance to
/// the nearer endpoint otherwise. If `p == q`, it is the squared distance from `r` to `p`.
#[inline]
pub fn squared_distance_to_segment(r: DVec2, p: DVec2, q: DVec2) -> f64 {
    let pq = q - p;
    let pr = r - p;
    let length_squared = pq.length_squared();

    if length_squared == 0.0 {
        return pr.length_squared();
    }

    let projection = pq.dot(pr);

    if projection <= 0.0 {
        pr.length_squared()
    } else if projection >= length_squared {
        (r - q).length_squared()
    } else {
        // Ties compare equal when the arithmetic is exact, e.g. for integer coordinates.
        // Otherwise the cross product rounds differently for each point.
        let cross = pq.perp_dot(pr);
        cross * cross / length_squared
    }
}

/// Compares two points first by `x`, then by `y`.
///
/// # Panics
///
/// Panics if a coordinate is NaN.
#[inline]
pub fn lexicographic_cmp(a: &DVec2, b: &DVec2) -> Ordering {
    a.x.partial_cmp(&b.x)
        .unwrap()
        .then(a.y.partial_cmp(&b.y).unwrap())
}

/// Returns `true` if `a` precedes `b` in lexicographic order.
#[inline]
pub(crate) fn lexicographic_lt(a: DVec2, b: DVec2) -> bool {
    a.x < b.x || (a.x == b.x && a.y < b.y)
}

/// Checks that a two-dimensional convex hull exists for `points`.
///
/// # Errors
///
/// Returns [`DegenerateInput::TooFewPoints`] for fewer than three points and
/// [`DegenerateInput::Collinear`] if all points lie on one line.
pub fn check_minimal_requirements(points: &[DVec2]) -> Result<(), DegenerateInput> {
    if points.len() < 3 {
        return Err(DegenerateInput::TooFewPoints);
    }

    let first = points[0];

    // Duplicates of the first point do not define a line.
    let Some(second) = points[1..].iter().position(|p| *p != first).map(|i| i + 1) else {
        return Err(DegenerateInput::Collinear);
    };

    let direction = points[second];
    let all_collinear = points[second + 1..]
        .iter()
        .all(|p| orientation(first, direction, *p) == Orientation::Collinear);

    if all_collinear {
        Err(DegenerateInput::Collinear)
    } else {
        Ok(())
    }
}

/// Returns `true` if `points` contains at least three points that are not all collinear.
#[inline]
pub fn sequence_meets_minimal_requirements(points: &[DVec2]) -> bool {
    check_minimal_requirements(points).is_ok()
}
