//! In-place Quickhull built on a recursive chain procedure that compacts
//! surviving candidates and eliminated points into separate blocks.
//!
//! Unlike [`in_place_quickhull`](crate::in_place_quickhull), the vertices are
//! emitted in counterclockwise order, starting with the lexicographically
//! smallest point.

use glam::DVec2;

use crate::{
    predicates::{orientation, sequence_meets_minimal_requirements, Orientation},
    primitives::{find_furthest, find_poles, move_away, parallel_swap, partition_in_place},
};

/// Computes the convex hull of `points` by permuting the slice in place.
///
/// Returns `end` such that `points[..end]` holds the hull vertices in counterclockwise
/// order, starting with the lexicographically smallest point. The rest of the slice is
/// left in an unspecified order.
///
/// If `points` has fewer than three points or all points are collinear, no hull
/// exists and `0` is returned.
///
/// # Example
///
/// ```
/// use glam::dvec2;
/// use inplace_quickhull::alt_in_place_quickhull;
///
/// let mut points = vec![
///     dvec2(4.0, 4.0),
///     dvec2(2.0, 2.0),
///     dvec2(0.0, 4.0),
///     dvec2(4.0, 0.0),
///     dvec2(0.0, 0.0),
/// ];
///
/// let end = alt_in_place_quickhull(&mut points);
///
/// assert_eq!(
///     &points[..end],
///     &[
///         dvec2(0.0, 0.0),
///         dvec2(4.0, 0.0),
///         dvec2(4.0, 4.0),
///         dvec2(0.0, 4.0),
///     ],
/// );
/// ```
pub fn alt_in_place_quickhull(points: &mut [DVec2]) -> usize {
    if !sequence_meets_minimal_requirements(points) {
        tracing::debug!(len = points.len(), "no convex hull for degenerate input");
        return 0;
    }

    let past = points.len();
    let last = past - 1;
    let (min_index, max_index) = find_poles(points);
    parallel_swap(points, 0, last, min_index, max_index);

    let west = points[0];
    let east = points[last];

    if west == east {
        return 0;
    }

    // `[1, middle)` holds the points on or below the baseline, `[middle, last)` the rest.
    let middle = partition_in_place(&mut points[1..last], |p| on_or_right_of(west, east, *p)) + 1;
    let remaining = past - middle;

    let eliminated = chain(points, 0, middle, east);
    let east_index = place_after_chain(points, eliminated, middle, last, past);

    // The points above the baseline now directly follow the eastern pole.
    chain(points, east_index, east_index + remaining, west)
}

/// Confirms the hull vertices among the candidates `points[pole + 1..past]`.
///
/// `points[pole]` is a confirmed hull vertex and every candidate lies on or to the right
/// of the directed line `pole -> antipole`. Returns `end` such that `points[pole..end]`
/// holds the chain of hull vertices from the pole towards the antipole (exclusive), in
/// order, and `points[end..past]` holds the eliminated points.
fn chain(points: &mut [DVec2], pole: usize, past: usize, antipole: DVec2) -> usize {
    let pole_point = points[pole];

    match past - pole {
        1 => return past,
        2 => {
            return if orientation(pole_point, antipole, points[pole + 1]) == Orientation::Collinear
            {
                pole + 1
            } else {
                past
            };
        }
        _ => {}
    }

    let furthest_index = find_furthest(points, pole + 1, past, pole_point, antipole);
    let furthest = points[furthest_index];

    // Nothing lies off the baseline: only the pole survives.
    if orientation(pole_point, antipole, furthest) == Orientation::Collinear {
        return pole + 1;
    }

    let last = past - 1;
    points.swap(furthest_index, last);

    // `[pole + 1, middle)` are the candidates for the edge `pole -> furthest`.
    let middle = partition_in_place(&mut points[pole + 1..last], |p| {
        on_or_right_of(pole_point, furthest, *p)
    }) + pole
        + 1;
    let remaining = past - middle;

    let eliminated = chain(points, pole, middle, furthest);
    let furthest_index = place_after_chain(points, eliminated, middle, last, past);

    // `[furthest_index + 1, border)` holds the points not handled by the first chain.
    let border = furthest_index + remaining;
    let interior = partition_in_place(&mut points[furthest_index + 1..border], |p| {
        on_or_right_of(furthest, antipole, *p)
    }) + furthest_index
        + 1;

    chain(points, furthest_index, interior, antipole)
}

/// Moves the point at `last` right behind the chain ending at `eliminated`, and the
/// points in `[middle, last)` right behind it, in front of the eliminated points.
///
/// Returns the new position of the point that was at `last`.
fn place_after_chain(
    points: &mut [DVec2],
    eliminated: usize,
    middle: usize,
    last: usize,
    past: usize,
) -> usize {
    debug_assert!(eliminated <= middle && middle <= last);

    // Rotate the point at `last` into `eliminated` by way of `middle`.
    points.swap(middle, last);
    points.swap(eliminated, middle);

    // Blocks: `[eliminated + 1, middle + 1)` eliminated, `[middle + 1, past)` remaining.
    move_away(points, eliminated + 1, middle + 1, past);

    eliminated
}

/// Returns `true` if `p` lies on or to the right of the directed line `a -> b`.
#[inline]
fn on_or_right_of(a: DVec2, b: DVec2, p: DVec2) -> bool {
    orientation(a, b, p) != Orientation::Counterclockwise
}
