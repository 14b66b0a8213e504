//! In-place Quickhull that collects hull vertices at the front of the input slice.

use glam::DVec2;

use crate::{
    predicates::{is_cw, orientation, sequence_meets_minimal_requirements, Orientation},
    primitives::{
        find_furthest, find_poles, parallel_swap, partition_around_furthest, partition_in_place,
        Side,
    },
};

/// Computes the convex hull of `points` by permuting the slice in place.
///
/// Returns `end` such that `points[..end]` holds the hull vertices, in no particular
/// order. The rest of the slice is left in an unspecified order.
///
/// If `points` has fewer than three points or all points are collinear, no hull
/// exists and `0` is returned.
///
/// # Example
///
/// ```
/// use glam::dvec2;
/// use inplace_quickhull::in_place_quickhull;
///
/// let mut points = vec![
///     dvec2(0.0, 0.0),
///     dvec2(4.0, 0.0),
///     dvec2(2.0, 2.0),
///     dvec2(4.0, 4.0),
///     dvec2(0.0, 4.0),
/// ];
///
/// let end = in_place_quickhull(&mut points);
///
/// assert_eq!(end, 4);
/// assert!(!points[..end].contains(&dvec2(2.0, 2.0)));
/// ```
pub fn in_place_quickhull(points: &mut [DVec2]) -> usize {
    if !sequence_meets_minimal_requirements(points) {
        tracing::debug!(len = points.len(), "no convex hull for degenerate input");
        return 0;
    }

    // Place the leftmost point at the front and the rightmost point at the back.
    let last = points.len() - 1;
    let (min_index, max_index) = find_poles(points);
    parallel_swap(points, 0, last, min_index, max_index);

    let left = points[0];
    let right = points[last];

    if left == right {
        return 0;
    }

    // Split `[1, last)` into the points below the baseline, the points on it,
    // and the points above it. The points on the baseline are never revisited.
    let lower_past = 1 + partition_in_place(&mut points[1..last], |p| is_cw(left, right, *p));
    let mut upper_first = lower_past
        + partition_in_place(&mut points[lower_past..last], |p| {
            orientation(left, right, *p) == Orientation::Collinear
        });
    let mut upper_past = last;

    let mut cursor = 1;
    find_hull(points, 1, lower_past, left, right, &mut cursor, Side::Lower);

    // Move the rightmost point behind the lower hull.
    points.swap(last, cursor);
    if cursor == upper_first {
        // The first upper point was just moved to the back.
        upper_first += 1;
        upper_past += 1;
    }
    cursor += 1;

    find_hull(
        points,
        upper_first,
        upper_past,
        right,
        left,
        &mut cursor,
        Side::Upper,
    );

    tracing::trace!(vertices = cursor, len = points.len(), "in-place quickhull done");

    cursor
}

/// Moves the hull vertices among `points[first..past]` to the cursor, advancing it.
///
/// All points in the range lie strictly right of the directed segment `pole -> antipole`,
/// and `cursor <= first`. Both `pole` and `antipole` are confirmed hull vertices whose
/// positions lie outside the range.
fn find_hull(
    points: &mut [DVec2],
    first: usize,
    past: usize,
    pole: DVec2,
    antipole: DVec2,
    cursor: &mut usize,
    side: Side,
) {
    debug_assert!(*cursor <= first);

    match past - first {
        0 => return,
        1 => {
            // A single point outside the segment is a hull vertex.
            points.swap(first, *cursor);
            *cursor += 1;
            return;
        }
        _ => {}
    }

    // Move the furthest point to the end of the range.
    let last = past - 1;
    let furthest_index = find_furthest(points, first, past, pole, antipole);
    points.swap(furthest_index, last);
    let furthest = points[last];

    let (pole_past, mut antipole_first) =
        partition_around_furthest(points, first, last, pole, antipole, side);
    let mut antipole_past = last;

    find_hull(points, first, pole_past, pole, furthest, cursor, side);

    points.swap(last, *cursor);
    if *cursor == antipole_first {
        // The swap moved the first point of the antipole group to `last`.
        antipole_first += 1;
        antipole_past += 1;
    }
    *cursor += 1;

    find_hull(
        points,
        antipole_first,
        antipole_past,
        furthest,
        antipole,
        cursor,
        side,
    );
}
