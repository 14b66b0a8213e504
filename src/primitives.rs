//! Primitives shared by the in-place hull algorithms.
//!
//! Everything here permutes a single slice of points. Ranges are half-open
//! `(first, past)` index pairs into that slice.

use glam::DVec2;

use crate::predicates::{is_cw, lexicographic_lt, squared_distance_to_segment};

/// Returns the positions of the lexicographically smallest and largest points.
///
/// # Panics
///
/// Panics with `debug_assertions` enabled if `points` is empty.
pub(crate) fn find_poles(points: &[DVec2]) -> (usize, usize) {
    debug_assert!(!points.is_empty());

    points
        .iter()
        .enumerate()
        .skip(1)
        .fold((0, 0), |(min_index, max_index), (i, point)| {
            let min_index = if lexicographic_lt(*point, points[min_index]) {
                i
            } else {
                min_index
            };
            let max_index = if lexicographic_lt(points[max_index], *point) {
                i
            } else {
                max_index
            };
            (min_index, max_index)
        })
}

/// Moves the element at `rd` to `st` and the element at `th` to `nd`.
///
/// The first swap may move the element that was at `th`: if `th == st`, it now
/// sits at `rd`.
#[inline]
pub(crate) fn parallel_swap(points: &mut [DVec2], st: usize, nd: usize, rd: usize, th: usize) {
    points.swap(st, rd);
    if th == st {
        points.swap(nd, rd);
    } else {
        points.swap(nd, th);
    }
}

/// Returns the position in `[first, past)` of the point furthest from the segment `pole, antipole`.
///
/// Among points at the same distance, the lexicographically smallest one wins. It is an
/// extreme point of the tied set, so an interior point of a hull edge is never selected.
///
/// # Panics
///
/// Panics if the range is empty.
pub(crate) fn find_furthest(
    points: &[DVec2],
    first: usize,
    past: usize,
    pole: DVec2,
    antipole: DVec2,
) -> usize {
    let mut furthest = first;
    let mut max_distance = squared_distance_to_segment(points[first], pole, antipole);

    for (i, point) in points.iter().enumerate().take(past).skip(first + 1) {
        let distance = squared_distance_to_segment(*point, pole, antipole);
        if max_distance < distance
            || (max_distance == distance && lexicographic_lt(*point, points[furthest]))
        {
            max_distance = distance;
            furthest = i;
        }
    }

    furthest
}

/// Partitions `data` in place so that all elements for which `predicate(e)` is `true`
/// precede all elements for which it is `false`. Returns the number of the former.
///
/// The relative order within either group is not preserved.
pub(crate) fn partition_in_place<T, P>(data: &mut [T], predicate: P) -> usize
where
    P: Fn(&T) -> bool,
{
    let (mut left, mut right) = (0, data.len());

    loop {
        while left < right && predicate(&data[left]) {
            left += 1;
        }

        while left < right && !predicate(&data[right - 1]) {
            right -= 1;
        }

        if left >= right {
            return left;
        }

        data.swap(left, right - 1);
        left += 1;
        right -= 1;
    }
}

/// The region of the point set a recursive hull step works on, relative to
/// the baseline between the two extreme points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Side {
    /// Below the baseline; the pole is left of the furthest point.
    Lower,
    /// Above the baseline; the pole is right of the furthest point.
    Upper,
}

impl Side {
    /// Returns `true` if `x` lies on the pole's side of the furthest point.
    #[inline]
    fn faces_pole(self, x: f64, furthest_x: f64) -> bool {
        match self {
            Side::Lower => x < furthest_x,
            Side::Upper => x > furthest_x,
        }
    }
}

/// Where a point ends up after partitioning around a furthest point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Group {
    /// Strictly right of `pole -> furthest`.
    PoleSide,
    /// Strictly right of `furthest -> antipole`.
    AntipoleSide,
    /// Inside the triangle `pole, furthest, antipole`.
    Interior,
}

/// Three-way partition of `[first, last)` around the furthest point sitting at `last`.
///
/// Returns `(pole_end, antipole_start)`:
///
/// - `[first, pole_end)` holds the points strictly right of `pole -> furthest`.
/// - `[pole_end, antipole_start)` holds the discarded interior points.
/// - `[antipole_start, last)` holds the points strictly right of `furthest -> antipole`.
///
/// The range must not be empty.
pub(crate) fn partition_around_furthest(
    points: &mut [DVec2],
    first: usize,
    last: usize,
    pole: DVec2,
    antipole: DVec2,
    side: Side,
) -> (usize, usize) {
    debug_assert!(first < last);

    let furthest = points[last];
    let mut pole_end = first;
    let mut antipole_start = last - 1;
    let mut current = first;

    // `[first, pole_end)` pole side, `[pole_end, current)` interior,
    // `(antipole_start, last)` antipole side, `[current, antipole_start]` unclassified.
    while current != antipole_start {
        if is_cw(pole, furthest, points[current]) {
            points.swap(current, pole_end);
            pole_end += 1;
            current += 1;
        } else if is_cw(furthest, antipole, points[current]) {
            points.swap(current, antipole_start);
            antipole_start -= 1;
        } else {
            current += 1;
        }
    }

    // The element the cursors met on.
    let point = points[current];
    let group = if side.faces_pole(point.x, furthest.x) {
        if is_cw(pole, furthest, point) {
            Group::PoleSide
        } else if is_cw(furthest, antipole, point) {
            Group::AntipoleSide
        } else {
            Group::Interior
        }
    } else if is_cw(furthest, antipole, point) {
        Group::AntipoleSide
    } else if is_cw(pole, furthest, point) {
        Group::PoleSide
    } else {
        Group::Interior
    };

    match group {
        Group::PoleSide => {
            points.swap(current, pole_end);
            pole_end += 1;
            antipole_start += 1;
        }
        Group::AntipoleSide => {}
        Group::Interior => antipole_start += 1,
    }

    (pole_end, antipole_start)
}

/// Exchanges the block `[source, past)` with the equally long block starting at `target`.
///
/// The blocks must not overlap. The order within each block is preserved.
#[inline]
pub(crate) fn swap_blocks(points: &mut [DVec2], source: usize, past: usize, target: usize) {
    debug_assert!(target >= past || target + (past - source) <= source);

    for (offset, i) in (source..past).enumerate() {
        points.swap(i, target + offset);
    }
}

/// Makes the adjacent blocks `[here, rest)` and `[rest, past)` trade places,
/// preserving the order within each block.
///
/// The smaller block is swapped into the far end of the larger one, which puts it
/// at its final position, and the remaining out-of-order part is handled the same way.
pub(crate) fn move_away(points: &mut [DVec2], mut here: usize, rest: usize, mut past: usize) {
    debug_assert!(here <= rest && rest <= past);

    while here < rest && rest < past {
        let front = rest - here;
        let back = past - rest;

        if front < back {
            swap_blocks(points, here, rest, past - front);
            past -= front;
        } else {
            swap_blocks(points, rest, past, here);
            here += back;
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::dvec2;

    use super::*;

    fn numbered(count: usize) -> Vec<DVec2> {
        (0..count).map(|i| dvec2(i as f64, 0.0)).collect()
    }

    fn labels(points: &[DVec2]) -> Vec<usize> {
        points.iter().map(|p| p.x as usize).collect()
    }

    #[test]
    fn poles() {
        let points = vec![
            dvec2(1.0, 1.0),
            dvec2(0.0, 3.0),
            dvec2(0.0, 2.0),
            dvec2(5.0, -1.0),
            dvec2(5.0, 4.0),
            dvec2(2.0, 2.0),
        ];
        assert_eq!(find_poles(&points), (2, 4));
        assert_eq!(find_poles(&[dvec2(1.0, 1.0)]), (0, 0));
    }

    #[test]
    fn parallel_swap_with_max_at_front() {
        let mut points = vec![
            dvec2(9.0, 0.0),
            dvec2(1.0, 0.0),
            dvec2(0.0, 0.0),
            dvec2(2.0, 0.0),
        ];
        let (min, max) = find_poles(&points);
        parallel_swap(&mut points, 0, 3, min, max);
        assert_eq!(points[0], dvec2(0.0, 0.0));
        assert_eq!(points[3], dvec2(9.0, 0.0));
    }

    #[test]
    fn parallel_swap_with_min_at_back() {
        let mut points = vec![
            dvec2(3.0, 0.0),
            dvec2(9.0, 0.0),
            dvec2(1.0, 0.0),
            dvec2(0.0, 0.0),
        ];
        let (min, max) = find_poles(&points);
        parallel_swap(&mut points, 0, 3, min, max);
        assert_eq!(points[0], dvec2(0.0, 0.0));
        assert_eq!(points[3], dvec2(9.0, 0.0));
    }

    #[test]
    fn parallel_swap_with_poles_reversed() {
        let mut points = vec![
            dvec2(9.0, 0.0),
            dvec2(3.0, 0.0),
            dvec2(1.0, 0.0),
            dvec2(0.0, 0.0),
        ];
        let (min, max) = find_poles(&points);
        parallel_swap(&mut points, 0, 3, min, max);
        assert_eq!(points[0], dvec2(0.0, 0.0));
        assert_eq!(points[3], dvec2(9.0, 0.0));
        assert_eq!(labels(&points[1..3]), vec![3, 1]);
    }

    #[test]
    fn furthest_point() {
        let pole = dvec2(0.0, 0.0);
        let antipole = dvec2(10.0, 0.0);
        let points = vec![
            dvec2(3.0, -1.0),
            dvec2(5.0, -4.0),
            dvec2(7.0, -2.0),
            dvec2(1.0, -3.0),
        ];
        assert_eq!(find_furthest(&points, 0, 4, pole, antipole), 1);
        assert_eq!(find_furthest(&points, 2, 4, pole, antipole), 3);
    }

    #[test]
    fn furthest_point_tie_prefers_smallest_x() {
        let pole = dvec2(0.0, 0.0);
        let antipole = dvec2(10.0, 0.0);
        let points = vec![
            dvec2(5.0, -4.0),
            dvec2(8.0, -4.0),
            dvec2(2.0, -4.0),
            dvec2(6.0, -4.0),
        ];
        assert_eq!(find_furthest(&points, 0, 4, pole, antipole), 2);
    }

    #[test]
    fn furthest_point_tie_on_vertical_baseline() {
        let pole = dvec2(0.0, 10.0);
        let antipole = dvec2(0.0, 0.0);
        let points = vec![dvec2(5.0, 5.0), dvec2(5.0, 8.0), dvec2(5.0, 2.0)];
        assert_eq!(find_furthest(&points, 0, 3, pole, antipole), 2);
    }

    #[test]
    fn partition_two_way() {
        let mut data = vec![5, 2, 8, 1, 9, 4, 7];
        let split = partition_in_place(&mut data, |x| *x < 5);
        assert_eq!(split, 3);
        assert!(data[..split].iter().all(|x| *x < 5));
        assert!(data[split..].iter().all(|x| *x >= 5));

        let mut empty: Vec<i32> = Vec::new();
        assert_eq!(partition_in_place(&mut empty, |x| *x < 5), 0);

        let mut all = vec![1, 2, 3];
        assert_eq!(partition_in_place(&mut all, |x| *x < 5), 3);
        assert_eq!(partition_in_place(&mut all, |x| *x > 5), 0);
    }

    fn check_three_way(side: Side) {
        let pole = dvec2(0.0, 0.0);
        let antipole = dvec2(10.0, 0.0);
        let furthest = dvec2(4.0, -6.0);

        let (pole, antipole, furthest, mirror) = match side {
            Side::Lower => (pole, antipole, furthest, 1.0),
            // Rotate the configuration by half a turn so the pole is on the right.
            Side::Upper => (-pole, -antipole, -furthest, -1.0),
        };

        let candidates = [
            dvec2(1.0, -3.0),  // pole side
            dvec2(8.0, -3.0),  // antipole side
            dvec2(4.0, -2.0),  // interior
            dvec2(2.0, -4.0),  // pole side
            dvec2(6.0, -1.0),  // interior
            dvec2(7.0, -4.0),  // antipole side
            dvec2(2.0, -3.0),  // on the pole edge, interior
            dvec2(4.0, -6.0),  // duplicate of the furthest point, interior
        ];

        let mut points: Vec<DVec2> = candidates.iter().map(|p| *p * mirror).collect();
        points.push(furthest);
        let last = points.len() - 1;

        let (pole_end, antipole_start) =
            partition_around_furthest(&mut points, 0, last, pole, antipole, side);

        assert_eq!(pole_end, 2);
        assert_eq!(last - antipole_start, 2);
        assert_eq!(points[last], furthest);

        for p in &points[..pole_end] {
            assert!(is_cw(pole, furthest, *p));
        }
        for p in &points[antipole_start..last] {
            assert!(is_cw(furthest, antipole, *p));
        }
        for p in &points[pole_end..antipole_start] {
            assert!(!is_cw(pole, furthest, *p) && !is_cw(furthest, antipole, *p));
        }
    }

    #[test]
    fn three_way_partition_lower() {
        check_three_way(Side::Lower);
    }

    #[test]
    fn three_way_partition_upper() {
        check_three_way(Side::Upper);
    }

    #[test]
    fn three_way_partition_final_element() {
        let pole = dvec2(0.0, 0.0);
        let antipole = dvec2(10.0, 0.0);
        let furthest = dvec2(5.0, -5.0);

        for (candidate, expected) in [
            (dvec2(1.0, -2.0), (1, 1)),
            (dvec2(9.0, -2.0), (0, 0)),
            (dvec2(5.0, -1.0), (0, 1)),
        ] {
            let mut points = vec![candidate, furthest];
            let result = partition_around_furthest(&mut points, 0, 1, pole, antipole, Side::Lower);
            assert_eq!(result, expected, "candidate {candidate}");
        }
    }

    #[test]
    fn three_way_partition_is_side_independent() {
        let pole = dvec2(0.0, 0.0);
        let antipole = dvec2(10.0, 0.0);
        let furthest = dvec2(5.0, -5.0);

        let candidates = [
            dvec2(1.0, -2.0), // pole side
            dvec2(9.0, -2.0), // antipole side
            dvec2(5.0, -1.0), // interior
            dvec2(2.0, -2.0), // on the pole edge
            dvec2(8.0, -2.0), // on the antipole edge
            dvec2(5.0, -5.0), // duplicate of the furthest point
        ];

        let partition_both = |points: Vec<DVec2>| {
            let last = points.len() - 1;
            let mut lower = points.clone();
            let mut upper = points;
            let lower_bounds =
                partition_around_furthest(&mut lower, 0, last, pole, antipole, Side::Lower);
            let upper_bounds =
                partition_around_furthest(&mut upper, 0, last, pole, antipole, Side::Upper);
            assert_eq!(lower_bounds, upper_bounds, "{lower:?}");
            assert_eq!(lower, upper);
        };

        // Lone candidates are always the element the cursors meet on.
        for candidate in candidates {
            partition_both(vec![candidate, furthest]);
        }

        // Every rotation of the mixed range leaves a different candidate for last.
        for shift in 0..candidates.len() {
            let mut points = candidates.to_vec();
            points.rotate_left(shift);
            points.push(furthest);
            partition_both(points);
        }
    }

    #[test]
    fn block_swap() {
        let mut points = numbered(8);
        swap_blocks(&mut points, 1, 3, 5);
        assert_eq!(labels(&points), vec![0, 5, 6, 3, 4, 1, 2, 7]);
    }

    #[test]
    fn move_away_preserves_block_order() {
        for here in 0..6 {
            for rest in here..=10 {
                for past in rest..=10 {
                    let mut points = numbered(10);
                    move_away(&mut points, here, rest, past);

                    let mut expected: Vec<usize> = (0..here).collect();
                    expected.extend(rest..past);
                    expected.extend(here..rest);
                    expected.extend(past..10);

                    assert_eq!(labels(&points), expected, "{here} {rest} {past}");
                }
            }
        }
    }
}
