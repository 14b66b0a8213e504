//! Point clouds and hull checks shared by the unit tests.

use glam::{dvec2, DVec2};
use rand::prelude::{Rng, SeedableRng};

use crate::{
    contains_duplicates,
    dim2::order_counterclockwise,
    predicates::{lexicographic_cmp, orientation, Orientation},
};

/// Points with integer coordinates in `[-extent, extent]`.
///
/// The small coordinate range produces plenty of duplicates, collinear points and
/// distance ties, while keeping every predicate exact.
pub fn integer_cloud(seed: u64, count: usize, extent: i32) -> Vec<DVec2> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            dvec2(
                rng.random_range(-extent..=extent) as f64,
                rng.random_range(-extent..=extent) as f64,
            )
        })
        .collect()
}

/// Points distributed uniformly in the unit square.
pub fn uniform_cloud(seed: u64, count: usize) -> Vec<DVec2> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| dvec2(rng.random::<f64>(), rng.random::<f64>()))
        .collect()
}

/// The hull vertices sorted lexicographically, for comparisons that ignore order.
pub fn vertex_set(hull: &[DVec2]) -> Vec<DVec2> {
    let mut vertices = hull.to_vec();
    vertices.sort_unstable_by(lexicographic_cmp);
    vertices
}

/// Asserts that `hull` is exactly the set of vertices of the convex hull of `input`.
pub fn assert_valid_hull(input: &[DVec2], hull: &[DVec2]) {
    assert!(hull.len() >= 3, "hull has only {} vertices", hull.len());
    assert!(!contains_duplicates(hull), "hull contains duplicates");
    assert!(hull.iter().all(|p| input.contains(p)), "hull vertex not in input");

    let mut ordered = hull.to_vec();
    order_counterclockwise(&mut ordered);
    let count = ordered.len();

    // Strict convexity: every vertex is a proper corner.
    for i in 0..count {
        let (a, b, c) = (ordered[i], ordered[(i + 1) % count], ordered[(i + 2) % count]);
        assert_eq!(
            orientation(a, b, c),
            Orientation::Counterclockwise,
            "vertices {a}, {b}, {c} are not a convex corner"
        );
    }

    // Completeness: no input point lies outside.
    for p in input {
        for i in 0..count {
            let (a, b) = (ordered[i], ordered[(i + 1) % count]);
            assert_ne!(
                orientation(a, b, *p),
                Orientation::Clockwise,
                "point {p} lies outside the edge {a}, {b}"
            );
        }
    }
}
