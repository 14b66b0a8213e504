use glam::DVec2;
use thiserror::Error;

use crate::{
    alt_in_place::alt_in_place_quickhull,
    in_place::in_place_quickhull,
    predicates::{
        check_minimal_requirements, is_cw, lexicographic_cmp, orientation, DegenerateInput,
        Orientation,
    },
};

/// The in-place algorithm used to compute a [`ConvexHull2d`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum HullAlgorithm {
    /// Recursive hull finding with a three-way partition per step.
    /// See [`in_place_quickhull`].
    #[default]
    InPlace,
    /// Recursive chains with explicit block relocation of eliminated points.
    /// See [`alt_in_place_quickhull`].
    AltInPlace,
}

impl HullAlgorithm {
    /// Runs the algorithm on `points`, returning the end of the hull prefix.
    #[inline]
    pub fn run(self, points: &mut [DVec2]) -> usize {
        match self {
            HullAlgorithm::InPlace => in_place_quickhull(points),
            HullAlgorithm::AltInPlace => alt_in_place_quickhull(points),
        }
    }
}

/// An error returned during [`ConvexHull2d`] construction.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConvexHull2dError {
    /// The input has no two-dimensional convex hull.
    #[error("degenerate input: {0}")]
    DegenerateInput(#[from] DegenerateInput),
}

/// A 2D [convex hull] representing the smallest convex set containing
/// all input points in a given point set.
///
/// This can be thought of as a shrink wrapping of a 2D object.
///
/// [convex hull]: https://en.wikipedia.org/wiki/Convex_hull
///
/// # Example
///
/// ```
/// use inplace_quickhull::{ConvexHull2d, HullAlgorithm};
/// use glam::DVec2;
///
/// let points = vec![
///     DVec2::new(0.0, 0.0),
///     DVec2::new(1.0, 0.0),
///     DVec2::new(0.0, 1.0),
///     DVec2::new(1.0, 1.0),
///     DVec2::new(0.5, 0.5),
/// ];
///
/// // Create the convex hull.
/// let hull = ConvexHull2d::try_from_points(&points, HullAlgorithm::InPlace).unwrap();
///
/// // Get the points of the convex hull in counterclockwise order.
/// let points = hull.points();
///
/// assert_eq!(
///     points,
///     &[
///         // The hull starts at the lexicographically smallest point.
///         DVec2::new(0.0, 0.0),
///         DVec2::new(1.0, 0.0),
///         DVec2::new(1.0, 1.0),
///         DVec2::new(0.0, 1.0),
///     ],
/// );
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ConvexHull2d {
    points: Vec<DVec2>,
}

impl ConvexHull2d {
    /// Computes a [`ConvexHull2d`] for the given set of 2D points.
    ///
    /// This copies the points. To avoid the copy, consider using
    /// [`try_from_mut_points`](Self::try_from_mut_points).
    ///
    /// # Errors
    ///
    /// Returns [`ConvexHull2dError::DegenerateInput`] if there are fewer than three
    /// points or all points are collinear.
    #[inline]
    pub fn try_from_points(
        points: &[DVec2],
        algorithm: HullAlgorithm,
    ) -> Result<Self, ConvexHull2dError> {
        Self::try_from_mut_points(&mut points.to_vec(), algorithm)
    }

    /// Computes a [`ConvexHull2d`] for the given mutable set of 2D points.
    ///
    /// The input slice is reordered during hull construction; afterwards the hull
    /// vertices are at its front. Only the hull vertices are copied.
    ///
    /// # Errors
    ///
    /// Returns [`ConvexHull2dError::DegenerateInput`] if there are fewer than three
    /// points or all points are collinear.
    pub fn try_from_mut_points(
        points: &mut [DVec2],
        algorithm: HullAlgorithm,
    ) -> Result<Self, ConvexHull2dError> {
        check_minimal_requirements(points)?;

        let end = algorithm.run(points);
        let mut hull = points[..end].to_vec();
        order_counterclockwise(&mut hull);

        Ok(Self { points: hull })
    }

    /// Returns the points of the convex hull in counterclockwise order.
    ///
    /// This consumes the convex hull. If you want a reference to the points,
    /// consider using [`points_ref`](Self::points_ref) instead.
    #[inline]
    pub fn points(self) -> Vec<DVec2> {
        self.points
    }

    /// Returns a reference to the points of the convex hull in counterclockwise order.
    #[inline]
    pub fn points_ref(&self) -> &[DVec2] {
        &self.points
    }

    /// Computes the area of the convex hull.
    pub fn area(&self) -> f64 {
        let Some(&origin) = self.points.first() else {
            return 0.0;
        };

        // Fan triangulation around the first vertex.
        self.points
            .windows(2)
            .skip(1)
            .map(|edge| (edge[0] - origin).perp_dot(edge[1] - origin))
            .sum::<f64>()
            * 0.5
    }

    /// Returns `true` if `point` lies inside or on the boundary of the convex hull.
    pub fn contains_point(&self, point: DVec2) -> bool {
        let count = self.points.len();
        if count < 3 {
            return false;
        }
        (0..count).all(|i| !is_cw(self.points[i], self.points[(i + 1) % count], point))
    }
}

/// Sorts the vertices of a convex polygon into counterclockwise order,
/// starting with the lexicographically smallest vertex.
///
/// `hull` must hold distinct points in convex position, such as the prefix produced by
/// [`in_place_quickhull`] or [`alt_in_place_quickhull`].
pub fn order_counterclockwise(hull: &mut [DVec2]) {
    let Some(min_index) = hull
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| lexicographic_cmp(a, b))
        .map(|(i, _)| i)
    else {
        return;
    };

    hull.swap(0, min_index);
    let (pivot, rest) = hull.split_at_mut(1);
    let pivot = pivot[0];

    // Seen from the smallest vertex, the other vertices span less than a half-turn,
    // so the orientation test is a total order on them.
    rest.sort_unstable_by(|a, b| match orientation(pivot, *a, *b) {
        Orientation::Counterclockwise => core::cmp::Ordering::Less,
        Orientation::Clockwise => core::cmp::Ordering::Greater,
        Orientation::Collinear => (*a - pivot)
            .length_squared()
            .total_cmp(&(*b - pivot).length_squared()),
    });
}
