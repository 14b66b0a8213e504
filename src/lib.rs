//! # In-place Quickhull
//!
//! Planar convex hulls computed by permuting the input slice itself, without
//! allocating storage proportional to the number of points. This makes it possible
//! to compute hulls of hundreds of millions of points within a fixed memory budget.
//!
//! Two algorithms share the same contract: given `&mut [DVec2]`, they move the hull
//! vertices to the front of the slice and return the length of that prefix.
//!
//! - [`in_place_quickhull`] recurses on the regions outside the two new hull edges,
//!   partitioning each region three ways and leaving interior points behind.
//! - [`alt_in_place_quickhull`] follows the hull as chains, relocating eliminated points
//!   out of the way so both unresolved regions stay contiguous. Its vertices come out in
//!   counterclockwise order.
//!
//! If no hull exists (fewer than three points, or all points collinear), both return `0`.
//! [`ConvexHull2d`] wraps either algorithm and returns the vertices in counterclockwise order.
//!
//! ## References
//!
//! - C. Bradford Barber et al. 1996. [The Quickhull Algorithm for Convex Hulls](https://www.cise.ufl.edu/~ungor/courses/fall06/papers/QuickHull.pdf) (the original paper)

#![warn(missing_docs)]

mod alt_in_place;
mod dim2;
mod fixed_hasher;
mod in_place;
mod predicates;
mod primitives;

#[cfg(test)]
mod testing;

pub use alt_in_place::alt_in_place_quickhull;
pub use dim2::{order_counterclockwise, ConvexHull2d, ConvexHull2dError, HullAlgorithm};
pub use fixed_hasher::contains_duplicates;
pub use in_place::in_place_quickhull;
pub use predicates::{
    check_minimal_requirements, lexicographic_cmp, orientation, sequence_meets_minimal_requirements,
    squared_distance_to_segment, DegenerateInput, Orientation,
};
