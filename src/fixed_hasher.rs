//! Fast, deterministic hashing of planar points.

use core::hash::BuildHasher;
use foldhash::fast::{FixedState, FoldHasher};
use glam::DVec2;
use hashbrown::HashSet;

/// For when you want a deterministic hasher.
///
/// Seed was randomly generated with a fair dice roll. Guaranteed to be random:
/// <https://github.com/bevyengine/bevy/pull/1268/files#r560918426>
const FIXED_HASHER: FixedState =
    FixedState::with_seed(0b1001010111101110000001001100010000000011001001101011001001111000);

/// Deterministic hasher based upon a random but fixed state.
#[derive(Copy, Clone, Default, Debug)]
pub(crate) struct FixedHasher;
impl BuildHasher for FixedHasher {
    type Hasher = FoldHasher<'static>;

    #[inline]
    fn build_hasher(&self) -> Self::Hasher {
        FIXED_HASHER.build_hasher()
    }
}

/// A hashable key identifying a point by value.
///
/// Two points have equal keys exactly when they compare equal, so `-0.0` is folded into `0.0`.
/// NaN coordinates are not supported.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct PointKey([u64; 2]);

impl From<DVec2> for PointKey {
    #[inline]
    fn from(point: DVec2) -> Self {
        // Adding zero turns `-0.0` into `0.0` and leaves every other value unchanged.
        PointKey([(point.x + 0.0).to_bits(), (point.y + 0.0).to_bits()])
    }
}

/// A set of points keyed by value.
pub(crate) type PointSet = HashSet<PointKey, FixedHasher>;

/// Returns `true` if some point occurs more than once in `points`.
pub fn contains_duplicates(points: &[DVec2]) -> bool {
    let mut seen = PointSet::with_capacity_and_hasher(points.len(), FixedHasher);
    points.iter().any(|p| !seen.insert(PointKey::from(*p)))
}
