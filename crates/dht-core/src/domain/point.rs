//! Metric-space primitives.
//!
//! Peer and content identifiers map to a [`Point`]; the [`Distance`] between
//! two points decides which peers are responsible for which content.

use std::cmp::Ordering;
use std::fmt::Debug;

/// Scalar separation between two [`Point`]s.
///
/// Distances form a strict total order. [`Distance::compare`] always agrees
/// with [`Ord::cmp`].
pub trait Distance: Ord + Clone + Debug {
    /// Compare the numeric value of this distance with another.
    ///
    /// `Less`, `Equal` and `Greater` stand for -1, 0 and +1.
    fn compare(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

/// A location in the DHT key space.
///
/// `equal(a, b)` holds iff `distance(a, b)` is the zero element of the metric.
pub trait Point: Clone + Debug {
    /// The metric this point is measured with.
    type Distance: Distance;

    /// Separation between this point and `other`.
    fn distance(&self, other: &Self) -> Self::Distance;

    /// Whether both points occupy the same position.
    fn equal(&self, other: &Self) -> bool;
}
