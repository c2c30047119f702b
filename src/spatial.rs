//! Capability contract shared by the point indexes in this crate.

use crate::point::GridPoint;

/// A point store answering single nearest-neighbor queries.
///
/// Implemented by [`BucketGrid`](crate::BucketGrid) and
/// [`LinearScan`](crate::LinearScan) so either can be swapped in behind the
/// same code.
///
/// # Examples
/// ```
/// use bucketgrid::prelude::*;
///
/// fn closest<S: SpatialIndex<Point2>>(index: &mut S) -> Option<Point2> {
///     index.insert(Point2::new(1.0, 1.0));
///     index.insert(Point2::new(8.0, 8.0));
///     index.nearest_neighbor(&Point2::new(2.0, 2.0))
/// }
///
/// let mut grid = BucketGrid::with_bounds(5.0, 10.0).unwrap();
/// let mut scan = LinearScan::new();
/// assert_eq!(closest(&mut grid), closest(&mut scan));
/// ```
pub trait SpatialIndex<P: GridPoint + Clone> {
    /// Stores a point. Never fails.
    fn insert(&mut self, point: P);

    /// Returns a copy of the stored point closest to `reference`, or `None`
    /// if nothing is found.
    fn nearest_neighbor(&self, reference: &P) -> Option<P>;

    /// Number of stored points
    fn len(&self) -> usize;

    /// Whether no point has been stored
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
