//! Brute-force reference index.
//!
//! Keeps every point in one vector and compares the query against all of
//! them. Used as the ground truth when checking [`BucketGrid`](crate::BucketGrid)
//! results and as the baseline in benchmarks.

use crate::point::GridPoint;
use crate::spatial::SpatialIndex;

/// Flat point list answering nearest queries by linear scan.
///
/// # Examples
/// ```
/// use bucketgrid::{LinearScan, Point2, SpatialIndex};
///
/// let mut scan = LinearScan::new();
/// scan.insert(Point2::new(0.0, 0.0));
/// scan.insert(Point2::new(10.0, 0.0));
/// assert_eq!(scan.nearest_neighbor(&Point2::new(7.0, 1.0)), Some(Point2::new(10.0, 0.0)));
/// ```
#[derive(Clone, Debug, Default)]
pub struct LinearScan<P> {
    points: Vec<P>,
}

impl<P: GridPoint> LinearScan<P> {
    /// Creates an empty index
    pub const fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Creates an empty index with room for `capacity` points
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    /// All stored points in insertion order
    pub fn points(&self) -> &[P] {
        &self.points
    }

    /// Closest point and its distance. Ties go to the earliest inserted point.
    pub fn nearest(&self, reference: &P) -> Option<(&P, f64)> {
        let mut best: Option<(&P, f64)> = None;
        for point in &self.points {
            let distance = point.distance(reference);
            if best.is_none_or(|(_, min_distance)| distance < min_distance) {
                best = Some((point, distance));
            }
        }
        best
    }
}

impl<P: GridPoint> Extend<P> for LinearScan<P> {
    fn extend<I: IntoIterator<Item = P>>(&mut self, iter: I) {
        self.points.extend(iter);
    }
}

impl<P: GridPoint> FromIterator<P> for LinearScan<P> {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl<P: GridPoint + Clone> SpatialIndex<P> for LinearScan<P> {
    fn insert(&mut self, point: P) {
        self.points.push(point);
    }

    fn nearest_neighbor(&self, reference: &P) -> Option<P> {
        self.nearest(reference).map(|(point, _)| point.clone())
    }

    fn len(&self) -> usize {
        self.points.len()
    }
}
