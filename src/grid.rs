//! Uniform bucket grid with ring-expansion nearest-neighbor search.
//!
//! The coordinate domain `[0, domain_max]` is split into square buckets of
//! `bucket_width`. Points are appended to the bucket their coordinates
//! quantize into; anything outside the domain lands in the closest boundary
//! bucket. A query starts at its own bucket and scans square rings of
//! buckets outward until it has a candidate, then finishes according to the
//! configured [`Termination`].

use crate::config::{GridConfig, GridConfigError, Termination};
use crate::point::GridPoint;
use crate::quantize::Quantizer;
use crate::ring::Ring;
use crate::spatial::SpatialIndex;

/// Result of a [`BucketGrid::nearest`] query
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Nearest<'a, P> {
    /// Closest stored point found
    pub point: &'a P,
    /// Distance from the query to `point`
    pub distance: f64,
    /// Number of rings scanned, the home bucket included
    pub rings: usize,
}

/// Fixed-resolution grid of point buckets.
///
/// Memory is allocated once at construction: `side * side` empty buckets
/// where `side = floor(domain_max / bucket_width) + 1`. Buckets live in one
/// flat row-major vector, bucket `(x, y)` at `y * side + x`.
///
/// # Examples
/// ```
/// use bucketgrid::{BucketGrid, Point2};
///
/// let mut grid = BucketGrid::with_bounds(10.0, 1000.0).unwrap();
/// grid.insert(Point2::new(5.0, 5.0));
/// grid.insert(Point2::new(15.0, 5.0));
/// grid.insert(Point2::new(995.0, 995.0));
///
/// let found = grid.nearest(&Point2::new(6.0, 6.0)).unwrap();
/// assert_eq!(*found.point, Point2::new(5.0, 5.0));
///
/// // out-of-domain queries start from the boundary bucket
/// let found = grid.nearest(&Point2::new(1001.0, 1001.0)).unwrap();
/// assert_eq!(*found.point, Point2::new(995.0, 995.0));
/// ```
#[derive(Clone, Debug)]
pub struct BucketGrid<P> {
    /// Row-major buckets, each in insertion order
    buckets: Vec<Vec<P>>,
    /// Buckets per axis
    side: usize,
    quantizer: Quantizer,
    config: GridConfig,
    /// Number of stored points
    num_items: usize,
}

impl<P: GridPoint> BucketGrid<P> {
    /// Creates an empty grid from a configuration
    ///
    /// # Errors
    /// Returns [`GridConfigError`] if the configuration does not validate,
    /// or [`GridConfigError::GridTooLarge`] if the bucket array cannot be
    /// allocated.
    pub fn new(config: GridConfig) -> Result<Self, GridConfigError> {
        let side = config.validate()?;
        let num_buckets = side * side;
        let mut buckets = Vec::new();
        buckets
            .try_reserve_exact(num_buckets)
            .map_err(|_| GridConfigError::GridTooLarge { side })?;
        buckets.resize_with(num_buckets, Vec::new);

        log::debug!(
            "allocated {side}x{side} bucket grid (bucket width {}, domain max {})",
            config.bucket_width,
            config.domain_max
        );

        Ok(Self {
            buckets,
            side,
            quantizer: Quantizer::new(config.bucket_width, side),
            config,
            num_items: 0,
        })
    }

    /// Creates an empty grid with default search policies
    ///
    /// # Errors
    /// Returns [`GridConfigError`] if `bucket_width` is not positive and
    /// finite or `domain_max` is negative or not finite.
    pub fn with_bounds(bucket_width: f64, domain_max: f64) -> Result<Self, GridConfigError> {
        Self::new(GridConfig::new(bucket_width, domain_max))
    }

    /// Configuration the grid was built with
    pub const fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Quantizer mapping coordinates of this grid to bucket indices
    pub const fn quantizer(&self) -> &Quantizer {
        &self.quantizer
    }

    /// Number of buckets along each axis
    pub const fn side(&self) -> usize {
        self.side
    }

    /// Number of stored points
    pub const fn len(&self) -> usize {
        self.num_items
    }

    /// Whether no point has been stored
    pub const fn is_empty(&self) -> bool {
        self.num_items == 0
    }

    /// Bucket coordinates a point is (or would be) stored in
    pub fn bucket_of(&self, point: &P) -> (usize, usize) {
        (
            self.quantizer.bucket_of(point.x()),
            self.quantizer.bucket_of(point.y()),
        )
    }

    /// Points stored in bucket `(x, y)`, in insertion order
    pub fn bucket(&self, x: usize, y: usize) -> Option<&[P]> {
        if x >= self.side || y >= self.side {
            return None;
        }
        Some(self.buckets[y * self.side + x].as_slice())
    }

    /// Iterates all stored points, bucket by bucket
    pub fn iter(&self) -> impl Iterator<Item = &P> {
        self.buckets.iter().flatten()
    }

    /// Stores a point in the bucket its clamped coordinates select
    pub fn insert(&mut self, point: P) {
        let (x, y) = self.bucket_of(&point);
        self.buckets[y * self.side + x].push(point);
        self.num_items += 1;
    }

    /// Finds the stored point closest to `reference`.
    ///
    /// Rings grow around the home bucket until a candidate turns up. Among
    /// points at equal distance the first one scanned wins. Returns `None`
    /// if the grid is empty or the configured band scan never reaches a
    /// stored point.
    pub fn nearest(&self, reference: &P) -> Option<Nearest<'_, P>> {
        if self.num_items == 0 {
            return None;
        }

        let last = self.quantizer.last();
        let (home_x, home_y) = self.bucket_of(reference);
        let mut ring = Ring::around(home_x, home_y);
        let mut best = None;
        let mut rings = 0;

        loop {
            self.scan_ring(&ring, reference, &mut best);
            rings += 1;

            if best.is_some() {
                match self.config.termination {
                    Termination::OneExtraRing => {
                        if !ring.covers(last) {
                            ring.expand();
                            self.scan_ring(&ring, reference, &mut best);
                            rings += 1;
                        }
                    }
                    Termination::Exact => {
                        let (qx, qy) = (reference.x(), reference.y());
                        while !ring.covers(last)
                            && ring.outside_bound(qx, qy, &self.quantizer)
                                < best.map_or(f64::INFINITY, |(_, d)| d)
                        {
                            ring.expand();
                            self.scan_ring(&ring, reference, &mut best);
                            rings += 1;
                        }
                    }
                }
                break;
            }

            if ring.covers(last) {
                break;
            }
            ring.expand();
        }

        log::trace!(
            "nearest from bucket ({home_x}, {home_y}): {} after {rings} rings",
            if best.is_some() { "found" } else { "nothing" }
        );

        best.map(|(point, distance)| Nearest { point, distance, rings })
    }

    /// Folds every point of the ring's in-grid buckets into `best`
    fn scan_ring<'a>(&'a self, ring: &Ring, reference: &P, best: &mut Option<(&'a P, f64)>) {
        let buckets: &'a [Vec<P>] = &self.buckets;
        let side = self.side;
        ring.for_each_bucket(self.quantizer.last(), self.config.band_scan, move |x, y| {
            for point in &buckets[y * side + x] {
                let distance = point.distance(reference);
                if best.is_none_or(|(_, min_distance)| distance < min_distance) {
                    *best = Some((point, distance));
                }
            }
        });
    }
}

impl<P: GridPoint> Extend<P> for BucketGrid<P> {
    fn extend<I: IntoIterator<Item = P>>(&mut self, iter: I) {
        for point in iter {
            self.insert(point);
        }
    }
}

impl<P: GridPoint + Clone> SpatialIndex<P> for BucketGrid<P> {
    fn insert(&mut self, point: P) {
        Self::insert(self, point);
    }

    fn nearest_neighbor(&self, reference: &P) -> Option<P> {
        self.nearest(reference).map(|found| found.point.clone())
    }

    fn len(&self) -> usize {
        self.num_items
    }
}
