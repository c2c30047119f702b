//! # bucketgrid - Uniform Grid Spatial Index
//!
//! A Rust library providing a fixed-resolution bucket grid for 2D points with
//! ring-expansion nearest-neighbor search.
//!
//! ## Features
//!
//! - **Constant-time inserts**: a point goes straight into the bucket its
//!   coordinates quantize into
//! - **Ring-Expansion Search**: queries scan square rings of buckets outward
//!   from the query's own bucket, so dense data is answered locally
//! - **Bounded domain**: coordinates outside `[0, domain_max]` are clamped to
//!   the boundary buckets instead of rejected
//! - **Pluggable points**: anything implementing [`GridPoint`] can be stored
//!
//! ## Quick Start
//!
//! ```rust
//! use bucketgrid::prelude::*;
//!
//! // 101 x 101 buckets of width 10 covering [0, 1000]
//! let mut grid = BucketGrid::with_bounds(10.0, 1000.0).unwrap();
//!
//! grid.insert(Point2::new(5.0, 5.0));
//! grid.insert(Point2::new(15.0, 5.0));
//! grid.insert(Point2::new(995.0, 995.0));
//!
//! let nearest = grid.nearest_neighbor(&Point2::new(6.0, 6.0));
//! assert_eq!(nearest, Some(Point2::new(5.0, 5.0)));
//!
//! // An empty grid answers None, not a placeholder point
//! let empty: BucketGrid<Point2> = BucketGrid::with_bounds(10.0, 1000.0).unwrap();
//! assert_eq!(empty.nearest_neighbor(&Point2::new(6.0, 6.0)), None);
//! ```
//!
//! ## How It Works
//!
//! The grid holds `side * side` buckets, `side = floor(domain_max / bucket_width) + 1`.
//! A query starts at its home bucket and scans growing square rings until a
//! point turns up. Because a square ring does not match a Euclidean circle,
//! one more ring is scanned after the first hit
//! ([`Termination::OneExtraRing`]). [`Termination::Exact`] instead keeps
//! expanding until no unscanned bucket can hold a closer point.
//!
//! Bucket width is the main tuning knob: small buckets suit dense data, wide
//! buckets suit sparse data.

pub mod config;
pub mod grid;
pub mod linear;
pub mod point;
pub mod prelude;
pub mod quantize;
mod ring;
pub mod spatial;

pub use config::{BandScan, GridConfig, GridConfigError, Termination};
pub use grid::{BucketGrid, Nearest};
pub use linear::LinearScan;
pub use point::{GridPoint, Point2};
pub use quantize::Quantizer;
pub use spatial::SpatialIndex;
