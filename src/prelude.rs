//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types from the crate.
//! Users can import everything they need with:
//!
//! ```
//! use bucketgrid::prelude::*;
//! ```

pub use crate::{
    BandScan, BucketGrid, GridConfig, GridConfigError, GridPoint, LinearScan, Nearest, Point2,
    SpatialIndex, Termination,
};
