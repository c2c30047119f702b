//! Grid configuration and its validation.

use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default width of a bucket along each axis
pub const DEFAULT_BUCKET_WIDTH: f64 = 10.0;
/// Default upper bound of the coordinate domain
pub const DEFAULT_DOMAIN_MAX: f64 = 1000.0;

/// Which buckets of a ring get scanned
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[non_exhaustive]
pub enum BandScan {
    /// Every in-grid bucket on the ring perimeter, each exactly once.
    #[default]
    Perimeter,
    /// Only the top and bottom bands of each ring, with ring bounds clamped
    /// to the grid. Points directly left or right of the home bucket can be
    /// missed. Kept for reproducing results of older indexes.
    Horizontal,
}

/// When the ring search stops after finding its first candidate
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[non_exhaustive]
pub enum Termination {
    /// Scan exactly one more ring after the first hit.
    #[default]
    OneExtraRing,
    /// Keep expanding until no unscanned bucket can hold a closer point.
    Exact,
}

/// Errors reported when a [`GridConfig`] is rejected
#[derive(Clone, Debug, Error, PartialEq)]
#[non_exhaustive]
pub enum GridConfigError {
    /// Bucket width is zero, negative or not finite
    #[error("bucket width must be finite and positive, got {0}")]
    InvalidBucketWidth(f64),
    /// Domain bound is negative or not finite
    #[error("domain max must be finite and non-negative, got {0}")]
    InvalidDomainMax(f64),
    /// The bucket array would not fit in memory
    #[error("grid of {side}x{side} buckets is too large")]
    GridTooLarge {
        /// Buckets per side the configuration asked for
        side: usize,
    },
}

/// Construction-time parameters of a [`BucketGrid`](crate::BucketGrid).
///
/// Coordinates in `[0, domain_max]` map to distinct buckets of width
/// `bucket_width`; everything outside aliases to the boundary buckets.
///
/// # Examples
/// ```
/// use bucketgrid::{BandScan, GridConfig, Termination};
///
/// let config = GridConfig::new(25.0, 500.0)
///     .with_band_scan(BandScan::Perimeter)
///     .with_termination(Termination::Exact);
/// assert_eq!(config.validate().unwrap(), 21);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GridConfig {
    /// Width of a bucket along each axis
    pub bucket_width: f64,
    /// Largest coordinate that still maps to its own bucket
    pub domain_max: f64,
    /// Which buckets of each ring are scanned
    #[cfg_attr(feature = "serde", serde(default))]
    pub band_scan: BandScan,
    /// When the search stops after the first candidate
    #[cfg_attr(feature = "serde", serde(default))]
    pub termination: Termination,
}

impl GridConfig {
    /// Creates a configuration with the default scan and termination policies
    #[must_use]
    pub const fn new(bucket_width: f64, domain_max: f64) -> Self {
        Self {
            bucket_width,
            domain_max,
            band_scan: BandScan::Perimeter,
            termination: Termination::OneExtraRing,
        }
    }

    /// Sets the band scan policy
    #[must_use]
    pub const fn with_band_scan(mut self, band_scan: BandScan) -> Self {
        self.band_scan = band_scan;
        self
    }

    /// Sets the termination policy
    #[must_use]
    pub const fn with_termination(mut self, termination: Termination) -> Self {
        self.termination = termination;
        self
    }

    /// Checks the configuration and returns the number of buckets per side
    ///
    /// # Errors
    /// Returns [`GridConfigError`] if the bucket width is not a positive
    /// finite number, the domain bound is negative or not finite, or the
    /// `side * side` bucket array could never be allocated.
    pub fn validate(&self) -> Result<usize, GridConfigError> {
        if !(self.bucket_width.is_finite() && self.bucket_width > 0.0) {
            return Err(GridConfigError::InvalidBucketWidth(self.bucket_width));
        }
        if !(self.domain_max.is_finite() && self.domain_max >= 0.0) {
            return Err(GridConfigError::InvalidDomainMax(self.domain_max));
        }

        let last = (self.domain_max / self.bucket_width).floor();
        // f64 -> usize saturates, so anything past usize::MAX lands on MAX
        #[expect(clippy::cast_possible_truncation, reason = "saturating cast, checked below")]
        let side = (last as usize).saturating_add(1);
        let too_large = side
            .checked_mul(side)
            .and_then(|buckets| buckets.checked_mul(size_of::<Vec<u8>>()))
            .is_none_or(|bytes| bytes > isize::MAX as usize);
        if last >= usize::MAX as f64 || too_large {
            return Err(GridConfigError::GridTooLarge { side });
        }
        Ok(side)
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BUCKET_WIDTH, DEFAULT_DOMAIN_MAX)
    }
}
