//! Coordinate quantization: raw coordinate -> bucket index along one axis.

/// Maps coordinates to bucket indices for a fixed bucket width.
///
/// [`quantize`](Self::quantize) floors `coord / bucket_width` and does not
/// clamp; [`clamp`](Self::clamp) pulls an index into `[0, last]` where
/// `last = floor(domain_max / bucket_width)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quantizer {
    bucket_width: f64,
    last: usize,
}

impl Quantizer {
    /// Creates a quantizer for a grid of `side` buckets per axis.
    ///
    /// `bucket_width` must already be validated (finite, positive) and
    /// `side` must be at least 1.
    #[must_use]
    pub const fn new(bucket_width: f64, side: usize) -> Self {
        Self {
            bucket_width,
            last: side.saturating_sub(1),
        }
    }

    /// Unclamped bucket index of `coord`.
    ///
    /// NaN maps to 0 and infinities saturate to `i64::MIN`/`i64::MAX`.
    #[inline]
    #[must_use]
    #[expect(clippy::cast_possible_truncation, reason = "float to int casts saturate")]
    pub fn quantize(&self, coord: f64) -> i64 {
        (coord / self.bucket_width).floor() as i64
    }

    /// Clamps an index into the grid.
    #[inline]
    #[must_use]
    #[expect(clippy::cast_possible_truncation, reason = "value is within [0, last]")]
    pub fn clamp(&self, index: i64) -> usize {
        if index <= 0 {
            0
        } else if index as u64 >= self.last as u64 {
            self.last
        } else {
            index as usize
        }
    }

    /// Quantizes and clamps in one step
    #[inline]
    #[must_use]
    pub fn bucket_of(&self, coord: f64) -> usize {
        self.clamp(self.quantize(coord))
    }

    /// Index of the last bucket along an axis
    #[inline]
    #[must_use]
    pub const fn last(&self) -> usize {
        self.last
    }

    /// Lower coordinate edge of bucket `index`
    #[inline]
    #[must_use]
    pub fn lower_edge(&self, index: i64) -> f64 {
        index as f64 * self.bucket_width
    }
}
