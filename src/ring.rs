//! Square search rings around a home bucket.
//!
//! A ring at radius `r` is the set of buckets whose Chebyshev distance (in
//! bucket units) from the home bucket is exactly `r`. Bounds are kept as
//! signed integers because a ring freely extends past the grid edges; only
//! the in-grid part is ever visited.

use crate::config::BandScan;
use crate::quantize::Quantizer;

/// Footprint of the current ring: `[min_x, max_x] x [min_y, max_y]`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Ring {
    pub(crate) min_x: i64,
    pub(crate) max_x: i64,
    pub(crate) min_y: i64,
    pub(crate) max_y: i64,
}

#[inline]
#[expect(clippy::cast_possible_truncation, reason = "callers only pass in-grid indices")]
fn to_index(v: i64) -> usize {
    v as usize
}

impl Ring {
    /// Radius-0 ring on a single bucket
    pub(crate) const fn around(home_x: usize, home_y: usize) -> Self {
        Self {
            min_x: home_x as i64,
            max_x: home_x as i64,
            min_y: home_y as i64,
            max_y: home_y as i64,
        }
    }

    /// Grows the ring by one bucket in all four directions
    pub(crate) const fn expand(&mut self) {
        self.min_x -= 1;
        self.max_x += 1;
        self.min_y -= 1;
        self.max_y += 1;
    }

    /// Whether every bucket of a `0..=last` grid lies inside the footprint
    pub(crate) const fn covers(&self, last: usize) -> bool {
        let last = last as i64;
        self.min_x <= 0 && self.min_y <= 0 && self.max_x >= last && self.max_y >= last
    }

    /// Visits the in-grid buckets of this ring in scan order.
    ///
    /// Scan order is the top band right to left, then the bottom band right
    /// to left, then (perimeter scan only) the right column top to bottom
    /// and the left column top to bottom, corners excluded.
    pub(crate) fn for_each_bucket<F: FnMut(usize, usize)>(
        &self,
        last: usize,
        band_scan: BandScan,
        mut f: F,
    ) {
        let last = last as i64;
        match band_scan {
            BandScan::Perimeter => {
                let x_lo = self.min_x.max(0);
                let x_hi = self.max_x.min(last);

                if self.max_y <= last {
                    for x in (x_lo..=x_hi).rev() {
                        f(to_index(x), to_index(self.max_y));
                    }
                }
                if self.min_y >= 0 && self.min_y != self.max_y {
                    for x in (x_lo..=x_hi).rev() {
                        f(to_index(x), to_index(self.min_y));
                    }
                }

                let y_lo = (self.min_y + 1).max(0);
                let y_hi = (self.max_y - 1).min(last);
                if self.max_x <= last {
                    for y in (y_lo..=y_hi).rev() {
                        f(to_index(self.max_x), to_index(y));
                    }
                }
                if self.min_x >= 0 && self.min_x != self.max_x {
                    for y in (y_lo..=y_hi).rev() {
                        f(to_index(self.min_x), to_index(y));
                    }
                }
            }
            BandScan::Horizontal => {
                let x_lo = self.min_x.clamp(0, last);
                let x_hi = self.max_x.clamp(0, last);
                let top = self.max_y.clamp(0, last);
                let bottom = self.min_y.clamp(0, last);

                for x in (x_lo..=x_hi).rev() {
                    f(to_index(x), to_index(top));
                }
                if bottom != top {
                    for x in (x_lo..=x_hi).rev() {
                        f(to_index(x), to_index(bottom));
                    }
                }
            }
        }
    }

    /// Smallest possible distance from `(qx, qy)` to a point stored in any
    /// bucket outside this footprint, or infinity if the footprint covers
    /// the grid.
    ///
    /// Boundary buckets also hold clamped out-of-domain points, which lie
    /// even further out, so the bound still holds for them.
    pub(crate) fn outside_bound(&self, qx: f64, qy: f64, quantizer: &Quantizer) -> f64 {
        let last = quantizer.last() as i64;
        let mut bound = f64::INFINITY;

        if self.max_x < last {
            bound = bound.min(quantizer.lower_edge(self.max_x + 1) - qx);
        }
        if self.min_x > 0 {
            bound = bound.min(qx - quantizer.lower_edge(self.min_x));
        }
        if self.max_y < last {
            bound = bound.min(quantizer.lower_edge(self.max_y + 1) - qy);
        }
        if self.min_y > 0 {
            bound = bound.min(qy - quantizer.lower_edge(self.min_y));
        }
        bound.max(0.0)
    }
}
