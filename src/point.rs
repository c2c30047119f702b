//! Point contract used by the grid and the built-in point types.
//!
//! The grid only needs two things from a point: its coordinate along an axis
//! and a distance to another point of the same type. Anything implementing
//! [`GridPoint`] can be stored.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A point that can be stored in a [`BucketGrid`](crate::BucketGrid).
///
/// `distance` is expected to be symmetric, non-negative and zero for equal
/// points. Exact search ([`Termination::Exact`](crate::Termination::Exact))
/// additionally needs the distance to be at least the absolute coordinate
/// difference along each axis, which holds for Euclidean, Manhattan and
/// Chebyshev metrics.
pub trait GridPoint {
    /// Coordinate along `axis` (0 = x, 1 = y).
    ///
    /// Other axes are a caller bug; the built-in points assert on them in
    /// debug builds.
    fn coord(&self, axis: usize) -> f64;

    /// Distance to another point.
    fn distance(&self, other: &Self) -> f64;

    /// Shorthand for `coord(0)`
    #[inline]
    fn x(&self) -> f64 {
        self.coord(0)
    }

    /// Shorthand for `coord(1)`
    #[inline]
    fn y(&self) -> f64 {
        self.coord(1)
    }
}

/// Euclidean distance between two coordinate pairs
#[inline]
fn euclidean(ax: f64, ay: f64, bx: f64, by: f64) -> f64 {
    let dx = ax - bx;
    let dy = ay - by;
    (dx * dx + dy * dy).sqrt()
}

/// 2D point with `f64` coordinates and Euclidean distance.
///
/// # Examples
/// ```
/// use bucketgrid::{GridPoint, Point2};
///
/// let a = Point2::new(0.0, 0.0);
/// let b = Point2::new(3.0, 4.0);
/// assert_eq!(a.distance(&b), 5.0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point2 {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
}

impl Point2 {
    /// Creates a new point
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl GridPoint for Point2 {
    #[inline]
    fn coord(&self, axis: usize) -> f64 {
        debug_assert!(axis < 2, "axis {axis} out of range for a 2D point");
        match axis {
            0 => self.x,
            _ => self.y,
        }
    }

    #[inline]
    fn distance(&self, other: &Self) -> f64 {
        euclidean(self.x, self.y, other.x, other.y)
    }
}

impl From<(f64, f64)> for Point2 {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<[f64; 2]> for Point2 {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl GridPoint for [f64; 2] {
    #[inline]
    fn coord(&self, axis: usize) -> f64 {
        debug_assert!(axis < 2, "axis {axis} out of range for a 2D point");
        self[axis.min(1)]
    }

    #[inline]
    fn distance(&self, other: &Self) -> f64 {
        euclidean(self[0], self[1], other[0], other[1])
    }
}

impl GridPoint for (f64, f64) {
    #[inline]
    fn coord(&self, axis: usize) -> f64 {
        debug_assert!(axis < 2, "axis {axis} out of range for a 2D point");
        match axis {
            0 => self.0,
            _ => self.1,
        }
    }

    #[inline]
    fn distance(&self, other: &Self) -> f64 {
        euclidean(self.0, self.1, other.0, other.1)
    }
}

// Integer coordinates are widened to f64 before any arithmetic so distances
// between far-apart points cannot overflow.
impl GridPoint for [i32; 2] {
    #[inline]
    fn coord(&self, axis: usize) -> f64 {
        debug_assert!(axis < 2, "axis {axis} out of range for a 2D point");
        f64::from(self[axis.min(1)])
    }

    #[inline]
    fn distance(&self, other: &Self) -> f64 {
        euclidean(
            f64::from(self[0]),
            f64::from(self[1]),
            f64::from(other[0]),
            f64::from(other[1]),
        )
    }
}
