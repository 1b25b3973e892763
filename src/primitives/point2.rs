//! 2D point type.

use super::Vec2;
use num_traits::Float;
use std::hash::{Hash, Hasher};
use std::ops::Sub;

/// A 2D point.
///
/// Generic over floating-point types (`f32` or `f64`). Equality is exact
/// coordinate equality with no epsilon, and the hash agrees with it, so points
/// can be used directly as set or map keys.
///
/// # Example
///
/// ```
/// use triangulator::Point2;
/// use std::collections::HashSet;
///
/// let a: Point2<f64> = Point2::new(1.0, 2.0);
/// let b = Point2::new(1.0, 2.0);
///
/// let set: HashSet<_> = [a, b].into_iter().collect();
/// assert_eq!(set.len(), 1);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Point2<F> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Point2<F> {
    /// Creates a new point.
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    /// Returns the squared Euclidean distance to another point.
    #[inline]
    pub fn distance_squared(self, other: Self) -> F {
        (self - other).magnitude_squared()
    }

    /// Returns the Euclidean distance to another point.
    #[inline]
    pub fn distance(self, other: Self) -> F {
        self.distance_squared(other).sqrt()
    }
}

impl<F: PartialEq> PartialEq for Point2<F> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

// NaN coordinates are never equal, not even to themselves.
impl<F: Float> Eq for Point2<F> {}

impl<F: Float> Hash for Point2<F> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_coordinate(self.x, state);
        hash_coordinate(self.y, state);
    }
}

/// Hashes a coordinate consistently with `==`: `-0.0` and `0.0` collapse.
fn hash_coordinate<F: Float, H: Hasher>(value: F, state: &mut H) {
    let canonical = if value == F::zero() { F::zero() } else { value };
    canonical.integer_decode().hash(state);
}

impl<F: Float> Sub for Point2<F> {
    type Output = Vec2<F>;

    #[inline]
    fn sub(self, other: Self) -> Vec2<F> {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

impl<F: Float> From<(F, F)> for Point2<F> {
    #[inline]
    fn from((x, y): (F, F)) -> Self {
        Self::new(x, y)
    }
}
