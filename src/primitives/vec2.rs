//! Offset between two points.

use num_traits::Float;

/// A 2D offset, produced by subtracting two [`Point2`](super::Point2)s.
///
/// Only carries what the collinearity and distance checks need.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec2<F> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y
    }

    /// Perpendicular dot product. Exactly zero when the offsets are parallel
    /// or one of them is zero.
    #[inline]
    pub fn cross(self, other: Self) -> F {
        self.x * other.y - self.y * other.x
    }

    #[inline]
    pub fn magnitude_squared(self) -> F {
        self.dot(self)
    }
}
