//! 2D circle type and circumcircle construction.

use super::Point2;
use num_traits::Float;

/// A 2D circle defined by center and radius.
///
/// # Example
///
/// ```
/// use triangulator::primitives::{Circle2, Point2};
///
/// let circle: Circle2<f64> = Circle2::new(Point2::new(0.0, 0.0), 1.0);
/// assert!(circle.contains_strict(Point2::new(0.5, 0.0)));
/// assert!(!circle.contains_strict(Point2::new(1.0, 0.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle2<F> {
    /// Center point of the circle
    pub center: Point2<F>,
    /// Radius of the circle (non-negative)
    pub radius: F,
}

impl<F: Float> Circle2<F> {
    /// Creates a new circle from center and radius.
    #[inline]
    pub fn new(center: Point2<F>, radius: F) -> Self {
        Self { center, radius }
    }

    /// Computes the circle passing through three points.
    ///
    /// Returns `None` when the points are collinear within `tolerance`, i.e.
    /// when `|d| < tolerance` for the determinant
    /// `d = 2 (ax (by - cy) + bx (cy - ay) + cx (ay - by))`.
    ///
    /// # Example
    ///
    /// ```
    /// use triangulator::primitives::{Circle2, Point2};
    ///
    /// let a: Point2<f64> = Point2::new(0.0, 0.0);
    /// let b = Point2::new(2.0, 0.0);
    /// let c = Point2::new(0.0, 2.0);
    ///
    /// let circle = Circle2::circumcircle(a, b, c, 1e-10).unwrap();
    /// assert_eq!(circle.center, Point2::new(1.0, 1.0));
    ///
    /// // Collinear points have no circumcircle
    /// assert!(Circle2::circumcircle(a, b, Point2::new(4.0, 0.0), 1e-10).is_none());
    /// ```
    pub fn circumcircle(a: Point2<F>, b: Point2<F>, c: Point2<F>, tolerance: F) -> Option<Self> {
        let two = F::one() + F::one();
        let d = two * (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y));
        if d.abs() < tolerance {
            return None;
        }

        let a_sq = a.x * a.x + a.y * a.y;
        let b_sq = b.x * b.x + b.y * b.y;
        let c_sq = c.x * c.x + c.y * c.y;

        let ux = (a_sq * (b.y - c.y) + b_sq * (c.y - a.y) + c_sq * (a.y - b.y)) / d;
        let uy = (a_sq * (c.x - b.x) + b_sq * (a.x - c.x) + c_sq * (b.x - a.x)) / d;

        let center = Point2::new(ux, uy);
        Some(Self::new(center, center.distance(a)))
    }

    /// Checks if a point is strictly inside the circle.
    ///
    /// Points on the boundary are outside.
    #[inline]
    pub fn contains_strict(&self, point: Point2<F>) -> bool {
        self.center.distance(point) < self.radius
    }
}
