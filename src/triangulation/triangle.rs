//! Triangles and edges of the working triangulation.

use crate::primitives::{Circle2, Point2};
use num_traits::Float;

/// Below this magnitude of the circumcircle determinant a triangle is treated
/// as collinear and has no circumcircle.
pub const DEFAULT_DEGENERATE_TOLERANCE: f64 = 1e-10;

/// Converts an `f64` constant into `F`.
///
/// Every float type in use represents these constants. Anything that cannot
/// comes out as NaN, which makes every comparison against it false.
#[inline]
pub(crate) fn constant<F: Float>(value: f64) -> F {
    F::from(value).unwrap_or_else(F::nan)
}

/// A directed edge between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge<F> {
    pub start: Point2<F>,
    pub end: Point2<F>,
}

impl<F: Float> Edge<F> {
    /// Creates a new edge from `start` to `end`.
    #[inline]
    pub fn new(start: Point2<F>, end: Point2<F>) -> Self {
        Self { start, end }
    }

    /// Checks if two edges connect the same points, in either direction.
    #[inline]
    pub fn matches(&self, other: &Self) -> bool {
        (self.start == other.start && self.end == other.end)
            || (self.start == other.end && self.end == other.start)
    }
}

/// A triangle with its edges and circumcircle computed once at construction.
///
/// Equality compares vertices positionally: `(a, b, c)` and `(b, c, a)` are
/// different triangles even though they cover the same area.
///
/// # Example
///
/// ```
/// use triangulator::triangulation::Triangle;
/// use triangulator::Point2;
///
/// let tri = Triangle::new(
///     Point2::new(0.0_f64, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(0.5, 0.866),
/// );
///
/// assert!(tri.circumcircle_contains(Point2::new(0.5, 0.29)));
/// assert!(!tri.circumcircle_contains(Point2::new(10.0, 10.0)));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Triangle<F> {
    vertices: [Point2<F>; 3],
    edges: [Edge<F>; 3],
    circumcircle: Option<Circle2<F>>,
}

impl<F: Float> Triangle<F> {
    /// Creates a triangle using [`DEFAULT_DEGENERATE_TOLERANCE`].
    pub fn new(p1: Point2<F>, p2: Point2<F>, p3: Point2<F>) -> Self {
        Self::with_tolerance(p1, p2, p3, constant(DEFAULT_DEGENERATE_TOLERANCE))
    }

    /// Creates a triangle whose circumcircle is dropped when the circumcircle
    /// determinant is smaller than `tolerance` in magnitude.
    pub fn with_tolerance(p1: Point2<F>, p2: Point2<F>, p3: Point2<F>, tolerance: F) -> Self {
        Self {
            vertices: [p1, p2, p3],
            edges: [Edge::new(p1, p2), Edge::new(p2, p3), Edge::new(p3, p1)],
            circumcircle: Circle2::circumcircle(p1, p2, p3, tolerance),
        }
    }

    /// First vertex.
    #[inline]
    pub fn p1(&self) -> Point2<F> {
        self.vertices[0]
    }

    /// Second vertex.
    #[inline]
    pub fn p2(&self) -> Point2<F> {
        self.vertices[1]
    }

    /// Third vertex.
    #[inline]
    pub fn p3(&self) -> Point2<F> {
        self.vertices[2]
    }

    /// The three vertices in construction order.
    #[inline]
    pub fn vertices(&self) -> [Point2<F>; 3] {
        self.vertices
    }

    /// The directed edges `p1→p2`, `p2→p3`, `p3→p1`.
    #[inline]
    pub fn edges(&self) -> &[Edge<F>; 3] {
        &self.edges
    }

    /// The circumcircle, or `None` for a (numerically) collinear triangle.
    #[inline]
    pub fn circumcircle(&self) -> Option<Circle2<F>> {
        self.circumcircle
    }

    /// Checks if a point lies strictly inside the circumcircle.
    ///
    /// Always false for a triangle without a circumcircle.
    #[inline]
    pub fn circumcircle_contains(&self, point: Point2<F>) -> bool {
        self.circumcircle
            .is_some_and(|circle| circle.contains_strict(point))
    }

    /// Checks if `point` is one of the vertices.
    #[inline]
    pub fn has_vertex(&self, point: Point2<F>) -> bool {
        self.vertices.contains(&point)
    }

    /// Checks if any vertex is one of `points`.
    #[inline]
    pub fn shares_vertex_with(&self, points: &[Point2<F>]) -> bool {
        points.iter().any(|&p| self.has_vertex(p))
    }

    /// Checks if this triangle has an edge matching `edge` in either direction.
    #[inline]
    pub fn has_edge(&self, edge: &Edge<F>) -> bool {
        self.edges.iter().any(|e| e.matches(edge))
    }
}

impl<F: PartialEq> PartialEq for Triangle<F> {
    fn eq(&self, other: &Self) -> bool {
        self.vertices == other.vertices
    }
}
