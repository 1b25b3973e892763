//! Delaunay triangulation using the Bowyer-Watson algorithm.
//!
//! Delaunay triangulation has the property that no point lies inside the
//! circumcircle of any triangle.
//!
//! # Algorithm
//!
//! The Bowyer-Watson algorithm is an incremental insertion algorithm:
//! 1. Start with a super-triangle containing all points
//! 2. Insert points one at a time in stored order. Each insertion removes the
//!    triangles whose circumcircle contains the new point and fans the
//!    resulting cavity out from it
//! 3. Remove triangles connected to the super-triangle vertices
//!
//! The working set is owned by the call, so independent triangulations can
//! run on separate threads without coordination.
//!
//! # Complexity
//!
//! - Time: O(n·t) where t is the current triangle count
//! - Space: O(n)
//!
//! # Example
//!
//! ```
//! use triangulator::triangulation::triangulate;
//! use triangulator::{Point2, PointSet};
//!
//! // Square with center point
//! let points = PointSet::new(vec![
//!     Point2::new(0.0_f64, 0.0),
//!     Point2::new(1.0, 0.0),
//!     Point2::new(1.0, 1.0),
//!     Point2::new(0.0, 1.0),
//!     Point2::new(0.5, 0.5),
//! ]);
//!
//! let triangulation = triangulate(&points).unwrap();
//! assert_eq!(triangulation.triangle_count(), 4);
//! ```

use super::triangle::{constant, Edge, Triangle, DEFAULT_DEGENERATE_TOLERANCE};
use super::Triangulation;
use crate::error::ValidationError;
use crate::pointset::{validate, PointSet};
use crate::primitives::Point2;
use num_traits::Float;

/// Default distance of the super-triangle vertices from the bounding box
/// center, in multiples of the larger box side.
pub const DEFAULT_SUPER_TRIANGLE_MARGIN: f64 = 20.0;

/// Numeric knobs of the Bowyer-Watson engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BowyerWatsonOptions<F> {
    /// Multiplier applied to the larger bounding box side when placing the
    /// super-triangle vertices.
    pub super_triangle_margin: F,
    /// Triangles whose circumcircle determinant is smaller than this in
    /// magnitude get no circumcircle and are never removed.
    pub degenerate_tolerance: F,
}

impl<F: Float> Default for BowyerWatsonOptions<F> {
    fn default() -> Self {
        Self {
            super_triangle_margin: constant(DEFAULT_SUPER_TRIANGLE_MARGIN),
            degenerate_tolerance: constant(DEFAULT_DEGENERATE_TOLERANCE),
        }
    }
}

/// Computes the Delaunay triangulation of a point set with default options.
///
/// The point set is validated first; a rejected set is returned as the
/// corresponding [`ValidationError`] before any geometry is computed.
pub fn triangulate<F: Float>(point_set: &PointSet<F>) -> Result<Triangulation<F>, ValidationError> {
    triangulate_with(point_set, &BowyerWatsonOptions::default())
}

/// Computes the Delaunay triangulation of a point set.
///
/// # Errors
///
/// Returns the first failed check of [`validate`](crate::pointset::validate).
///
/// # Example
///
/// ```
/// use triangulator::triangulation::{triangulate_with, BowyerWatsonOptions};
/// use triangulator::{Point2, PointSet};
///
/// let points = PointSet::new(vec![
///     Point2::new(0.0_f64, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(1.0, 1.0),
///     Point2::new(0.0, 1.0),
/// ]);
///
/// let options = BowyerWatsonOptions {
///     super_triangle_margin: 50.0,
///     ..Default::default()
/// };
/// let triangulation = triangulate_with(&points, &options).unwrap();
/// assert_eq!(triangulation.triangle_count(), 2);
/// ```
pub fn triangulate_with<F: Float>(
    point_set: &PointSet<F>,
    options: &BowyerWatsonOptions<F>,
) -> Result<Triangulation<F>, ValidationError> {
    validate(point_set)?;

    // Unreachable: a validated set is non-empty, so its bounding box exists.
    let enclosing = super_triangle(point_set, options).ok_or(ValidationError::EmptyPointSet)?;
    tracing::debug!(
        points = point_set.point_count(),
        margin = ?options.super_triangle_margin.to_f64(),
        "starting Bowyer-Watson insertion"
    );

    let mut triangles = vec![enclosing];
    for &point in point_set.points() {
        insert_point(&mut triangles, point, options.degenerate_tolerance);
    }

    let super_vertices = enclosing.vertices();
    triangles.retain(|tri| !tri.shares_vertex_with(&super_vertices));

    tracing::debug!(
        triangles = triangles.len(),
        "Bowyer-Watson triangulation complete"
    );
    Ok(Triangulation::new(point_set.clone(), triangles))
}

/// Builds the triangle that bootstraps insertion for `point_set`.
///
/// With `delta` the larger side of the bounding box and `(mid_x, mid_y)` its
/// center, the vertices are `(mid_x - m·delta, mid_y - delta)`,
/// `(mid_x, mid_y + m·delta)` and `(mid_x + m·delta, mid_y - delta)` where `m`
/// is the configured margin. Returns `None` for an empty point set.
pub fn super_triangle<F: Float>(
    point_set: &PointSet<F>,
    options: &BowyerWatsonOptions<F>,
) -> Option<Triangle<F>> {
    let (min, max) = point_set.bounding_box()?;

    let dx = max.x - min.x;
    let dy = max.y - min.y;
    let delta = if dx > dy { dx } else { dy };
    let two = F::one() + F::one();
    let mid_x = (min.x + max.x) / two;
    let mid_y = (min.y + max.y) / two;
    let reach = options.super_triangle_margin * delta;

    Some(Triangle::with_tolerance(
        Point2::new(mid_x - reach, mid_y - delta),
        Point2::new(mid_x, mid_y + reach),
        Point2::new(mid_x + reach, mid_y - delta),
        options.degenerate_tolerance,
    ))
}

/// Inserts one point into the working set.
///
/// Triangles whose circumcircle strictly contains `point` are removed, the
/// surviving triangles keep their relative order, and one new triangle per
/// cavity boundary edge is appended.
fn insert_point<F: Float>(triangles: &mut Vec<Triangle<F>>, point: Point2<F>, tolerance: F) {
    let is_bad: Vec<bool> = triangles
        .iter()
        .map(|tri| tri.circumcircle_contains(point))
        .collect();
    let bad_triangles: Vec<Triangle<F>> = triangles
        .iter()
        .zip(&is_bad)
        .filter(|(_, &bad)| bad)
        .map(|(tri, _)| *tri)
        .collect();

    let boundary = boundary_edges(&bad_triangles);

    let mut flags = is_bad.iter();
    triangles.retain(|_| flags.next().is_some_and(|&bad| !bad));

    tracing::trace!(
        x = ?point.x.to_f64(),
        y = ?point.y.to_f64(),
        bad = bad_triangles.len(),
        boundary = boundary.len(),
        "inserted point"
    );

    triangles.extend(
        boundary
            .into_iter()
            .map(|edge| Triangle::with_tolerance(edge.start, edge.end, point, tolerance)),
    );
}

/// Collects the edges of the cavity left by removing `bad_triangles`.
///
/// An edge is on the boundary if no other bad triangle has it, in either
/// direction. Edges come out in triangle order, then edge order.
pub(crate) fn boundary_edges<F: Float>(bad_triangles: &[Triangle<F>]) -> Vec<Edge<F>> {
    let mut polygon = Vec::with_capacity(bad_triangles.len() + 2);

    for (i, tri) in bad_triangles.iter().enumerate() {
        for edge in tri.edges() {
            let shared = bad_triangles
                .iter()
                .enumerate()
                .any(|(j, other)| j != i && other.has_edge(edge));
            if !shared {
                polygon.push(*edge);
            }
        }
    }

    polygon
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn set(coords: &[(f64, f64)]) -> PointSet<f64> {
        coords.iter().map(|&(x, y)| Point2::new(x, y)).collect()
    }

    fn assert_delaunay(triangulation: &Triangulation<f64>) {
        for tri in triangulation.triangles() {
            for &p in triangulation.point_set().points() {
                // Own vertices sit on the circle, up to rounding
                if tri.has_vertex(p) {
                    continue;
                }
                assert!(
                    !tri.circumcircle_contains(p),
                    "Point {:?} is inside circumcircle of triangle {:?}",
                    p,
                    tri.vertices()
                );
            }
        }
    }

    #[test]
    fn test_rejects_invalid_sets() {
        assert_eq!(
            triangulate(&set(&[])),
            Err(ValidationError::EmptyPointSet)
        );
        assert_eq!(
            triangulate(&set(&[(1.0, 1.0)])),
            Err(ValidationError::InsufficientPoints { count: 1 })
        );
        assert_eq!(
            triangulate(&set(&[(1.0, 1.0), (2.0, 2.0)])),
            Err(ValidationError::InsufficientPoints { count: 2 })
        );
        assert_eq!(
            triangulate(&set(&[(1.0, 1.0), (2.0, 2.0), (3.0, 3.0)])),
            Err(ValidationError::CollinearPoints)
        );
        assert_eq!(
            triangulate(&set(&[(1.0, 1.0), (1.0, 1.0), (2.0, 2.0)])),
            Err(ValidationError::DuplicatePoints)
        );
    }

    #[test]
    fn test_three_points() {
        let ps = set(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]);
        let triangulation = triangulate(&ps).unwrap();
        assert_eq!(triangulation.triangle_count(), 1);

        let tri = &triangulation.triangles()[0];
        for p in ps.points() {
            assert!(tri.has_vertex(*p));
        }
    }

    #[test]
    fn test_right_triangle() {
        let ps = set(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]);
        assert_eq!(triangulate(&ps).unwrap().triangle_count(), 1);
    }

    #[test]
    fn test_square() {
        let ps = set(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
        let triangulation = triangulate(&ps).unwrap();
        assert_eq!(triangulation.triangle_count(), 2);
    }

    #[test]
    fn test_square_with_center() {
        let ps = set(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.5, 0.5)]);
        let triangulation = triangulate(&ps).unwrap();
        assert_eq!(triangulation.triangle_count(), 4);
        assert_eq!(triangulation.triangles_around(Point2::new(0.5, 0.5)).count(), 4);
        assert_delaunay(&triangulation);
    }

    #[test]
    fn test_keeps_full_point_set() {
        let ps = set(&[(0.0, 0.0), (4.0, 0.0), (2.0, 3.0), (2.0, 1.0)]);
        let triangulation = triangulate(&ps).unwrap();
        assert_eq!(triangulation.point_set(), &ps);
    }

    #[test]
    fn test_random_like() {
        let ps = set(&[
            (0.1, 0.2),
            (0.8, 0.1),
            (0.9, 0.9),
            (0.2, 0.85),
            (0.5, 0.5),
            (0.3, 0.3),
            (0.7, 0.6),
            (0.4, 0.8),
        ]);
        let triangulation = triangulate(&ps).unwrap();
        assert!(triangulation.triangle_count() > 0);
        assert_delaunay(&triangulation);

        let used: HashSet<Point2<f64>> = triangulation
            .triangles()
            .iter()
            .flat_map(|t| t.vertices())
            .collect();
        for p in ps.points() {
            assert!(used.contains(p), "Point {:?} not used in triangulation", p);
        }
    }

    #[test]
    fn test_no_super_triangle_vertices() {
        let ps = set(&[(0.0, 0.0), (3.0, 1.0), (1.0, 4.0), (2.0, 2.0), (-1.0, 2.5)]);
        let options = BowyerWatsonOptions::default();
        let enclosing = super_triangle(&ps, &options).unwrap();
        let triangulation = triangulate_with(&ps, &options).unwrap();

        for tri in triangulation.triangles() {
            assert!(!tri.shares_vertex_with(&enclosing.vertices()));
            for v in tri.vertices() {
                assert!(ps.index_of(v).is_some());
            }
        }
    }

    #[test]
    fn test_super_triangle_vertices() {
        let ps = set(&[(0.0, 0.0), (2.0, 0.0), (0.0, 1.0)]);
        let tri = super_triangle(&ps, &BowyerWatsonOptions::default()).unwrap();
        // delta = 2, center = (1, 0.5)
        assert_eq!(tri.p1(), Point2::new(-39.0, -1.5));
        assert_eq!(tri.p2(), Point2::new(1.0, 40.5));
        assert_eq!(tri.p3(), Point2::new(41.0, -1.5));
    }

    #[test]
    fn test_super_triangle_encloses_points() {
        let ps = set(&[(-5.0, 2.0), (7.0, -3.0), (1.0, 9.0), (0.0, 0.0)]);
        let tri = super_triangle(&ps, &BowyerWatsonOptions::default()).unwrap();
        for &p in ps.points() {
            assert!(tri.circumcircle_contains(p));
        }
    }

    #[test]
    fn test_super_triangle_empty() {
        assert!(super_triangle(&set(&[]), &BowyerWatsonOptions::default()).is_none());
    }

    #[test]
    fn test_boundary_edges_single_triangle() {
        let tri = Triangle::new(
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 1.0),
        );
        let boundary = boundary_edges(&[tri]);
        assert_eq!(boundary.as_slice(), tri.edges());
    }

    #[test]
    fn test_boundary_edges_drop_shared_edge() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(1.0, 0.0);
        let c = Point2::new(1.0, 1.0);
        let d = Point2::new(0.0, 1.0);
        // Both triangles share the diagonal a-c, traversed in opposite directions
        let first = Triangle::new(a, b, c);
        let second = Triangle::new(c, d, a);

        let boundary = boundary_edges(&[first, second]);
        assert_eq!(
            boundary,
            vec![
                Edge::new(a, b),
                Edge::new(b, c),
                Edge::new(c, d),
                Edge::new(d, a),
            ]
        );
    }

    #[test]
    fn test_degenerate_triangle_survives_insertion() {
        let flat = Triangle::new(
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(2.0, 0.0),
        );
        let mut triangles = vec![flat];
        insert_point(&mut triangles, Point2::new(1.0, 0.0), 1e-10);
        assert_eq!(triangles, vec![flat]);
    }

    #[test]
    fn test_insert_point_splits_triangle() {
        let tri = Triangle::new(
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(0.0, 4.0),
        );
        let mut triangles = vec![tri];
        let inside = Point2::new(1.0, 1.0);
        insert_point(&mut triangles, inside, 1e-10);

        assert_eq!(triangles.len(), 3);
        for (new, edge) in triangles.iter().zip(tri.edges()) {
            assert_eq!(new.vertices(), [edge.start, edge.end, inside]);
        }
    }

    #[test]
    fn test_deterministic() {
        let ps = set(&[(0.0, 0.0), (5.0, 1.0), (2.0, 6.0), (3.0, 2.0), (1.0, 3.0)]);
        let first = triangulate(&ps).unwrap();
        let second = triangulate(&ps).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_f32() {
        let ps: PointSet<f32> = PointSet::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.5, 1.0),
        ]);
        assert_eq!(triangulate(&ps).unwrap().triangle_count(), 1);
    }
}
