//! The result of a successful triangulation.

use super::Triangle;
use crate::error::CodecError;
use crate::io::encode_triangulation;
use crate::pointset::PointSet;
use crate::primitives::Point2;
use num_traits::Float;

/// A point set together with the Delaunay triangles over its points.
///
/// The point set is the full input. Every triangle vertex is one of
/// its points; no vertex of the construction super-triangle survives. The
/// triangle order carries no meaning.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangulation<F> {
    point_set: PointSet<F>,
    triangles: Vec<Triangle<F>>,
}

impl<F: Float> Triangulation<F> {
    pub(crate) fn new(point_set: PointSet<F>, triangles: Vec<Triangle<F>>) -> Self {
        Self {
            point_set,
            triangles,
        }
    }

    /// The triangulated point set.
    #[inline]
    pub fn point_set(&self) -> &PointSet<F> {
        &self.point_set
    }

    /// The triangles.
    #[inline]
    pub fn triangles(&self) -> &[Triangle<F>] {
        &self.triangles
    }

    /// Number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Iterates over the triangles that use `point` as a vertex.
    pub fn triangles_around(&self, point: Point2<F>) -> impl Iterator<Item = &Triangle<F>> {
        self.triangles.iter().filter(move |t| t.has_vertex(point))
    }
}

impl Triangulation<f64> {
    /// Encodes this triangulation to its little-endian wire form.
    pub fn to_bytes(&self) -> Result<Vec<u8>, CodecError> {
        encode_triangulation(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::triangulation::triangulate;

    #[test]
    fn test_counts_follow_contents() {
        let ps = PointSet::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ]);
        let triangulation = triangulate(&ps).unwrap();
        assert_eq!(triangulation.triangle_count(), triangulation.triangles().len());
        assert_eq!(triangulation.point_set().point_count(), 4);
    }

    #[test]
    fn test_triangles_around_corner() {
        let ps = PointSet::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(1.0, 2.0),
            Point2::new(1.0, 0.5),
        ]);
        let triangulation = triangulate(&ps).unwrap();
        assert_eq!(triangulation.triangle_count(), 3);
        assert_eq!(triangulation.triangles_around(Point2::new(1.0, 0.5)).count(), 3);
        assert_eq!(triangulation.triangles_around(Point2::new(9.0, 9.0)).count(), 0);
    }

    #[test]
    fn test_to_bytes_matches_encoder() {
        let ps = PointSet::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
        ]);
        let triangulation = triangulate(&ps).unwrap();
        assert_eq!(
            triangulation.to_bytes().unwrap(),
            encode_triangulation(&triangulation).unwrap()
        );
    }
}
