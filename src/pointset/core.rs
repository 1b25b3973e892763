//! The ordered point collection that feeds the triangulator.

use super::validate::validate;
use crate::error::{CodecError, ValidationError};
use crate::io::{decode_point_set, encode_point_set};
use crate::primitives::Point2;
use crate::triangulation::{triangulate, Triangulation};
use num_traits::Float;

/// An ordered sequence of points.
///
/// Insertion order is significant: it is the vertex index order on the wire
/// and the order in which points are inserted during triangulation. The point
/// count is always the length of the sequence. A `PointSet` is read-only once
/// built.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PointSet<F> {
    points: Vec<Point2<F>>,
}

impl<F: Float> PointSet<F> {
    /// Creates a point set from points in their significant order.
    #[inline]
    pub fn new(points: Vec<Point2<F>>) -> Self {
        Self { points }
    }

    /// Creates an empty point set.
    #[inline]
    pub fn empty() -> Self {
        Self { points: Vec::new() }
    }

    /// Returns the points in stored order.
    #[inline]
    pub fn points(&self) -> &[Point2<F>] {
        &self.points
    }

    /// Returns the number of points.
    #[inline]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the set has no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the index of the first point equal to `point`.
    pub fn index_of(&self, point: Point2<F>) -> Option<usize> {
        self.points.iter().position(|&p| p == point)
    }

    /// Returns the axis-aligned bounding box as (min, max) points.
    pub fn bounding_box(&self) -> Option<(Point2<F>, Point2<F>)> {
        let (first, rest) = self.points.split_first()?;

        let mut min = *first;
        let mut max = *first;

        for p in rest {
            if p.x < min.x {
                min.x = p.x;
            }
            if p.y < min.y {
                min.y = p.y;
            }
            if p.x > max.x {
                max.x = p.x;
            }
            if p.y > max.y {
                max.y = p.y;
            }
        }

        Some((min, max))
    }

    /// Checks that the set can be triangulated.
    ///
    /// See [`validate`](super::validate) for the individual checks.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate(self)
    }

    /// Computes the Delaunay triangulation of this set with default options.
    pub fn triangulate(&self) -> Result<Triangulation<F>, ValidationError> {
        triangulate(self)
    }
}

impl PointSet<f64> {
    /// Decodes a point set from its little-endian wire form.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CodecError> {
        decode_point_set(bytes)
    }

    /// Encodes this point set to its little-endian wire form.
    pub fn to_bytes(&self) -> Result<Vec<u8>, CodecError> {
        encode_point_set(self)
    }
}

impl<F: Float> From<Vec<Point2<F>>> for PointSet<F> {
    fn from(points: Vec<Point2<F>>) -> Self {
        Self::new(points)
    }
}

impl<F: Float> FromIterator<Point2<F>> for PointSet<F> {
    fn from_iter<I: IntoIterator<Item = Point2<F>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
