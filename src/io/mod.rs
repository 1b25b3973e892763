//! Input/output utilities for point sets and triangulations.
//!
//! Provides the little-endian binary wire format and the bytes-in, bytes-out
//! triangulation pipeline built on it.

mod binary;

pub use binary::{
    decode_point_set, encode_point_set, encode_triangulation, triangle_indices, COUNT_SIZE,
    POINT_SIZE, TRIANGLE_SIZE,
};

use crate::error::Error;
use crate::triangulation::triangulate;

/// Decodes a point set, triangulates it and encodes the result.
///
/// This is the whole request path minus transport: a handler passes the
/// payload it received and sends back the returned bytes.
///
/// # Errors
///
/// [`Error::Codec`] if the payload is malformed, [`Error::Validation`] if the
/// decoded point set cannot be triangulated.
///
/// # Example
///
/// ```
/// use triangulator::io::{encode_point_set, triangulate_bytes};
/// use triangulator::{Error, Point2, PointSet, ValidationError};
///
/// let square = PointSet::new(vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(1.0, 1.0),
///     Point2::new(0.0, 1.0),
/// ]);
/// let response = triangulate_bytes(&encode_point_set(&square).unwrap()).unwrap();
/// // 4 + 4 * 8 bytes of points, 4 bytes of count, 2 triangles of 12 bytes
/// assert_eq!(response.len(), 36 + 4 + 24);
///
/// let line = PointSet::new(vec![Point2::new(0.0, 0.0), Point2::new(1.0, 1.0)]);
/// assert_eq!(
///     triangulate_bytes(&encode_point_set(&line).unwrap()),
///     Err(Error::Validation(ValidationError::InsufficientPoints { count: 2 }))
/// );
/// ```
pub fn triangulate_bytes(payload: &[u8]) -> Result<Vec<u8>, Error> {
    let point_set = decode_point_set(payload)?;
    let triangulation = triangulate(&point_set)?;
    Ok(encode_triangulation(&triangulation)?)
}
