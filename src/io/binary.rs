//! Little-endian binary encoding of point sets and triangulations.
//!
//! # Point set layout
//!
//! | offset    | size | field             |
//! |-----------|------|-------------------|
//! | 0         | 4    | point count (u32) |
//! | 4 + 8·i   | 4    | point i, x (f32)  |
//! | 8 + 8·i   | 4    | point i, y (f32)  |
//!
//! # Triangulation layout
//!
//! The point set bytes, followed by a u32 triangle count and, per triangle,
//! three u32 vertex indices into the point set sorted ascending.
//!
//! Coordinates travel as `f32` and are widened to `f64` on decode, so
//! geometry always runs in double precision.
//!
//! # Example
//!
//! ```
//! use triangulator::io::{decode_point_set, encode_point_set};
//! use triangulator::{Point2, PointSet};
//!
//! let ps = PointSet::new(vec![Point2::new(0.5, -2.0), Point2::new(3.25, 8.0)]);
//! let bytes = encode_point_set(&ps).unwrap();
//! assert_eq!(bytes.len(), 4 + 2 * 8);
//! assert_eq!(decode_point_set(&bytes).unwrap(), ps);
//! ```

use crate::error::CodecError;
use crate::pointset::PointSet;
use crate::primitives::Point2;
use crate::triangulation::Triangulation;
use std::collections::HashMap;

/// Size of a count header.
pub const COUNT_SIZE: usize = 4;
/// Size of one encoded point.
pub const POINT_SIZE: usize = 8;
/// Size of one encoded triangle record.
pub const TRIANGLE_SIZE: usize = 12;

/// Encodes a point set.
///
/// # Errors
///
/// [`CodecError::CountOverflow`] if the point count does not fit in a u32.
pub fn encode_point_set(point_set: &PointSet<f64>) -> Result<Vec<u8>, CodecError> {
    let mut buf = Vec::with_capacity(COUNT_SIZE + POINT_SIZE * point_set.point_count());
    write_point_set(&mut buf, point_set)?;
    Ok(buf)
}

/// Decodes a point set.
///
/// The buffer must be exactly `4 + 8 · point_count` bytes long.
///
/// # Errors
///
/// [`CodecError::MalformedInput`] if the buffer is shorter than the header or
/// its length disagrees with the declared point count, and
/// [`CodecError::NonFiniteCoordinate`] if a coordinate is NaN or infinite.
pub fn decode_point_set(bytes: &[u8]) -> Result<PointSet<f64>, CodecError> {
    let Some((header, payload)) = bytes.split_first_chunk::<COUNT_SIZE>() else {
        tracing::debug!(len = bytes.len(), "point set buffer shorter than header");
        return Err(CodecError::MalformedInput {
            expected: COUNT_SIZE as u64,
            actual: bytes.len(),
        });
    };

    let count = u64::from(u32::from_le_bytes(*header));
    let expected = COUNT_SIZE as u64 + POINT_SIZE as u64 * count;
    if expected != bytes.len() as u64 {
        tracing::debug!(count, expected, len = bytes.len(), "point set length mismatch");
        return Err(CodecError::MalformedInput {
            expected,
            actual: bytes.len(),
        });
    }

    let points = payload
        .chunks_exact(POINT_SIZE)
        .enumerate()
        .map(|(index, chunk)| -> Result<Point2<f64>, CodecError> {
            let x = f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
            let y = f32::from_le_bytes([chunk[4], chunk[5], chunk[6], chunk[7]]);
            if !x.is_finite() || !y.is_finite() {
                tracing::debug!(index, x, y, "non-finite coordinate");
                return Err(CodecError::NonFiniteCoordinate { index });
            }
            Ok(Point2::new(f64::from(x), f64::from(y)))
        })
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(points = points.len(), "decoded point set");
    Ok(PointSet::new(points))
}

/// Encodes a triangulation.
///
/// # Errors
///
/// [`CodecError::CountOverflow`] if a count does not fit in a u32, and
/// [`CodecError::UnknownVertex`] if a triangle uses a point outside the point
/// set. Neither happens for triangulations produced by this crate from a point
/// set that fits the wire format.
pub fn encode_triangulation(triangulation: &Triangulation<f64>) -> Result<Vec<u8>, CodecError> {
    let point_set = triangulation.point_set();
    let indices = triangle_indices(triangulation)?;

    let mut buf = Vec::with_capacity(
        2 * COUNT_SIZE + POINT_SIZE * point_set.point_count() + TRIANGLE_SIZE * indices.len(),
    );
    write_point_set(&mut buf, point_set)?;
    write_count(&mut buf, indices.len())?;
    for record in &indices {
        for index in record {
            buf.extend_from_slice(&index.to_le_bytes());
        }
    }

    tracing::debug!(
        points = point_set.point_count(),
        triangles = indices.len(),
        bytes = buf.len(),
        "encoded triangulation"
    );
    Ok(buf)
}

/// Resolves each triangle to the indices of its vertices, sorted ascending.
///
/// A vertex maps to the first point in the set with equal coordinates.
///
/// # Errors
///
/// See [`encode_triangulation`].
pub fn triangle_indices(triangulation: &Triangulation<f64>) -> Result<Vec<[u32; 3]>, CodecError> {
    let points = triangulation.point_set().points();

    let mut lookup: HashMap<Point2<f64>, u32> = HashMap::with_capacity(points.len());
    for (i, &point) in points.iter().enumerate() {
        let index = u32::try_from(i).map_err(|_| CodecError::CountOverflow {
            count: points.len(),
        })?;
        lookup.entry(point).or_insert(index);
    }

    triangulation
        .triangles()
        .iter()
        .map(|tri| -> Result<[u32; 3], CodecError> {
            let mut record = [0u32; 3];
            for (slot, vertex) in record.iter_mut().zip(tri.vertices()) {
                *slot = *lookup.get(&vertex).ok_or(CodecError::UnknownVertex {
                    x: vertex.x,
                    y: vertex.y,
                })?;
            }
            record.sort_unstable();
            Ok(record)
        })
        .collect()
}

fn write_count(buf: &mut Vec<u8>, count: usize) -> Result<(), CodecError> {
    let count = u32::try_from(count).map_err(|_| CodecError::CountOverflow { count })?;
    buf.extend_from_slice(&count.to_le_bytes());
    Ok(())
}

fn write_point_set(buf: &mut Vec<u8>, point_set: &PointSet<f64>) -> Result<(), CodecError> {
    write_count(buf, point_set.point_count())?;
    for p in point_set.points() {
        buf.extend_from_slice(&(p.x as f32).to_le_bytes());
        buf.extend_from_slice(&(p.y as f32).to_le_bytes());
    }
    Ok(())
}
