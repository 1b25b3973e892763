//! Error types for triangulator operations.

use thiserror::Error;

/// Reasons a point set cannot be triangulated.
///
/// The display text is meant to be surfaced to callers as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The point set has no points at all.
    #[error("cannot triangulate an empty point set")]
    EmptyPointSet,

    /// The point set has fewer than three points.
    #[error("cannot triangulate a point set with less than 3 points (got {count})")]
    InsufficientPoints {
        /// Number of points supplied.
        count: usize,
    },

    /// Every point lies on a single line.
    #[error("cannot triangulate a point set with only collinear points")]
    CollinearPoints,

    /// At least two points share the exact same coordinates.
    #[error("cannot triangulate a point set with duplicated points")]
    DuplicatePoints,
}

/// Errors raised by the binary codec.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CodecError {
    /// The buffer length does not match the length implied by its header.
    #[error("malformed input: expected {expected} bytes, got {actual}")]
    MalformedInput {
        /// Length implied by the header (or the header size itself).
        expected: u64,
        /// Actual buffer length.
        actual: usize,
    },

    /// A decoded coordinate is NaN or infinite.
    #[error("point {index} has a non-finite coordinate")]
    NonFiniteCoordinate {
        /// Position of the point in the buffer.
        index: usize,
    },

    /// A count does not fit in the u32 header field.
    #[error("count {count} does not fit in a u32 header")]
    CountOverflow {
        /// The offending count.
        count: usize,
    },

    /// A triangle references a vertex that is not part of its point set.
    #[error("triangle vertex ({x}, {y}) is not part of the point set")]
    UnknownVertex {
        /// X coordinate of the missing vertex.
        x: f64,
        /// Y coordinate of the missing vertex.
        y: f64,
    },
}

/// Any failure of the bytes-in, bytes-out pipeline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The decoded point set was rejected before triangulation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The payload could not be decoded, or the result could not be encoded.
    #[error(transparent)]
    Codec(#[from] CodecError),
}
