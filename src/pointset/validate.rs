//! Checks that gate triangulation.
//!
//! The checks run in a fixed order and the first failure wins:
//!
//! 1. empty set
//! 2. fewer than three points
//! 3. all points collinear
//! 4. duplicated points
//!
//! Collinearity and duplicates use exact floating-point comparison. Points
//! that are only nearly collinear or nearly coincident pass validation.
//!
//! # Example
//!
//! ```
//! use triangulator::{Point2, PointSet, ValidationError};
//! use triangulator::pointset::validate;
//!
//! let diagonal = PointSet::new(vec![
//!     Point2::new(1.0_f64, 1.0),
//!     Point2::new(2.0, 2.0),
//!     Point2::new(3.0, 3.0),
//! ]);
//! assert_eq!(validate(&diagonal), Err(ValidationError::CollinearPoints));
//! ```

use super::core::PointSet;
use crate::error::ValidationError;
use num_traits::Float;
use std::collections::HashSet;

/// Checks that a point set can be triangulated.
///
/// Pure and read-only. See the module docs for the order of checks.
pub fn validate<F: Float>(point_set: &PointSet<F>) -> Result<(), ValidationError> {
    let points = point_set.points();

    let result = if points.is_empty() {
        Err(ValidationError::EmptyPointSet)
    } else if points.len() < 3 {
        Err(ValidationError::InsufficientPoints {
            count: points.len(),
        })
    } else if is_collinear(point_set) {
        Err(ValidationError::CollinearPoints)
    } else if has_duplicates(point_set) {
        Err(ValidationError::DuplicatePoints)
    } else {
        Ok(())
    };

    if let Err(err) = &result {
        tracing::debug!(points = points.len(), %err, "point set rejected");
    }
    result
}

/// Returns true if every point lies on the line through the first two.
///
/// The cross product must be exactly zero for every point. Sets with fewer
/// than three points are trivially collinear. Coincident first points define
/// no line, so such a set is not collinear and is left to the duplicate check.
pub fn is_collinear<F: Float>(point_set: &PointSet<F>) -> bool {
    let points = point_set.points();
    let (p1, p2) = match points {
        [p1, p2, ..] => (*p1, *p2),
        _ => return true,
    };
    if p1 == p2 {
        return false;
    }

    let reference = p2 - p1;
    points[2..]
        .iter()
        .all(|&p| reference.cross(p - p1) == F::zero())
}

/// Returns true if two points share the exact same coordinates.
pub fn has_duplicates<F: Float>(point_set: &PointSet<F>) -> bool {
    let mut seen = HashSet::with_capacity(point_set.point_count());
    point_set.points().iter().any(|&p| !seen.insert(p))
}
