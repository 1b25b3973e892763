//! Point sets and the validity checks that gate triangulation.
//!
//! # Example
//!
//! ```
//! use triangulator::{Point2, PointSet, ValidationError};
//!
//! let ps = PointSet::new(vec![Point2::new(1.0_f64, 1.0), Point2::new(2.0, 2.0)]);
//! assert_eq!(
//!     ps.validate(),
//!     Err(ValidationError::InsufficientPoints { count: 2 })
//! );
//! ```

mod core;
mod validate;

pub use self::core::PointSet;
pub use self::validate::{has_duplicates, is_collinear, validate};
