//! triangulator - Delaunay triangulation over a compact binary wire format
//!
//! Decode a point set, check that it can be triangulated, run Bowyer-Watson
//! incremental insertion, and encode the triangles back as vertex indices.
//!
//! # Example
//!
//! ```
//! use triangulator::{Point2, PointSet};
//!
//! let points = PointSet::new(vec![
//!     Point2::new(0.0_f64, 0.0),
//!     Point2::new(1.0, 0.0),
//!     Point2::new(1.0, 1.0),
//! ]);
//!
//! let triangulation = points.triangulate().unwrap();
//! assert_eq!(triangulation.triangle_count(), 1);
//!
//! let bytes = triangulation.to_bytes().unwrap();
//! assert_eq!(bytes.len(), 4 + 3 * 8 + 4 + 12);
//! ```

pub mod error;
pub mod io;
pub mod pointset;
pub mod primitives;
pub mod triangulation;

pub use error::{CodecError, Error, ValidationError};
pub use pointset::PointSet;
pub use primitives::{Circle2, Point2, Vec2};
pub use triangulation::{triangulate, Triangle, Triangulation};
