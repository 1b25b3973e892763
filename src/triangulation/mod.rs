//! Delaunay triangulation of point sets.
//!
//! This module provides the triangle model (with cached circumcircle) and the
//! Bowyer-Watson engine that produces a [`Triangulation`] from a validated
//! [`PointSet`](crate::PointSet).

mod bowyer_watson;
mod mesh;
mod triangle;

pub use bowyer_watson::{
    super_triangle, triangulate, triangulate_with, BowyerWatsonOptions,
    DEFAULT_SUPER_TRIANGLE_MARGIN,
};
pub use mesh::Triangulation;
pub use triangle::{Edge, Triangle, DEFAULT_DEGENERATE_TOLERANCE};
