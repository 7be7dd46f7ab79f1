#![warn(missing_docs)]

//! Ray picking for the surfmesh kernel.
//!
//! A single Möller–Trumbore ray/triangle test plus three ways of running it
//! over a mesh's flat point array:
//!
//! - [`first_hit_in_grid`]: walk the cells of a procedurally built grid
//! - [`first_hit_in_triangles`]: walk an arbitrary triangle index list
//! - [`closest_hit_in_triangles`]: test every triangle and keep the nearest
//!
//! The "first" variants stop at the first triangle in mesh order that the
//! ray crosses, which need not be the one nearest the ray origin.

pub mod error;
pub mod intersect;
pub mod pick;
pub mod ray;

pub use error::{PickError, Result};
pub use intersect::{intersect_triangle, TriangleHit, PARALLEL_EPSILON};
pub use pick::{closest_hit_in_triangles, first_hit_in_grid, first_hit_in_triangles, MeshHit};
pub use ray::Ray;
