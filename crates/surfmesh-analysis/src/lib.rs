#![warn(missing_docs)]

//! Geometric analysis of mesh point arrays.
//!
//! - [`bounding_sphere`]: Ritter's approximate enclosing sphere
//! - [`MeshProperties`]: surface area and enclosed volume
//!
//! Both work on the flat `[x0, y0, z0, x1, ...]` arrays meshes are stored in
//! and recompute everything from scratch on each call.

pub mod error;
pub mod properties;
pub mod sphere;

pub use error::{AnalysisError, Result};
pub use properties::MeshProperties;
pub use sphere::{bounding_sphere, bounding_sphere_of, BoundingSphere};
