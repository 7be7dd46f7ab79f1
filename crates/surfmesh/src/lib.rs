#![warn(missing_docs)]

//! Procedural surface meshes you can place, pick and measure.
//!
//! Provides the [`Model`] type: a mesh built from a parametric surface, a
//! cone or a plane, together with its world transform, world-space bounding
//! sphere and ray picking.
//!
//! # Example
//!
//! ```
//! use surfmesh::{MeshSettings, Model, Ray, SurfaceSpec, Transform};
//! use surfmesh::surfmesh_math::{Point3, Vec3};
//!
//! let spec = SurfaceSpec::from_kind("super_ellipsoid", 1.0).unwrap();
//! let mut model = Model::from_spec(&spec, &MeshSettings::new(48, 24)).unwrap();
//! model.set_transform(Transform::translation(0.0, 0.0, 5.0)).unwrap();
//!
//! let ray = Ray::new(Point3::new(0.0, -20.0, 5.0), Vec3::y());
//! assert!(model.pick(&ray).unwrap().is_some());
//! ```

pub use surfmesh_analysis;
pub use surfmesh_math;
pub use surfmesh_raytrace;
pub use surfmesh_surfaces;
pub use surfmesh_tessellate;

pub mod model;
pub mod transform;

pub use model::Model;
pub use surfmesh_analysis::{BoundingSphere, MeshProperties};
pub use surfmesh_math::Transform;
pub use surfmesh_raytrace::{MeshHit, Ray};
pub use surfmesh_surfaces::{SurfaceFunction, SurfaceSpec};
pub use surfmesh_tessellate::{
    BuildReport, BuildStatus, ConeParams, FaceTopology, Mesh, MeshSettings, PlaneParams,
    RawArrays,
};
pub use transform::{transform_normals, transform_points};

use thiserror::Error;

/// Anything that can go wrong building, moving or querying a [`Model`].
#[derive(Error, Debug)]
pub enum ModelError {
    /// Surface parameters were rejected.
    #[error(transparent)]
    Surface(#[from] surfmesh_surfaces::SurfaceError),

    /// Mesh settings or arrays were rejected.
    #[error(transparent)]
    Mesh(#[from] surfmesh_tessellate::MeshError),

    /// Bounding sphere or property computation failed.
    #[error(transparent)]
    Analysis(#[from] surfmesh_analysis::AnalysisError),

    /// A pick query hit malformed mesh data.
    #[error(transparent)]
    Pick(#[from] surfmesh_raytrace::PickError),
}

/// Result alias for facade operations.
pub type Result<T> = std::result::Result<T, ModelError>;
