#![warn(missing_docs)]

//! Surface and grid meshing for the surfmesh kernel.
//!
//! Turns a [`SurfaceFunction`](surfmesh_surfaces::SurfaceFunction) into an
//! indexed [`Mesh`] by sampling its parameter domain on a regular grid:
//! 1. Evaluate positions at `(slices + 1) × (stacks + 1)` parameter pairs
//! 2. Estimate normals by finite differences and derive a tangent frame
//! 3. Repair non-finite samples and record what was repaired
//! 4. Stitch the grid into quads or diagonal-split triangles
//!
//! The cone and plane builders produce the same grid layout with analytic
//! attributes instead of sampled ones.

pub mod cone;
pub mod error;
pub mod mesh;
pub mod plane;
pub mod settings;
pub mod surface;

pub use cone::{build_cone, ConeParams};
pub use error::{MeshError, Result};
pub use mesh::{vertex_bytes, GpuVertex, GridLayout, Mesh, RawArrays};
pub use plane::{build_plane, PlaneParams};
pub use settings::{FaceTopology, MeshSettings};
pub use surface::{build_surface_mesh, BuildReport, BuildStatus, SurfaceMesh, NUDGE_FRACTION};
