#![warn(missing_docs)]

//! Math types for the surfmesh kernel.
//!
//! Geometry is computed in `f64` through nalgebra and stored in flat
//! `[x0, y0, z0, x1, ...]` `f32` arrays, the layout meshes are uploaded in.
//! The helpers at the bottom of this module move between the two.

use nalgebra::{Matrix4, Rotation3, Vector3, Vector4};

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D space.
pub type Vec3 = Vector3<f64>;

/// A 4x4 affine transform acting on column vectors.
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    /// The homogeneous matrix.
    pub matrix: Matrix4<f64>,
}

impl Transform {
    /// No-op transform.
    pub fn identity() -> Self {
        Self {
            matrix: Matrix4::identity(),
        }
    }

    /// Move by `(dx, dy, dz)`.
    pub fn translation(dx: f64, dy: f64, dz: f64) -> Self {
        Self {
            matrix: Matrix4::new_translation(&Vec3::new(dx, dy, dz)),
        }
    }

    /// Per-axis scale about the origin.
    pub fn scale(sx: f64, sy: f64, sz: f64) -> Self {
        Self {
            matrix: Matrix4::new_nonuniform_scaling(&Vec3::new(sx, sy, sz)),
        }
    }

    /// Right-handed rotation of `angle` radians about X.
    pub fn rotation_x(angle: f64) -> Self {
        Self::rotation(Vec3::x_axis(), angle)
    }

    /// Right-handed rotation of `angle` radians about Y.
    pub fn rotation_y(angle: f64) -> Self {
        Self::rotation(Vec3::y_axis(), angle)
    }

    /// Right-handed rotation of `angle` radians about Z.
    pub fn rotation_z(angle: f64) -> Self {
        Self::rotation(Vec3::z_axis(), angle)
    }

    fn rotation(axis: nalgebra::Unit<Vec3>, angle: f64) -> Self {
        Self {
            matrix: Rotation3::from_axis_angle(&axis, angle).to_homogeneous(),
        }
    }

    /// `self * other`: the result applies `other` first, then `self`.
    pub fn then(&self, other: &Transform) -> Self {
        Self {
            matrix: self.matrix * other.matrix,
        }
    }

    /// Map a point (`w = 1`).
    pub fn apply_point(&self, p: &Point3) -> Point3 {
        let h = self.matrix * p.to_homogeneous();
        Point3::new(h.x, h.y, h.z)
    }

    /// Map a direction (`w = 0`), so translation drops out.
    ///
    /// Mesh normals go through this too; it is exact for rotations only.
    pub fn apply_vec(&self, v: &Vec3) -> Vec3 {
        (self.matrix * Vector4::new(v.x, v.y, v.z, 0.0)).xyz()
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

/// Numeric thresholds shared across crates.
pub struct Tolerance;

impl Tolerance {
    /// Length under which a finite-difference vector counts as null.
    ///
    /// Single-precision epsilon: meshes are emitted as `f32`, so anything
    /// shorter cannot be told apart from zero downstream.
    pub const NULL_VECTOR: f64 = f32::EPSILON as f64;

    /// True if `v` is no longer than [`Tolerance::NULL_VECTOR`].
    pub fn is_null(v: &Vec3) -> bool {
        v.norm() <= Self::NULL_VECTOR
    }
}

/// Widen an xyz-interleaved `f32` array into points.
///
/// A trailing partial triple is ignored; callers that care validate the
/// length first.
pub fn points_from_flat(flat: &[f32]) -> Vec<Point3> {
    flat.chunks_exact(3)
        .map(|c| Point3::new(c[0].into(), c[1].into(), c[2].into()))
        .collect()
}

/// The `index`-th point of an xyz-interleaved array.
#[inline]
pub fn point_at(flat: &[f32], index: usize) -> Point3 {
    let c = &flat[index * 3..index * 3 + 3];
    Point3::new(c[0].into(), c[1].into(), c[2].into())
}

/// Append a point, narrowed to `f32`.
#[inline]
pub fn push_point(flat: &mut Vec<f32>, p: &Point3) {
    push_vec(flat, &p.coords);
}

/// Append a vector, narrowed to `f32`.
#[inline]
pub fn push_vec(flat: &mut Vec<f32>, v: &Vec3) {
    flat.extend(v.iter().map(|&c| c as f32));
}
