//! Local-to-world conversion of flat attribute arrays.

use surfmesh_math::{points_from_flat, push_point, push_vec, Transform};

/// Apply `transform` to every point of an xyz-interleaved array.
pub fn transform_points(points: &[f32], transform: &Transform) -> Vec<f32> {
    let mut out = Vec::with_capacity(points.len());
    for p in points_from_flat(points) {
        push_point(&mut out, &transform.apply_point(&p));
    }
    out
}

/// Apply the upper-left 3×3 of `transform` to every normal.
///
/// Translation is dropped and the results are not renormalized. This is
/// exact for rotations; scales change normal lengths, and non-uniform
/// scales tilt normals away from the true surface normal.
pub fn transform_normals(normals: &[f32], transform: &Transform) -> Vec<f32> {
    let mut out = Vec::with_capacity(normals.len());
    for n in points_from_flat(normals) {
        push_vec(&mut out, &transform.apply_vec(&n.coords));
    }
    out
}
