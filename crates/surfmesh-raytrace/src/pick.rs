//! Running the triangle test over a mesh.

use surfmesh_math::point_at;
use surfmesh_tessellate::GridLayout;

use crate::error::{PickError, Result};
use crate::intersect::{intersect_triangle, TriangleHit};
use crate::ray::Ray;

/// A hit on a mesh: where, and which triangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshHit {
    /// The ray/triangle hit.
    pub hit: TriangleHit,
    /// Vertex indices of the triangle that was hit.
    pub triangle: [u32; 3],
}

fn point_count(points: &[f32]) -> Result<usize> {
    if points.len() % 3 != 0 {
        return Err(PickError::MalformedPointArray(points.len()));
    }
    Ok(points.len() / 3)
}

fn check_indices(indices: &[u32], point_count: usize) -> Result<()> {
    if indices.len() % 3 != 0 {
        return Err(PickError::IndexArity(indices.len()));
    }
    match indices.iter().find(|&&i| i as usize >= point_count) {
        Some(&index) => Err(PickError::IndexOutOfRange { index, point_count }),
        None => Ok(()),
    }
}

fn test_triangle(points: &[f32], ray: &Ray, triangle: [u32; 3]) -> Option<MeshHit> {
    let [a, b, c] = triangle.map(|i| point_at(points, i as usize));
    intersect_triangle(ray, &a, &b, &c).map(|hit| MeshHit { hit, triangle })
}

/// Walk the cells of `layout` row-major, two triangles per cell split along
/// `a -> b + 1`, and return the first hit.
///
/// Only the grid vertices at the front of `points` are visited. The hit is
/// the first in cell order, not necessarily the nearest.
pub fn first_hit_in_grid(points: &[f32], layout: GridLayout, ray: &Ray) -> Result<Option<MeshHit>> {
    let available = point_count(points)?;
    let needed = layout.vertex_count();
    if needed > available {
        return Err(PickError::GridOutOfRange { needed, available });
    }

    for i in 0..layout.slices {
        for j in 0..layout.stacks {
            for triangle in layout.cell_triangles(i, j) {
                if let Some(hit) = test_triangle(points, ray, triangle) {
                    return Ok(Some(hit));
                }
            }
        }
    }
    Ok(None)
}

/// Walk a triangle index list in order and return the first hit.
pub fn first_hit_in_triangles(points: &[f32], indices: &[u32], ray: &Ray) -> Result<Option<MeshHit>> {
    check_indices(indices, point_count(points)?)?;
    Ok(indices
        .chunks_exact(3)
        .find_map(|t| test_triangle(points, ray, [t[0], t[1], t[2]])))
}

/// Test every triangle and return the hit nearest the ray origin.
pub fn closest_hit_in_triangles(
    points: &[f32],
    indices: &[u32],
    ray: &Ray,
) -> Result<Option<MeshHit>> {
    check_indices(indices, point_count(points)?)?;
    Ok(indices
        .chunks_exact(3)
        .filter_map(|t| test_triangle(points, ray, [t[0], t[1], t[2]]))
        .min_by(|a, b| a.hit.t.total_cmp(&b.hit.t)))
}
