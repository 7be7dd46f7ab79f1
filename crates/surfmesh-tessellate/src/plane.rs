//! Flat rectangular grid at a fixed height.

use serde::{Deserialize, Serialize};
use surfmesh_math::{push_point, push_vec, Point3, Vec3};

use crate::error::{require_dimension, MeshError, Result};
use crate::mesh::{GridLayout, Mesh};
use crate::settings::{FaceTopology, MeshSettings};

/// Plane placement and size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaneParams {
    /// XY centre of the rectangle.
    pub center: [f64; 2],
    /// Extent along X.
    pub x_size: f64,
    /// Extent along Y.
    pub y_size: f64,
    /// Z of every vertex.
    pub z_level: f64,
}

impl Default for PlaneParams {
    fn default() -> Self {
        Self {
            center: [0.0, 0.0],
            x_size: 10.0,
            y_size: 10.0,
            z_level: 0.0,
        }
    }
}

/// Build a plane with `settings.slices` divisions along X and
/// `settings.stacks` along Y.
///
/// Rows run along Y and vertices within a row along X, so vertex `(row, col)`
/// sits at `row * (slices + 1) + col`. Every normal is `-Z` and the tangent
/// frame is `+X` / `+Y`. `settings.topology` selects triangles or quads.
pub fn build_plane(params: &PlaneParams, settings: &MeshSettings) -> Result<Mesh> {
    settings.validate()?;
    let x_size = require_dimension("x_size", params.x_size)?;
    let y_size = require_dimension("y_size", params.y_size)?;
    if !params.z_level.is_finite() {
        return Err(MeshError::InvalidDimension {
            name: "z_level",
            value: params.z_level,
        });
    }

    let (xdivs, ydivs) = (settings.slices, settings.stacks);
    // Outer loop is Y, inner is X
    let layout = GridLayout {
        slices: ydivs,
        stacks: xdivs,
    };
    let n = layout.vertex_count();

    let mut mesh = Mesh::new("Plane", settings.topology);
    mesh.positions.reserve(n * 3);
    mesh.normals.reserve(n * 3);
    mesh.tex_coords.reserve(n * 2);
    let mut tangents = Vec::with_capacity(n * 3);
    let mut bitangents = Vec::with_capacity(n * 3);

    let normal = -Vec3::z();
    let [cx, cy] = params.center;
    for row in 0..=ydivs {
        let fy = row as f64 / ydivs as f64;
        let y = cy + fy * y_size - y_size / 2.0;
        for col in 0..=xdivs {
            let fx = col as f64 / xdivs as f64;
            let x = cx + fx * x_size - x_size / 2.0;
            push_point(&mut mesh.positions, &Point3::new(x, y, params.z_level));
            push_vec(&mut mesh.normals, &normal);
            push_vec(&mut tangents, &Vec3::x());
            push_vec(&mut bitangents, &Vec3::y());
            mesh.tex_coords.push((fx * settings.s_max) as f32);
            mesh.tex_coords.push((fy * settings.t_max) as f32);
        }
    }

    mesh.tangents = Some(tangents);
    mesh.bitangents = Some(bitangents);
    // Cells wind (r+j, n+j, n+j+1), (r+j, n+j+1, r+j+1) so faces agree with -Z
    let mut indices = Vec::with_capacity(layout.index_count(settings.topology));
    for row in 0..ydivs {
        for col in 0..xdivs {
            let [[r, r1, n1], [_, _, n]] = layout.cell_triangles(row, col);
            match settings.topology {
                FaceTopology::Triangles => indices.extend_from_slice(&[r, n, n1, r, n1, r1]),
                FaceTopology::Quads => indices.extend_from_slice(&[r, n, n1, r1]),
            }
        }
    }
    mesh.indices = indices;
    mesh.grid = Some(layout);
    Ok(mesh)
}
