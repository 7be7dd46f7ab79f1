//! Closed right circular cone with a bottom cap.

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};
use surfmesh_math::{push_point, push_vec, Point3, Vec3};

use crate::error::{require_dimension, Result};
use crate::mesh::{GridLayout, Mesh};
use crate::settings::{FaceTopology, MeshSettings};

/// Cone dimensions. The cone is centred on the origin along Z, base at
/// `z = -height / 2`, apex at `z = +height / 2`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConeParams {
    /// Base radius.
    pub radius: f64,
    /// Height from base to apex.
    pub height: f64,
}

impl Default for ConeParams {
    fn default() -> Self {
        Self {
            radius: 1.0,
            height: 2.0,
        }
    }
}

/// Build a cone: a `(slices + 1) × (stacks + 1)` lateral grid, then a bottom
/// cap ring of `slices + 1` vertices and one cap centre vertex.
///
/// Lateral normals are analytic. The apex ring (`j = stacks`) has zero radius,
/// so it copies the normals of the ring below it. The output is always
/// triangles; `settings.topology` is ignored.
pub fn build_cone(params: &ConeParams, settings: &MeshSettings) -> Result<Mesh> {
    settings.validate()?;
    let radius = require_dimension("radius", params.radius)?;
    let height = require_dimension("height", params.height)?;

    let (slices, stacks) = (settings.slices, settings.stacks);
    let layout = GridLayout { slices, stacks };
    let lateral = layout.vertex_count();
    let total = lateral + slices as usize + 2;

    let mut mesh = Mesh::new("Cone", FaceTopology::Triangles);
    mesh.positions.reserve(total * 3);
    mesh.normals.reserve(total * 3);
    mesh.tex_coords.reserve(total * 2);
    let mut tangents = Vec::with_capacity(total * 3);
    let mut bitangents = Vec::with_capacity(total * 3);

    let slope = radius / height;
    let half = height / 2.0;

    // Lateral surface
    for i in 0..=slices {
        let theta = i as f64 * TAU / slices as f64;
        let (sin, cos) = theta.sin_cos();
        let s = (i as f64 / slices as f64 * settings.s_max) as f32;
        for j in 0..=stacks {
            let phi = j as f64 * height / stacks as f64;
            let r = radius * (1.0 - phi / height);
            push_point(&mut mesh.positions, &Point3::new(r * cos, r * sin, phi - half));
            mesh.tex_coords.push(s);
            mesh.tex_coords
                .push((j as f64 / stacks as f64 * settings.t_max) as f32);

            if j == stacks {
                // Apex ring: repeat the previous ring's frame verbatim
                for attr in [&mut mesh.normals, &mut tangents, &mut bitangents] {
                    let prev = attr.len() - 3;
                    attr.extend_from_within(prev..);
                }
                continue;
            }
            let n = Vec3::new(r * cos, r * sin, slope * r).normalize();
            let t = n.cross(&Vec3::z()).normalize();
            push_vec(&mut mesh.normals, &n);
            push_vec(&mut tangents, &t);
            push_vec(&mut bitangents, &t.cross(&n));
        }
    }

    // Bottom cap ring
    let down = -Vec3::z();
    let cap_tangent = down.cross(&Vec3::y());
    let cap_bitangent = cap_tangent.cross(&down);
    for i in 0..=slices {
        let theta = i as f64 * TAU / slices as f64;
        let (sin, cos) = theta.sin_cos();
        push_point(
            &mut mesh.positions,
            &Point3::new(radius * cos, radius * sin, -half),
        );
        push_vec(&mut mesh.normals, &down);
        push_vec(&mut tangents, &cap_tangent);
        push_vec(&mut bitangents, &cap_bitangent);
        mesh.tex_coords.push(((1.0 - cos) * 0.5) as f32);
        mesh.tex_coords.push(((1.0 + sin) * 0.5) as f32);
    }

    // Bottom cap centre
    push_point(&mut mesh.positions, &Point3::new(0.0, 0.0, -half));
    push_vec(&mut mesh.normals, &down);
    push_vec(&mut tangents, &cap_tangent);
    push_vec(&mut bitangents, &cap_bitangent);
    mesh.tex_coords.extend_from_slice(&[0.5, 0.5]);

    mesh.tangents = Some(tangents);
    mesh.bitangents = Some(bitangents);

    // Same cells and diagonal as the surface grid, opposite winding
    let mut indices =
        Vec::with_capacity(layout.index_count(FaceTopology::Triangles) + 3 * slices as usize);
    for i in 0..slices {
        for j in 0..stacks {
            let [[a, a1, b1], [_, _, b]] = layout.cell_triangles(i, j);
            indices.extend_from_slice(&[b1, a1, a, b1, a, b]);
        }
    }
    let ring = lateral as u32;
    let centre = ring + slices + 1;
    for k in 0..slices {
        indices.extend_from_slice(&[ring + k, centre, ring + k + 1]);
    }
    mesh.indices = indices;
    mesh.grid = Some(layout);

    log::debug!(
        "built cone r={radius} h={height}: {} vertices, {} triangles",
        mesh.vertex_count(),
        mesh.face_count()
    );
    Ok(mesh)
}
