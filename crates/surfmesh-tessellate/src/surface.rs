//! Sampling a [`SurfaceFunction`] on a regular grid.

use serde::Serialize;
use surfmesh_math::{push_point, push_vec, Point3, Tolerance, Vec3};
use surfmesh_surfaces::{NormalEstimator, NormalSource, SurfaceFunction};

use crate::error::{MeshError, Result};
use crate::mesh::{GridLayout, Mesh};
use crate::settings::{FaceTopology, MeshSettings};

/// Fraction of the domain span a non-finite sample is pulled inward by
/// before it is retried.
pub const NUDGE_FRACTION: f64 = 1e-4;

/// Whether a build needed to paper over numeric singularities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BuildStatus {
    /// Every sample was finite at its nominal parameters.
    Clean,
    /// Some samples had to be repaired; the mesh is usable but approximate.
    Degenerate,
}

/// What happened while sampling a surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BuildReport {
    /// Samples that were non-finite at their nominal `(u, v)`.
    pub repaired_samples: usize,
    /// Normals that needed the mirrored-tangent heuristic.
    pub mirrored_normals: usize,
    /// Normals that fell back to `+Z`.
    pub fallback_normals: usize,
}

impl BuildReport {
    /// [`BuildStatus::Degenerate`] if any sample was repaired.
    pub fn status(&self) -> BuildStatus {
        if self.repaired_samples > 0 {
            BuildStatus::Degenerate
        } else {
            BuildStatus::Clean
        }
    }
}

/// A built surface mesh together with its build report.
#[derive(Debug, Clone)]
pub struct SurfaceMesh {
    /// The mesh.
    pub mesh: Mesh,
    /// Diagnostics gathered while building it.
    pub report: BuildReport,
}

impl SurfaceMesh {
    /// Shorthand for `self.report.status()`.
    pub fn status(&self) -> BuildStatus {
        self.report.status()
    }
}

#[derive(Debug, Clone, Copy)]
struct Sample {
    position: Point3,
    normal: Vec3,
    tangent: Vec3,
    bitangent: Vec3,
    finite: bool,
}

fn is_finite(p: &Point3) -> bool {
    p.x.is_finite() && p.y.is_finite() && p.z.is_finite()
}

/// Orthogonalise `u_tangent` against `normal`, falling back to `normal × Z`
/// and then `normal × X` when it is missing or parallel.
fn tangent_frame(normal: &Vec3, u_tangent: Option<Vec3>) -> (Vec3, Vec3) {
    let candidates = [
        u_tangent.map(|t| {
            let t = t.normalize();
            t - normal * normal.dot(&t)
        }),
        Some(normal.cross(&Vec3::z())),
        Some(normal.cross(&Vec3::x())),
    ];
    let tangent = candidates
        .into_iter()
        .flatten()
        .find(|t| t.iter().all(|c| c.is_finite()) && !Tolerance::is_null(t))
        .map_or(Vec3::x(), |t| t.normalize());
    (tangent, normal.cross(&tangent))
}

/// Sample `surface` on a `slices × stacks` grid and stitch the index list.
///
/// Vertex `(i, j)` is evaluated at
/// `u = first_u + i · u_span / slices`, `v = first_v + j · v_span / stacks`
/// and stored at `i · (stacks + 1) + j`.
///
/// Samples that evaluate to NaN or infinity are retried once, pulled
/// [`NUDGE_FRACTION`] of the span towards the middle of the domain. If that
/// still fails the vertex copies the nearest finite grid neighbour. The
/// number of such samples is reported in [`BuildReport::repaired_samples`].
pub fn build_surface_mesh(
    surface: &dyn SurfaceFunction,
    settings: &MeshSettings,
) -> Result<SurfaceMesh> {
    settings.validate()?;

    let (slices, stacks) = (settings.slices, settings.stacks);
    let layout = GridLayout { slices, stacks };
    let domain = surface.domain();
    let estimator = NormalEstimator::new(slices, stacks);
    let du = domain.u_span() / slices as f64;
    let dv = domain.v_span() / stacks as f64;

    let mut report = BuildReport::default();
    let mut samples = Vec::with_capacity(layout.vertex_count());

    for i in 0..=slices {
        for j in 0..=stacks {
            let mut u = domain.first_u + i as f64 * du;
            let mut v = domain.first_v + j as f64 * dv;
            let mut position = surface.point(u, v);
            if !is_finite(&position) {
                report.repaired_samples += 1;
                (u, v) = domain.nudge_inward(u, v, NUDGE_FRACTION);
                position = surface.point(u, v);
            }

            let estimate = estimator.estimate(surface, u, v);
            match estimate.source {
                NormalSource::Direct => {}
                NormalSource::Mirrored => report.mirrored_normals += 1,
                NormalSource::Fallback => report.fallback_normals += 1,
            }
            let (tangent, bitangent) = tangent_frame(&estimate.normal, estimate.u_tangent);
            samples.push(Sample {
                position,
                normal: estimate.normal,
                tangent,
                bitangent,
                finite: is_finite(&position),
            });
        }
    }

    repair_from_neighbours(&mut samples, &layout, surface.name())?;

    if report.repaired_samples > 0 {
        log::warn!(
            "{}: repaired {} non-finite samples of {}",
            surface.name(),
            report.repaired_samples,
            samples.len()
        );
    }

    let mut mesh = Mesh::new(surface.name(), settings.topology);
    let n = samples.len();
    mesh.positions.reserve(n * 3);
    mesh.normals.reserve(n * 3);
    mesh.tex_coords.reserve(n * 2);
    let mut tangents = Vec::with_capacity(n * 3);
    let mut bitangents = Vec::with_capacity(n * 3);

    for i in 0..=slices {
        for j in 0..=stacks {
            let sample = &samples[layout.vertex_index(i, j) as usize];
            push_point(&mut mesh.positions, &sample.position);
            push_vec(&mut mesh.normals, &sample.normal);
            push_vec(&mut tangents, &sample.tangent);
            push_vec(&mut bitangents, &sample.bitangent);
            mesh.tex_coords
                .push((i as f64 / slices as f64 * settings.s_max) as f32);
            mesh.tex_coords
                .push((j as f64 / stacks as f64 * settings.t_max) as f32);
        }
    }
    mesh.tangents = Some(tangents);
    mesh.bitangents = Some(bitangents);
    mesh.indices = grid_indices(&layout, settings.topology);
    mesh.grid = Some(layout);

    log::debug!(
        "built {}: {} vertices, {} faces ({:?}), {} mirrored / {} fallback normals",
        mesh.name,
        mesh.vertex_count(),
        mesh.face_count(),
        settings.topology,
        report.mirrored_normals,
        report.fallback_normals
    );

    Ok(SurfaceMesh { mesh, report })
}

/// Replace every still-non-finite sample with its nearest finite neighbour:
/// `(i, j-1)`, `(i, j+1)`, `(i-1, j)`, `(i+1, j)`, else the first finite sample.
fn repair_from_neighbours(
    samples: &mut [Sample],
    layout: &GridLayout,
    name: &'static str,
) -> Result<()> {
    if samples.iter().all(|s| s.finite) {
        return Ok(());
    }
    let first_finite = samples
        .iter()
        .position(|s| s.finite)
        .ok_or(MeshError::NoFiniteSamples(name))?;

    let finite: Vec<bool> = samples.iter().map(|s| s.finite).collect();
    for i in 0..=layout.slices {
        for j in 0..=layout.stacks {
            let idx = layout.vertex_index(i, j) as usize;
            if finite[idx] {
                continue;
            }
            let neighbours = [
                (j > 0).then(|| (i, j - 1)),
                (j < layout.stacks).then(|| (i, j + 1)),
                (i > 0).then(|| (i - 1, j)),
                (i < layout.slices).then(|| (i + 1, j)),
            ];
            let source = neighbours
                .into_iter()
                .flatten()
                .map(|(ni, nj)| layout.vertex_index(ni, nj) as usize)
                .find(|&n| finite[n])
                .unwrap_or(first_finite);
            samples[idx] = samples[source];
        }
    }
    Ok(())
}

/// Index list for a regular grid.
pub(crate) fn grid_indices(layout: &GridLayout, topology: FaceTopology) -> Vec<u32> {
    let mut indices = Vec::with_capacity(layout.index_count(topology));
    for i in 0..layout.slices {
        for j in 0..layout.stacks {
            let [t0, t1] = layout.cell_triangles(i, j);
            match topology {
                FaceTopology::Triangles => {
                    indices.extend_from_slice(&t0);
                    indices.extend_from_slice(&t1);
                }
                FaceTopology::Quads => {
                    // [a, a+1, b+1, b]
                    indices.extend_from_slice(&[t0[0], t0[1], t0[2], t1[2]]);
                }
            }
        }
    }
    indices
}
