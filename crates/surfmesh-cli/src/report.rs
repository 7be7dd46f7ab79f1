//! Human and JSON summaries of a built model.

use serde::Serialize;
use surfmesh::{BuildReport, BuildStatus, MeshHit, MeshProperties, Model};

#[derive(Debug, Serialize)]
pub struct SphereSummary {
    pub center: [f64; 3],
    pub radius: f64,
}

#[derive(Debug, Serialize)]
pub struct BuildSummary {
    pub name: String,
    pub vertices: usize,
    pub indices: usize,
    pub faces: usize,
    pub status: Option<BuildStatus>,
    pub report: Option<BuildReport>,
    pub bounding_sphere: SphereSummary,
    pub properties: MeshProperties,
}

impl BuildSummary {
    pub fn new(model: &Model) -> surfmesh::Result<Self> {
        let mesh = model.mesh();
        let sphere = model.bounding_sphere();
        Ok(Self {
            name: model.name().to_string(),
            vertices: mesh.vertex_count(),
            indices: mesh.indices.len(),
            faces: mesh.face_count(),
            status: model.build_report().map(BuildReport::status),
            report: model.build_report().copied(),
            bounding_sphere: SphereSummary {
                center: sphere.center.coords.into(),
                radius: sphere.radius,
            },
            properties: model.properties()?,
        })
    }

    pub fn print(&self) {
        println!("{}", self.name);
        println!("  Vertices: {}", self.vertices);
        println!("  Indices:  {}", self.indices);
        println!("  Faces:    {}", self.faces);
        if let (Some(status), Some(report)) = (self.status, self.report) {
            println!("  Status:   {status:?}");
            if status == BuildStatus::Degenerate {
                println!(
                    "    repaired samples: {}, mirrored normals: {}, fallback normals: {}",
                    report.repaired_samples, report.mirrored_normals, report.fallback_normals
                );
            }
        }
        let [x, y, z] = self.bounding_sphere.center;
        println!(
            "  Bounding sphere: center ({x:.4}, {y:.4}, {z:.4}), radius {:.4}",
            self.bounding_sphere.radius
        );
        println!("  Surface area: {:.6}", self.properties.surface_area);
        println!("  Volume:       {:.6}", self.properties.volume);
    }
}

#[derive(Debug, Serialize)]
pub struct PickSummary {
    pub t: f64,
    pub point: [f64; 3],
    pub barycentric: [f64; 3],
    pub triangle: [u32; 3],
}

impl From<&MeshHit> for PickSummary {
    fn from(hit: &MeshHit) -> Self {
        Self {
            t: hit.hit.t,
            point: hit.hit.point.coords.into(),
            barycentric: hit.hit.barycentric,
            triangle: hit.triangle,
        }
    }
}

impl PickSummary {
    pub fn print(&self) {
        let [x, y, z] = self.point;
        println!("Hit triangle {:?} at t = {:.6}", self.triangle, self.t);
        println!("  Point: ({x:.6}, {y:.6}, {z:.6})");
        println!("  Barycentric: {:?}", self.barycentric);
    }
}
