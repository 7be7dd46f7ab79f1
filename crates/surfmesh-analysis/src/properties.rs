//! Surface area and enclosed volume.

use serde::Serialize;
use surfmesh_math::{point_at, Point3};

use crate::error::{AnalysisError, Result};

/// Area and volume of a triangle mesh.
///
/// The volume sums signed tetrahedra from the origin to every triangle
/// (divergence theorem) and takes the absolute value. It is only meaningful
/// for closed, consistently wound meshes; anything else gives a number
/// without complaint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct MeshProperties {
    /// Sum of triangle areas.
    pub surface_area: f64,
    /// Enclosed volume.
    pub volume: f64,
    /// Number of points in the source array.
    pub point_count: usize,
    /// Number of triangles.
    pub triangle_count: usize,
}

impl MeshProperties {
    /// Properties of a triangle soup: nine floats per triangle, no sharing.
    pub fn from_triangle_soup(points: &[f32]) -> Result<Self> {
        if points.len() % 9 != 0 {
            return Err(AnalysisError::MalformedPointArray {
                len: points.len(),
                stride: 9,
            });
        }
        let mut props = Self {
            point_count: points.len() / 3,
            ..Self::default()
        };
        for t in 0..points.len() / 9 {
            props.add_triangle(
                &point_at(points, t * 3),
                &point_at(points, t * 3 + 1),
                &point_at(points, t * 3 + 2),
            );
        }
        Ok(props.finish())
    }

    /// Properties of an indexed triangle list over an xyz-interleaved array.
    pub fn from_indexed(points: &[f32], indices: &[u32]) -> Result<Self> {
        if points.len() % 3 != 0 {
            return Err(AnalysisError::MalformedPointArray {
                len: points.len(),
                stride: 3,
            });
        }
        if indices.len() % 3 != 0 {
            return Err(AnalysisError::IndexArity(indices.len()));
        }
        let point_count = points.len() / 3;
        if let Some(&index) = indices.iter().find(|&&i| i as usize >= point_count) {
            return Err(AnalysisError::IndexOutOfRange { index, point_count });
        }

        let mut props = Self {
            point_count,
            ..Self::default()
        };
        for tri in indices.chunks_exact(3) {
            props.add_triangle(
                &point_at(points, tri[0] as usize),
                &point_at(points, tri[1] as usize),
                &point_at(points, tri[2] as usize),
            );
        }
        Ok(props.finish())
    }

    fn add_triangle(&mut self, p1: &Point3, p2: &Point3, p3: &Point3) {
        self.volume += p1.coords.dot(&p2.coords.cross(&p3.coords)) / 6.0;
        self.surface_area += (p2 - p1).cross(&(p3 - p1)).norm() * 0.5;
        self.triangle_count += 1;
    }

    fn finish(mut self) -> Self {
        self.volume = self.volume.abs();
        self
    }
}
