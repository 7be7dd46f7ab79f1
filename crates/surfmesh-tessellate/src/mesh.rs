//! Indexed mesh storage and the GPU vertex layout.

use bytemuck::{Pod, Zeroable};

use crate::error::{MeshError, Result};
use crate::settings::FaceTopology;

/// Shape of the regular `(slices + 1) × (stacks + 1)` vertex grid at the
/// front of a procedurally built mesh.
///
/// Vertex `(i, j)` lives at `i * (stacks + 1) + j`. Cell `(i, j)` spans
/// `a = (i, j)`, `a + 1`, `b = (i + 1, j)` and `b + 1`, split along `a -> b + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    /// Cells along u.
    pub slices: u32,
    /// Cells along v.
    pub stacks: u32,
}

impl GridLayout {
    /// Row-major vertex index of grid point `(i, j)`.
    #[inline]
    pub fn vertex_index(&self, i: u32, j: u32) -> u32 {
        i * (self.stacks + 1) + j
    }

    /// Number of grid vertices.
    pub fn vertex_count(&self) -> usize {
        (self.slices as usize + 1) * (self.stacks as usize + 1)
    }

    /// Number of grid cells.
    pub fn cell_count(&self) -> usize {
        self.slices as usize * self.stacks as usize
    }

    /// The two triangles of cell `(i, j)`: `(a, a+1, b+1)` and `(a, b+1, b)`.
    #[inline]
    pub fn cell_triangles(&self, i: u32, j: u32) -> [[u32; 3]; 2] {
        let a = self.vertex_index(i, j);
        let b = self.vertex_index(i + 1, j);
        [[a, a + 1, b + 1], [a, b + 1, b]]
    }

    /// Number of indices the grid cells occupy under `topology`.
    pub fn index_count(&self, topology: FaceTopology) -> usize {
        match topology {
            FaceTopology::Triangles => self.cell_count() * 6,
            FaceTopology::Quads => self.cell_count() * 4,
        }
    }
}

/// An indexed mesh with per-vertex attributes in flat `f32` arrays.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    /// Display name.
    pub name: String,
    /// `[x0, y0, z0, x1, ...]`.
    pub positions: Vec<f32>,
    /// Unit normals, same length as `positions`.
    pub normals: Vec<f32>,
    /// `[s0, t0, s1, t1, ...]`.
    pub tex_coords: Vec<f32>,
    /// Optional tangents, same length as `positions`.
    pub tangents: Option<Vec<f32>>,
    /// Optional bitangents, same length as `positions`.
    pub bitangents: Option<Vec<f32>>,
    /// Face indices, `topology.arity()` per face.
    pub indices: Vec<u32>,
    /// Face layout of `indices`.
    pub topology: FaceTopology,
    /// Grid shape, if the first vertices and indices form a regular grid.
    pub grid: Option<GridLayout>,
}

/// Flat attribute arrays as delivered by an importer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawArrays {
    /// xyz per vertex.
    pub positions: Vec<f32>,
    /// xyz per vertex.
    pub normals: Vec<f32>,
    /// st per vertex; zeros if absent.
    pub tex_coords: Option<Vec<f32>>,
    /// xyz per vertex, if the importer computed them.
    pub tangents: Option<Vec<f32>>,
    /// xyz per vertex, if the importer computed them.
    pub bitangents: Option<Vec<f32>>,
    /// Face indices, `topology.arity()` per face.
    pub indices: Vec<u32>,
}

impl Mesh {
    /// Create an empty mesh.
    pub fn new(name: impl Into<String>, topology: FaceTopology) -> Self {
        Self {
            name: name.into(),
            positions: Vec::new(),
            normals: Vec::new(),
            tex_coords: Vec::new(),
            tangents: None,
            bitangents: None,
            indices: Vec::new(),
            topology,
            grid: None,
        }
    }

    /// Wrap arrays produced by a file importer.
    ///
    /// Missing texture coordinates are filled with zeros; a missing tangent
    /// frame stays missing. The result is validated before it is returned.
    pub fn from_raw_arrays(
        name: impl Into<String>,
        arrays: RawArrays,
        topology: FaceTopology,
    ) -> Result<Self> {
        let RawArrays {
            positions,
            normals,
            tex_coords,
            tangents,
            bitangents,
            indices,
        } = arrays;
        let tex_coords = tex_coords.unwrap_or_else(|| vec![0.0; positions.len() / 3 * 2]);
        let mesh = Self {
            name: name.into(),
            positions,
            normals,
            tex_coords,
            tangents,
            bitangents,
            indices,
            topology,
            grid: None,
        };
        mesh.validate()?;
        Ok(mesh)
    }

    /// Check attribute lengths and index bounds.
    pub fn validate(&self) -> Result<()> {
        if self.positions.len() % 3 != 0 {
            return Err(MeshError::AttributeLength {
                attribute: "positions",
                expected: self.positions.len() / 3 * 3,
                actual: self.positions.len(),
            });
        }
        let n = self.vertex_count();
        check_len("normals", &self.normals, n * 3)?;
        check_len("tex_coords", &self.tex_coords, n * 2)?;
        if let Some(t) = &self.tangents {
            check_len("tangents", t, n * 3)?;
        }
        if let Some(b) = &self.bitangents {
            check_len("bitangents", b, n * 3)?;
        }

        let arity = self.topology.arity();
        if self.indices.len() % arity != 0 {
            return Err(MeshError::IndexArity {
                len: self.indices.len(),
                arity,
            });
        }
        if let Some(&index) = self.indices.iter().find(|&&i| i as usize >= n) {
            return Err(MeshError::IndexOutOfRange {
                index,
                vertex_count: n,
            });
        }
        Ok(())
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Number of faces (triangles or quads, per `topology`).
    pub fn face_count(&self) -> usize {
        self.indices.len() / self.topology.arity()
    }

    /// Number of triangles after splitting quads.
    pub fn triangle_count(&self) -> usize {
        match self.topology {
            FaceTopology::Triangles => self.face_count(),
            FaceTopology::Quads => self.face_count() * 2,
        }
    }

    /// Index list as triangles; quads are split along their first diagonal.
    pub fn triangle_indices(&self) -> Vec<u32> {
        match self.topology {
            FaceTopology::Triangles => self.indices.clone(),
            FaceTopology::Quads => split_quads(&self.indices),
        }
    }

    /// Triangles that lie outside the regular grid (cone caps, merged parts).
    ///
    /// Without a grid layout this is every triangle.
    pub fn extra_triangle_indices(&self) -> Vec<u32> {
        let start = self
            .grid
            .map_or(0, |g| g.index_count(self.topology).min(self.indices.len()));
        let tail = &self.indices[start..];
        match self.topology {
            FaceTopology::Triangles => tail.to_vec(),
            FaceTopology::Quads => split_quads(tail),
        }
    }

    /// Merge another mesh into this one.
    ///
    /// Mixed topologies fall back to triangles. Tangent frames survive only if
    /// both meshes carry them.
    pub fn merge(&mut self, other: &Mesh) {
        let offset = self.vertex_count() as u32;
        if self.topology != other.topology {
            self.indices = self.triangle_indices();
            self.topology = FaceTopology::Triangles;
        }
        let other_indices = if other.topology == self.topology {
            other.indices.clone()
        } else {
            other.triangle_indices()
        };

        self.tangents = merge_optional(self.tangents.take(), &other.tangents);
        self.bitangents = merge_optional(self.bitangents.take(), &other.bitangents);
        self.positions.extend_from_slice(&other.positions);
        self.normals.extend_from_slice(&other.normals);
        self.tex_coords.extend_from_slice(&other.tex_coords);
        self.indices
            .extend(other_indices.into_iter().map(|i| i + offset));
    }

    /// Interleave the attributes for upload. Missing tangents are zeroed.
    ///
    /// The mesh is validated first, since the fields are public and may have
    /// been edited since construction.
    pub fn interleaved(&self) -> Result<Vec<GpuVertex>> {
        self.validate()?;
        Ok((0..self.vertex_count())
            .map(|v| GpuVertex {
                position: triple(&self.positions, v),
                normal: triple(&self.normals, v),
                tex_coord: [self.tex_coords[v * 2], self.tex_coords[v * 2 + 1]],
                tangent: self.tangents.as_deref().map_or([0.0; 3], |t| triple(t, v)),
                bitangent: self
                    .bitangents
                    .as_deref()
                    .map_or([0.0; 3], |b| triple(b, v)),
            })
            .collect())
    }

    /// Raw bytes of the index buffer.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

/// One interleaved vertex as uploaded to the GPU.
///
/// ```text
/// @location(0) position:  vec3<f32>
/// @location(1) normal:    vec3<f32>
/// @location(2) tex_coord: vec2<f32>
/// @location(3) tangent:   vec3<f32>
/// @location(4) bitangent: vec3<f32>
/// ```
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct GpuVertex {
    /// Position.
    pub position: [f32; 3],
    /// Unit normal.
    pub normal: [f32; 3],
    /// Texture coordinate.
    pub tex_coord: [f32; 2],
    /// Tangent.
    pub tangent: [f32; 3],
    /// Bitangent.
    pub bitangent: [f32; 3],
}

/// Raw bytes of an interleaved vertex buffer.
pub fn vertex_bytes(vertices: &[GpuVertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}

fn check_len(attribute: &'static str, data: &[f32], expected: usize) -> Result<()> {
    if data.len() == expected {
        Ok(())
    } else {
        Err(MeshError::AttributeLength {
            attribute,
            expected,
            actual: data.len(),
        })
    }
}

fn split_quads(quads: &[u32]) -> Vec<u32> {
    quads
        .chunks_exact(4)
        .flat_map(|q| [q[0], q[1], q[2], q[0], q[2], q[3]])
        .collect()
}

fn merge_optional(mine: Option<Vec<f32>>, theirs: &Option<Vec<f32>>) -> Option<Vec<f32>> {
    match (mine, theirs) {
        (Some(mut a), Some(b)) => {
            a.extend_from_slice(b);
            Some(a)
        }
        _ => None,
    }
}

#[inline]
fn triple(flat: &[f32], v: usize) -> [f32; 3] {
    [flat[v * 3], flat[v * 3 + 1], flat[v * 3 + 2]]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_quad(topology: FaceTopology) -> Mesh {
        let indices = match topology {
            FaceTopology::Triangles => vec![0, 1, 2, 0, 2, 3],
            FaceTopology::Quads => vec![0, 1, 2, 3],
        };
        Mesh::from_raw_arrays(
            "quad",
            RawArrays {
                positions: vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 1.0, 0.0],
                normals: vec![0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0],
                indices,
                ..RawArrays::default()
            },
            topology,
        )
        .unwrap()
    }

    #[test]
    fn test_grid_cell_triangles() {
        let g = GridLayout {
            slices: 2,
            stacks: 3,
        };
        assert_eq!(g.vertex_count(), 12);
        assert_eq!(g.vertex_index(1, 2), 6);
        // a = (1, 0) = 4, b = (2, 0) = 8
        assert_eq!(g.cell_triangles(1, 0), [[4, 5, 9], [4, 9, 8]]);
        assert_eq!(g.index_count(FaceTopology::Quads), 24);
    }

    #[test]
    fn test_counts_and_split() {
        let quad = unit_quad(FaceTopology::Quads);
        assert_eq!(quad.vertex_count(), 4);
        assert_eq!(quad.face_count(), 1);
        assert_eq!(quad.triangle_count(), 2);
        assert_eq!(quad.triangle_indices(), vec![0, 1, 2, 0, 2, 3]);
        assert_eq!(quad.tex_coords.len(), 8);
    }

    #[test]
    fn test_validate_catches_bad_index() {
        let err = Mesh::from_raw_arrays(
            "bad",
            RawArrays {
                positions: vec![0.0; 9],
                normals: vec![0.0; 9],
                indices: vec![0, 1, 3],
                ..RawArrays::default()
            },
            FaceTopology::Triangles,
        )
        .unwrap_err();
        assert_eq!(
            err,
            MeshError::IndexOutOfRange {
                index: 3,
                vertex_count: 3
            }
        );
    }

    #[test]
    fn test_validate_catches_length_mismatch() {
        let err = Mesh::from_raw_arrays(
            "bad",
            RawArrays {
                positions: vec![0.0; 9],
                normals: vec![0.0; 6],
                indices: vec![0, 1, 2],
                ..RawArrays::default()
            },
            FaceTopology::Triangles,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            MeshError::AttributeLength {
                attribute: "normals",
                ..
            }
        ));

        let err = Mesh::from_raw_arrays(
            "bad",
            RawArrays {
                positions: vec![0.0; 9],
                normals: vec![0.0; 9],
                indices: vec![0, 1, 2, 0],
                ..RawArrays::default()
            },
            FaceTopology::Triangles,
        )
        .unwrap_err();
        assert_eq!(err, MeshError::IndexArity { len: 4, arity: 3 });
    }

    #[test]
    fn test_merge_offsets_and_mixes_topology() {
        let mut a = unit_quad(FaceTopology::Quads);
        let b = unit_quad(FaceTopology::Triangles);
        a.merge(&b);
        assert_eq!(a.topology, FaceTopology::Triangles);
        assert_eq!(a.vertex_count(), 8);
        assert_eq!(a.indices, vec![0, 1, 2, 0, 2, 3, 4, 5, 6, 4, 6, 7]);
        assert!(a.validate().is_ok());
    }

    #[test]
    fn test_interleaved_layout() {
        let quad = unit_quad(FaceTopology::Triangles);
        let verts = quad.interleaved().unwrap();
        assert_eq!(verts.len(), 4);
        assert_eq!(verts[2].position, [1.0, 1.0, 0.0]);
        assert_eq!(verts[2].tangent, [0.0; 3]);
        assert_eq!(std::mem::size_of::<GpuVertex>(), 56);
        assert_eq!(vertex_bytes(&verts).len(), 4 * 56);
        assert_eq!(quad.index_bytes().len(), 6 * 4);
    }

    #[test]
    fn test_interleaved_rejects_edited_mesh() {
        let mut quad = unit_quad(FaceTopology::Triangles);
        quad.tex_coords.truncate(6);
        assert!(matches!(
            quad.interleaved(),
            Err(MeshError::AttributeLength {
                attribute: "tex_coords",
                ..
            })
        ));

        let mut quad = unit_quad(FaceTopology::Triangles);
        quad.tangents = Some(vec![1.0, 0.0, 0.0]);
        assert!(quad.interleaved().is_err());
    }

    #[test]
    fn test_raw_arrays_carry_tangent_frame() {
        let tangents: Vec<f32> = [1.0, 0.0, 0.0].repeat(4);
        let bitangents: Vec<f32> = [0.0, 1.0, 0.0].repeat(4);
        let quad = Mesh::from_raw_arrays(
            "quad",
            RawArrays {
                positions: vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 1.0, 0.0],
                normals: [0.0, 0.0, 1.0].repeat(4),
                tangents: Some(tangents.clone()),
                bitangents: Some(bitangents),
                indices: vec![0, 1, 2, 0, 2, 3],
                ..RawArrays::default()
            },
            FaceTopology::Triangles,
        )
        .unwrap();
        assert_eq!(quad.tangents.as_deref(), Some(tangents.as_slice()));
        let verts = quad.interleaved().unwrap();
        assert_eq!(verts[3].tangent, [1.0, 0.0, 0.0]);
        assert_eq!(verts[3].bitangent, [0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_raw_arrays_reject_short_tangents() {
        let err = Mesh::from_raw_arrays(
            "bad",
            RawArrays {
                positions: vec![0.0; 9],
                normals: vec![0.0; 9],
                tangents: Some(vec![0.0; 6]),
                indices: vec![0, 1, 2],
                ..RawArrays::default()
            },
            FaceTopology::Triangles,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            MeshError::AttributeLength {
                attribute: "tangents",
                ..
            }
        ));

        let err = Mesh::from_raw_arrays(
            "bad",
            RawArrays {
                positions: vec![0.0; 9],
                normals: vec![0.0; 9],
                bitangents: Some(vec![0.0; 12]),
                indices: vec![0, 1, 2],
                ..RawArrays::default()
            },
            FaceTopology::Triangles,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            MeshError::AttributeLength {
                attribute: "bitangents",
                ..
            }
        ));
    }

    #[test]
    fn test_extra_triangles_skip_grid() {
        let mut quad = unit_quad(FaceTopology::Triangles);
        quad.grid = Some(GridLayout {
            slices: 1,
            stacks: 1,
        });
        assert!(quad.extra_triangle_indices().is_empty());
        quad.grid = None;
        assert_eq!(quad.extra_triangle_indices().len(), 6);
    }
}
