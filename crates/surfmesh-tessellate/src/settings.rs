//! Sampling settings shared by every mesh builder.

use serde::{Deserialize, Serialize};

use crate::error::{MeshError, Result};

/// How grid cells are emitted in the index list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FaceTopology {
    /// Two triangles per cell, split along the `a -> b+1` diagonal.
    #[default]
    Triangles,
    /// One quad per cell, `[a, a+1, b+1, b]`.
    Quads,
}

impl FaceTopology {
    /// Indices per face.
    pub fn arity(self) -> usize {
        match self {
            Self::Triangles => 3,
            Self::Quads => 4,
        }
    }
}

/// Grid resolution and texture mapping for a mesh build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeshSettings {
    /// Subdivisions along u.
    pub slices: u32,
    /// Subdivisions along v.
    pub stacks: u32,
    /// Texture repeat along u (s runs `0..=s_max`).
    pub s_max: f64,
    /// Texture repeat along v (t runs `0..=t_max`).
    pub t_max: f64,
    /// Face layout of the generated index list.
    pub topology: FaceTopology,
}

impl Default for MeshSettings {
    fn default() -> Self {
        Self {
            slices: 32,
            stacks: 32,
            s_max: 1.0,
            t_max: 1.0,
            topology: FaceTopology::Triangles,
        }
    }
}

impl MeshSettings {
    /// Settings with the given resolution and default texture mapping.
    pub fn new(slices: u32, stacks: u32) -> Self {
        Self {
            slices,
            stacks,
            ..Self::default()
        }
    }

    /// Switch to quad output.
    pub fn with_quads(mut self) -> Self {
        self.topology = FaceTopology::Quads;
        self
    }

    /// Reject settings that would divide by zero or index past `u32`.
    pub fn validate(&self) -> Result<()> {
        if self.slices == 0 {
            return Err(MeshError::ZeroSlices);
        }
        if self.stacks == 0 {
            return Err(MeshError::ZeroStacks);
        }
        let repeat_ok = |x: f64| x.is_finite() && x > 0.0;
        if !repeat_ok(self.s_max) || !repeat_ok(self.t_max) {
            return Err(MeshError::InvalidTextureRepeat {
                s_max: self.s_max,
                t_max: self.t_max,
            });
        }
        let vertices = self.grid_vertex_count();
        if vertices > u32::MAX as u64 {
            return Err(MeshError::TooLarge { vertices });
        }
        Ok(())
    }

    /// `(slices + 1) * (stacks + 1)`.
    pub fn grid_vertex_count(&self) -> u64 {
        (self.slices as u64 + 1) * (self.stacks as u64 + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_valid() {
        let s = MeshSettings::default();
        assert!(s.validate().is_ok());
        assert_eq!(s.grid_vertex_count(), 33 * 33);
    }

    #[test]
    fn test_zero_resolution_rejected() {
        assert_eq!(MeshSettings::new(0, 4).validate(), Err(MeshError::ZeroSlices));
        assert_eq!(MeshSettings::new(4, 0).validate(), Err(MeshError::ZeroStacks));
    }

    #[test]
    fn test_texture_repeat_rejected() {
        let s = MeshSettings {
            s_max: f64::NAN,
            ..MeshSettings::default()
        };
        assert!(matches!(
            s.validate(),
            Err(MeshError::InvalidTextureRepeat { .. })
        ));
    }

    #[test]
    fn test_oversized_grid_rejected() {
        let s = MeshSettings::new(u32::MAX, u32::MAX);
        assert!(matches!(s.validate(), Err(MeshError::TooLarge { .. })));
    }
}
