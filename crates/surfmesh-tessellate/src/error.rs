//! Error types for mesh building.

use thiserror::Error;

/// Errors that can occur while building or validating a mesh.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeshError {
    /// `slices` was zero.
    #[error("slices must be at least 1")]
    ZeroSlices,

    /// `stacks` was zero.
    #[error("stacks must be at least 1")]
    ZeroStacks,

    /// Texture repeat counts must be finite and positive.
    #[error("invalid texture repeat: s_max={s_max}, t_max={t_max}")]
    InvalidTextureRepeat {
        /// Repeat along s.
        s_max: f64,
        /// Repeat along t.
        t_max: f64,
    },

    /// A builder dimension (radius, height, size) is not finite and positive.
    #[error("invalid {name}: {value}")]
    InvalidDimension {
        /// Dimension name.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// The requested grid has more vertices than a `u32` index can address.
    #[error("grid of {vertices} vertices exceeds the u32 index range")]
    TooLarge {
        /// Requested vertex count.
        vertices: u64,
    },

    /// Every sample of the surface evaluated to NaN or infinity.
    #[error("surface '{0}' produced no finite samples")]
    NoFiniteSamples(&'static str),

    /// A per-vertex attribute array has the wrong length.
    #[error("{attribute} has {actual} floats, expected {expected}")]
    AttributeLength {
        /// Attribute name.
        attribute: &'static str,
        /// Expected float count.
        expected: usize,
        /// Actual float count.
        actual: usize,
    },

    /// An index references a vertex that does not exist.
    #[error("index {index} out of range for {vertex_count} vertices")]
    IndexOutOfRange {
        /// Offending index.
        index: u32,
        /// Number of vertices in the mesh.
        vertex_count: usize,
    },

    /// The index list is not a whole number of faces.
    #[error("{len} indices is not a multiple of {arity}")]
    IndexArity {
        /// Index list length.
        len: usize,
        /// Indices per face.
        arity: usize,
    },
}

/// Result type for mesh operations.
pub type Result<T> = std::result::Result<T, MeshError>;

/// Check that a builder dimension is finite and strictly positive.
pub(crate) fn require_dimension(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(MeshError::InvalidDimension { name, value })
    }
}
