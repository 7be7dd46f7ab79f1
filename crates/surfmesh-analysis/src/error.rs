//! Error types for mesh analysis.

use thiserror::Error;

/// Errors that can occur while analysing a point array.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// No points were supplied.
    #[error("point set is empty")]
    EmptyPointSet,

    /// The array length is not a multiple of the expected stride.
    #[error("array of {len} floats is not a multiple of {stride}")]
    MalformedPointArray {
        /// Array length.
        len: usize,
        /// Floats per element (3 per point, 9 per soup triangle).
        stride: usize,
    },

    /// The index list is not a whole number of triangles.
    #[error("index list of {0} entries is not a multiple of 3")]
    IndexArity(usize),

    /// An index references a point that does not exist.
    #[error("index {index} out of range for {point_count} points")]
    IndexOutOfRange {
        /// Offending index.
        index: u32,
        /// Number of points.
        point_count: usize,
    },
}

/// Result type for analysis operations.
pub type Result<T> = std::result::Result<T, AnalysisError>;
