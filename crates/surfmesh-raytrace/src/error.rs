//! Error types for picking.

use thiserror::Error;

/// Errors raised when the arrays handed to a picking routine are inconsistent.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PickError {
    /// The point array is not a whole number of xyz triples.
    #[error("point array of {0} floats is not a multiple of 3")]
    MalformedPointArray(usize),

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

    /// The grid layout needs more points than were supplied.
    #[error("grid needs {needed} points, got {available}")]
    GridOutOfRange {
        /// Points the grid addresses.
        needed: usize,
        /// Points available.
        available: usize,
    },
}

/// Result type for picking operations.
pub type Result<T> = std::result::Result<T, PickError>;
