//! Error types for surface construction.

use thiserror::Error;

/// Errors raised while turning a [`crate::SurfaceSpec`] into a surface.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SurfaceError {
    /// A size parameter is zero, negative, or not finite.
    #[error("invalid {name}: {value} (must be finite and positive)")]
    InvalidParameter {
        /// Parameter name as it appears in a `SurfaceSpec`.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
}

/// Result type for surface operations.
pub type Result<T> = std::result::Result<T, SurfaceError>;

/// Check that `value` is finite and strictly positive.
pub(crate) fn require_positive(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(SurfaceError::InvalidParameter { name, value })
    }
}
