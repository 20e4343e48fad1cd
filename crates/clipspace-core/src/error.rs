//! Error types for clipspace.

use thiserror::Error;

/// Why a look-at configuration cannot produce an orthonormal camera basis.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BasisDefect {
    /// The eye and the target coincide, so there is no forward direction.
    #[error("eye and target coincide")]
    EyeEqualsTarget,
    /// The up vector is zero or parallel to the forward direction.
    #[error("up is parallel to forward")]
    UpParallelToForward,
}

/// The main error type for clipspace operations.
#[derive(Error, Debug)]
pub enum ClipspaceError {
    /// A projection or camera parameter is outside its valid range.
    #[error("invalid parameter '{name}' = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// The camera basis cannot be built from the given eye/target/up.
    #[error("degenerate camera basis: {0}")]
    DegenerateBasis(BasisDefect),

    /// A wireframe edge refers to a node that does not exist.
    #[error("edge {edge} references node {index}, but only {len} nodes exist")]
    EdgeOutOfRange { edge: usize, index: u32, len: usize },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ClipspaceError {
    /// Shorthand for a [`ClipspaceError::InvalidParameter`].
    pub fn invalid(name: &'static str, value: f64, reason: &'static str) -> Self {
        ClipspaceError::InvalidParameter {
            name,
            value,
            reason,
        }
    }
}

/// A specialized Result type for clipspace operations.
pub type Result<T> = std::result::Result<T, ClipspaceError>;
