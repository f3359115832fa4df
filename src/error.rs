use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while generating or exporting a radial mesh.
#[derive(Debug, Error)]
pub enum MeshError {
    /// A mesh parameter failed validation. Raised before any computation.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("failed to write mesh to {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read mesh from {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The embedded-JSON wrapper (`name = ...;`) is missing or malformed.
    #[error("malformed mesh file: {0}")]
    Format(String),
}

impl MeshError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        MeshError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

pub type MeshResult<T> = Result<T, MeshError>;
