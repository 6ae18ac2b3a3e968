//! Manifest error types.

use thiserror::Error;

/// Errors raised while interpreting a governance manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// The manifest document does not match the expected shape.
    #[error("malformed manifest: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The manifest document is not a JSON object.
    #[error("manifest must be a JSON object, found {0}")]
    NotAnObject(&'static str),

    /// The error budget must allow at least one error.
    #[error("max_errors must be a positive integer, got {0}")]
    InvalidMaxErrors(usize),
}
