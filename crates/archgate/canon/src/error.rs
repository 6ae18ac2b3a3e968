//! Canonicalization error types.

use thiserror::Error;

/// Failures that prevent a value from being content-addressed.
///
/// These are never recovered from by coercion: a value that cannot be
/// canonicalized cannot be hashed.
#[derive(Debug, Error)]
pub enum CanonError {
    /// The value could not be represented as JSON.
    #[error("canonicalization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The value is nested deeper than the encoder accepts.
    #[error("canonicalization failed: nesting exceeds {0} levels")]
    DepthExceeded(usize),

    /// A number has no finite IEEE-754 representation.
    #[error("canonicalization failed: non-finite number")]
    NonFiniteNumber,
}

#[derive(Debug, Error)]
pub enum DigestParseError {
    #[error("invalid digest length: {0} (expected 64 hex characters)")]
    InvalidLength(usize),
    #[error("invalid hex in digest: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}
