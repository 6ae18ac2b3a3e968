//! Engine error types.
//!
//! Only authority construction and canonicalization fail as errors; plan
//! defects are reported inside the verdict.

use std::path::PathBuf;

use archgate_canon::CanonError;
use archgate_reviewer::ReviewerError;
use archgate_schema::SchemaError;
use archgate_types::ManifestError;
use thiserror::Error;

/// Errors that can occur while building or running the governance engine.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The manifest file could not be read.
    #[error("cannot read manifest {}: {source}", path.display())]
    ManifestIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The manifest could not be parsed or is semantically invalid.
    #[error("invalid manifest: {0}")]
    Manifest(#[from] ManifestError),

    /// The reviewer rule file could not be read.
    #[error("cannot read reviewer rules {}: {source}", path.display())]
    RuleSourceIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The schema authority could not be constructed.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// The reviewer gate could not be constructed.
    #[error("reviewer construction failed: {0}")]
    Reviewer(#[from] ReviewerError),

    /// A value could not be canonicalized for hashing.
    #[error("canonicalization failed: {0}")]
    Canon(#[from] CanonError),
}
