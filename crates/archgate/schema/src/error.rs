//! Schema Authority error types.

use archgate_canon::CanonError;
use thiserror::Error;

/// Errors constructing the Schema Authority.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The schema definition is not a valid draft-7 schema.
    #[error("invalid schema definition: {0}")]
    InvalidDefinition(String),

    /// The schema definition could not be canonicalized for versioning.
    #[error("schema versioning failed: {0}")]
    Canon(#[from] CanonError),
}
