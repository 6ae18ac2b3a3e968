use archgate_canon::CanonError;
use archgate_schema::SchemaError;
use thiserror::Error;

/// Errors constructing the reviewer gate. Plan defects are never errors.
#[derive(Debug, Error)]
pub enum ReviewerError {
    #[error("invalid rule pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("schema authority error: {0}")]
    Schema(#[from] SchemaError),

    #[error("rule table encoding failed: {0}")]
    RuleTable(#[from] CanonError),

    #[error("max_depth must be at least 1")]
    InvalidMaxDepth,
}
