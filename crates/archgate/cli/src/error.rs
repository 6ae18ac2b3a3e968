//! CLI error types

use std::path::PathBuf;

use archgate_engine::EngineError;
use archgate_reviewer::ReviewerError;
use archgate_schema::SchemaError;
use thiserror::Error;

/// CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot read {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("plan is not valid JSON: {0}")]
    InvalidPlan(#[source] serde_json::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Governance engine error: {0}")]
    Engine(#[from] EngineError),

    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    #[error("Reviewer error: {0}")]
    Reviewer(#[from] ReviewerError),
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
