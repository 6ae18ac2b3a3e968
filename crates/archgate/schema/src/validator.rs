use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::SchemaError;

/// A single structural violation: where it is and what is wrong.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// JSON pointer to the offending instance; `/` for the document root.
    pub path: String,
    pub message: String,
}

/// Structural-schema validation capability.
///
/// Implementations yield violations in a stable order and stop after
/// `limit` entries.
pub trait StructuralValidator: Send + Sync {
    fn violations(&self, document: &Value, limit: usize) -> Vec<Violation>;
}

/// Draft-7 JSON Schema validator.
pub struct JsonSchemaValidator {
    inner: jsonschema::Validator,
}

impl JsonSchemaValidator {
    pub fn new(schema: &Value) -> Result<Self, SchemaError> {
        let inner = jsonschema::options()
            .with_draft(jsonschema::Draft::Draft7)
            .build(schema)
            .map_err(|e| SchemaError::InvalidDefinition(e.to_string()))?;
        Ok(Self { inner })
    }
}

impl StructuralValidator for JsonSchemaValidator {
    fn violations(&self, document: &Value, limit: usize) -> Vec<Violation> {
        self.inner
            .iter_errors(document)
            .take(limit)
            .map(|err| {
                let pointer = err.instance_path.to_string();
                Violation {
                    path: if pointer.is_empty() { "/".to_string() } else { pointer },
                    message: err.to_string(),
                }
            })
            .collect()
    }
}

impl std::fmt::Debug for JsonSchemaValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonSchemaValidator").finish_non_exhaustive()
    }
}
