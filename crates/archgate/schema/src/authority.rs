use archgate_canon::{hash, Sha256Digest};
use serde_json::Value;
use tracing::debug;

use crate::definition::contract_schema;
use crate::error::SchemaError;
use crate::validator::{JsonSchemaValidator, StructuralValidator, Violation};

/// Schema Authority: owner of the contract schema and its version.
///
/// The version is derived from the definition itself at construction: a
/// contract cannot claim a version the running authority does not compute.
pub struct SchemaAuthority {
    definition: Value,
    version: Sha256Digest,
    validator: Box<dyn StructuralValidator>,
}

impl SchemaAuthority {
    /// Authority over the built-in contract schema.
    pub fn new() -> Result<Self, SchemaError> {
        Self::from_definition(contract_schema())
    }

    /// Authority over an arbitrary draft-7 definition.
    pub fn from_definition(definition: Value) -> Result<Self, SchemaError> {
        let validator = JsonSchemaValidator::new(&definition)?;
        Self::with_validator(definition, validator)
    }

    /// Authority using a caller-supplied structural validator.
    pub fn with_validator(
        definition: Value,
        validator: impl StructuralValidator + 'static,
    ) -> Result<Self, SchemaError> {
        let version = hash(&definition)?;
        debug!(schema_version = %version, "Schema authority initialized");
        Ok(Self {
            definition,
            version,
            validator: Box::new(validator),
        })
    }

    pub fn definition(&self) -> &Value {
        &self.definition
    }

    /// SHA-256 of the canonical schema definition.
    pub fn version_hash(&self) -> Sha256Digest {
        self.version
    }

    /// True when `declared` is exactly the hex form of [`Self::version_hash`].
    pub fn accepts_version(&self, declared: Option<&Value>) -> bool {
        declared
            .and_then(Value::as_str)
            .is_some_and(|v| v == self.version.to_hex())
    }

    /// Structural violations of `document`, at most `limit` of them.
    pub fn validate(&self, document: &Value, limit: usize) -> Vec<Violation> {
        self.validator.violations(document, limit)
    }
}

impl std::fmt::Debug for SchemaAuthority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemaAuthority")
            .field("version", &self.version)
            .finish_non_exhaustive()
    }
}
