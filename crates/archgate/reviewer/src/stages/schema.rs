use std::sync::Arc;

use archgate_schema::SchemaAuthority;
use archgate_types::contract::SCHEMA_VERSION;
use archgate_types::{CheckId, ReviewError};
use serde_json::Value;

use crate::context::{ReviewContext, StageResult};
use crate::traits::ReviewStage;

const STRUCTURE_SECTION: &str = "structure";

/// Stage 1: Schema Conformance
///
/// Checks the declared `schema_version` against the authority, then validates
/// structure. Any failure halts the pipeline: a contract with an untrusted
/// shape cannot be inspected further.
pub struct SchemaConformanceStage {
    authority: Arc<SchemaAuthority>,
}

impl SchemaConformanceStage {
    pub fn new(authority: Arc<SchemaAuthority>) -> Self {
        Self { authority }
    }
}

fn describe_declared(declared: Option<&Value>) -> String {
    match declared {
        Some(Value::String(version)) => version.clone(),
        Some(other) => other.to_string(),
        None => "null".to_string(),
    }
}

impl ReviewStage for SchemaConformanceStage {
    fn stage_name(&self) -> &str {
        "Schema Conformance"
    }

    fn stage_number(&self) -> u8 {
        1
    }

    fn check_id(&self) -> CheckId {
        CheckId::Schema
    }

    fn evaluate(&self, context: &ReviewContext<'_>) -> StageResult {
        let declared = context.contract.schema_version();
        if !self.authority.accepts_version(declared) {
            return StageResult::Halt(vec![ReviewError::new(
                CheckId::Schema,
                SCHEMA_VERSION,
                format!(
                    "Version mismatch. Expected {}, got {}",
                    self.authority.version_hash(),
                    describe_declared(declared)
                ),
            )]);
        }

        let errors: Vec<ReviewError> = self
            .authority
            .validate(context.contract.as_value(), context.remaining_budget())
            .into_iter()
            .map(|violation| {
                ReviewError::new(CheckId::Schema, STRUCTURE_SECTION, violation.message)
                    .with_reference(violation.path)
            })
            .collect();

        if errors.is_empty() {
            StageResult::Pass
        } else {
            StageResult::Halt(errors)
        }
    }
}
