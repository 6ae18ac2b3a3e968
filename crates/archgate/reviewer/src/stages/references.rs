use archgate_types::{CheckId, ReviewError};
use regex::Regex;
use serde_json::Value;

use crate::context::{ReviewContext, StageResult};
use crate::error::ReviewerError;
use crate::rules::IDENTIFIER_PATTERN;
use crate::traits::ReviewStage;

/// Invariant domains whose keys are referenced elsewhere by name.
pub const REFERENCEABLE_DOMAINS: [&str; 2] = ["api_contracts", "data_schemas"];

/// Stage 3: Reference Integrity
///
/// Keys of referenceable domains must follow the identifier grammar.
pub struct ReferenceIntegrityStage {
    identifier: Regex,
}

impl ReferenceIntegrityStage {
    pub fn new() -> Result<Self, ReviewerError> {
        Ok(Self {
            identifier: Regex::new(IDENTIFIER_PATTERN)?,
        })
    }
}

impl ReviewStage for ReferenceIntegrityStage {
    fn stage_name(&self) -> &str {
        "Reference Integrity"
    }

    fn stage_number(&self) -> u8 {
        3
    }

    fn check_id(&self) -> CheckId {
        CheckId::Reference
    }

    fn evaluate(&self, context: &ReviewContext<'_>) -> StageResult {
        let mut errors = Vec::new();
        for domain in REFERENCEABLE_DOMAINS {
            let Some(entries) = context.contract.invariant(domain).and_then(Value::as_object) else {
                continue;
            };
            for key in entries.keys() {
                if !self.identifier.is_match(key) {
                    errors.push(
                        ReviewError::new(
                            CheckId::Reference,
                            format!("invariants.{}", domain),
                            format!(
                                "Invalid identifier format '{}'. Must match {}",
                                key, IDENTIFIER_PATTERN
                            ),
                        )
                        .with_reference(key.as_str()),
                    );
                }
            }
        }
        StageResult::from_findings(errors)
    }
}
