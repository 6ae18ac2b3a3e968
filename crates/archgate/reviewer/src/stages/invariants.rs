use archgate_types::{CheckId, ReviewError};
use serde_json::Value;

use crate::context::{ReviewContext, StageResult};
use crate::traits::ReviewStage;

/// Stage 2: Invariant Presence
///
/// Every declared invariant domain must carry content.
#[derive(Debug, Default)]
pub struct InvariantPresenceStage;

impl InvariantPresenceStage {
    pub fn new() -> Self {
        Self
    }
}

fn is_empty_domain(content: &Value) -> bool {
    match content {
        Value::Null => true,
        Value::String(text) => text.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(entries) => entries.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

impl ReviewStage for InvariantPresenceStage {
    fn stage_name(&self) -> &str {
        "Invariant Presence"
    }

    fn stage_number(&self) -> u8 {
        2
    }

    fn check_id(&self) -> CheckId {
        CheckId::Invariant
    }

    fn evaluate(&self, context: &ReviewContext<'_>) -> StageResult {
        let Some(invariants) = context.contract.invariants() else {
            return StageResult::Pass;
        };

        // Domains are reported in the order the contract declares them.
        let errors = invariants
            .iter()
            .filter(|(_, content)| is_empty_domain(content))
            .map(|(domain, _)| {
                ReviewError::new(
                    CheckId::Invariant,
                    format!("invariants.{}", domain),
                    "Domain is declared but empty. Must have at least one entry/character.",
                )
            })
            .collect();
        StageResult::from_findings(errors)
    }
}
