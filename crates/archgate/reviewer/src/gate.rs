use std::sync::Arc;

use archgate_schema::SchemaAuthority;
use archgate_types::{Contract, Manifest, ReviewError, ReviewResult};
use tracing::{debug, info};

use crate::context::ReviewContext;
use crate::error::ReviewerError;
use crate::locked::compute_locked_sections;
use crate::rules::RuleTable;
use crate::stages::{
    DagStage, InvariantPresenceStage, ReferenceIntegrityStage, SchemaConformanceStage,
    WeakFormatStage,
};
use crate::traits::ReviewStage;

/// Default nesting/traversal guard for weak-format scanning and cycle search.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// The Reviewer Gate: 5-stage check pipeline.
///
/// Immutable after construction: one gate can judge any number of
/// contracts, concurrently, without locking.
pub struct ReviewerGate {
    max_errors: usize,
    max_depth: usize,
    schema: Arc<SchemaAuthority>,
    stages: Vec<Box<dyn ReviewStage>>,
    rule_table: RuleTable,
}

impl ReviewerGate {
    /// Build the pipeline described by `manifest` with the default depth guard.
    pub fn new(manifest: &Manifest, schema: Arc<SchemaAuthority>) -> Result<Self, ReviewerError> {
        Self::with_max_depth(manifest, schema, DEFAULT_MAX_DEPTH)
    }

    pub fn with_max_depth(
        manifest: &Manifest,
        schema: Arc<SchemaAuthority>,
        max_depth: usize,
    ) -> Result<Self, ReviewerError> {
        if max_depth == 0 {
            return Err(ReviewerError::InvalidMaxDepth);
        }

        let stages: Vec<Box<dyn ReviewStage>> = vec![
            Box::new(SchemaConformanceStage::new(Arc::clone(&schema))),
            Box::new(InvariantPresenceStage::new()),
            Box::new(ReferenceIntegrityStage::new()?),
            Box::new(WeakFormatStage::new(
                &manifest.weak_format_allowlists,
                max_depth,
            )?),
            Box::new(DagStage::new(max_depth)),
        ];

        debug!(
            max_errors = manifest.max_errors,
            max_depth,
            stages = stages.len(),
            "Reviewer gate initialized"
        );

        Ok(Self {
            max_errors: manifest.max_errors,
            max_depth,
            schema,
            stages,
            rule_table: RuleTable::builtin(max_depth),
        })
    }

    /// Run every stage over `contract` and decide admissibility.
    ///
    /// Stages run in order. A stage is skipped once the collected count
    /// reaches the budget; a halting stage ends the run with no locked
    /// sections. Locked sections are computed over every collected error
    /// before the list is truncated to the budget.
    pub fn evaluate(&self, contract: &Contract) -> ReviewResult {
        let mut context = ReviewContext::new(contract, self.max_errors);
        let mut errors: Vec<ReviewError> = Vec::new();

        for stage in &self.stages {
            if context.budget_exhausted() {
                debug!(
                    stage = stage.stage_name(),
                    collected = context.collected,
                    "Error budget reached, skipping stage"
                );
                continue;
            }

            let result = stage.evaluate(&context);
            debug!(
                stage = stage.stage_name(),
                number = stage.stage_number(),
                check_id = %stage.check_id(),
                found = result.errors().len(),
                "Stage evaluated"
            );

            let halted = result.is_halt();
            errors.extend(result.into_errors());
            context.collected = errors.len();

            if halted {
                errors.truncate(self.max_errors);
                info!(
                    stage = stage.stage_name(),
                    error_count = errors.len(),
                    "Pipeline halted"
                );
                return ReviewResult {
                    admissible: false,
                    errors,
                    locked_sections: Default::default(),
                };
            }
        }

        let locked_sections = compute_locked_sections(contract, &errors);
        errors.truncate(self.max_errors);
        let admissible = errors.is_empty();

        info!(
            admissible,
            error_count = errors.len(),
            locked = locked_sections.len(),
            "Review complete"
        );

        ReviewResult {
            admissible,
            errors,
            locked_sections,
        }
    }

    /// Language-neutral description of the enforced rules.
    pub fn rule_table(&self) -> &RuleTable {
        &self.rule_table
    }

    pub fn schema(&self) -> &Arc<SchemaAuthority> {
        &self.schema
    }

    pub fn max_errors(&self) -> usize {
        self.max_errors
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Stage names in pipeline order.
    pub fn stage_names(&self) -> Vec<&str> {
        self.stages.iter().map(|s| s.stage_name()).collect()
    }
}

impl std::fmt::Debug for ReviewerGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReviewerGate")
            .field("max_errors", &self.max_errors)
            .field("max_depth", &self.max_depth)
            .field("stages", &self.stage_names())
            .finish_non_exhaustive()
    }
}
