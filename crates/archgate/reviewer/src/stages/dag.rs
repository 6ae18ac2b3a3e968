use archgate_types::contract::BUILD_DAG;
use archgate_types::{CheckId, ReviewError};

use crate::context::{ReviewContext, StageResult};
use crate::dag::{CycleSearch, DagValidator, UndefinedReference};
use crate::traits::ReviewStage;

/// Stage 5: Dependency Graph Validation
///
/// Phase one requires every node and target to be a declared build
/// dependency; only a fully defined graph is searched for cycles.
pub struct DagStage {
    max_depth: usize,
}

impl DagStage {
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }
}

fn undefined_error(reference: UndefinedReference) -> ReviewError {
    match reference {
        UndefinedReference::Node(node) => ReviewError::new(
            CheckId::Dag,
            BUILD_DAG,
            format!("DAG node '{}' is not defined in 'build_dependencies'.", node),
        )
        .with_reference(node),
        UndefinedReference::Target { node, target } => ReviewError::new(
            CheckId::Dag,
            BUILD_DAG,
            format!(
                "DAG target '{}' (referenced by '{}') is not defined in 'build_dependencies'.",
                target, node
            ),
        )
        .with_reference(target),
    }
}

impl ReviewStage for DagStage {
    fn stage_name(&self) -> &str {
        "Dependency Graph Validation"
    }

    fn stage_number(&self) -> u8 {
        5
    }

    fn check_id(&self) -> CheckId {
        CheckId::Dag
    }

    fn evaluate(&self, context: &ReviewContext<'_>) -> StageResult {
        let Some(dag) = context.contract.build_dag() else {
            return StageResult::Pass;
        };
        let validator = DagValidator::new(dag);
        if validator.is_empty() {
            return StageResult::Pass;
        }

        let defined = context.contract.build_dependency_names();
        let undefined = validator.undefined_references(&defined);
        if !undefined.is_empty() {
            return StageResult::Findings(undefined.into_iter().map(undefined_error).collect());
        }

        match validator.find_cycle(self.max_depth) {
            CycleSearch::Acyclic => StageResult::Pass,
            CycleSearch::Cycle { root, from, to } => StageResult::Findings(vec![ReviewError::new(
                CheckId::Dag,
                BUILD_DAG,
                format!(
                    "Cycle detected involving node '{}' (edge '{}' -> '{}')",
                    root, from, to
                ),
            )
            .with_reference(root)]),
            CycleSearch::DepthExceeded { root, limit } => {
                StageResult::Findings(vec![ReviewError::new(
                    CheckId::Dag,
                    BUILD_DAG,
                    format!(
                        "Dependency chain from node '{}' exceeds the maximum depth of {}",
                        root, limit
                    ),
                )
                .with_reference(root)])
            }
        }
    }
}
