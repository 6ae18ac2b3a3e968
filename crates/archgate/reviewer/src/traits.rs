use archgate_types::CheckId;

use crate::context::{ReviewContext, StageResult};

/// ReviewStage trait: one check family of the reviewer pipeline.
///
/// Stages run sequentially in `stage_number` order. A stage never fails:
/// every defect it finds is returned as data in its [`StageResult`].
pub trait ReviewStage: Send + Sync {
    /// Human-readable name of this stage.
    fn stage_name(&self) -> &str;

    /// Position (1-5) in the pipeline.
    fn stage_number(&self) -> u8;

    /// Rule family this stage reports under.
    fn check_id(&self) -> CheckId;

    /// Inspect the contract.
    fn evaluate(&self, context: &ReviewContext<'_>) -> StageResult;
}
