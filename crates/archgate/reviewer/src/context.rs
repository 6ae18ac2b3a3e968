use archgate_types::{Contract, ReviewError};

/// Per-evaluation view handed to every stage.
pub struct ReviewContext<'a> {
    pub contract: &'a Contract,
    /// Manifest error budget.
    pub max_errors: usize,
    /// Errors already collected by earlier stages.
    pub collected: usize,
}

impl<'a> ReviewContext<'a> {
    pub fn new(contract: &'a Contract, max_errors: usize) -> Self {
        Self {
            contract,
            max_errors,
            collected: 0,
        }
    }

    /// Room left in the error budget.
    pub fn remaining_budget(&self) -> usize {
        self.max_errors.saturating_sub(self.collected)
    }

    pub fn budget_exhausted(&self) -> bool {
        self.collected >= self.max_errors
    }
}

/// Result of a single stage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StageResult {
    /// No defects found.
    Pass,
    /// Defects found; later stages may still run.
    Findings(Vec<ReviewError>),
    /// Defects found that make the rest of the contract uninspectable.
    Halt(Vec<ReviewError>),
}

impl StageResult {
    /// `Pass` when `errors` is empty, `Findings` otherwise.
    pub fn from_findings(errors: Vec<ReviewError>) -> Self {
        if errors.is_empty() {
            Self::Pass
        } else {
            Self::Findings(errors)
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }

    pub fn is_halt(&self) -> bool {
        matches!(self, Self::Halt(_))
    }

    pub fn errors(&self) -> &[ReviewError] {
        match self {
            Self::Pass => &[],
            Self::Findings(errors) | Self::Halt(errors) => errors,
        }
    }

    pub fn into_errors(self) -> Vec<ReviewError> {
        match self {
            Self::Pass => Vec::new(),
            Self::Findings(errors) | Self::Halt(errors) => errors,
        }
    }
}
