//! Review outcomes: the check taxonomy, individual defects, and the gate result.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Stable identifiers for every rule that can reject a plan.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CheckId {
    #[serde(rename = "RG-SCHEMA-001")]
    Schema,
    #[serde(rename = "RG-INVARIANT-002")]
    Invariant,
    #[serde(rename = "RG-REFERENCE-003")]
    Reference,
    #[serde(rename = "RG-DAG-004")]
    Dag,
    #[serde(rename = "RG-WEAK-FORMAT-005")]
    WeakFormat,
    /// The manifest references sections a contract cannot expose.
    #[serde(rename = "SYS-CONSISTENCY")]
    SysConsistency,
}

impl CheckId {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Schema => "RG-SCHEMA-001",
            Self::Invariant => "RG-INVARIANT-002",
            Self::Reference => "RG-REFERENCE-003",
            Self::Dag => "RG-DAG-004",
            Self::WeakFormat => "RG-WEAK-FORMAT-005",
            Self::SysConsistency => "SYS-CONSISTENCY",
        }
    }
}

impl fmt::Display for CheckId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single defect found in a contract. Immutable once produced.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewError {
    pub check_id: CheckId,
    /// Dotted path of the offending region, e.g. `invariants.api_contracts`.
    pub section: String,
    pub message: String,
    /// The offending key or value, when one can be named.
    pub reference: Option<String>,
}

impl ReviewError {
    pub fn new(check_id: CheckId, section: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            check_id,
            section: section.into(),
            message: message.into(),
            reference: None,
        }
    }

    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }
}

impl fmt::Display for ReviewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.check_id, self.section, self.message)?;
        if let Some(reference) = &self.reference {
            write!(f, " (ref: {})", reference)?;
        }
        Ok(())
    }
}

/// Outcome of running the reviewer gate over one contract.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewResult {
    pub admissible: bool,
    /// Ordered defects, truncated to the manifest's error budget.
    pub errors: Vec<ReviewError>,
    /// Sections proven untouched by every collected defect.
    pub locked_sections: BTreeSet<String>,
}

impl ReviewResult {
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn is_locked(&self, section: &str) -> bool {
        self.locked_sections.contains(section)
    }
}
