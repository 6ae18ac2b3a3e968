//! Governance verdict events.
//!
//! A verdict is the terminal artifact of one evaluation: either the plan is
//! frozen verbatim under a content address, or it is rejected with enough
//! structured detail to locate every reported defect.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;

use crate::review::ReviewError;

/// Remediation instruction attached to ordinary plan rejections.
pub const REMEDIATION_PLAN_DEFECT: &str =
    "Planner must correct errors without modifying locked sections.";

/// Remediation instruction attached to governance configuration failures.
pub const REMEDIATION_GOVERNANCE_CONFIG: &str =
    "SYSTEM ERROR: The Governance Manifest requires fields not present in the plan structure.";

/// Outcome class reported alongside the event type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerdictStatus {
    Admissible,
    Rejected,
    FailGovernanceConfig,
}

impl VerdictStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admissible => "ADMISSIBLE",
            Self::Rejected => "REJECTED",
            Self::FailGovernanceConfig => "FAIL_GOVERNANCE_CONFIG",
        }
    }
}

impl std::fmt::Display for VerdictStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single externally observable result of an evaluation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event_type")]
pub enum VerdictEvent {
    #[serde(rename = "PLAN_FROZEN")]
    Frozen(FrozenPlan),
    #[serde(rename = "PLAN_REJECTED")]
    Rejected(RejectedPlan),
}

/// Payload of a `PLAN_FROZEN` event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FrozenPlan {
    /// Unix seconds.
    pub timestamp: i64,
    pub governance_version: String,
    /// SHA-256 over the canonical form of the frozen contract.
    pub plan_hash: String,
    pub schema_version: Value,
    pub status: VerdictStatus,
    pub authority_granted: bool,
    pub frozen_artifact: Value,
}

/// Payload of a `PLAN_REJECTED` event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RejectedPlan {
    /// Unix seconds.
    pub timestamp: i64,
    pub governance_version: String,
    pub status: VerdictStatus,
    pub authority_granted: bool,
    pub error_count: usize,
    pub errors: Vec<ReviewError>,
    pub locked_sections: BTreeSet<String>,
    pub remediation: String,
}

impl VerdictEvent {
    pub fn frozen(
        timestamp: i64,
        governance_version: impl Into<String>,
        plan_hash: impl Into<String>,
        artifact: Value,
    ) -> Self {
        let schema_version = artifact
            .get("schema_version")
            .cloned()
            .unwrap_or(Value::Null);
        Self::Frozen(FrozenPlan {
            timestamp,
            governance_version: governance_version.into(),
            plan_hash: plan_hash.into(),
            schema_version,
            status: VerdictStatus::Admissible,
            authority_granted: true,
            frozen_artifact: artifact,
        })
    }

    pub fn rejected(
        timestamp: i64,
        governance_version: impl Into<String>,
        status: VerdictStatus,
        errors: Vec<ReviewError>,
        locked_sections: BTreeSet<String>,
        remediation: impl Into<String>,
    ) -> Self {
        Self::Rejected(RejectedPlan {
            timestamp,
            governance_version: governance_version.into(),
            status,
            authority_granted: false,
            error_count: errors.len(),
            errors,
            locked_sections,
            remediation: remediation.into(),
        })
    }

    pub fn event_type(&self) -> &'static str {
        match self {
            Self::Frozen(_) => "PLAN_FROZEN",
            Self::Rejected(_) => "PLAN_REJECTED",
        }
    }

    pub fn authority_granted(&self) -> bool {
        match self {
            Self::Frozen(f) => f.authority_granted,
            Self::Rejected(r) => r.authority_granted,
        }
    }

    pub fn status(&self) -> VerdictStatus {
        match self {
            Self::Frozen(f) => f.status,
            Self::Rejected(r) => r.status,
        }
    }

    pub fn governance_version(&self) -> &str {
        match self {
            Self::Frozen(f) => &f.governance_version,
            Self::Rejected(r) => &r.governance_version,
        }
    }

    pub fn timestamp(&self) -> i64 {
        match self {
            Self::Frozen(f) => f.timestamp,
            Self::Rejected(r) => r.timestamp,
        }
    }

    pub fn plan_hash(&self) -> Option<&str> {
        match self {
            Self::Frozen(f) => Some(&f.plan_hash),
            Self::Rejected(_) => None,
        }
    }

    /// Reported defects; empty for frozen plans.
    pub fn errors(&self) -> &[ReviewError] {
        match self {
            Self::Frozen(_) => &[],
            Self::Rejected(r) => &r.errors,
        }
    }

    pub fn locked_sections(&self) -> Option<&BTreeSet<String>> {
        match self {
            Self::Frozen(_) => None,
            Self::Rejected(r) => Some(&r.locked_sections),
        }
    }

    /// Process exit code when the verdict is the result of a command.
    pub fn exit_code(&self) -> u8 {
        if self.authority_granted() {
            0
        } else {
            1
        }
    }
}
