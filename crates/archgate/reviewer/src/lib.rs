#![deny(unsafe_code)]
//! # archgate-reviewer
//!
//! The Reviewer Gate: a fixed, ordered pipeline of checks over a candidate
//! architecture contract.
//!
//! Stages:
//! 1. Schema conformance (`RG-SCHEMA-001`), halts the pipeline on failure
//! 2. Invariant presence (`RG-INVARIANT-002`)
//! 3. Reference/identifier integrity (`RG-REFERENCE-003`)
//! 4. Weak-format validation (`RG-WEAK-FORMAT-005`)
//! 5. Dependency graph validation (`RG-DAG-004`)
//!
//! A stage is skipped once the collected error count reaches the manifest's
//! budget. After the pipeline, the locked-section policy decides which parts
//! of the contract remain trustworthy.

pub mod context;
pub mod dag;
pub mod error;
pub mod gate;
pub mod locked;
pub mod rules;
pub mod stages;
pub mod traits;

pub use context::{ReviewContext, StageResult};
pub use dag::{CycleSearch, DagValidator, UndefinedReference};
pub use error::ReviewerError;
pub use gate::{ReviewerGate, DEFAULT_MAX_DEPTH};
pub use locked::compute_locked_sections;
pub use rules::{RuleDescriptor, RuleTable, RULE_TABLE_FORMAT};
pub use traits::ReviewStage;
