#![deny(unsafe_code)]
//! Shared types for the Archgate governance gate.
//!
//! This crate provides:
//! - **Manifest**: the operator-owned governance configuration ([`Manifest`], [`WeakFormatAllowlists`]).
//! - **Contract view**: read-only accessors over a candidate plan ([`Contract`]).
//! - **Review outcomes**: the check taxonomy and collected defects ([`CheckId`], [`ReviewError`], [`ReviewResult`]).
//! - **Verdict events**: the terminal, externally observable artifact ([`VerdictEvent`]).

pub mod contract;
pub mod error;
pub mod manifest;
pub mod review;
pub mod verdict;

// Re-exports for convenience.
pub use contract::Contract;
pub use error::ManifestError;
pub use manifest::{Manifest, WeakFormatAllowlists, DEFAULT_MAX_ERRORS, SECTION_WILDCARD};
pub use review::{CheckId, ReviewError, ReviewResult};
pub use verdict::{
    FrozenPlan, RejectedPlan, VerdictEvent, VerdictStatus, REMEDIATION_GOVERNANCE_CONFIG,
    REMEDIATION_PLAN_DEFECT,
};
