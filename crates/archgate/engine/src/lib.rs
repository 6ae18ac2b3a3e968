#![deny(unsafe_code)]
//! Governance Engine for architecture contracts.
//!
//! This crate provides:
//! - **Configuration** for where the authority comes from ([`EngineConfig`], [`RuleSource`]).
//! - **The engine** ([`GovernanceEngine`]): loads the manifest once, binds
//!   manifest, schema and reviewer rules into a governance version, and turns
//!   each contract into exactly one [`VerdictEvent`](archgate_types::VerdictEvent).
//! - **Error types** for authority construction and canonicalization failures ([`EngineError`]).
//!
//! Evaluation is a state machine with two terminal states:
//! `PRE_FLIGHT → REJECTED (consistency failure) | RUN_CHECKS → FROZEN | REJECTED`.

pub mod config;
pub mod engine;
pub mod error;

pub use config::{EngineConfig, RuleSource, DEFAULT_MANIFEST_PATH};
pub use engine::{GovernanceEngine, IN_MEMORY_MANIFEST_LABEL};
pub use error::EngineError;
