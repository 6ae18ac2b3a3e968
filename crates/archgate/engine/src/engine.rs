use std::path::Path;
use std::sync::Arc;

use archgate_canon::{compute_governance_version, hash, Sha256Digest};
use archgate_reviewer::ReviewerGate;
use archgate_schema::SchemaAuthority;
use archgate_types::{
    CheckId, Contract, Manifest, ManifestError, ReviewError, VerdictEvent, VerdictStatus,
    REMEDIATION_GOVERNANCE_CONFIG, REMEDIATION_PLAN_DEFECT,
};
use chrono::{DateTime, Utc};
use serde_json::Value;
use tracing::{info, warn};

use crate::config::{EngineConfig, RuleSource};
use crate::error::EngineError;

/// Reference reported by consistency failures when the manifest has no file name.
pub const IN_MEMORY_MANIFEST_LABEL: &str = "manifest";

const CONSISTENCY_SECTION: &str = "manifest";

/// The Governance Engine, the single authority that issues verdicts.
///
/// Everything is resolved at construction: the manifest, the reviewer gate
/// and the governance version. No engine exists with a partially loaded
/// authority, and evaluation never mutates the engine.
pub struct GovernanceEngine {
    manifest_document: Value,
    manifest: Manifest,
    manifest_label: String,
    gate: ReviewerGate,
    rule_text: String,
    governance_version: Sha256Digest,
}

impl GovernanceEngine {
    /// Load the manifest and rule source named by `config`.
    pub fn new(config: &EngineConfig) -> Result<Self, EngineError> {
        let path = &config.manifest_path;
        let text = std::fs::read_to_string(path).map_err(|source| EngineError::ManifestIo {
            path: path.clone(),
            source,
        })?;
        let document: Value = serde_json::from_str(&text).map_err(ManifestError::from)?;

        let label = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| IN_MEMORY_MANIFEST_LABEL.to_string());

        info!(manifest = %path.display(), "Loading governance manifest");
        Self::build(document, label, &config.rule_source, config.max_depth)
    }

    /// Engine over an in-memory manifest document with the built-in rules.
    pub fn from_manifest_value(document: Value) -> Result<Self, EngineError> {
        let defaults = EngineConfig::default();
        Self::build(
            document,
            IN_MEMORY_MANIFEST_LABEL.to_string(),
            &defaults.rule_source,
            defaults.max_depth,
        )
    }

    /// Engine over an in-memory manifest document with explicit rule source and depth guard.
    pub fn from_parts(
        document: Value,
        label: impl Into<String>,
        rule_source: &RuleSource,
        max_depth: usize,
    ) -> Result<Self, EngineError> {
        Self::build(document, label.into(), rule_source, max_depth)
    }

    fn build(
        document: Value,
        manifest_label: String,
        rule_source: &RuleSource,
        max_depth: usize,
    ) -> Result<Self, EngineError> {
        let manifest = Manifest::from_value(&document)?;
        let schema = Arc::new(SchemaAuthority::new()?);
        let gate = ReviewerGate::with_max_depth(&manifest, Arc::clone(&schema), max_depth)?;

        let rule_text = match rule_source {
            RuleSource::Builtin => gate.rule_table().canonical_text()?,
            RuleSource::File(path) => read_rule_file(path)?,
        };

        let governance_version =
            compute_governance_version(&document, schema.definition(), &rule_text)?;

        info!(
            governance_version = %governance_version.to_hex(),
            schema_version = %schema.version_hash().to_hex(),
            max_errors = manifest.max_errors,
            "Governance engine initialized"
        );

        Ok(Self {
            manifest_document: document,
            manifest,
            manifest_label,
            gate,
            rule_text,
            governance_version,
        })
    }

    /// Evaluate `contract` now.
    pub fn evaluate(&self, contract: &Contract) -> Result<VerdictEvent, EngineError> {
        self.evaluate_at(contract, Utc::now())
    }

    /// Evaluate `contract`, stamping the verdict with `at`.
    ///
    /// Fails only when the contract cannot be canonicalized for its plan
    /// hash; every plan defect is a rejection, not an error.
    pub fn evaluate_at(
        &self,
        contract: &Contract,
        at: DateTime<Utc>,
    ) -> Result<VerdictEvent, EngineError> {
        let timestamp = at.timestamp();
        let governance_version = self.governance_version.to_hex();

        if let Some(error) = self.check_consistency(contract) {
            warn!(
                governance_version = %governance_version,
                message = %error.message,
                "Governance configuration inconsistent with plan"
            );
            return Ok(VerdictEvent::rejected(
                timestamp,
                governance_version,
                VerdictStatus::FailGovernanceConfig,
                vec![error],
                Default::default(),
                REMEDIATION_GOVERNANCE_CONFIG,
            ));
        }

        let result = self.gate.evaluate(contract);

        if result.admissible {
            let plan_hash = hash(contract.as_value())?.to_hex();
            info!(
                governance_version = %governance_version,
                plan_hash = %plan_hash,
                "Plan frozen"
            );
            Ok(VerdictEvent::frozen(
                timestamp,
                governance_version,
                plan_hash,
                contract.as_value().clone(),
            ))
        } else {
            info!(
                governance_version = %governance_version,
                error_count = result.error_count(),
                locked = result.locked_sections.len(),
                "Plan rejected"
            );
            Ok(VerdictEvent::rejected(
                timestamp,
                governance_version,
                VerdictStatus::Rejected,
                result.errors,
                result.locked_sections,
                REMEDIATION_PLAN_DEFECT,
            ))
        }
    }

    /// First manifest section dependency the contract cannot expose, if any.
    pub fn check_consistency(&self, contract: &Contract) -> Option<ReviewError> {
        let available = contract.available_sections();
        self.manifest
            .required_sections()
            .find(|(_, section)| !available.contains(section))
            .map(|(check_id, section)| {
                ReviewError::new(
                    CheckId::SysConsistency,
                    CONSISTENCY_SECTION,
                    format!(
                        "Governance Config Error: Check '{}' depends on missing section '{}'.",
                        check_id, section
                    ),
                )
                .with_reference(self.manifest_label.as_str())
            })
    }

    /// Digest binding manifest, schema and reviewer rules.
    pub fn governance_version(&self) -> Sha256Digest {
        self.governance_version
    }

    /// The `schema_version` every contract must declare.
    pub fn schema_version(&self) -> Sha256Digest {
        self.gate.schema().version_hash()
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// The manifest exactly as loaded; this is what the governance version binds.
    pub fn manifest_document(&self) -> &Value {
        &self.manifest_document
    }

    pub fn gate(&self) -> &ReviewerGate {
        &self.gate
    }

    /// The reviewer rule text bound into the governance version.
    pub fn rule_text(&self) -> &str {
        &self.rule_text
    }
}

fn read_rule_file(path: &Path) -> Result<String, EngineError> {
    std::fs::read_to_string(path).map_err(|source| EngineError::RuleSourceIo {
        path: path.to_path_buf(),
        source,
    })
}

impl std::fmt::Debug for GovernanceEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GovernanceEngine")
            .field("governance_version", &self.governance_version)
            .field("manifest_label", &self.manifest_label)
            .field("gate", &self.gate)
            .finish_non_exhaustive()
    }
}
