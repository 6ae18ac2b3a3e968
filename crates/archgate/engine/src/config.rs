use std::path::PathBuf;

use archgate_reviewer::DEFAULT_MAX_DEPTH;
use serde::{Deserialize, Serialize};

/// Operator-controlled manifest location used when none is given.
pub const DEFAULT_MANIFEST_PATH: &str = "governance/manifest.json";

/// Where the reviewer rule text bound into the governance version comes from.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleSource {
    /// Canonical JSON encoding of the built-in rule table.
    #[default]
    Builtin,
    /// Raw UTF-8 text of a rule definition file.
    File(PathBuf),
}

/// Engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Path of the governance manifest (JSON).
    pub manifest_path: PathBuf,
    pub rule_source: RuleSource,
    /// Nesting/traversal guard for weak-format scanning and cycle search.
    pub max_depth: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            manifest_path: PathBuf::from(DEFAULT_MANIFEST_PATH),
            rule_source: RuleSource::Builtin,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl EngineConfig {
    pub fn new(manifest_path: impl Into<PathBuf>) -> Self {
        Self {
            manifest_path: manifest_path.into(),
            ..Default::default()
        }
    }

    pub fn with_rule_source(mut self, rule_source: RuleSource) -> Self {
        self.rule_source = rule_source;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
