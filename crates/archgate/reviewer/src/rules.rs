//! The reviewer rule table: a language-neutral description of the pipeline.
//!
//! Its canonical JSON encoding is the rule text bound into the governance
//! version, so any change to order, patterns or policy yields a new version.

use archgate_canon::canonicalize_serialize;
use archgate_types::CheckId;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::error::ReviewerError;

/// Identifier of the rule-table layout.
pub const RULE_TABLE_FORMAT: &str = "archgate.rule-table/1";

/// Any `scheme://host...` form, or the literal `N/A`.
pub const URL_PATTERN: &str = r"^(?:[a-z][a-z0-9+.-]*://[\w.-]+|N/A).*";
/// Dotted alphanumeric/underscore tokens.
pub const MODULE_PATH_PATTERN: &str = r"^[a-zA-Z0-9_.]+$";
/// Alphanumeric with hyphen/underscore.
pub const PACKAGE_NAME_PATTERN: &str = r"^[a-zA-Z0-9_-]+$";
/// Grammar for keys of referenceable invariant domains.
pub const IDENTIFIER_PATTERN: &str = r"^[a-zA-Z0-9_-]+$";

/// One check family of the pipeline.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RuleDescriptor {
    pub order: u8,
    pub check_id: CheckId,
    pub name: String,
    /// Contract region the check inspects.
    pub section: String,
    /// Whether a failure skips every later stage.
    pub halts: bool,
    pub patterns: BTreeMap<String, String>,
    pub description: String,
}

impl RuleDescriptor {
    fn new(order: u8, check_id: CheckId, name: &str, section: &str, description: &str) -> Self {
        Self {
            order,
            check_id,
            name: name.to_string(),
            section: section.to_string(),
            halts: false,
            patterns: BTreeMap::new(),
            description: description.to_string(),
        }
    }

    fn halting(mut self) -> Self {
        self.halts = true;
        self
    }

    fn pattern(mut self, label: &str, pattern: &str) -> Self {
        self.patterns.insert(label.to_string(), pattern.to_string());
        self
    }
}

/// Error budget policy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BudgetPolicy {
    /// When the accumulated count is compared against `max_errors`.
    pub checked: String,
    /// What happens to errors beyond the budget.
    pub overflow: String,
}

/// Locked-section policy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LockedPolicy {
    pub candidates: Vec<String>,
    /// Section prefixes whose errors discard every candidate.
    pub discard_all: Vec<String>,
    pub unscopable: String,
}

/// The full reviewer rule set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RuleTable {
    pub format: String,
    pub rules: Vec<RuleDescriptor>,
    pub budget: BudgetPolicy,
    pub locked_sections: LockedPolicy,
    pub max_depth: usize,
}

impl RuleTable {
    /// The rules enforced by [`crate::ReviewerGate`].
    pub fn builtin(max_depth: usize) -> Self {
        let rules = vec![
            RuleDescriptor::new(
                1,
                CheckId::Schema,
                "Schema conformance",
                "schema_version,structure",
                "Declared schema_version must equal the schema authority hash; the contract must validate against the contract schema.",
            )
            .halting(),
            RuleDescriptor::new(
                2,
                CheckId::Invariant,
                "Invariant presence",
                "invariants",
                "Every declared invariant domain must be non-empty: strings need non-whitespace content, mappings and arrays need an entry, null always fails.",
            ),
            RuleDescriptor::new(
                3,
                CheckId::Reference,
                "Reference integrity",
                "invariants.api_contracts,invariants.data_schemas",
                "Every key of a referenceable domain must match the identifier grammar.",
            )
            .pattern("identifier", IDENTIFIER_PATTERN),
            RuleDescriptor::new(
                4,
                CheckId::WeakFormat,
                "Weak-format validation",
                "invariants",
                "String values of allowlisted keys, at any depth, must match the pattern for their field kind.",
            )
            .pattern("url", URL_PATTERN)
            .pattern("module", MODULE_PATH_PATTERN)
            .pattern("package", PACKAGE_NAME_PATTERN),
            RuleDescriptor::new(
                5,
                CheckId::Dag,
                "Dependency graph validation",
                "build_dag",
                "Every node and target must be a key of invariants.build_dependencies; otherwise the graph must be acyclic.",
            ),
        ];

        Self {
            format: RULE_TABLE_FORMAT.to_string(),
            rules,
            budget: BudgetPolicy {
                checked: "before_each_stage".to_string(),
                overflow: "truncate_silently".to_string(),
            },
            locked_sections: LockedPolicy {
                candidates: vec![
                    "invariants.*".to_string(),
                    "build_dag".to_string(),
                    "assumptions".to_string(),
                ],
                discard_all: vec!["weak_format".to_string()],
                unscopable: "discard_all".to_string(),
            },
            max_depth,
        }
    }

    /// Canonical JSON encoding, hashed into the governance version.
    pub fn canonical_text(&self) -> Result<String, ReviewerError> {
        let bytes = canonicalize_serialize(self)?;
        // Canonical output is always valid UTF-8.
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    pub fn rule(&self, check_id: CheckId) -> Option<&RuleDescriptor> {
        self.rules.iter().find(|r| r.check_id == check_id)
    }
}
