//! Read-only view over a candidate architecture contract.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeSet;

/// Top-level section holding the invariant domains.
pub const INVARIANTS: &str = "invariants";
/// Top-level section holding the assumption categories.
pub const ASSUMPTIONS: &str = "assumptions";
/// Top-level section holding the build dependency graph.
pub const BUILD_DAG: &str = "build_dag";
/// Top-level section holding the declared schema version.
pub const SCHEMA_VERSION: &str = "schema_version";
/// Invariant domain whose keys define the valid build DAG nodes.
pub const BUILD_DEPENDENCIES: &str = "build_dependencies";

/// A candidate plan submitted for governance evaluation.
///
/// The document is held as supplied and never mutated; every accessor
/// borrows. A contract need not be well formed: accessors return `None`
/// when the expected shape is absent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Contract(Value);

impl Contract {
    pub fn new(document: Value) -> Self {
        Self(document)
    }

    pub fn from_json_str(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text).map(Self)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// The top-level mapping, if the document is an object.
    pub fn root(&self) -> Option<&Map<String, Value>> {
        self.0.as_object()
    }

    pub fn section(&self, name: &str) -> Option<&Value> {
        self.root().and_then(|root| root.get(name))
    }

    /// The declared `schema_version`, whatever its type.
    pub fn schema_version(&self) -> Option<&Value> {
        self.section(SCHEMA_VERSION)
    }

    pub fn invariants(&self) -> Option<&Map<String, Value>> {
        self.section(INVARIANTS).and_then(Value::as_object)
    }

    pub fn invariant(&self, domain: &str) -> Option<&Value> {
        self.invariants().and_then(|inv| inv.get(domain))
    }

    pub fn build_dag(&self) -> Option<&Map<String, Value>> {
        self.section(BUILD_DAG).and_then(Value::as_object)
    }

    /// Keys of `invariants.build_dependencies`; empty unless it is a mapping.
    pub fn build_dependency_names(&self) -> BTreeSet<&str> {
        self.invariant(BUILD_DEPENDENCIES)
            .and_then(Value::as_object)
            .map(|deps| deps.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Section names the contract exposes: top-level keys plus the keys of
    /// the `invariants` mapping.
    pub fn available_sections(&self) -> BTreeSet<&str> {
        let mut sections: BTreeSet<&str> = self
            .root()
            .map(|root| root.keys().map(String::as_str).collect())
            .unwrap_or_default();
        if let Some(invariants) = self.invariants() {
            sections.extend(invariants.keys().map(String::as_str));
        }
        sections
    }
}

impl From<Value> for Contract {
    fn from(document: Value) -> Self {
        Self::new(document)
    }
}
