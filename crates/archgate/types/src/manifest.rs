//! Governance manifest: the operator-owned rule configuration.
//!
//! The manifest is loaded once and never mutated. The typed [`Manifest`] is
//! what the reviewer consults; the raw document it was parsed from is what
//! participates in the governance version hash, so unknown keys still bind.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ManifestError;

/// Error budget applied when the manifest does not declare one.
pub const DEFAULT_MAX_ERRORS: usize = 5;

/// Section name meaning "no specific requirement" in `check_section_dependencies`.
pub const SECTION_WILDCARD: &str = "*";

/// Operator-owned governance configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Evaluation error budget. Always at least 1.
    #[serde(default = "default_max_errors")]
    pub max_errors: usize,
    /// Field names checked by the weak-format stage, grouped by format.
    #[serde(default)]
    pub weak_format_allowlists: WeakFormatAllowlists,
    /// Check identifier → contract sections the check needs to observe,
    /// in manifest order.
    #[serde(default)]
    pub check_section_dependencies: IndexMap<String, Vec<String>>,
}

/// Field-name allowlists for the weak-format stage.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeakFormatAllowlists {
    #[serde(default)]
    pub url_fields: Vec<String>,
    #[serde(default)]
    pub module_path_fields: Vec<String>,
    #[serde(default)]
    pub package_name_fields: Vec<String>,
}

fn default_max_errors() -> usize {
    DEFAULT_MAX_ERRORS
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            max_errors: DEFAULT_MAX_ERRORS,
            weak_format_allowlists: WeakFormatAllowlists::default(),
            check_section_dependencies: IndexMap::new(),
        }
    }
}

impl Manifest {
    /// Interpret a raw manifest document.
    pub fn from_value(document: &Value) -> Result<Self, ManifestError> {
        if !document.is_object() {
            return Err(ManifestError::NotAnObject(json_type_name(document)));
        }
        let manifest: Manifest = serde_json::from_value(document.clone())?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Parse and validate a manifest from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self, ManifestError> {
        let document: Value = serde_json::from_str(text)?;
        Self::from_value(&document)
    }

    pub fn validate(&self) -> Result<(), ManifestError> {
        if self.max_errors == 0 {
            return Err(ManifestError::InvalidMaxErrors(self.max_errors));
        }
        Ok(())
    }

    /// Iterate every non-wildcard `(check_id, section)` dependency in
    /// manifest order.
    pub fn required_sections(&self) -> impl Iterator<Item = (&str, &str)> {
        self.check_section_dependencies
            .iter()
            .flat_map(|(check_id, sections)| {
                sections
                    .iter()
                    .filter(|s| s.as_str() != SECTION_WILDCARD)
                    .map(move |s| (check_id.as_str(), s.as_str()))
            })
    }
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
