use std::collections::BTreeSet;

use archgate_types::contract::INVARIANTS;
use archgate_types::{CheckId, ReviewError, WeakFormatAllowlists};
use regex::Regex;
use serde_json::Value;

use crate::context::{ReviewContext, StageResult};
use crate::error::ReviewerError;
use crate::rules::{MODULE_PATH_PATTERN, PACKAGE_NAME_PATTERN, URL_PATTERN};
use crate::traits::ReviewStage;

const DEPTH_SECTION: &str = "weak_format.depth";

/// One allowlist paired with the pattern its values must match.
struct FieldScan {
    label: &'static str,
    fields: BTreeSet<String>,
    pattern: Regex,
}

impl FieldScan {
    fn new(label: &'static str, fields: &[String], pattern: &str) -> Result<Self, ReviewerError> {
        Ok(Self {
            label,
            fields: fields.iter().cloned().collect(),
            pattern: Regex::new(pattern)?,
        })
    }
}

/// Scan outcome: `false` once the depth guard tripped.
type Completed = bool;

/// Stage 4: Weak-Format Validation
///
/// Walks the whole `invariants` tree once per field kind (url, module,
/// package). A string under an allowlisted key is validated and not
/// descended into; every other mapping value and array item is walked.
pub struct WeakFormatStage {
    scans: Vec<FieldScan>,
    max_depth: usize,
}

impl WeakFormatStage {
    pub fn new(allowlists: &WeakFormatAllowlists, max_depth: usize) -> Result<Self, ReviewerError> {
        Ok(Self {
            scans: vec![
                FieldScan::new("url", &allowlists.url_fields, URL_PATTERN)?,
                FieldScan::new("module", &allowlists.module_path_fields, MODULE_PATH_PATTERN)?,
                FieldScan::new("package", &allowlists.package_name_fields, PACKAGE_NAME_PATTERN)?,
            ],
            max_depth,
        })
    }

    fn scan(&self, scan: &FieldScan, root: &Value, errors: &mut Vec<ReviewError>) -> Completed {
        // (key the value sits under, value, nesting depth below `invariants`)
        let mut stack: Vec<(Option<&str>, &Value, usize)> = vec![(None, root, 0)];

        while let Some((key, value, depth)) = stack.pop() {
            if let (Some(key), Value::String(text)) = (key, value) {
                if scan.fields.contains(key) {
                    if !scan.pattern.is_match(text) {
                        errors.push(
                            ReviewError::new(
                                CheckId::WeakFormat,
                                format!("weak_format.{}", scan.label),
                                format!("Value '{}' invalid for field '{}'", text, key),
                            )
                            .with_reference(key),
                        );
                    }
                    continue;
                }
            }

            let is_container = matches!(value, Value::Object(_) | Value::Array(_));
            if is_container && depth >= self.max_depth {
                let mut error = ReviewError::new(
                    CheckId::WeakFormat,
                    DEPTH_SECTION,
                    format!(
                        "Nesting under '{}' exceeds the maximum depth of {}",
                        INVARIANTS, self.max_depth
                    ),
                );
                if let Some(key) = key {
                    error = error.with_reference(key);
                }
                errors.push(error);
                return false;
            }

            // Children are pushed in reverse so they pop in document order.
            match value {
                Value::Object(entries) => {
                    for (child_key, child) in entries.iter().rev() {
                        stack.push((Some(child_key.as_str()), child, depth + 1));
                    }
                }
                Value::Array(items) => {
                    for item in items.iter().rev() {
                        stack.push((None, item, depth + 1));
                    }
                }
                _ => {}
            }
        }
        true
    }
}

impl ReviewStage for WeakFormatStage {
    fn stage_name(&self) -> &str {
        "Weak-Format Validation"
    }

    fn stage_number(&self) -> u8 {
        4
    }

    fn check_id(&self) -> CheckId {
        CheckId::WeakFormat
    }

    fn evaluate(&self, context: &ReviewContext<'_>) -> StageResult {
        let Some(invariants) = context.contract.section(INVARIANTS) else {
            return StageResult::Pass;
        };

        let mut errors = Vec::new();
        for scan in &self.scans {
            if scan.fields.is_empty() {
                continue;
            }
            if !self.scan(scan, invariants, &mut errors) {
                break;
            }
        }
        StageResult::from_findings(errors)
    }
}
