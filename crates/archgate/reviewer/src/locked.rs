//! Locked-section policy: which sections stay trustworthy after a review.
//!
//! Candidates are the declared invariant domains plus `build_dag` and
//! `assumptions`. Each error taints what its section path names:
//! - `invariants.<domain>[...]` taints that domain only;
//! - `weak_format...` cannot be localized and discards every candidate;
//! - a bare candidate name (e.g. `build_dag`) taints that candidate;
//! - anything else is unscopable and discards every candidate.

use archgate_types::contract::{ASSUMPTIONS, BUILD_DAG, INVARIANTS};
use archgate_types::{Contract, ReviewError};
use std::collections::BTreeSet;

const WEAK_FORMAT_PREFIX: &str = "weak_format";

/// Compute the sections proven untouched by every error in `errors`.
pub fn compute_locked_sections(contract: &Contract, errors: &[ReviewError]) -> BTreeSet<String> {
    let mut candidates: BTreeSet<String> = contract
        .invariants()
        .map(|inv| inv.keys().cloned().collect())
        .unwrap_or_default();
    candidates.insert(BUILD_DAG.to_string());
    candidates.insert(ASSUMPTIONS.to_string());

    let mut tainted: BTreeSet<&str> = BTreeSet::new();
    for error in errors {
        let mut parts = error.section.split('.');
        let head = parts.next().unwrap_or_default();
        match (head, parts.next()) {
            (INVARIANTS, Some(domain)) => {
                tainted.insert(domain);
            }
            (WEAK_FORMAT_PREFIX, _) => return BTreeSet::new(),
            (head, _) if candidates.contains(head) => {
                tainted.insert(head);
            }
            _ => return BTreeSet::new(),
        }
    }

    candidates.retain(|section| !tainted.contains(section.as_str()));
    candidates
}
