#![deny(unsafe_code)]
//! # archgate-canon
//!
//! Deterministic byte encoding and content addressing for governance artifacts.
//!
//! - [`canonicalize`] encodes any JSON value per RFC 8785: object members
//!   sorted by UTF-16 code units, no insignificant whitespace, ECMAScript
//!   number formatting, minimal string escaping.
//! - [`hash`] is SHA-256 over those bytes.
//! - [`compute_governance_version`] binds manifest, schema and reviewer rule
//!   text into a single digest:
//!   `SHA256(canonical(manifest) || canonical(schema) || utf8(rule_text))`.

pub mod canonical;
pub mod digest;
pub mod error;
mod number;

pub use canonical::{canonicalize, canonicalize_serialize, hash, MAX_CANONICAL_DEPTH};
pub use digest::Sha256Digest;
pub use error::{CanonError, DigestParseError};

use serde_json::Value;
use sha2::{Digest, Sha256};

/// Compute the governance version digest.
///
/// The three inputs are concatenated before hashing; this is not a hash of
/// three separate digests.
pub fn compute_governance_version(
    manifest: &Value,
    schema: &Value,
    reviewer_rule_text: &str,
) -> Result<Sha256Digest, CanonError> {
    let manifest_bytes = canonicalize(manifest)?;
    let schema_bytes = canonicalize(schema)?;

    let mut hasher = Sha256::new();
    hasher.update(&manifest_bytes);
    hasher.update(&schema_bytes);
    hasher.update(reviewer_rule_text.as_bytes());
    Ok(Sha256Digest::from_bytes(hasher.finalize().into()))
}
