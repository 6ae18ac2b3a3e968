//! The architecture contract schema (JSON Schema, draft 7).
//!
//! The definition is hashed to derive the schema version, so its exact
//! content is part of the public contract: reordering keys is harmless,
//! any other change invalidates every previously versioned plan.

use serde_json::{json, Map, Value};

/// Sections every contract must declare at top level.
pub const REQUIRED_TOP_LEVEL: [&str; 5] = [
    "project_name",
    "schema_version",
    "invariants",
    "assumptions",
    "build_dag",
];

/// Invariant domains every contract must cover, and no others.
pub const REQUIRED_INVARIANT_DOMAINS: [&str; 6] = [
    "api_contracts",
    "data_schemas",
    "env_vars",
    "build_dependencies",
    "auth_model",
    "persistence_model",
];

/// Assumption categories every contract must state, and no others.
pub const REQUIRED_ASSUMPTION_CATEGORIES: [&str; 5] = [
    "authentication",
    "authorization",
    "deployment_scope",
    "data_retention",
    "scaling_model",
];

/// Build the full contract schema definition.
pub fn contract_schema() -> Value {
    // Domains accept weak structural types; emptiness is judged by the
    // invariant stage, not by the schema.
    let domain_properties: Map<String, Value> = REQUIRED_INVARIANT_DOMAINS
        .iter()
        .map(|domain| {
            (
                domain.to_string(),
                json!({ "type": ["object", "array", "string"] }),
            )
        })
        .collect();

    let category_properties: Map<String, Value> = REQUIRED_ASSUMPTION_CATEGORIES
        .iter()
        .map(|category| (category.to_string(), json!({ "type": "string" })))
        .collect();

    json!({
        "type": "object",
        "required": REQUIRED_TOP_LEVEL,
        "additionalProperties": false,
        "properties": {
            "project_name": { "type": "string", "minLength": 1 },
            "schema_version": { "type": "string", "pattern": "^[a-f0-9]{64}$" },
            "invariants": {
                "type": "object",
                "required": REQUIRED_INVARIANT_DOMAINS,
                "additionalProperties": false,
                "properties": domain_properties
            },
            "assumptions": {
                "type": "object",
                "required": REQUIRED_ASSUMPTION_CATEGORIES,
                "additionalProperties": false,
                "properties": category_properties
            },
            "build_dag": {
                "type": "object",
                "additionalProperties": {
                    "type": "array",
                    "items": { "type": "string" }
                }
            }
        }
    })
}
