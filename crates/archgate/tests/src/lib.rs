//! Shared fixtures for the cross-crate Archgate test suites.

use archgate_engine::GovernanceEngine;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::{json, Value};

/// Required invariant domains, in declared order.
pub const DOMAINS: [&str; 6] = [
    "api_contracts",
    "data_schemas",
    "env_vars",
    "build_dependencies",
    "auth_model",
    "persistence_model",
];

/// Manifest with every weak-format allowlist populated and a DAG dependency.
pub fn manifest() -> Value {
    json!({
        "max_errors": 5,
        "weak_format_allowlists": {
            "url_fields": ["endpoint", "base_url"],
            "module_path_fields": ["module"],
            "package_name_fields": ["package"]
        },
        "check_section_dependencies": {
            "RG-DAG-004": ["build_dag", "build_dependencies"],
            "RG-INVARIANT-002": ["*"]
        }
    })
}

/// Manifest with a custom error budget.
pub fn manifest_with_budget(max_errors: usize) -> Value {
    let mut manifest = manifest();
    manifest["max_errors"] = json!(max_errors);
    manifest
}

pub fn engine() -> GovernanceEngine {
    engine_with(manifest())
}

/// # Panics
///
/// Panics if the manifest is rejected; fixtures are expected to be valid.
pub fn engine_with(manifest: Value) -> GovernanceEngine {
    match GovernanceEngine::from_manifest_value(manifest) {
        Ok(engine) => engine,
        Err(e) => panic!("fixture manifest rejected: {}", e),
    }
}

/// A fully valid, minimal contract: empty `build_dag`, every domain populated.
pub fn valid_plan(engine: &GovernanceEngine) -> Value {
    json!({
        "project_name": "orders-service",
        "schema_version": engine.schema_version().to_hex(),
        "invariants": {
            "api_contracts": {
                "create_order": { "endpoint": "https://api.example.com/orders", "method": "POST" },
                "get_order": { "endpoint": "https://api.example.com/orders/{id}", "method": "GET" }
            },
            "data_schemas": {
                "order": { "fields": ["id", "customer_id", "total"] }
            },
            "env_vars": ["DATABASE_URL", "JWT_SECRET"],
            "build_dependencies": {
                "api": { "module": "orders.api", "package": "orders-api" },
                "core": { "module": "orders.core", "package": "orders-core" },
                "db": { "module": "orders.db", "package": "orders-db" }
            },
            "auth_model": "JWT bearer tokens issued by the identity service",
            "persistence_model": { "engine": "postgres", "base_url": "postgres://db.internal:5432" }
        },
        "assumptions": {
            "authentication": "All callers are authenticated upstream",
            "authorization": "Role based",
            "deployment_scope": "Single region",
            "data_retention": "Seven years",
            "scaling_model": "Horizontal, stateless API tier"
        },
        "build_dag": {}
    })
}

/// Fixed evaluation instant.
pub fn fixed_time() -> DateTime<Utc> {
    Utc.timestamp_opt(1_700_000_000, 0)
        .single()
        .unwrap_or_default()
}
