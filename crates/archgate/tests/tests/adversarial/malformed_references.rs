//! Adversarial test: identifiers and weak-format values that try to smuggle
//! structure past the reviewer are rejected with the offending key named.

use archgate_tests::{engine, fixed_time, valid_plan};
use archgate_types::{CheckId, Contract};
use serde_json::json;

#[test]
fn injected_identifier_keys_are_rejected() {
    let engine = engine();
    let mut plan = valid_plan(&engine);
    plan["invariants"]["api_contracts"] = json!({
        "get_order": { "method": "GET" },
        "drop table;": { "method": "POST" },
        "orders\u{0000}admin": { "method": "GET" },
        "résumé": { "method": "GET" }
    });
    let event = engine.evaluate_at(&Contract::new(plan), fixed_time()).unwrap();

    let refs: Vec<&str> = event
        .errors()
        .iter()
        .filter(|e| e.check_id == CheckId::Reference)
        .filter_map(|e| e.reference.as_deref())
        .collect();
    assert_eq!(refs.len(), 3);
    assert!(refs.contains(&"drop table;"));
    assert!(refs.contains(&"résumé"));

    let locked = event.locked_sections().unwrap();
    assert!(!locked.contains("api_contracts"));
    assert!(locked.contains("data_schemas"));
}

#[test]
fn trailing_newline_does_not_sneak_past_anchors() {
    let engine = engine();
    let mut plan = valid_plan(&engine);
    plan["invariants"]["data_schemas"] = json!({ "order\n": { "fields": ["id"] } });
    plan["invariants"]["build_dependencies"]["core"]["package"] = json!("orders-core\n");
    let event = engine.evaluate_at(&Contract::new(plan), fixed_time()).unwrap();

    let sections: Vec<&str> = event.errors().iter().map(|e| e.section.as_str()).collect();
    assert_eq!(sections, vec!["invariants.data_schemas", "weak_format.package"]);
}

#[test]
fn weak_format_values_are_checked_at_every_depth() {
    let engine = engine();
    let mut plan = valid_plan(&engine);
    plan["invariants"]["persistence_model"] = json!({
        "replicas": [
            { "base_url": "postgres://replica-1.internal" },
            { "nested": [ { "base_url": "javascript:alert(1)" } ] }
        ]
    });
    plan["invariants"]["build_dependencies"]["api"]["module"] = json!("orders/api");
    let event = engine.evaluate_at(&Contract::new(plan), fixed_time()).unwrap();

    let errors = event.errors();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].section, "weak_format.url");
    assert_eq!(errors[0].reference.as_deref(), Some("base_url"));
    assert_eq!(errors[1].section, "weak_format.module");
    assert!(event.locked_sections().unwrap().is_empty());
}

#[test]
fn whitespace_only_domains_count_as_empty() {
    let engine = engine();
    let mut plan = valid_plan(&engine);
    plan["invariants"]["auth_model"] = json!(" \t\r\n ");
    let event = engine.evaluate_at(&Contract::new(plan), fixed_time()).unwrap();
    assert_eq!(event.errors().len(), 1);
    assert_eq!(event.errors()[0].section, "invariants.auth_model");
}
