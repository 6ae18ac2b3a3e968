//! E2E test: the three reference evaluations.
//!
//! A: a valid minimal plan is frozen verbatim.
//! B: one empty invariant domain rejects the plan, every other domain stays locked.
//! C: a two-node cycle in the build DAG rejects the plan.

use archgate_canon::hash;
use archgate_tests::{engine, fixed_time, valid_plan, DOMAINS};
use archgate_types::{CheckId, Contract, VerdictEvent, VerdictStatus, REMEDIATION_PLAN_DEFECT};
use serde_json::json;

#[test]
fn scenario_a_valid_plan_is_frozen() {
    let engine = engine();
    let plan = valid_plan(&engine);
    let event = engine
        .evaluate_at(&Contract::new(plan.clone()), fixed_time())
        .unwrap();

    assert_eq!(event.event_type(), "PLAN_FROZEN");
    assert!(event.authority_granted());
    assert_eq!(event.exit_code(), 0);
    assert_eq!(event.plan_hash(), Some(hash(&plan).unwrap().to_hex().as_str()));

    let VerdictEvent::Frozen(frozen) = event else {
        panic!("expected a frozen plan");
    };
    assert_eq!(frozen.status, VerdictStatus::Admissible);
    assert_eq!(frozen.frozen_artifact, plan);
    assert_eq!(frozen.schema_version, json!(engine.schema_version().to_hex()));
    assert_eq!(frozen.timestamp, 1_700_000_000);
}

#[test]
fn scenario_a_with_acyclic_dag_is_frozen() {
    let engine = engine();
    let mut plan = valid_plan(&engine);
    plan["build_dag"] = json!({ "api": ["core", "db"], "core": ["db"], "db": [] });
    let event = engine.evaluate_at(&Contract::new(plan), fixed_time()).unwrap();
    assert!(event.authority_granted(), "{:?}", event.errors());
}

#[test]
fn scenario_b_empty_auth_model_is_rejected_with_partial_trust() {
    let engine = engine();
    let mut plan = valid_plan(&engine);
    plan["invariants"]["auth_model"] = json!({});
    let event = engine.evaluate_at(&Contract::new(plan), fixed_time()).unwrap();

    assert_eq!(event.event_type(), "PLAN_REJECTED");
    assert!(!event.authority_granted());
    assert_eq!(event.exit_code(), 1);

    let VerdictEvent::Rejected(rejected) = event else {
        panic!("expected a rejection");
    };
    assert_eq!(rejected.status, VerdictStatus::Rejected);
    assert_eq!(rejected.error_count, 1);
    assert_eq!(rejected.errors[0].check_id, CheckId::Invariant);
    assert_eq!(rejected.errors[0].section, "invariants.auth_model");
    assert_eq!(rejected.remediation, REMEDIATION_PLAN_DEFECT);

    for domain in DOMAINS.iter().filter(|d| **d != "auth_model") {
        assert!(rejected.locked_sections.contains(*domain), "{} not locked", domain);
    }
    assert!(rejected.locked_sections.contains("build_dag"));
    assert!(rejected.locked_sections.contains("assumptions"));
    assert!(!rejected.locked_sections.contains("auth_model"));
    assert_eq!(rejected.locked_sections.len(), 7);
}

#[test]
fn scenario_b_locked_sections_for_empty_env_vars() {
    let engine = engine();
    let mut plan = valid_plan(&engine);
    plan["invariants"]["env_vars"] = json!([]);
    let event = engine.evaluate_at(&Contract::new(plan), fixed_time()).unwrap();

    let locked: Vec<&str> = event
        .locked_sections()
        .unwrap()
        .iter()
        .map(String::as_str)
        .collect();
    assert_eq!(
        locked,
        vec![
            "api_contracts",
            "assumptions",
            "auth_model",
            "build_dag",
            "build_dependencies",
            "data_schemas",
            "persistence_model"
        ]
    );
}

#[test]
fn scenario_c_two_node_cycle_is_rejected() {
    let engine = engine();
    let mut plan = valid_plan(&engine);
    plan["invariants"]["build_dependencies"] = json!({ "a": "first", "b": "second" });
    plan["build_dag"] = json!({ "a": ["b"], "b": ["a"] });
    let event = engine.evaluate_at(&Contract::new(plan), fixed_time()).unwrap();

    assert!(!event.authority_granted());
    let errors = event.errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].check_id, CheckId::Dag);
    assert_eq!(errors[0].section, "build_dag");
    assert_eq!(errors[0].reference.as_deref(), Some("a"));

    let locked = event.locked_sections().unwrap();
    assert!(!locked.contains("build_dag"));
    assert!(locked.contains("assumptions"));
}

#[test]
fn undefined_dag_node_is_rejected_before_cycle_search() {
    let engine = engine();
    let mut plan = valid_plan(&engine);
    plan["build_dag"] = json!({ "api": ["cache"], "cache": ["api"] });
    let event = engine.evaluate_at(&Contract::new(plan), fixed_time()).unwrap();

    let messages: Vec<&str> = event.errors().iter().map(|e| e.message.as_str()).collect();
    assert_eq!(
        messages,
        vec![
            "DAG target 'cache' (referenced by 'api') is not defined in 'build_dependencies'.",
            "DAG node 'cache' is not defined in 'build_dependencies'."
        ]
    );
}

#[test]
fn verdict_serializes_to_documented_envelope() {
    let engine = engine();
    let mut plan = valid_plan(&engine);
    plan["invariants"]["auth_model"] = json!("   ");
    let event = engine.evaluate_at(&Contract::new(plan), fixed_time()).unwrap();
    let value = serde_json::to_value(&event).unwrap();

    assert_eq!(value["event_type"], "PLAN_REJECTED");
    assert_eq!(value["status"], "REJECTED");
    assert_eq!(value["authority_granted"], false);
    assert_eq!(value["error_count"], 1);
    assert_eq!(value["errors"][0]["check_id"], "RG-INVARIANT-002");
    assert_eq!(value["errors"][0]["reference"], serde_json::Value::Null);
    assert!(value["locked_sections"].is_array());
    assert_eq!(value["governance_version"], engine.governance_version().to_hex());
}

#[test]
fn cycle_is_reported_at_first_declared_root() {
    let engine = engine();
    let mut plan = valid_plan(&engine);
    plan["invariants"]["build_dependencies"] = json!({ "a": "first", "b": "second" });
    plan["build_dag"] = serde_json::from_str(r#"{"b": ["a"], "a": ["b"]}"#).unwrap();
    let event = engine.evaluate_at(&Contract::new(plan), fixed_time()).unwrap();

    let errors = event.errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].reference.as_deref(), Some("b"));
    assert_eq!(
        errors[0].message,
        "Cycle detected involving node 'b' (edge 'a' -> 'b')"
    );
}
