//! E2E test: the error budget bounds every rejection.
//!
//! Reported errors never exceed `max_errors`; stages are skipped once the
//! budget is reached, and truncation beyond it is silent.

use archgate_tests::{engine_with, fixed_time, manifest_with_budget, valid_plan};
use archgate_types::{CheckId, Contract};
use serde_json::json;

#[test]
fn schema_violations_truncate_to_budget() {
    let engine = engine_with(manifest_with_budget(2));
    let mut plan = valid_plan(&engine);
    // Three structural violations: undeclared sections, empty name, bad DAG entry.
    for extra in ["x1", "x2", "x3", "x4", "x5"] {
        plan[extra] = json!(true);
    }
    plan["project_name"] = json!("");
    plan["build_dag"] = json!({ "api": "core" });
    let event = engine.evaluate_at(&Contract::new(plan), fixed_time()).unwrap();

    assert_eq!(event.errors().len(), 2);
    assert!(event.errors().iter().all(|e| e.check_id == CheckId::Schema));
    assert!(event.locked_sections().unwrap().is_empty());
}

#[test]
fn budget_of_one_reports_exactly_one() {
    let engine = engine_with(manifest_with_budget(1));
    let mut plan = valid_plan(&engine);
    plan["invariants"]["env_vars"] = json!([]);
    plan["invariants"]["auth_model"] = json!("");
    plan["invariants"]["api_contracts"]["bad key"] = json!({});
    let event = engine.evaluate_at(&Contract::new(plan), fixed_time()).unwrap();

    let errors = event.errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].section, "invariants.env_vars");
}

#[test]
fn exhausted_budget_skips_later_stages() {
    let engine = engine_with(manifest_with_budget(2));
    let mut plan = valid_plan(&engine);
    plan["invariants"]["env_vars"] = json!([]);
    plan["invariants"]["auth_model"] = json!("");
    plan["build_dag"] = json!({ "api": ["api"] });
    let event = engine.evaluate_at(&Contract::new(plan), fixed_time()).unwrap();

    assert_eq!(event.errors().len(), 2);
    assert!(event.errors().iter().all(|e| e.check_id == CheckId::Invariant));
    // The skipped DAG stage cannot taint build_dag.
    assert!(event.locked_sections().unwrap().contains("build_dag"));
}

#[test]
fn stage_overshoot_is_truncated() {
    let engine = engine_with(manifest_with_budget(2));
    let mut plan = valid_plan(&engine);
    plan["invariants"]["api_contracts"] = json!({
        "bad one": {}, "bad two": {}, "bad three": {}
    });
    let event = engine.evaluate_at(&Contract::new(plan), fixed_time()).unwrap();
    assert_eq!(event.errors().len(), 2);
    assert!(event.errors().iter().all(|e| e.check_id == CheckId::Reference));
}

#[test]
fn default_budget_is_five() {
    let engine = engine_with(json!({}));
    assert_eq!(engine.manifest().max_errors, 5);
    let mut plan = valid_plan(&engine);
    for i in 0..8 {
        plan["invariants"]["api_contracts"][format!("bad key {}", i)] = json!({});
    }
    let event = engine.evaluate_at(&Contract::new(plan), fixed_time()).unwrap();
    assert_eq!(event.errors().len(), 5);
}
