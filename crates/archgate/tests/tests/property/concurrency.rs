//! Property test: one engine serves many threads without locking.
//!
//! Verdicts produced concurrently from a shared engine are identical to the
//! verdicts the same engine produces on a single thread.

use std::sync::Arc;
use std::thread;

use archgate_engine::GovernanceEngine;
use archgate_tests::{engine, fixed_time, valid_plan};
use archgate_types::{Contract, VerdictEvent};
use serde_json::json;

const fn assert_send_sync<T: Send + Sync>() {}
const _: () = assert_send_sync::<GovernanceEngine>();

fn plans(engine: &GovernanceEngine) -> Vec<Contract> {
    let base = valid_plan(engine);
    let mutations = [
        json!(null),
        json!({ "auth_model": {} }),
        json!({ "env_vars": [] }),
        json!({ "api_contracts": { "bad key": {} } }),
        json!({ "persistence_model": { "base_url": "not a url" } }),
        json!({ "data_schemas": "  " }),
        json!({ "auth_model": "", "env_vars": [] }),
        json!({ "api_contracts": { "ok": { "endpoint": "ftp//broken" } } }),
    ];
    mutations
        .iter()
        .map(|mutation| {
            let mut plan = base.clone();
            if let Some(overrides) = mutation.as_object() {
                for (domain, value) in overrides {
                    plan["invariants"][domain] = value.clone();
                }
            }
            Contract::new(plan)
        })
        .collect()
}

#[test]
fn shared_engine_matches_sequential_evaluation() {
    let engine = Arc::new(engine());
    let contracts = plans(&engine);

    let sequential: Vec<VerdictEvent> = contracts
        .iter()
        .map(|contract| engine.evaluate_at(contract, fixed_time()).unwrap())
        .collect();

    let handles: Vec<_> = contracts
        .into_iter()
        .map(|contract| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || engine.evaluate_at(&contract, fixed_time()).unwrap())
        })
        .collect();
    let concurrent: Vec<VerdictEvent> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();

    assert_eq!(concurrent, sequential);
    assert!(sequential[0].authority_granted());
    assert!(sequential[1..].iter().all(|event| !event.authority_granted()));
}

#[test]
fn concurrent_evaluations_of_one_plan_agree() {
    let engine = Arc::new(engine());
    let contract = Arc::new(Contract::new(valid_plan(&engine)));
    let expected = engine.evaluate_at(&contract, fixed_time()).unwrap();

    let results: Vec<VerdictEvent> = (0..8)
        .map(|_| {
            let engine = Arc::clone(&engine);
            let contract = Arc::clone(&contract);
            thread::spawn(move || engine.evaluate_at(&contract, fixed_time()).unwrap())
        })
        .collect::<Vec<_>>()
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();

    assert!(results.iter().all(|event| *event == expected));
}
