//! Property tests: any reachable cycle in the build DAG prevents admission,
//! and graphs whose edges only point forward are always accepted.

use archgate_tests::{engine, fixed_time, valid_plan};
use archgate_types::{CheckId, Contract};
use proptest::prelude::*;
use serde_json::{json, Map, Value};

// ---------------------------------------------------------------------------
// Helpers / Strategies
// ---------------------------------------------------------------------------

fn node(i: usize) -> String {
    format!("node_{:02}", i)
}

/// Forward-only adjacency over `n` nodes: an edge i -> j exists only when i < j.
fn arb_forward_edges(max_nodes: usize) -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (2..max_nodes).prop_flat_map(|n| {
        let edges = prop::collection::vec((0..n, 0..n), 0..n * 2).prop_map(|pairs| {
            pairs
                .into_iter()
                .filter(|(a, b)| a < b)
                .collect::<Vec<_>>()
        });
        (Just(n), edges)
    })
}

fn build_plan(n: usize, edges: &[(usize, usize)]) -> Value {
    let engine = engine();
    let mut plan = valid_plan(&engine);
    let mut deps = Map::new();
    let mut dag = Map::new();
    for i in 0..n {
        deps.insert(node(i), json!("component"));
        dag.insert(node(i), json!([]));
    }
    for (from, to) in edges {
        if let Some(Value::Array(targets)) = dag.get_mut(&node(*from)) {
            let target = json!(node(*to));
            if !targets.contains(&target) {
                targets.push(target);
            }
        }
    }
    plan["invariants"]["build_dependencies"] = Value::Object(deps);
    plan["build_dag"] = Value::Object(dag);
    plan
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn forward_only_graphs_are_admissible((n, edges) in arb_forward_edges(12)) {
        let engine = engine();
        let plan = build_plan(n, &edges);
        let event = engine.evaluate_at(&Contract::new(plan), fixed_time()).unwrap();
        prop_assert!(event.authority_granted(), "{:?}", event.errors());
    }

    #[test]
    fn a_back_edge_always_rejects(
        (n, edges) in arb_forward_edges(12),
        pick in any::<prop::sample::Index>(),
    ) {
        // Close a cycle: a path a -> b exists by construction, add b -> a.
        let mut edges = edges;
        let a = pick.index(n - 1);
        let b = a + 1;
        edges.push((a, b));
        edges.push((b, a));

        let engine = engine();
        let plan = build_plan(n, &edges);
        let event = engine.evaluate_at(&Contract::new(plan), fixed_time()).unwrap();
        prop_assert!(!event.authority_granted());
        prop_assert!(event.errors().iter().any(|e| e.check_id == CheckId::Dag));
    }

    #[test]
    fn self_loops_always_reject(n in 2usize..10, pick in any::<prop::sample::Index>()) {
        let a = pick.index(n);
        let engine = engine();
        let plan = build_plan(n, &[(a, a)]);
        let event = engine.evaluate_at(&Contract::new(plan), fixed_time()).unwrap();
        prop_assert_eq!(event.errors().len(), 1);
        prop_assert_eq!(event.errors()[0].check_id, CheckId::Dag);
    }
}
