#[path = "property/canonical_hash.rs"]
mod canonical_hash;

#[path = "property/dag_cycles.rs"]
mod dag_cycles;

#[path = "property/determinism.rs"]
mod determinism;

#[path = "property/concurrency.rs"]
mod concurrency;
