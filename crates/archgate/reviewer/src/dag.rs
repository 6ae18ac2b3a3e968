//! Build DAG validation: reference existence and cycle detection.
//!
//! Cycle detection is a depth-first search with white/gray/black coloring,
//! driven by an explicit stack so that pathological graphs are bounded by
//! `max_depth` instead of by the call stack.

use indexmap::IndexMap;
use serde_json::{Map, Value};
use std::collections::{BTreeSet, HashMap};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Color {
    White,
    Gray,
    Black,
}

fn color_of(colors: &HashMap<&str, Color>, node: &str) -> Color {
    colors.get(node).copied().unwrap_or(Color::White)
}

/// Outcome of a cycle search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CycleSearch {
    /// Every node was fully explored without re-entering the active path.
    Acyclic,
    /// A node on the active path was re-entered.
    Cycle {
        /// Traversal root from which the cycle was reached.
        root: String,
        /// Back edge that closed the cycle.
        from: String,
        to: String,
    },
    /// The active path from `root` grew beyond the depth limit.
    DepthExceeded { root: String, limit: usize },
}

/// An undefined node or dependency target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UndefinedReference {
    Node(String),
    Target { node: String, target: String },
}

/// Adjacency view over a `build_dag` mapping, in document order.
pub struct DagValidator<'a> {
    edges: IndexMap<&'a str, Vec<&'a str>>,
}

impl<'a> DagValidator<'a> {
    /// Non-string dependency entries are ignored; the schema stage has
    /// already rejected them.
    pub fn new(dag: &'a Map<String, Value>) -> Self {
        let edges = dag
            .iter()
            .map(|(node, targets)| {
                let targets = targets
                    .as_array()
                    .map(|items| items.iter().filter_map(Value::as_str).collect())
                    .unwrap_or_default();
                (node.as_str(), targets)
            })
            .collect();
        Self { edges }
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Every node and target not present in `defined`, in node order.
    pub fn undefined_references(&self, defined: &BTreeSet<&str>) -> Vec<UndefinedReference> {
        let mut undefined = Vec::new();
        for (node, targets) in &self.edges {
            if !defined.contains(node) {
                undefined.push(UndefinedReference::Node(node.to_string()));
            }
            for target in targets {
                if !defined.contains(target) {
                    undefined.push(UndefinedReference::Target {
                        node: node.to_string(),
                        target: target.to_string(),
                    });
                }
            }
        }
        undefined
    }

    /// Search for the first cycle, trying roots in declaration order.
    pub fn find_cycle(&self, max_depth: usize) -> CycleSearch {
        let mut colors: HashMap<&str, Color> = HashMap::new();

        for &root in self.edges.keys() {
            if color_of(&colors, root) != Color::White {
                continue;
            }

            colors.insert(root, Color::Gray);
            let mut path: Vec<(&str, usize)> = vec![(root, 0)];

            while let Some(frame) = path.last_mut() {
                let (node, next_index) = *frame;
                let neighbors = self.edges.get(node).map(Vec::as_slice).unwrap_or(&[]);

                let Some(&next) = neighbors.get(next_index) else {
                    colors.insert(node, Color::Black);
                    path.pop();
                    continue;
                };
                frame.1 += 1;

                match color_of(&colors, next) {
                    Color::White => {
                        if path.len() >= max_depth {
                            return CycleSearch::DepthExceeded {
                                root: root.to_string(),
                                limit: max_depth,
                            };
                        }
                        colors.insert(next, Color::Gray);
                        path.push((next, 0));
                    }
                    Color::Gray => {
                        return CycleSearch::Cycle {
                            root: root.to_string(),
                            from: node.to_string(),
                            to: next.to_string(),
                        };
                    }
                    Color::Black => {}
                }
            }
        }
        CycleSearch::Acyclic
    }
}
