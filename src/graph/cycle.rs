// src/graph/cycle.rs

//! Whole-graph cycle validation.
//!
//! This gates every edge insertion in
//! [`TaskRegistry::add_dependency`](crate::graph::TaskRegistry::add_dependency).

use std::collections::HashSet;

use crate::graph::registry::TaskRegistry;

/// Returns `true` if `name` is reachable from itself through the dependency
/// relation, i.e. there exists a non-trivial path from the task back to
/// itself.
///
/// Iterative DFS with an explicit work stack and visited set, so depth is
/// bounded for arbitrarily deep graphs and the traversal terminates in
/// O(V + E). Dependency names that never became registered tasks are treated
/// as leaves.
pub fn is_reachable_from_self(registry: &TaskRegistry, name: &str) -> bool {
    let Some(task) = registry.find(name) else {
        return false;
    };

    let mut stack: Vec<&str> = task.dependencies().iter().map(String::as_str).collect();
    let mut visited: HashSet<&str> = HashSet::new();

    while let Some(current) = stack.pop() {
        if current == name {
            return true;
        }
        if !visited.insert(current) {
            continue;
        }
        if let Some(task) = registry.find(current) {
            stack.extend(task.dependencies().iter().map(String::as_str));
        }
    }

    false
}

/// Returns `true` iff no registered task is reachable from itself.
///
/// The whole-graph sweep is deliberate: a single new edge can create a cycle
/// that is only detectable starting from a task other than the edge's two
/// endpoints.
pub fn validate_all(registry: &TaskRegistry) -> bool {
    registry
        .iter()
        .all(|task| !is_reachable_from_self(registry, task.name()))
}
