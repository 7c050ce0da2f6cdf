// src/render.rs

//! Plain-text rendering of graph snapshots.
//!
//! Shared between the interactive shell, the one-shot CLI flags and the
//! `CircularDependency` error payload. The engine itself never prints; it
//! only hands back data (or, for the batcher, a preformatted edge list).

use std::collections::{BTreeMap, BTreeSet};

use crate::graph::batch::Batch;
use crate::graph::registry::TaskRegistry;

/// One `\tname -> dep` line per edge, `name -> None` for tasks without
/// dependencies. Names come out sorted because the map and sets are ordered.
pub fn format_edges(name_to_deps: &BTreeMap<String, BTreeSet<String>>) -> String {
    let mut lines = Vec::new();

    for (name, deps) in name_to_deps {
        if deps.is_empty() {
            lines.push(format!("\t{name} -> None"));
        } else {
            for dep in deps {
                lines.push(format!("\t{name} -> {dep}"));
            }
        }
    }

    lines.join("\n")
}

/// Edge-list rendering of the registry's current dependency table.
pub fn format_dependencies(registry: &TaskRegistry) -> String {
    let name_to_deps: BTreeMap<String, BTreeSet<String>> = registry
        .iter()
        .map(|t| (t.name().to_string(), t.dependencies().clone()))
        .collect();

    format_edges(&name_to_deps)
}

/// One line per task: `\tname: active: [r1, r2]`, or `\tname: not active`
/// when the requester set is empty.
pub fn format_statuses(registry: &TaskRegistry) -> String {
    let mut lines = Vec::new();

    for (name, active, requesters) in registry.list_statuses() {
        let status = if active { "active" } else { "not active" };
        if requesters.is_empty() {
            lines.push(format!("\t{name}: {status}"));
        } else {
            lines.push(format!("\t{name}: {status}: [{}]", requesters.join(", ")));
        }
    }

    lines.join("\n")
}

/// One line per batch, members comma-joined in sorted order.
pub fn format_batches(batches: &[Batch]) -> String {
    batches
        .iter()
        .map(|batch| {
            let names: Vec<&str> = batch.iter().map(String::as_str).collect();
            format!("\t{}", names.join(", "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}
