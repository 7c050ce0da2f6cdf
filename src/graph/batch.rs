// src/graph/batch.rs

//! Layered parallel-execution batches.
//!
//! Kahn-style elimination of zero-dependency tasks: every task in batch *k*
//! has all its dependencies in batches `0..k-1`, and batches are maximal (a
//! task lands in the earliest batch whose predecessors satisfy it).

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::errors::{GraphError, Result};
use crate::graph::registry::TaskRegistry;
use crate::render;

/// One batch: task names whose dependencies all lie in earlier batches.
/// Membership within a batch is unordered; `BTreeSet` renders it sorted.
pub type Batch = BTreeSet<String>;

/// Compute the batch sequence for the registry's current graph.
///
/// Works on a copied name-to-dependency-set map so the computation never
/// aliases the registry's live sets. Every declared dependency name resolves
/// at call time because `add_dependency` always registers placeholders.
pub fn compute_batches(registry: &TaskRegistry) -> Result<Vec<Batch>> {
    let name_to_deps: BTreeMap<String, BTreeSet<String>> = registry
        .iter()
        .map(|t| (t.name().to_string(), t.dependencies().clone()))
        .collect();

    layer(name_to_deps)
}

/// Layer a prebuilt dependency map.
///
/// Split out from [`compute_batches`] so the cyclic failure path is reachable
/// directly: the registry itself rejects cycles at edge-insertion time, so a
/// cyclic map can only be handed in by an external caller.
pub fn layer(mut name_to_deps: BTreeMap<String, BTreeSet<String>>) -> Result<Vec<Batch>> {
    let mut batches: Vec<Batch> = Vec::new();

    while !name_to_deps.is_empty() {
        let ready: Batch = name_to_deps
            .iter()
            .filter(|(_, deps)| deps.is_empty())
            .map(|(name, _)| name.clone())
            .collect();

        // No zero-dependency task left: the residual graph is cyclic.
        if ready.is_empty() {
            return Err(GraphError::CircularDependency {
                edges: render::format_edges(&name_to_deps),
            });
        }

        for name in &ready {
            name_to_deps.remove(name);
        }
        for deps in name_to_deps.values_mut() {
            for name in &ready {
                deps.remove(name);
            }
        }

        batches.push(ready);
    }

    debug!(batches = batches.len(), "computed task batches");
    Ok(batches)
}
