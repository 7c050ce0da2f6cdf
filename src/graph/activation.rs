// src/graph/activation.rs

//! Requester-tagged activation propagation.
//!
//! Activity is reference-counted by *requester name*: the tag carried through
//! the traversal is the name of the task whose activation request originated
//! the propagation, not the immediate caller. That is what lets a dependency
//! shared by two independent dependents stay active until both have
//! withdrawn.

use std::collections::BTreeSet;

use tracing::debug;

use crate::errors::{GraphError, Result};
use crate::graph::registry::TaskRegistry;

/// Add `requester` to the requester set of `name` and of every transitive
/// dependency of `name`.
///
/// Once this returns, every task in the closure is active. Re-activating with
/// a requester already present is absorbed by set semantics; activating with
/// a different requester adds it without disturbing existing ones.
pub fn activate_as(registry: &mut TaskRegistry, name: &str, requester: &str) -> Result<()> {
    let closure = dependency_closure(registry, name)?;

    for task_name in &closure {
        if let Some(task) = registry.task_mut(task_name) {
            task.add_requester(requester);
        }
    }

    debug!(
        task = %name,
        requester = %requester,
        tasks = closure.len(),
        "activation propagated"
    );
    Ok(())
}

/// Remove `requester` from the requester set of `name` and of every
/// transitive dependency of `name`.
///
/// A task only goes inactive when its requester set empties, i.e. when every
/// requester that ever activated it (directly or transitively) has withdrawn.
pub fn deactivate_as(registry: &mut TaskRegistry, name: &str, requester: &str) -> Result<()> {
    let closure = dependency_closure(registry, name)?;

    for task_name in &closure {
        if let Some(task) = registry.task_mut(task_name) {
            task.remove_requester(requester);
        }
    }

    debug!(
        task = %name,
        requester = %requester,
        tasks = closure.len(),
        "deactivation propagated"
    );
    Ok(())
}

/// `name` plus every task reachable from it over dependency edges.
///
/// Iterative with a visited set, so deep graphs can not overflow the call
/// stack and shared dependencies are visited once. Fails with
/// [`GraphError::NotFound`] when `name` is not registered.
fn dependency_closure(registry: &TaskRegistry, name: &str) -> Result<BTreeSet<String>> {
    if registry.find(name).is_none() {
        return Err(GraphError::NotFound(name.to_string()));
    }

    let mut stack = vec![name.to_string()];
    let mut visited: BTreeSet<String> = BTreeSet::new();

    while let Some(current) = stack.pop() {
        if !visited.insert(current.clone()) {
            continue;
        }
        if let Some(task) = registry.find(&current) {
            stack.extend(task.dependencies().iter().cloned());
        }
    }

    Ok(visited)
}
