// src/graph/task.rs

use std::collections::BTreeSet;

/// A named node in the dependency graph.
///
/// `dependencies` holds task *names*, not references; a dependency may be
/// declared before the task it names exists in the registry (the registry
/// backfills a placeholder on edge insertion).
///
/// Activity is derived: a task is active iff its requester set is non-empty.
/// There is no separately stored flag that could desynchronize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    name: String,
    dependencies: BTreeSet<String>,
    requesters: BTreeSet<String>,
}

impl Task {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dependencies: BTreeSet::new(),
            requesters: BTreeSet::new(),
        }
    }

    /// Unique identifier; immutable after creation.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Direct dependency names, in lexicographic order.
    pub fn dependencies(&self) -> &BTreeSet<String> {
        &self.dependencies
    }

    /// Names of tasks currently holding an activation request on this task.
    pub fn requesters(&self) -> &BTreeSet<String> {
        &self.requesters
    }

    /// A task is active while at least one requester remains.
    pub fn is_active(&self) -> bool {
        !self.requesters.is_empty()
    }

    /// Returns `true` if the edge was newly inserted.
    pub(crate) fn add_dependency(&mut self, dep: &str) -> bool {
        self.dependencies.insert(dep.to_string())
    }

    pub(crate) fn remove_dependency(&mut self, dep: &str) -> bool {
        self.dependencies.remove(dep)
    }

    pub(crate) fn add_requester(&mut self, requester: &str) -> bool {
        self.requesters.insert(requester.to_string())
    }

    pub(crate) fn remove_requester(&mut self, requester: &str) -> bool {
        self.requesters.remove(requester)
    }
}
