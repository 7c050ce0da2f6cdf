// src/graph/registry.rs

//! Process-wide collection of all known tasks, keyed by unique name.
//!
//! The registry is an explicit context object rather than a module-level
//! singleton, so tests (and future hosts) can hold multiple independent
//! graphs. It owns task lifecycle and enforces the graph invariants: name
//! uniqueness, acyclicity at edge-insertion time, and the no-removal-while-
//! active guard.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::errors::{GraphError, Result};
use crate::graph::activation;
use crate::graph::batch::{self, Batch};
use crate::graph::cycle;
use crate::graph::task::Task;

#[derive(Debug, Clone, Default)]
pub struct TaskRegistry {
    tasks: BTreeMap<String, Task>,
}

impl TaskRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// All registered tasks, in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.values()
    }

    /// Return the task with this name, creating and registering an empty one
    /// if it does not exist yet. Idempotent; no error condition.
    pub fn get_or_create(&mut self, name: &str) -> &Task {
        self.tasks
            .entry(name.to_string())
            .or_insert_with(|| Task::new(name))
    }

    /// Pure lookup.
    pub fn find(&self, name: &str) -> Option<&Task> {
        self.tasks.get(name)
    }

    pub(crate) fn task_mut(&mut self, name: &str) -> Option<&mut Task> {
        self.tasks.get_mut(name)
    }

    /// Remove a task. Fails with [`GraphError::TaskActive`] while the task
    /// still holds requesters. On success the name is also pruned from every
    /// remaining task's dependency set, so no dangling edge survives.
    pub fn remove(&mut self, name: &str) -> Result<()> {
        let task = self
            .tasks
            .get(name)
            .ok_or_else(|| GraphError::NotFound(name.to_string()))?;

        if task.is_active() {
            warn!(task = %name, "refusing to remove an active task");
            return Err(GraphError::TaskActive(name.to_string()));
        }

        self.tasks.remove(name);
        for task in self.tasks.values_mut() {
            task.remove_dependency(name);
        }

        debug!(task = %name, "task removed and pruned from dependency sets");
        Ok(())
    }

    /// Add a dependency edge `task -> dep`.
    ///
    /// Creates `task` if it is not registered yet, and on success registers
    /// `dep` as a placeholder if absent — collaborators rely on declaring a
    /// dependency before the task it names formally exists.
    ///
    /// The edge is inserted tentatively and the *whole* graph is re-validated:
    /// a single new edge can close a cycle that is only visible starting from
    /// a task other than the two endpoints. On a cycle the edge is rolled
    /// back and [`GraphError::WouldCycle`] returned, leaving the graph
    /// exactly as it was.
    ///
    /// If `task` is already active, the new dependency is activated on behalf
    /// of every requester currently recorded against `task`, keeping the
    /// active closure consistent.
    pub fn add_dependency(&mut self, task: &str, dep: &str) -> Result<()> {
        if task == dep {
            return Err(GraphError::SelfDependency(task.to_string()));
        }

        self.get_or_create(task);

        let inserted = self
            .tasks
            .get_mut(task)
            .map(|t| t.add_dependency(dep))
            .unwrap_or(false);

        if !cycle::validate_all(self) {
            if inserted {
                if let Some(t) = self.tasks.get_mut(task) {
                    t.remove_dependency(dep);
                }
            }
            warn!(task = %task, dep = %dep, "edge rejected: would create a cycle");
            return Err(GraphError::WouldCycle {
                task: task.to_string(),
                dep: dep.to_string(),
            });
        }

        self.get_or_create(dep);

        let requesters: Vec<String> = self
            .tasks
            .get(task)
            .map(|t| t.requesters().iter().cloned().collect())
            .unwrap_or_default();
        for requester in requesters {
            activation::activate_as(self, dep, &requester)?;
        }

        debug!(task = %task, dep = %dep, "dependency added");
        Ok(())
    }

    /// Remove the edge `task -> dep` from `task`'s dependency set.
    ///
    /// Unconditional apart from the `task` lookup: removing an edge can not
    /// introduce a cycle, so no validation runs. Removing an edge that is not
    /// present is a no-op.
    pub fn remove_dependency(&mut self, task: &str, dep: &str) -> Result<()> {
        let t = self
            .tasks
            .get_mut(task)
            .ok_or_else(|| GraphError::NotFound(task.to_string()))?;

        t.remove_dependency(dep);
        debug!(task = %task, dep = %dep, "dependency removed");
        Ok(())
    }

    /// Activate a task on its own behalf; the request propagates to every
    /// transitive dependency.
    pub fn activate(&mut self, name: &str) -> Result<()> {
        activation::activate_as(self, name, name)
    }

    /// Withdraw a task's own activation request from itself and every
    /// transitive dependency. A dependency stays active while any other
    /// requester remains.
    pub fn deactivate(&mut self, name: &str) -> Result<()> {
        activation::deactivate_as(self, name, name)
    }

    /// Layered parallel-execution batches over the current graph.
    pub fn compute_batches(&self) -> Result<Vec<Batch>> {
        batch::compute_batches(self)
    }

    /// Name-sorted snapshot of every task's sorted dependency names.
    pub fn list_dependencies(&self) -> Vec<(String, Vec<String>)> {
        self.tasks
            .values()
            .map(|t| {
                (
                    t.name().to_string(),
                    t.dependencies().iter().cloned().collect(),
                )
            })
            .collect()
    }

    /// Name-sorted snapshot of `(name, active, sorted requester names)`.
    pub fn list_statuses(&self) -> Vec<(String, bool, Vec<String>)> {
        self.tasks
            .values()
            .map(|t| {
                (
                    t.name().to_string(),
                    t.is_active(),
                    t.requesters().iter().cloned().collect(),
                )
            })
            .collect()
    }
}
