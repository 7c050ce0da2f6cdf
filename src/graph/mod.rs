// src/graph/mod.rs

//! The dependency-graph engine.
//!
//! - [`task`] holds the node type: a name, its declared dependencies and its
//!   current activation requesters.
//! - [`registry`] owns all tasks, keyed by unique name, and is the only way
//!   collaborators mutate the graph.
//! - [`cycle`] decides whether any task is reachable from itself; it gates
//!   every edge insertion.
//! - [`batch`] computes layered parallel-execution batches (Kahn-style).
//! - [`activation`] propagates requester-tagged activate/deactivate across
//!   the dependency relation.
//!
//! The engine performs no I/O and is single-threaded and synchronous: every
//! operation is a bounded traversal over a finite graph. When embedded in a
//! concurrent host, the whole registry must sit behind one exclusive lock,
//! since traversals cross task boundaries.

pub mod activation;
pub mod batch;
pub mod cycle;
pub mod registry;
pub mod task;

pub use batch::Batch;
pub use registry::TaskRegistry;
pub use task::Task;
