// src/errors.rs

//! Crate-wide error types.
//!
//! Every engine failure is returned as a value; the engine never aborts on
//! bad input, and a rejected mutation leaves the registry exactly as it was
//! before the call.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GraphError {
    #[error("task not found: {0}")]
    NotFound(String),

    #[error("task '{0}' is currently active and can not be removed")]
    TaskActive(String),

    #[error("task '{0}' can not depend on itself")]
    SelfDependency(String),

    #[error("dependency '{dep}' on task '{task}' would create a cycle")]
    WouldCycle { task: String, dep: String },

    /// Batching found a non-empty residual graph with no zero-dependency
    /// task. `edges` holds a rendering of the remaining edges for diagnosis.
    #[error("circular dependencies found!\n{edges}")]
    CircularDependency { edges: String },
}

pub type Result<T> = std::result::Result<T, GraphError>;
