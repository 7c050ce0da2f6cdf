// src/config/model.rs

use std::collections::BTreeMap;

use serde::Deserialize;

/// Top-level seed file:
///
/// ```toml
/// [task.A]
/// after = ["B", "C"]
/// active = true
///
/// [task.B]
///
/// [task.C]
/// after = ["B"]
/// ```
///
/// Keys under `task` are the task names. A name that only appears inside an
/// `after` list is fine; the registry creates it as a placeholder.
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub task: BTreeMap<String, TaskConfig>,
}

/// `[task.<name>]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskConfig {
    /// Dependency list: this task requires every task named here.
    #[serde(default)]
    pub after: Vec<String>,

    /// Activate the task (on its own behalf) once the whole file is loaded.
    #[serde(default)]
    pub active: bool,
}
