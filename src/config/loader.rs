// src/config/loader.rs

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::config::model::ConfigFile;
use crate::graph::TaskRegistry;

/// Read and parse a seed file. No graph semantics are checked here; that
/// happens when the file is applied to a registry.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let path = path.as_ref();
    let contents =
        fs::read_to_string(path).with_context(|| format!("reading seed file at {path:?}"))?;

    let config: ConfigFile =
        toml::from_str(&contents).with_context(|| format!("parsing TOML from {path:?}"))?;

    Ok(config)
}

/// Load a seed file and apply it to `registry`.
///
/// Tasks are created first, then edges (each edge runs the engine's cycle
/// validation, so a cyclic seed file fails here with the offending edge in
/// context), then activations.
pub fn load_into(registry: &mut TaskRegistry, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let config = load_from_path(path)?;

    for name in config.task.keys() {
        registry.get_or_create(name);
    }

    for (name, task) in config.task.iter() {
        for dep in task.after.iter() {
            registry
                .add_dependency(name, dep)
                .with_context(|| format!("applying edge '{name}' -> '{dep}' from {path:?}"))?;
        }
    }

    for (name, task) in config.task.iter() {
        if task.active {
            registry
                .activate(name)
                .with_context(|| format!("activating task '{name}' from {path:?}"))?;
        }
    }

    info!(tasks = config.task.len(), path = ?path, "seed file applied");
    Ok(())
}
