// src/config/mod.rs

//! Optional TOML seed files.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a file from disk and apply it to a registry (`loader.rs`).
//!
//! Applying goes through the normal registry operations, so a seed file gets
//! the same cycle validation and activation propagation as interactive input.

pub mod loader;
pub mod model;

pub use loader::{load_from_path, load_into};
pub use model::{ConfigFile, TaskConfig};
