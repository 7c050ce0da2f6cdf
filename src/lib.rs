// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod graph;
pub mod logging;
pub mod render;
pub mod shell;

use anyhow::Result;
use tracing::debug;

use crate::cli::CliArgs;
use crate::graph::TaskRegistry;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - optional seed file loading
/// - the one-shot table flags (`--deps`, `--statuses`, `--batches`)
/// - the interactive shell
pub fn run(args: CliArgs) -> Result<()> {
    let mut registry = TaskRegistry::new();

    if let Some(path) = &args.config {
        config::load_into(&mut registry, path)?;
    }

    if args.deps || args.statuses || args.batches {
        print_tables(&registry, &args)?;
        return Ok(());
    }

    shell::run(&mut registry)
}

/// Non-interactive mode: print the requested tables on stdout and exit.
fn print_tables(registry: &TaskRegistry, args: &CliArgs) -> Result<()> {
    if args.deps {
        println!("{}", render::format_dependencies(registry));
    }
    if args.statuses {
        println!("{}", render::format_statuses(registry));
    }
    if args.batches {
        let batches = registry.compute_batches()?;
        println!("{}", render::format_batches(&batches));
    }

    debug!("one-shot output complete");
    Ok(())
}
