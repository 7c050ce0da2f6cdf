// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `taskdag`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "taskdag",
    version,
    about = "Maintain a DAG of named tasks: validate edges, plan parallel batches, track activation.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to a TOML seed file with initial tasks.
    ///
    /// If omitted, the shell starts with an empty registry.
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,

    /// Print the dependency table and exit (no interactive shell).
    #[arg(long)]
    pub deps: bool,

    /// Print the status table and exit (no interactive shell).
    #[arg(long)]
    pub statuses: bool,

    /// Print the parallel-execution batches and exit (no interactive shell).
    #[arg(long)]
    pub batches: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `TASKDAG_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
