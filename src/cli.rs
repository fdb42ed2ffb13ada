// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::{DEFAULT_PROGRAM, DEFAULT_SAMPLES_DIR};

/// Command-line arguments for `samplerun`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "samplerun",
    version,
    about = "Run a program once per sample file and relay its output.",
    long_about = None
)]
pub struct CliArgs {
    /// Directory whose regular files are fed to the program.
    #[arg(long, value_name = "DIR", default_value = DEFAULT_SAMPLES_DIR)]
    pub samples_dir: PathBuf,

    /// Program invoked once per sample file, with the file path as its only
    /// argument.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_PROGRAM)]
    pub program: PathBuf,

    /// Only run sample files whose name matches this glob.
    ///
    /// May be given several times; a file is kept if any pattern matches.
    #[arg(long = "include", value_name = "GLOB")]
    pub include: Vec<String>,

    /// Fail the run if any invocation could not start or exited non-zero.
    ///
    /// Output is relayed exactly as without the flag.
    #[arg(long)]
    pub strict: bool,

    /// Print per-file wall-clock timings to stderr after the run.
    #[arg(long)]
    pub timings: bool,

    /// List the sample files that would be run, without running anything.
    #[arg(long)]
    pub dry_run: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `SAMPLERUN_LOG` or a default level will be used.
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
