// src/config.rs

//! Runner configuration.
//!
//! The runner never reads ambient globals: everything it needs is carried in a
//! [`RunnerConfig`] built once at the top level (from [`CliArgs`] in
//! production, directly in tests).

use std::path::PathBuf;

use crate::cli::CliArgs;

/// Default sample directory, relative to the working directory.
pub const DEFAULT_SAMPLES_DIR: &str = "./samples";

/// Default program invoked for each sample.
pub const DEFAULT_PROGRAM: &str = "./mkv.out";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerConfig {
    /// Directory whose immediate regular files form the sample set.
    pub samples_dir: PathBuf,
    /// Executable run once per sample.
    pub program: PathBuf,
    /// Glob patterns matched against file names. Empty keeps every file.
    pub include: Vec<String>,
    /// Turn failed invocations into a failed run.
    pub strict: bool,
    /// Emit a timing summary after the relay.
    pub timings: bool,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            samples_dir: PathBuf::from(DEFAULT_SAMPLES_DIR),
            program: PathBuf::from(DEFAULT_PROGRAM),
            include: Vec::new(),
            strict: false,
            timings: false,
        }
    }
}

impl RunnerConfig {
    pub fn new(samples_dir: impl Into<PathBuf>, program: impl Into<PathBuf>) -> Self {
        Self {
            samples_dir: samples_dir.into(),
            program: program.into(),
            ..Self::default()
        }
    }

    pub fn with_include(mut self, pattern: impl Into<String>) -> Self {
        self.include.push(pattern.into());
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn timings(mut self, timings: bool) -> Self {
        self.timings = timings;
        self
    }
}

impl From<&CliArgs> for RunnerConfig {
    fn from(args: &CliArgs) -> Self {
        Self {
            samples_dir: args.samples_dir.clone(),
            program: args.program.clone(),
            include: args.include.clone(),
            strict: args.strict,
            timings: args.timings,
        }
    }
}
