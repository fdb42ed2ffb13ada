// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod exec;
pub mod fs;
pub mod logging;
pub mod report;
pub mod runner;
pub mod samples;

use std::io::Write;

use tracing::debug;

use crate::cli::CliArgs;
use crate::config::RunnerConfig;
use crate::errors::Result;
use crate::exec::{ProcessRunner, ProgramRunner};
use crate::fs::{FileSystem, RealFileSystem};
use crate::runner::{BatchRunner, RunSummary};

/// High-level entry point used by `main.rs`.
///
/// Builds the [`RunnerConfig`] from the command line and runs the batch
/// against the real filesystem and real processes, relaying to stdout. Timing
/// summaries go to stderr.
pub async fn run(args: CliArgs) -> Result<()> {
    let config = RunnerConfig::from(&args);
    debug!(?config, "resolved runner configuration");

    let mut stdout = std::io::stdout();

    if args.dry_run {
        let runner = BatchRunner::new(config, RealFileSystem, ProcessRunner::new());
        let samples = runner.samples()?;
        report::write_dry_run(
            &mut stdout,
            &runner.config().program,
            &runner.config().samples_dir,
            &samples,
        )?;
        return Ok(());
    }

    let mut stderr = std::io::stderr();
    run_batch(
        config,
        RealFileSystem,
        ProcessRunner::new(),
        &mut stdout,
        &mut stderr,
    )
    .await?;
    Ok(())
}

/// Run one batch and apply the post-run options.
///
/// The relay goes to `out`. With `timings` enabled the summary is written to
/// `diag` once every sample has been relayed. With `strict` enabled, any
/// failed invocation turns into an error after the relay and timings are
/// complete.
pub async fn run_batch<F, R, O, E>(
    config: RunnerConfig,
    fs: F,
    runner: R,
    out: &mut O,
    diag: &mut E,
) -> Result<RunSummary>
where
    F: FileSystem,
    R: ProgramRunner,
    O: Write,
    E: Write,
{
    let strict = config.strict;
    let timings = config.timings;

    let mut batch = BatchRunner::new(config, fs, runner);
    let summary = batch.run(out).await?;

    debug!(
        total = summary.total(),
        failed = summary.failures().count(),
        "batch complete"
    );

    if timings {
        report::write_timings(diag, &summary.records)?;
    }
    if strict {
        summary.check_strict()?;
    }

    Ok(summary)
}
