// src/runner.rs

//! The batch runner: one linear pass over the sample set.
//!
//! For each sample, in file-name order, the program is run to completion and
//! its output relayed before the next sample is started. There is no
//! cross-sample state, no retry and no timeout. Child outcomes never change
//! what is printed; they are only kept in the returned [`RunSummary`] so the
//! caller can apply `--strict` and `--timings`.

use std::io::Write;
use std::time::Duration;

use tracing::debug;

use crate::config::RunnerConfig;
use crate::errors::{Result, SamplerunError};
use crate::exec::{ExitState, ProgramRunner};
use crate::fs::FileSystem;
use crate::report;
use crate::samples::{collect_samples, Sample, SampleFilter};

/// Outcome of one sample, without the relayed text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunRecord {
    pub sample: Sample,
    pub exit: ExitState,
    pub elapsed: Duration,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub records: Vec<RunRecord>,
}

impl RunSummary {
    pub fn total(&self) -> usize {
        self.records.len()
    }

    pub fn failures(&self) -> impl Iterator<Item = &RunRecord> {
        self.records.iter().filter(|r| !r.exit.is_success())
    }

    /// Strict mode: any launch failure or unsuccessful exit fails the run.
    pub fn check_strict(&self) -> Result<()> {
        let files: Vec<String> = self.failures().map(|r| r.sample.name.clone()).collect();
        if files.is_empty() {
            return Ok(());
        }
        Err(SamplerunError::StrictFailures {
            failed: files.len(),
            total: self.total(),
            files,
        })
    }
}

pub struct BatchRunner<F: FileSystem, R: ProgramRunner> {
    config: RunnerConfig,
    fs: F,
    runner: R,
}

impl<F: FileSystem, R: ProgramRunner> BatchRunner<F, R> {
    pub fn new(config: RunnerConfig, fs: F, runner: R) -> Self {
        Self { config, fs, runner }
    }

    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Enumerate the sample set without running anything.
    pub fn samples(&self) -> Result<Vec<Sample>> {
        let filter = SampleFilter::from_patterns(&self.config.include)?;
        collect_samples(&self.fs, &self.config.samples_dir, &filter)
    }

    /// Run the program on every sample, relaying output to `out`.
    ///
    /// Fails only on setup errors (sample directory missing, bad pattern) or
    /// when writing to `out` fails. Nothing is run if setup fails.
    pub async fn run<W: Write>(&mut self, out: &mut W) -> Result<RunSummary> {
        let samples = self.samples()?;
        let mut summary = RunSummary::default();

        for sample in samples {
            debug!(
                file = %sample.name,
                program = %self.config.program.display(),
                "running sample"
            );

            let invocation = self.runner.run(&self.config.program, &sample.path).await;
            report::write_section(out, &sample, &invocation)?;

            match &invocation.exit {
                ExitState::Success => {}
                ExitState::Failed(code) => {
                    debug!(file = %sample.name, exit_code = code, "program exited unsuccessfully");
                }
                ExitState::LaunchFailed(reason) => {
                    debug!(file = %sample.name, %reason, "program could not be launched");
                }
            }
            debug!(
                file = %sample.name,
                elapsed = ?invocation.elapsed,
                "sample finished"
            );

            summary.records.push(RunRecord {
                sample,
                exit: invocation.exit,
                elapsed: invocation.elapsed,
            });
        }

        Ok(summary)
    }
}
