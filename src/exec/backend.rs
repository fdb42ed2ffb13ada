// src/exec/backend.rs

//! Pluggable program runner abstraction.
//!
//! The batch runner talks to a `ProgramRunner` instead of spawning processes
//! itself. This makes it easy to swap in a fake runner in tests that records
//! which samples were run and returns canned output.
//!
//! - `ProcessRunner` is the implementation used by `samplerun`. It runs the
//!   program through `tokio::process::Command` and waits for it to exit.
//! - Runners never fail: a process that cannot be started is reported as an
//!   [`ExitState::LaunchFailed`] invocation with empty output.

use std::future::Future;
use std::path::Path;
use std::pin::Pin;
use std::process::Stdio;
use std::time::Instant;

use tokio::process::Command;
use tracing::debug;

use super::invocation::{ExitState, Invocation};

/// Trait abstracting how the program is run on one sample.
pub trait ProgramRunner: Send {
    /// Run `program` with `sample` as its single argument and wait for it to
    /// finish, capturing both output streams.
    fn run<'a>(
        &'a mut self,
        program: &'a Path,
        sample: &'a Path,
    ) -> Pin<Box<dyn Future<Output = Invocation> + Send + 'a>>;
}

/// Real runner that spawns OS processes.
#[derive(Debug, Clone, Default)]
pub struct ProcessRunner;

impl ProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ProgramRunner for ProcessRunner {
    fn run<'a>(
        &'a mut self,
        program: &'a Path,
        sample: &'a Path,
    ) -> Pin<Box<dyn Future<Output = Invocation> + Send + 'a>> {
        Box::pin(async move {
            let started = Instant::now();

            let mut cmd = Command::new(program);
            cmd.arg(sample)
                .stdin(Stdio::null())
                .stdout(Stdio::piped())
                .stderr(Stdio::piped())
                .kill_on_drop(true);

            let output = match cmd.output().await {
                Ok(output) => output,
                Err(err) => {
                    debug!(
                        program = %program.display(),
                        sample = %sample.display(),
                        error = %err,
                        "failed to launch program"
                    );
                    return Invocation::launch_failed(err.to_string(), started.elapsed());
                }
            };

            let exit = if output.status.success() {
                ExitState::Success
            } else {
                ExitState::Failed(output.status.code().unwrap_or(-1))
            };

            Invocation {
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
                exit,
                elapsed: started.elapsed(),
            }
        })
    }
}
