// src/exec/invocation.rs

use std::time::Duration;

/// How a program run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExitState {
    Success,
    /// Non-zero exit code, or -1 when the process was killed by a signal.
    Failed(i32),
    /// The process could not be started at all.
    LaunchFailed(String),
}

impl ExitState {
    pub fn is_success(&self) -> bool {
        matches!(self, ExitState::Success)
    }
}

/// Captured result of running the program on one sample.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub stdout: String,
    pub stderr: String,
    pub exit: ExitState,
    pub elapsed: Duration,
}

impl Invocation {
    pub fn new(stdout: impl Into<String>, stderr: impl Into<String>, exit: ExitState) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: stderr.into(),
            exit,
            elapsed: Duration::ZERO,
        }
    }

    /// Nothing was captured because the process never ran.
    pub fn launch_failed(reason: impl Into<String>, elapsed: Duration) -> Self {
        Self {
            stdout: String::new(),
            stderr: String::new(),
            exit: ExitState::LaunchFailed(reason.into()),
            elapsed,
        }
    }
}
