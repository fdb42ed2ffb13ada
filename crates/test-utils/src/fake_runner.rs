use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use samplerun::exec::{ExitState, Invocation, ProgramRunner};
use tracing::debug;

type Responder = Box<dyn Fn(&Path) -> Invocation + Send>;

/// A fake runner that:
/// - records every `(program, sample)` pair it was asked to run
/// - answers with a canned `Invocation` (by default `ran <file name>` on
///   stdout, nothing on stderr, success).
pub struct RecordingRunner {
    calls: Arc<Mutex<Vec<(PathBuf, PathBuf)>>>,
    respond: Responder,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            respond: Box::new(|sample| {
                let name = sample
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                Invocation::new(format!("ran {name}"), "", ExitState::Success)
            }),
        }
    }

    /// Replace the canned response.
    pub fn responding_with<F>(mut self, respond: F) -> Self
    where
        F: Fn(&Path) -> Invocation + Send + 'static,
    {
        self.respond = Box::new(respond);
        self
    }

    /// Shared handle to the recorded calls; stays valid after the runner is
    /// moved into a `BatchRunner`.
    pub fn calls(&self) -> Arc<Mutex<Vec<(PathBuf, PathBuf)>>> {
        Arc::clone(&self.calls)
    }
}

impl Default for RecordingRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgramRunner for RecordingRunner {
    fn run<'a>(
        &'a mut self,
        program: &'a Path,
        sample: &'a Path,
    ) -> Pin<Box<dyn Future<Output = Invocation> + Send + 'a>> {
        {
            let mut guard = self.calls.lock().unwrap();
            guard.push((program.to_path_buf(), sample.to_path_buf()));
        }
        let invocation = (self.respond)(sample);
        debug!(
            program = %program.display(),
            sample = %sample.display(),
            exit = ?invocation.exit,
            "fake runner answered"
        );

        Box::pin(async move { invocation })
    }
}
