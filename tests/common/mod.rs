#![allow(dead_code)]

use std::error::Error;

pub use samplerun_test_utils::builders::{SampleDir, SampleDirBuilder};
pub use samplerun_test_utils::fake_runner::RecordingRunner;
pub use samplerun_test_utils::{init_tracing, with_timeout};

pub type TestResult = Result<(), Box<dyn Error>>;
