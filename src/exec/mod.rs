// src/exec/mod.rs

//! Process execution layer.
//!
//! - [`invocation`] holds the captured result of one program run.
//! - [`backend`] provides the `ProgramRunner` trait and the concrete
//!   `ProcessRunner` that spawns real processes with `tokio::process`.
//!   Tests substitute a recording fake.

pub mod backend;
pub mod invocation;

pub use backend::{ProcessRunner, ProgramRunner};
pub use invocation::{ExitState, Invocation};
