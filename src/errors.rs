// src/errors.rs

//! Crate-wide error aliases and helpers.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SamplerunError {
    #[error("The directory {} does not exist.", .0.display())]
    SampleDirMissing(PathBuf),

    #[error("{} is not a directory.", .0.display())]
    NotADirectory(PathBuf),

    #[error("Invalid include pattern '{pattern}'")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("{failed} of {total} invocations failed: {}", .files.join(", "))]
    StrictFailures {
        failed: usize,
        total: usize,
        files: Vec<String>,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, SamplerunError>;
