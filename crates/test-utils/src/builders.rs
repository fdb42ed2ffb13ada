#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Builder for a real sample directory inside a temp dir.
///
/// The temp dir also has room for a program script next to the samples, so
/// end-to-end tests can point `--program` at something they wrote.
pub struct SampleDirBuilder {
    root: TempDir,
    samples: PathBuf,
}

impl SampleDirBuilder {
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("creating temp dir");
        let samples = root.path().join("samples");
        fs::create_dir(&samples).expect("creating samples dir");
        Self { root, samples }
    }

    pub fn file(self, name: &str, contents: &str) -> Self {
        fs::write(self.samples.join(name), contents).expect("writing sample file");
        self
    }

    pub fn subdir(self, name: &str) -> Self {
        fs::create_dir(self.samples.join(name)).expect("creating sample subdir");
        self
    }

    pub fn build(self) -> SampleDir {
        SampleDir {
            root: self.root,
            samples: self.samples,
        }
    }
}

impl Default for SampleDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A sample directory on disk; removed when dropped.
pub struct SampleDir {
    root: TempDir,
    samples: PathBuf,
}

impl SampleDir {
    pub fn root(&self) -> &Path {
        self.root.path()
    }

    pub fn samples(&self) -> &Path {
        &self.samples
    }

    /// Write an executable `sh` script into the root (outside the samples).
    #[cfg(unix)]
    pub fn script(&self, name: &str, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.root.path().join(name);
        fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("writing script");
        let mut perms = fs::metadata(&path).expect("script metadata").permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).expect("making script executable");
        path
    }
}
