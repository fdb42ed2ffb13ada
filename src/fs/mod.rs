// src/fs/mod.rs

//! Filesystem access used to enumerate the sample set.
//!
//! The runner only ever reads one directory, so the trait is limited to the
//! queries it needs. [`mock::MockFileSystem`] backs the enumeration tests.

use std::fmt::Debug;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

pub mod mock;

/// Abstract filesystem interface.
pub trait FileSystem: Send + Sync + Debug {
    fn exists(&self, path: &Path) -> bool;

    /// True for regular files, following symlinks.
    fn is_file(&self, path: &Path) -> bool;

    fn is_dir(&self, path: &Path) -> bool;

    /// Return the entries of a directory as full paths (`path` joined with
    /// each entry name), in whatever order the backend yields them.
    fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>>;
}

/// Implementation that uses `std::fs`.
#[derive(Debug, Clone, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(path).with_context(|| format!("reading dir {:?}", path))? {
            let entry = entry.with_context(|| format!("reading entry of {:?}", path))?;
            entries.push(entry.path());
        }
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn real_fs_lists_full_paths() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "a").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();

        let fs = RealFileSystem;
        let mut entries = fs.read_dir(dir.path()).unwrap();
        entries.sort();

        assert_eq!(
            entries,
            vec![dir.path().join("a.txt"), dir.path().join("nested")]
        );
        assert!(fs.is_file(&dir.path().join("a.txt")));
        assert!(fs.is_dir(&dir.path().join("nested")));
    }

    #[test]
    fn real_fs_read_dir_on_missing_path_has_context() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("gone");
        let err = RealFileSystem.read_dir(&missing).unwrap_err();
        assert!(format!("{err:#}").contains("reading dir"));
    }
}
