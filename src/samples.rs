// src/samples.rs

//! Sample set enumeration.
//!
//! The sample set is every regular file directly inside the sample directory
//! (optionally narrowed by `--include` globs on the file name). Directories are
//! never part of it. The set is sorted by file name so two runs over the same
//! directory visit files in the same order, independent of what the platform's
//! directory listing returns.

use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use tracing::{debug, trace};

use crate::errors::{Result, SamplerunError};
use crate::fs::FileSystem;

/// One file the program will be run against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    /// `samples_dir` joined with the file name; passed verbatim to the program.
    pub path: PathBuf,
    /// File name shown in the banner.
    pub name: String,
}

/// File-name filter built from `--include` patterns.
#[derive(Debug, Clone, Default)]
pub struct SampleFilter {
    include: Option<GlobSet>,
}

impl SampleFilter {
    /// A filter that keeps every file.
    pub fn all() -> Self {
        Self::default()
    }

    /// Compile include patterns. An empty list keeps every file.
    pub fn from_patterns(patterns: &[String]) -> Result<Self> {
        if patterns.is_empty() {
            return Ok(Self::all());
        }

        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let glob = Glob::new(pattern).map_err(|source| SamplerunError::InvalidPattern {
                pattern: pattern.clone(),
                source,
            })?;
            builder.add(glob);
        }
        let set = builder.build().map_err(|source| SamplerunError::InvalidPattern {
            pattern: patterns.join(", "),
            source,
        })?;

        Ok(Self { include: Some(set) })
    }

    pub fn matches(&self, name: &str) -> bool {
        match &self.include {
            Some(set) => set.is_match(name),
            None => true,
        }
    }
}

/// Check the sample directory precondition.
pub fn ensure_sample_dir(fs: &dyn FileSystem, dir: &Path) -> Result<()> {
    if !fs.exists(dir) {
        return Err(SamplerunError::SampleDirMissing(dir.to_path_buf()));
    }
    if !fs.is_dir(dir) {
        return Err(SamplerunError::NotADirectory(dir.to_path_buf()));
    }
    Ok(())
}

/// Enumerate the sample set of `dir`, sorted by file name.
pub fn collect_samples(
    fs: &dyn FileSystem,
    dir: &Path,
    filter: &SampleFilter,
) -> Result<Vec<Sample>> {
    ensure_sample_dir(fs, dir)?;

    let mut samples = Vec::new();
    for path in fs.read_dir(dir)? {
        if !fs.is_file(&path) {
            trace!(path = %path.display(), "skipping non-file entry");
            continue;
        }
        let Some(name) = path.file_name().map(|n| n.to_string_lossy().into_owned()) else {
            continue;
        };
        if !filter.matches(&name) {
            trace!(file = %name, "excluded by include patterns");
            continue;
        }
        samples.push(Sample { path, name });
    }

    samples.sort_by(|a, b| a.path.file_name().cmp(&b.path.file_name()));

    debug!(dir = %dir.display(), count = samples.len(), "collected sample set");
    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::mock::MockFileSystem;

    fn names(samples: &[Sample]) -> Vec<&str> {
        samples.iter().map(|s| s.name.as_str()).collect()
    }

    #[test]
    fn keeps_only_files_and_sorts_by_name() {
        let fs = MockFileSystem::new();
        fs.add_file("samples/c.lox");
        fs.add_dir("samples/nested");
        fs.add_file("samples/nested/deep.lox");
        fs.add_file("samples/a.lox");
        fs.add_file("samples/B.txt");

        let samples = collect_samples(&fs, Path::new("samples"), &SampleFilter::all()).unwrap();

        assert_eq!(names(&samples), vec!["B.txt", "a.lox", "c.lox"]);
        assert_eq!(samples[1].path, PathBuf::from("samples/a.lox"));
    }

    #[test]
    fn include_patterns_match_file_names() {
        let fs = MockFileSystem::new();
        fs.add_file("samples/one.lox");
        fs.add_file("samples/two.txt");
        fs.add_file("samples/three.md");

        let filter =
            SampleFilter::from_patterns(&["*.lox".to_string(), "*.md".to_string()]).unwrap();
        let samples = collect_samples(&fs, Path::new("samples"), &filter).unwrap();

        assert_eq!(names(&samples), vec!["one.lox", "three.md"]);
    }

    #[test]
    fn invalid_pattern_is_reported() {
        let err = SampleFilter::from_patterns(&["a[".to_string()]).unwrap_err();
        match err {
            SamplerunError::InvalidPattern { pattern, .. } => assert_eq!(pattern, "a["),
            other => panic!("expected InvalidPattern, got {other:?}"),
        }
    }

    #[test]
    fn missing_dir_and_file_path_are_setup_errors() {
        let fs = MockFileSystem::new();
        fs.add_file("not_a_dir");

        assert!(matches!(
            collect_samples(&fs, Path::new("samples"), &SampleFilter::all()),
            Err(SamplerunError::SampleDirMissing(p)) if p == Path::new("samples")
        ));
        assert!(matches!(
            collect_samples(&fs, Path::new("not_a_dir"), &SampleFilter::all()),
            Err(SamplerunError::NotADirectory(_))
        ));
    }

    #[test]
    fn empty_dir_yields_empty_set() {
        let fs = MockFileSystem::new();
        fs.add_dir("samples");
        let samples = collect_samples(&fs, Path::new("samples"), &SampleFilter::all()).unwrap();
        assert!(samples.is_empty());
    }
}
