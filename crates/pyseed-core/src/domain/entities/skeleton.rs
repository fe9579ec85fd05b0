//! The directories and empty marker files a generated project must contain.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::domain::{entities::context::ProjectContext, error::DomainError};

/// Marker file that makes a directory an importable Python package.
pub const INIT_MARKER: &str = "__init__.py";

/// Placeholder test module created next to the tests package marker.
pub const EXAMPLE_TEST: &str = "test_example.py";

/// Directory holding the generated project's test suite.
pub const TESTS_DIR: &str = "tests";

/// Skeleton entries the bootstrapper guarantees to exist.
///
/// Directories are listed before the files inside them, so applying the
/// entries in order never needs an implicit parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkeletonPlan {
    entries: Vec<SkeletonEntry>,
}

impl SkeletonPlan {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// The fixed layout for a Python package project.
    pub fn for_context(context: &ProjectContext) -> Self {
        let package_dir = context.package_dir();
        let tests_dir = PathBuf::from(TESTS_DIR);

        Self::new()
            .with_directory(&package_dir)
            .with_directory(&tests_dir)
            .with_empty_file(package_dir.join(INIT_MARKER))
            .with_empty_file(tests_dir.join(INIT_MARKER))
            .with_empty_file(tests_dir.join(EXAMPLE_TEST))
    }

    pub fn add_directory(&mut self, path: impl Into<PathBuf>) {
        self.entries.push(SkeletonEntry::Directory(path.into()));
    }

    pub fn add_empty_file(&mut self, path: impl Into<PathBuf>) {
        self.entries.push(SkeletonEntry::EmptyFile(path.into()));
    }

    pub fn with_directory(mut self, path: impl Into<PathBuf>) -> Self {
        self.add_directory(path);
        self
    }

    pub fn with_empty_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.add_empty_file(path);
        self
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        let mut seen = HashSet::new();
        for entry in &self.entries {
            let path = entry.path();

            if path.is_absolute() {
                return Err(DomainError::AbsolutePathNotAllowed {
                    path: path.display().to_string(),
                });
            }

            if !seen.insert(path.to_path_buf()) {
                return Err(DomainError::DuplicatePath {
                    path: path.display().to_string(),
                });
            }
        }

        Ok(())
    }

    pub fn entries(&self) -> &[SkeletonEntry] {
        &self.entries
    }

    pub fn directories(&self) -> impl Iterator<Item = &Path> {
        self.entries.iter().filter_map(|e| match e {
            SkeletonEntry::Directory(p) => Some(p.as_path()),
            _ => None,
        })
    }

    pub fn files(&self) -> impl Iterator<Item = &Path> {
        self.entries.iter().filter_map(|e| match e {
            SkeletonEntry::EmptyFile(p) => Some(p.as_path()),
            _ => None,
        })
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}

impl Default for SkeletonPlan {
    fn default() -> Self {
        Self::new()
    }
}

/// A path to be ensured present. Created when absent, never deleted or
/// truncated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkeletonEntry {
    Directory(PathBuf),
    EmptyFile(PathBuf),
}

impl SkeletonEntry {
    pub fn path(&self) -> &Path {
        match self {
            Self::Directory(p) | Self::EmptyFile(p) => p,
        }
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, Self::Directory(_))
    }
}
