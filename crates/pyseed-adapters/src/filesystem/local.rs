//! Local filesystem adapter using std::fs.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;

use pyseed_core::{application::ports::Filesystem, error::PyseedResult};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> PyseedResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn touch(&self, path: &Path) -> PyseedResult<()> {
        // append + create never truncates existing content
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map(drop)
            .map_err(|e| map_io_error(path, e, "create file"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> pyseed_core::error::PyseedError {
    use pyseed_core::application::ApplicationError;

    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn create_dir_all_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let dir = tmp.path().join("src").join("pkg");

        fs.create_dir_all(&dir).unwrap();
        fs.create_dir_all(&dir).unwrap();
        assert!(dir.is_dir());
    }

    #[test]
    fn create_dir_all_fails_on_file_conflict() {
        let tmp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let blocker = tmp.path().join("src");
        std::fs::write(&blocker, "not a dir").unwrap();

        let err = fs.create_dir_all(&blocker.join("pkg")).unwrap_err();
        assert!(err.to_string().contains("create directory"));
    }

    #[test]
    fn touch_creates_empty_file() {
        let tmp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let file = tmp.path().join("__init__.py");

        fs.touch(&file).unwrap();
        assert_eq!(std::fs::read(&file).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn touch_preserves_existing_content() {
        let tmp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let file = tmp.path().join("test_example.py");
        std::fs::write(&file, "def test_ok():\n    assert True\n").unwrap();

        fs.touch(&file).unwrap();
        assert_eq!(
            std::fs::read_to_string(&file).unwrap(),
            "def test_ok():\n    assert True\n"
        );
    }

    #[test]
    fn touch_fails_on_directory() {
        let tmp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let dir = tmp.path().join("__init__.py");
        std::fs::create_dir(&dir).unwrap();

        assert!(fs.touch(&dir).is_err());
    }
}
