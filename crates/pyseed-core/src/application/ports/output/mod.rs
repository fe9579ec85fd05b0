//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the bootstrapper needs from external systems.
//! The `pyseed-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::ProcessInvocation;
use crate::error::PyseedResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `pyseed_adapters::filesystem::LocalFilesystem` (production)
/// - `pyseed_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    ///
    /// Succeeds when the directory already exists; fails when a non-directory
    /// occupies the path or one of its ancestors.
    fn create_dir_all(&self, path: &Path) -> PyseedResult<()>;

    /// Create an empty file if nothing exists at `path`.
    ///
    /// An existing file is left byte-for-byte unchanged.
    fn touch(&self, path: &Path) -> PyseedResult<()>;
}

/// Port for running external programs.
///
/// Implemented by:
/// - `pyseed_adapters::process::SystemCommandRunner` (production)
/// - `pyseed_adapters::process::RecordingCommandRunner` (testing)
///
/// Implementations block until the program exits. The invocation's
/// [`FailurePolicy`](crate::domain::FailurePolicy) is not their concern; they
/// report every failure and the caller decides.
#[cfg_attr(test, mockall::automock)]
pub trait CommandRunner: Send + Sync {
    /// Run `invocation` with `working_dir` as its current directory.
    ///
    /// # Errors
    ///
    /// - `ApplicationError::CommandNotFound` if the program is absent
    /// - `ApplicationError::CommandFailed` on a non-zero exit
    fn run(&self, invocation: &ProcessInvocation, working_dir: &Path) -> PyseedResult<()>;
}
