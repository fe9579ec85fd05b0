//! Infrastructure adapters for pyseed.
//!
//! This crate implements the ports defined in `pyseed-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod context;
pub mod filesystem;
pub mod process;

// Re-export commonly used adapters
pub use context::{parse_context, read_context, read_context_file};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use process::{RecordingCommandRunner, SystemCommandRunner};
