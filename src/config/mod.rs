//! Runtime configuration files for the sub-projects.
//!
//! - File-system capabilities in [`fs`]
//! - `.env` materialization in [`env_file`]

pub mod env_file;
pub mod fs;

pub use env_file::{display_relative, materialize, EnvFileSpec, MaterializationOutcome};
pub use fs::{FileSystem, MemoryFileSystem, OsFileSystem};
