//! File-system capabilities used by config materialization.
//!
//! [`OsFileSystem`] talks to the real disk. [`MemoryFileSystem`] keeps files
//! in memory and records every operation, so tests can assert exactly which
//! I/O happened.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// The minimal file operations materialization needs.
///
/// `write` and `copy` create the target exclusively and fail with
/// [`io::ErrorKind::AlreadyExists`] rather than replace an existing file.
pub trait FileSystem {
    /// Whether anything exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Read a whole file.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Create `path` with `contents`.
    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()>;

    /// Create `to` with the bytes of `from`.
    fn copy(&self, from: &Path, to: &Path) -> io::Result<()>;
}

/// The real file system.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        create_new_with(path, |file| {
            file.write_all(contents)?;
            file.sync_all()
        })
    }

    fn copy(&self, from: &Path, to: &Path) -> io::Result<()> {
        // std::fs::copy would truncate an existing target
        let contents = self.read(from)?;
        self.write(to, &contents)
    }
}

/// Create `path` exclusively and let `fill` write it.
///
/// If `fill` fails the new file is removed again, so a later run never
/// mistakes a truncated file for one the user already has.
fn create_new_with(
    path: &Path,
    fill: impl FnOnce(&mut File) -> io::Result<()>,
) -> io::Result<()> {
    let mut file = OpenOptions::new().write(true).create_new(true).open(path)?;
    if let Err(e) = fill(&mut file) {
        drop(file);
        if let Err(cleanup) = std::fs::remove_file(path) {
            tracing::warn!(
                path = %path.display(),
                error = %cleanup,
                "could not remove partially written file"
            );
        }
        return Err(e);
    }
    Ok(())
}

/// In-memory file system for tests.
#[derive(Debug, Default)]
pub struct MemoryFileSystem {
    files: RefCell<HashMap<PathBuf, Vec<u8>>>,
    operations: RefCell<Vec<String>>,
    read_only: bool,
}

impl MemoryFileSystem {
    /// Create an empty file system.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a file system where every write fails with permission denied.
    pub fn read_only() -> Self {
        Self {
            read_only: true,
            ..Self::default()
        }
    }

    /// Seed a file without recording an operation.
    pub fn with_file(self, path: impl Into<PathBuf>, contents: &str) -> Self {
        self.files
            .borrow_mut()
            .insert(path.into(), contents.as_bytes().to_vec());
        self
    }

    /// Contents of a file as text, if it exists.
    pub fn contents(&self, path: &Path) -> Option<String> {
        self.files
            .borrow()
            .get(path)
            .map(|bytes| String::from_utf8_lossy(bytes).to_string())
    }

    /// Every operation performed, as `"<op> <path>"`.
    pub fn operations(&self) -> Vec<String> {
        self.operations.borrow().clone()
    }

    /// Operations other than `exists` checks.
    pub fn io_operations(&self) -> Vec<String> {
        self.operations
            .borrow()
            .iter()
            .filter(|op| !op.starts_with("exists "))
            .cloned()
            .collect()
    }

    fn record(&self, op: &str, path: &Path) {
        self.operations
            .borrow_mut()
            .push(format!("{} {}", op, path.display()));
    }
}

impl FileSystem for MemoryFileSystem {
    fn exists(&self, path: &Path) -> bool {
        self.record("exists", path);
        self.files.borrow().contains_key(path)
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        self.record("read", path);
        self.files
            .borrow()
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, path.display().to_string()))
    }

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        self.record("write", path);
        if self.read_only {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                path.display().to_string(),
            ));
        }
        let mut files = self.files.borrow_mut();
        if files.contains_key(path) {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                path.display().to_string(),
            ));
        }
        files.insert(path.to_path_buf(), contents.to_vec());
        Ok(())
    }

    fn copy(&self, from: &Path, to: &Path) -> io::Result<()> {
        self.record("copy", to);
        let contents = self.read(from)?;
        self.write(to, &contents)
    }
}
