//! Locating executables on the search path.
//!
//! PATH is walked directly instead of asking `which`, which is missing on
//! some systems and a shell builtin on others.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Ordered list of directories searched for executables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPath {
    dirs: Vec<PathBuf>,
}

impl SearchPath {
    /// Directories from the process's `PATH`.
    pub fn from_env() -> Self {
        std::env::var_os("PATH")
            .map(|raw| Self::parse(&raw))
            .unwrap_or_default()
    }

    /// Split a `PATH`-style value; empty entries are dropped.
    pub fn parse(raw: &OsStr) -> Self {
        Self {
            dirs: std::env::split_paths(raw)
                .filter(|d| !d.as_os_str().is_empty())
                .collect(),
        }
    }

    pub fn new(dirs: Vec<PathBuf>) -> Self {
        Self { dirs }
    }

    /// First executable named `tool`, in search order.
    pub fn find(&self, tool: &str) -> Option<PathBuf> {
        let names = file_names(tool);
        self.dirs
            .iter()
            .flat_map(|dir| names.iter().map(move |name| dir.join(name)))
            .find(|candidate| is_executable(candidate))
    }
}

/// A regular file the current user may run.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    match path.metadata() {
        Ok(meta) => meta.is_file() && meta.permissions().mode() & 0o111 != 0,
        Err(_) => false,
    }
}

/// Windows has no execute bit; the extension decides.
#[cfg(not(unix))]
pub fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// `npm` is `npm.cmd` on Windows, so each `PATHEXT` suffix is tried after
/// the bare name.
fn file_names(tool: &str) -> Vec<String> {
    let mut names = vec![tool.to_string()];
    if cfg!(windows) {
        let pathext = std::env::var("PATHEXT").unwrap_or_else(|_| ".COM;.EXE;.BAT;.CMD".into());
        for ext in pathext.split(';').filter(|e| !e.is_empty()) {
            names.push(format!("{}{}", tool, ext.to_lowercase()));
        }
    }
    names
}
