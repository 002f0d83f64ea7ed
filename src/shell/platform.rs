//! The shell install commands run under.

use std::path::{Path, PathBuf};
use std::process::Command;

/// Environment variables whose presence marks a CI run.
const CI_MARKERS: &[&str] = &[
    "CI",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "CIRCLECI",
    "TRAVIS",
    "JENKINS_URL",
    "BUILDKITE",
];

/// A shell program and the flag that hands it a command string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shell {
    program: PathBuf,
    flag: &'static str,
}

impl Shell {
    /// `$SHELL -c` on Unix (`/bin/sh` when unset), `%COMSPEC% /C` on Windows.
    ///
    /// Never a login shell: install commands must see the PATH that
    /// prerequisite detection checked.
    pub fn detect() -> Self {
        if cfg!(windows) {
            let program = std::env::var_os("COMSPEC")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("cmd.exe"));
            Self {
                program,
                flag: "/C",
            }
        } else {
            let program = std::env::var_os("SHELL")
                .filter(|s| !s.is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("/bin/sh"));
            Self { program, flag: "-c" }
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// A process that runs `script` through this shell.
    pub fn command(&self, script: &str) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.arg(self.flag).arg(script);
        cmd
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::detect()
    }
}

/// Whether any well-known CI marker is set.
pub fn is_ci() -> bool {
    CI_MARKERS
        .iter()
        .any(|name| std::env::var_os(name).is_some())
}
