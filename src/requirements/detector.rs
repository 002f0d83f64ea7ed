//! Tool detection against the search path.

use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::error::{Result, SetupError};

use super::search_path::SearchPath;

/// Answers whether a tool is installed and which version it reports.
pub trait ToolDetector {
    /// Whether `tool` resolves to an executable on the search path.
    fn exists(&self, tool: &str) -> bool;

    /// Run `tool version_flag` and return its trimmed output.
    ///
    /// Callers check [`exists`](Self::exists) first.
    fn version(&self, tool: &str, version_flag: &str) -> Result<String>;
}

/// Detects tools on the real file system.
#[derive(Debug, Clone)]
pub struct SystemToolDetector {
    search_path: SearchPath,
}

impl SystemToolDetector {
    /// Detector over the process's PATH.
    pub fn new() -> Self {
        Self {
            search_path: SearchPath::from_env(),
        }
    }

    /// Detector over an explicit list of directories.
    pub fn with_path(dirs: Vec<PathBuf>) -> Self {
        Self {
            search_path: SearchPath::new(dirs),
        }
    }
}

impl Default for SystemToolDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolDetector for SystemToolDetector {
    fn exists(&self, tool: &str) -> bool {
        let found = self.search_path.find(tool);
        tracing::debug!(tool, path = ?found, "resolved tool");
        found.is_some()
    }

    fn version(&self, tool: &str, version_flag: &str) -> Result<String> {
        let program = self
            .search_path
            .find(tool)
            .ok_or_else(|| SetupError::ToolNotFound {
                tool: tool.to_string(),
            })?;

        let command = format!("{} {}", tool, version_flag);
        let output = Command::new(&program)
            .arg(version_flag)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| {
                tracing::debug!(%command, error = %e, "version query did not start");
                SetupError::CommandFailed {
                    command: command.clone(),
                    code: None,
                }
            })?;

        if !output.status.success() {
            return Err(SetupError::CommandFailed {
                command,
                code: output.status.code(),
            });
        }

        // Some tools print their version on stderr
        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if stdout.is_empty() {
            Ok(String::from_utf8_lossy(&output.stderr).trim().to_string())
        } else {
            Ok(stdout)
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::Path;
    use tempfile::TempDir;

    fn write_script(dir: &Path, name: &str, body: &str) {
        let path = dir.join(name);
        fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    }

    #[test]
    fn exists_finds_tool_in_given_path() {
        let temp = TempDir::new().unwrap();
        write_script(temp.path(), "node", "echo v20.11.0");

        let detector = SystemToolDetector::with_path(vec![temp.path().to_path_buf()]);

        assert!(detector.exists("node"));
        assert!(!detector.exists("mongod"));
    }

    #[test]
    fn exists_is_false_for_empty_path() {
        let detector = SystemToolDetector::with_path(Vec::new());
        assert!(!detector.exists("sh"));
    }

    #[test]
    fn version_returns_trimmed_stdout() {
        let temp = TempDir::new().unwrap();
        write_script(temp.path(), "node", "echo '  v20.11.0  '");

        let detector = SystemToolDetector::with_path(vec![temp.path().to_path_buf()]);

        assert_eq!(detector.version("node", "--version").unwrap(), "v20.11.0");
    }

    #[test]
    fn version_falls_back_to_stderr() {
        let temp = TempDir::new().unwrap();
        write_script(temp.path(), "oldtool", "echo 'oldtool 1.2.3' >&2");

        let detector = SystemToolDetector::with_path(vec![temp.path().to_path_buf()]);

        assert_eq!(
            detector.version("oldtool", "--version").unwrap(),
            "oldtool 1.2.3"
        );
    }

    #[test]
    fn version_passes_flag() {
        let temp = TempDir::new().unwrap();
        write_script(temp.path(), "echoer", "echo \"$1\"");

        let detector = SystemToolDetector::with_path(vec![temp.path().to_path_buf()]);

        assert_eq!(detector.version("echoer", "-V").unwrap(), "-V");
    }

    #[test]
    fn version_of_failing_tool_is_an_error() {
        let temp = TempDir::new().unwrap();
        write_script(temp.path(), "broken", "exit 2");

        let detector = SystemToolDetector::with_path(vec![temp.path().to_path_buf()]);

        let err = detector.version("broken", "--version").unwrap_err();
        assert!(matches!(err, SetupError::CommandFailed { code: Some(2), .. }));
    }

    #[test]
    fn version_of_missing_tool_is_an_error() {
        let detector = SystemToolDetector::with_path(Vec::new());

        let err = detector.version("node", "--version").unwrap_err();
        assert!(matches!(err, SetupError::ToolNotFound { .. }));
    }
}
