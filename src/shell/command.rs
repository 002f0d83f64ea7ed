//! Running install commands.

use std::path::Path;
use std::process::Stdio;
use std::time::{Duration, Instant};

use super::platform::Shell;

/// What a finished (or unstartable) command produced.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// `None` when the process was killed by a signal or never started.
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
    pub duration: Duration,
    pub success: bool,
}

impl CommandResult {
    pub fn success(stdout: String, stderr: String, duration: Duration) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            stderr,
            duration,
            success: true,
        }
    }

    pub fn failure(
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
        duration: Duration,
    ) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            duration,
            success: false,
        }
    }
}

/// Runs a command to completion and reports how it went.
///
/// A non-zero exit is a result, not an error; the caller decides what it
/// means. Tests substitute a scripted executor.
pub trait CommandExecutor {
    fn execute(&self, command: &str, cwd: Option<&Path>) -> CommandResult;
}

/// Runs commands through the user's shell.
#[derive(Debug, Clone, Default)]
pub struct ShellExecutor {
    shell: Shell,
}

impl ShellExecutor {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CommandExecutor for ShellExecutor {
    /// Run `command` through the detected shell and capture both streams.
    ///
    /// A command that cannot start at all (missing shell or working
    /// directory) comes back as a failed result with the OS error in
    /// `stderr`.
    fn execute(&self, command: &str, cwd: Option<&Path>) -> CommandResult {
        run(&self.shell, command, cwd)
    }
}

fn run(shell: &Shell, command: &str, cwd: Option<&Path>) -> CommandResult {
    let start = Instant::now();

    let mut cmd = shell.command(command);
    if let Some(cwd) = cwd {
        cmd.current_dir(cwd);
    }
    cmd.stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    tracing::debug!(command, cwd = ?cwd, shell = %shell.program().display(), "running");

    let output = match cmd.output() {
        Ok(output) => output,
        Err(e) => {
            tracing::warn!(command, error = %e, "could not start command");
            return CommandResult::failure(None, String::new(), e.to_string(), start.elapsed());
        }
    };

    let duration = start.elapsed();
    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
    let code = output.status.code();

    tracing::debug!(command, exit_code = ?code, elapsed_ms = duration.as_millis() as u64, "finished");

    if output.status.success() {
        CommandResult::success(stdout, stderr, duration)
    } else {
        CommandResult::failure(code, stdout, stderr, duration)
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn sh(command: &str) -> CommandResult {
        ShellExecutor::new().execute(command, None)
    }

    #[test]
    fn zero_exit_is_success_with_stdout() {
        let result = sh("echo added 3 packages");

        assert!(result.success);
        assert_eq!(result.exit_code, Some(0));
        assert_eq!(result.stdout.trim(), "added 3 packages");
    }

    #[test]
    fn non_zero_exit_keeps_the_code() {
        let result = sh("echo partial; exit 3");

        assert!(!result.success);
        assert_eq!(result.exit_code, Some(3));
        assert!(result.stdout.contains("partial"));
    }

    #[test]
    fn streams_are_captured_separately() {
        let result = sh("echo out; echo err >&2");

        assert_eq!(result.stdout.trim(), "out");
        assert_eq!(result.stderr.trim(), "err");
    }

    #[test]
    fn runs_in_the_requested_directory() {
        let temp = tempfile::TempDir::new().unwrap();
        std::fs::write(temp.path().join("package.json"), "{}").unwrap();

        let result = ShellExecutor::new().execute("ls", Some(temp.path()));

        assert!(result.stdout.contains("package.json"));
    }

    #[test]
    fn unknown_program_fails_without_panicking() {
        let result = sh("no-such-installer-4711");

        assert!(!result.success);
        assert_eq!(result.exit_code, Some(127));
    }

    #[test]
    fn missing_directory_fails_without_exit_code() {
        let result = ShellExecutor::new()
            .execute("echo hi", Some(Path::new("/nonexistent/analytics/backend")));

        assert!(!result.success);
        assert_eq!(result.exit_code, None);
        assert!(!result.stderr.is_empty());
    }

    #[test]
    fn duration_is_measured() {
        let result = sh("sleep 0.05");

        assert!(result.duration >= Duration::from_millis(40));
    }
}
