//! What a setup run produced.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use crate::config::MaterializationOutcome;
use crate::steps::Phase;

/// Result of one setup run.
#[derive(Debug, Clone)]
pub enum SetupOutcome {
    /// Every phase finished.
    Completed(SetupReport),
    /// A fatal condition stopped the run.
    Aborted(SetupFailure),
}

impl SetupOutcome {
    /// Process exit status for this outcome.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Completed(_) => 0,
            Self::Aborted(_) => 1,
        }
    }

    /// The report of a completed run.
    pub fn report(&self) -> Option<&SetupReport> {
        match self {
            Self::Completed(report) => Some(report),
            Self::Aborted(_) => None,
        }
    }

    /// The failure of an aborted run.
    pub fn failure(&self) -> Option<&SetupFailure> {
        match self {
            Self::Completed(_) => None,
            Self::Aborted(failure) => Some(failure),
        }
    }
}

/// Why and where a run was aborted.
#[derive(Debug, Clone)]
pub struct SetupFailure {
    /// Phase that was running when the failure was detected.
    pub phase: Phase,
    pub reason: FailureReason,
    /// Phases entered, in order, ending with [`Phase::Aborted`].
    pub phases: Vec<Phase>,
}

impl SetupFailure {
    /// A failure in `phase`; the orchestrator fills in the phase history.
    pub fn new(phase: Phase, reason: FailureReason) -> Self {
        Self {
            phase,
            reason,
            phases: Vec::new(),
        }
    }
}

impl fmt::Display for SetupFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (while {})", self.reason, self.phase)
    }
}

/// The fatal conditions a run can hit.
#[derive(Debug, Clone)]
pub enum FailureReason {
    /// A required tool is not on PATH.
    MissingRequiredTool {
        tool: String,
        display_name: String,
        hint: Vec<String>,
    },
    /// An install command exited non-zero.
    StepFailed {
        step: String,
        command: String,
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
    },
    /// The env file could not be written.
    ConfigWrite { path: PathBuf, message: String },
}

impl FailureReason {
    /// Short machine-friendly code for logs.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingRequiredTool { .. } => "missing_required_tool",
            Self::StepFailed { .. } => "step_failed",
            Self::ConfigWrite { .. } => "config_write",
        }
    }
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingRequiredTool { display_name, .. } => {
                write!(f, "{} is not installed!", display_name)
            }
            Self::StepFailed {
                step, exit_code, ..
            } => match exit_code {
                Some(code) => write!(f, "{} failed with exit code {}", step, code),
                None => write!(f, "{} failed (no exit code)", step),
            },
            Self::ConfigWrite { path, message } => {
                write!(f, "Failed to create {}: {}", path.display(), message)
            }
        }
    }
}

/// Summary of a completed run.
#[derive(Debug, Clone, Default)]
pub struct SetupReport {
    /// Phases entered, in order, ending with [`Phase::Done`].
    pub phases: Vec<Phase>,
    pub tools: Vec<ToolStatus>,
    pub steps: Vec<StepRecord>,
}

impl SetupReport {
    /// Outcome of the env file task, if the plan had one.
    pub fn env_outcome(&self) -> Option<MaterializationOutcome> {
        self.steps.iter().find_map(|s| match s.status {
            StepStatus::Materialized(outcome) => Some(outcome),
            _ => None,
        })
    }

    /// Optional tools that were not found.
    pub fn missing_optional_tools(&self) -> Vec<&str> {
        self.tools
            .iter()
            .filter(|t| !t.required && !t.found)
            .map(|t| t.name.as_str())
            .collect()
    }
}

/// What prerequisite detection found for one tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolStatus {
    pub name: String,
    pub required: bool,
    pub found: bool,
    /// First line of the tool's version output, when it could be read.
    pub version: Option<String>,
}

/// How one planned task went.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRecord {
    pub phase: Phase,
    pub description: String,
    pub status: StepStatus,
}

/// Status of a finished task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    /// The command exited zero.
    Succeeded { duration: Duration },
    /// A non-fatal command failed and the run continued.
    FailedNonFatal { exit_code: Option<i32> },
    /// The env file task finished.
    Materialized(MaterializationOutcome),
}
