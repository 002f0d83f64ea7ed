//! Units of orchestrated work.

use std::fmt;
use std::path::PathBuf;

use crate::config::EnvFileSpec;

/// One install command run in a project directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// What the step does, e.g. "Installing backend dependencies".
    pub description: String,
    /// Directory the command runs in.
    pub working_directory: PathBuf,
    /// Shell command line.
    pub command: String,
    /// Whether a failure aborts the run.
    pub fatal_on_failure: bool,
}

impl Step {
    /// A fatal step.
    pub fn new(description: &str, working_directory: impl Into<PathBuf>, command: &str) -> Self {
        Self {
            description: description.to_string(),
            working_directory: working_directory.into(),
            command: command.to_string(),
            fatal_on_failure: true,
        }
    }

    /// Mark the step as non-fatal: a failure is reported and the run continues.
    pub fn non_fatal(mut self) -> Self {
        self.fatal_on_failure = false;
        self
    }
}

/// States of a setup run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    CheckingPrerequisites,
    InstallingRoot,
    InstallingBackend,
    MaterializingConfig,
    InstallingFrontend,
    Done,
    Aborted,
}

impl Phase {
    /// Whether the run has finished in this phase.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Done | Self::Aborted)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::CheckingPrerequisites => "checking prerequisites",
            Self::InstallingRoot => "installing root dependencies",
            Self::InstallingBackend => "installing backend dependencies",
            Self::MaterializingConfig => "creating backend configuration",
            Self::InstallingFrontend => "installing frontend dependencies",
            Self::Done => "done",
            Self::Aborted => "aborted",
        };
        f.write_str(name)
    }
}

/// The work a planned task performs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Task {
    /// Run an install command.
    Install(Step),
    /// Ensure an env file exists.
    Materialize(EnvFileSpec),
}

/// A task tagged with the phase it runs in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedTask {
    pub phase: Phase,
    pub task: Task,
}

impl PlannedTask {
    /// An install step.
    pub fn install(phase: Phase, step: Step) -> Self {
        Self {
            phase,
            task: Task::Install(step),
        }
    }

    /// An env file materialization.
    pub fn materialize(phase: Phase, spec: EnvFileSpec) -> Self {
        Self {
            phase,
            task: Task::Materialize(spec),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_are_fatal_by_default() {
        let step = Step::new("Installing", "/app", "npm install");
        assert!(step.fatal_on_failure);
        assert!(!step.non_fatal().fatal_on_failure);
    }

    #[test]
    fn only_done_and_aborted_are_terminal() {
        assert!(Phase::Done.is_terminal());
        assert!(Phase::Aborted.is_terminal());
        assert!(!Phase::CheckingPrerequisites.is_terminal());
        assert!(!Phase::MaterializingConfig.is_terminal());
    }

    #[test]
    fn phase_display() {
        assert_eq!(
            Phase::InstallingBackend.to_string(),
            "installing backend dependencies"
        );
    }
}
