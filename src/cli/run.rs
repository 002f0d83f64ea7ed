//! The setup command.
//!
//! Builds the plan for a project root, hands it to the orchestrator and
//! turns the outcome into console output. Exit status is left to `main`.

use std::path::{Path, PathBuf};

use crate::config::{display_relative, FileSystem, OsFileSystem};
use crate::requirements::{SystemToolDetector, ToolDetector};
use crate::runner::{FailureReason, Orchestrator, SetupOutcome, SetupReport};
use crate::shell::{CommandExecutor, ShellExecutor};
use crate::steps::SetupPlan;
use crate::ui::UserInterface;

/// Banner shown before anything runs.
pub const START_BANNER: &str = "🚀 User Analytics Application Setup";

/// Banner shown once after a successful run.
pub const SUCCESS_BANNER: &str = "✨ Setup Complete!";

const RETRY_HINT: &str =
    "Fix the error above and run setup again; finished steps are safe to repeat";

/// Runs the analytics project setup.
pub struct SetupCommand {
    project_root: PathBuf,
}

impl SetupCommand {
    /// Create a setup command for a project root.
    pub fn new(project_root: &Path) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
        }
    }

    /// Run against the real shell, PATH and file system.
    pub fn execute(&self, ui: &mut dyn UserInterface) -> SetupOutcome {
        let executor = ShellExecutor::new();
        let detector = SystemToolDetector::new();
        self.execute_with(&executor, &detector, &OsFileSystem, ui)
    }

    /// Run against injected collaborators.
    pub fn execute_with(
        &self,
        executor: &dyn CommandExecutor,
        detector: &dyn ToolDetector,
        fs: &dyn FileSystem,
        ui: &mut dyn UserInterface,
    ) -> SetupOutcome {
        let plan = SetupPlan::for_project(&self.project_root);
        tracing::debug!(
            root = %self.project_root.display(),
            tasks = plan.tasks.len(),
            "starting setup"
        );

        ui.show_header(START_BANNER);
        let outcome = Orchestrator::new(executor, detector, fs).run(&plan, ui);
        render_outcome(&outcome, &plan, ui);
        outcome
    }
}

/// Print the end of a run: the failure diagnosis, or the success banner
/// followed by the next steps.
pub fn render_outcome(outcome: &SetupOutcome, plan: &SetupPlan, ui: &mut dyn UserInterface) {
    match outcome {
        SetupOutcome::Completed(report) => {
            ui.message("");
            ui.show_header(SUCCESS_BANNER);
            render_summary(report, plan, ui);
            render_next_steps(plan, ui);
        }
        SetupOutcome::Aborted(failure) => {
            ui.error(&failure.reason.to_string());
            match &failure.reason {
                FailureReason::MissingRequiredTool { hint, .. } => {
                    for line in hint {
                        ui.message(&format!("   {}", line));
                    }
                }
                FailureReason::StepFailed {
                    command,
                    stdout,
                    stderr,
                    ..
                } => {
                    let output = if stderr.trim().is_empty() {
                        stdout
                    } else {
                        stderr
                    };
                    ui.show_error_block(command, output.trim_end(), Some(RETRY_HINT));
                }
                FailureReason::ConfigWrite { path, .. } => {
                    if let Some(dir) = path.parent() {
                        ui.message(&format!(
                            "   Check that {} exists and is writable",
                            dir.display()
                        ));
                    }
                }
            }
        }
    }
}

fn render_summary(report: &SetupReport, plan: &SetupPlan, ui: &mut dyn UserInterface) {
    if let (Some(outcome), Some(spec)) = (report.env_outcome(), plan.env_file()) {
        ui.message(&format!(
            "{}: {}",
            display_relative(&spec.target_path, &plan.project_root),
            outcome
        ));
    }
    let missing = report.missing_optional_tools();
    if !missing.is_empty() {
        ui.message(&format!("Not found (optional): {}", missing.join(", ")));
    }
    ui.message("");
}

fn render_next_steps(plan: &SetupPlan, ui: &mut dyn UserInterface) {
    ui.message("Next steps:");
    ui.message("");
    for (i, step) in plan.next_steps.iter().enumerate() {
        ui.message(&format!("{}. {}", i + 1, step.title));
        for line in &step.lines {
            if line.is_empty() {
                ui.message("");
            } else {
                ui.message(&format!("   {}", line));
            }
        }
        ui.message("");
    }
    for line in &plan.endpoints {
        ui.message(line);
    }
}
