//! Sequencing of a setup run.
//!
//! The [`Orchestrator`] walks a [`SetupPlan`] phase by phase: prerequisite
//! checks first, then each planned task in order. The first fatal failure
//! ends the run. It never exits the process and reaches the outside world
//! only through the injected executor, detector and file system.

use crate::config::{
    display_relative, materialize, EnvFileSpec, FileSystem, MaterializationOutcome,
};
use crate::requirements::{ToolDetector, ToolRequirement};
use crate::shell::CommandExecutor;
use crate::steps::{Phase, SetupPlan, Step, Task};
use crate::ui::{format_duration, UserInterface};

use super::outcome::{
    FailureReason, SetupFailure, SetupOutcome, SetupReport, StepRecord, StepStatus, ToolStatus,
};

/// Runs a setup plan against injected collaborators.
pub struct Orchestrator<'a> {
    executor: &'a dyn CommandExecutor,
    detector: &'a dyn ToolDetector,
    fs: &'a dyn FileSystem,
}

impl<'a> Orchestrator<'a> {
    /// Create an orchestrator.
    pub fn new(
        executor: &'a dyn CommandExecutor,
        detector: &'a dyn ToolDetector,
        fs: &'a dyn FileSystem,
    ) -> Self {
        Self {
            executor,
            detector,
            fs,
        }
    }

    /// Run every phase of `plan`, stopping at the first fatal failure.
    pub fn run(&self, plan: &SetupPlan, ui: &mut dyn UserInterface) -> SetupOutcome {
        let mut report = SetupReport::default();

        enter(&mut report, Phase::CheckingPrerequisites);
        match self.check_prerequisites(&plan.tools, ui) {
            Ok(tools) => report.tools = tools,
            Err(failure) => return abort(report, failure),
        }

        for planned in &plan.tasks {
            enter(&mut report, planned.phase);
            let record = match &planned.task {
                Task::Install(step) => self.run_step(planned.phase, step, ui),
                Task::Materialize(spec) => self.materialize_env(planned.phase, spec, plan, ui),
            };
            match record {
                Ok(record) => report.steps.push(record),
                Err(failure) => return abort(report, failure),
            }
        }

        enter(&mut report, Phase::Done);
        SetupOutcome::Completed(report)
    }

    /// Check every tool in order. A missing required tool stops the check.
    fn check_prerequisites(
        &self,
        tools: &[ToolRequirement],
        ui: &mut dyn UserInterface,
    ) -> Result<Vec<ToolStatus>, SetupFailure> {
        let mut statuses = Vec::with_capacity(tools.len());

        for tool in tools {
            if !self.detector.exists(&tool.name) {
                if tool.required {
                    return Err(SetupFailure::new(
                        Phase::CheckingPrerequisites,
                        FailureReason::MissingRequiredTool {
                            tool: tool.name.clone(),
                            display_name: tool.display_name.clone(),
                            hint: tool.install_hint.clone(),
                        },
                    ));
                }

                tracing::warn!(tool = %tool.name, "optional tool not found");
                ui.warning(&format!("{} not found in PATH", tool.display_name));
                for line in &tool.install_hint {
                    ui.show_hint(line);
                }
                statuses.push(ToolStatus {
                    name: tool.name.clone(),
                    required: false,
                    found: false,
                    version: None,
                });
                continue;
            }

            let version = match self.detector.version(&tool.name, &tool.version_flag) {
                Ok(output) => {
                    let first_line = output.lines().next().unwrap_or("").trim().to_string();
                    ui.success(&format!("{} version: {}", tool.display_name, first_line));
                    Some(first_line)
                }
                Err(e) => {
                    tracing::warn!(tool = %tool.name, error = %e, "version query failed");
                    ui.success(&format!("{} found", tool.display_name));
                    ui.warning(&format!(
                        "Could not determine {} version: {}",
                        tool.display_name, e
                    ));
                    None
                }
            };

            statuses.push(ToolStatus {
                name: tool.name.clone(),
                required: tool.required,
                found: true,
                version,
            });
        }

        Ok(statuses)
    }

    /// Run one install step exactly once.
    fn run_step(
        &self,
        phase: Phase,
        step: &Step,
        ui: &mut dyn UserInterface,
    ) -> Result<StepRecord, SetupFailure> {
        let mut spinner = ui.start_spinner(&format!("{}...", step.description));
        let result = self
            .executor
            .execute(&step.command, Some(&step.working_directory));

        if result.success {
            spinner.finish_success(&format!(
                "{} ({})",
                step.description,
                format_duration(result.duration)
            ));
        } else {
            spinner.finish_error(&format!("Failed: {}", step.description));
        }

        if !result.stdout.trim().is_empty() {
            ui.command_output(&result.stdout);
        }

        if result.success {
            if ui.output_mode().echoes_stderr() && !result.stderr.trim().is_empty() {
                ui.command_output(&result.stderr);
            }
            return Ok(StepRecord {
                phase,
                description: step.description.clone(),
                status: StepStatus::Succeeded {
                    duration: result.duration,
                },
            });
        }

        tracing::warn!(
            step = %step.description,
            command = %step.command,
            exit_code = ?result.exit_code,
            fatal = step.fatal_on_failure,
            "step failed"
        );

        if !step.fatal_on_failure {
            ui.warning(&format!(
                "{} failed, continuing: {}",
                step.description,
                result.stderr.trim()
            ));
            return Ok(StepRecord {
                phase,
                description: step.description.clone(),
                status: StepStatus::FailedNonFatal {
                    exit_code: result.exit_code,
                },
            });
        }

        Err(SetupFailure::new(
            phase,
            FailureReason::StepFailed {
                step: step.description.clone(),
                command: step.command.clone(),
                exit_code: result.exit_code,
                stdout: result.stdout,
                stderr: result.stderr,
            },
        ))
    }

    /// Ensure the env file exists. Any I/O error is fatal.
    fn materialize_env(
        &self,
        phase: Phase,
        spec: &EnvFileSpec,
        plan: &SetupPlan,
        ui: &mut dyn UserInterface,
    ) -> Result<StepRecord, SetupFailure> {
        let target = display_relative(&spec.target_path, &plan.project_root);
        let template = display_relative(&spec.template_path, &plan.project_root);
        let mut spinner = ui.start_spinner(&format!("Configuring {}...", target));

        let outcome = match materialize(spec, self.fs) {
            Ok(outcome) => outcome,
            Err(e) => {
                spinner.finish_error(&format!("Failed to create {}", target));
                return Err(SetupFailure::new(
                    phase,
                    FailureReason::ConfigWrite {
                        path: spec.target_path.clone(),
                        message: e.to_string(),
                    },
                ));
            }
        };

        match outcome {
            MaterializationOutcome::Skipped => {
                spinner.finish_skipped(&format!("{} already exists", target));
            }
            MaterializationOutcome::CopiedFromTemplate => {
                spinner.finish_success(&format!("Created {} from {}", target, template));
            }
            MaterializationOutcome::WroteDefaults => {
                spinner.finish_success(&format!("Created {} with default values", target));
            }
        }
        if outcome != MaterializationOutcome::Skipped {
            ui.show_hint(&format!("You can edit {} to change configuration", target));
        }

        Ok(StepRecord {
            phase,
            description: target,
            status: StepStatus::Materialized(outcome),
        })
    }
}

fn enter(report: &mut SetupReport, phase: Phase) {
    tracing::debug!(%phase, terminal = phase.is_terminal(), "entering phase");
    report.phases.push(phase);
}

fn abort(mut report: SetupReport, mut failure: SetupFailure) -> SetupOutcome {
    enter(&mut report, Phase::Aborted);
    failure.phases = report.phases;
    tracing::info!(
        phase = %failure.phase,
        reason = failure.reason.code(),
        "setup aborted"
    );
    SetupOutcome::Aborted(failure)
}
