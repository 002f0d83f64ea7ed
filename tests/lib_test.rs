//! Library integration tests.

use analytics_setup::config::{MaterializationOutcome, MemoryFileSystem};
use analytics_setup::requirements::ToolDetector;
use analytics_setup::runner::{FailureReason, Orchestrator, SetupOutcome};
use analytics_setup::shell::{CommandExecutor, CommandResult};
use analytics_setup::steps::{Phase, SetupPlan};
use analytics_setup::ui::MockUI;
use analytics_setup::SetupError;
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::time::Duration;

struct RecordingExecutor {
    runs: RefCell<Vec<PathBuf>>,
}

impl CommandExecutor for RecordingExecutor {
    fn execute(&self, _command: &str, cwd: Option<&Path>) -> CommandResult {
        self.runs
            .borrow_mut()
            .push(cwd.map(Path::to_path_buf).unwrap_or_default());
        CommandResult::success(String::new(), String::new(), Duration::from_millis(1))
    }
}

struct AllTools;

impl ToolDetector for AllTools {
    fn exists(&self, _tool: &str) -> bool {
        true
    }

    fn version(&self, _tool: &str, _flag: &str) -> analytics_setup::Result<String> {
        Ok("1.2.3".into())
    }
}

#[test]
fn error_types_are_public() {
    let err = SetupError::ToolNotFound {
        tool: "node".into(),
    };
    assert!(err.to_string().contains("node"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> analytics_setup::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use analytics_setup::cli::Cli;
    use clap::Parser;

    let cli = Cli::parse_from(["analytics-setup", "--project", "/tmp/analytics", "-v"]);
    assert_eq!(cli.project, Some(PathBuf::from("/tmp/analytics")));
    assert!(cli.verbose);
}

#[test]
fn orchestrator_runs_the_default_plan() {
    let root = Path::new("/work/analytics");
    let plan = SetupPlan::for_project(root);
    let executor = RecordingExecutor {
        runs: RefCell::new(Vec::new()),
    };
    let fs = MemoryFileSystem::new();
    let mut ui = MockUI::new();

    let outcome = Orchestrator::new(&executor, &AllTools, &fs).run(&plan, &mut ui);

    let report = outcome.report().expect("run should complete");
    assert_eq!(
        report.phases,
        vec![
            Phase::CheckingPrerequisites,
            Phase::InstallingRoot,
            Phase::InstallingBackend,
            Phase::MaterializingConfig,
            Phase::InstallingFrontend,
            Phase::Done,
        ]
    );
    assert_eq!(
        *executor.runs.borrow(),
        vec![
            root.to_path_buf(),
            root.join("backend"),
            root.join("frontend"),
        ]
    );
    assert_eq!(report.env_outcome(), Some(MaterializationOutcome::WroteDefaults));
    assert!(fs.contents(&root.join("backend/.env")).is_some());
}

#[test]
fn orchestrator_reports_missing_tool_as_value() {
    struct NoNode;

    impl ToolDetector for NoNode {
        fn exists(&self, tool: &str) -> bool {
            tool != "node"
        }

        fn version(&self, _tool: &str, _flag: &str) -> analytics_setup::Result<String> {
            Ok("1.0.0".into())
        }
    }

    let plan = SetupPlan::for_project(Path::new("/work/analytics"));
    let executor = RecordingExecutor {
        runs: RefCell::new(Vec::new()),
    };
    let mut ui = MockUI::new();

    let outcome =
        Orchestrator::new(&executor, &NoNode, &MemoryFileSystem::new()).run(&plan, &mut ui);

    assert_eq!(outcome.exit_code(), 1);
    let SetupOutcome::Aborted(failure) = outcome else {
        panic!("expected an aborted run");
    };
    assert_eq!(failure.phase, Phase::CheckingPrerequisites);
    assert!(matches!(
        failure.reason,
        FailureReason::MissingRequiredTool { ref tool, .. } if tool == "node"
    ));
    assert!(executor.runs.borrow().is_empty());
}
