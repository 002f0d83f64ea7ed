//! The fixed setup plan for the analytics project.
//!
//! Everything the orchestrator does is described here as data: which tools
//! to check, which tasks to run in which order, and what to tell the
//! developer afterwards.

use std::path::{Path, PathBuf};

use crate::config::EnvFileSpec;
use crate::requirements::ToolRequirement;

use super::step::{Phase, PlannedTask, Step, Task};

/// Package-manager command run in every project directory.
pub const INSTALL_COMMAND: &str = "npm install";

/// A numbered follow-up instruction shown after a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextStep {
    pub title: String,
    pub lines: Vec<String>,
}

impl NextStep {
    fn new(title: &str, lines: &[&str]) -> Self {
        Self {
            title: title.to_string(),
            lines: lines.iter().map(|l| l.to_string()).collect(),
        }
    }
}

/// Static configuration for one setup run.
#[derive(Debug, Clone)]
pub struct SetupPlan {
    pub project_root: PathBuf,
    pub tools: Vec<ToolRequirement>,
    pub tasks: Vec<PlannedTask>,
    pub next_steps: Vec<NextStep>,
    /// Closing lines after the numbered steps.
    pub endpoints: Vec<String>,
}

impl SetupPlan {
    /// The analytics project's plan rooted at `project_root`.
    pub fn for_project(project_root: &Path) -> Self {
        let backend = project_root.join("backend");
        let frontend = project_root.join("frontend");

        let tools = vec![
            ToolRequirement::required("node", "Node.js")
                .with_hint("Please install Node.js from: https://nodejs.org/")
                .with_hint("Recommended: Use nvm to manage Node.js versions"),
            ToolRequirement::required("npm", "npm")
                .with_hint("npm ships with Node.js: https://nodejs.org/"),
            ToolRequirement::optional("mongod", "MongoDB")
                .with_hint("Make sure MongoDB is installed and running")
                .with_hint("Install: https://www.mongodb.com/try/download/community"),
        ];

        let env_file = EnvFileSpec::new(backend.join("env-template"), backend.join(".env"))
            .with_default("PORT", "3001")
            .with_default("MONGODB_URI", "mongodb://localhost:27017/analytics")
            .with_default("CORS_ORIGIN", "http://localhost:3000");

        let tasks = vec![
            PlannedTask::install(
                Phase::InstallingRoot,
                Step::new("Installing root dependencies", project_root, INSTALL_COMMAND),
            ),
            PlannedTask::install(
                Phase::InstallingBackend,
                Step::new("Installing backend dependencies", &backend, INSTALL_COMMAND),
            ),
            PlannedTask::materialize(Phase::MaterializingConfig, env_file),
            PlannedTask::install(
                Phase::InstallingFrontend,
                Step::new("Installing frontend dependencies", &frontend, INSTALL_COMMAND),
            ),
        ];

        Self {
            project_root: project_root.to_path_buf(),
            tools,
            tasks,
            next_steps: default_next_steps(),
            endpoints: vec![
                "Dashboard will be at: http://localhost:3000".to_string(),
                "Backend API will be at: http://localhost:3001".to_string(),
            ],
        }
    }

    /// The env file this plan materializes, if any.
    pub fn env_file(&self) -> Option<&EnvFileSpec> {
        self.tasks.iter().find_map(|t| match &t.task {
            Task::Materialize(spec) => Some(spec),
            Task::Install(_) => None,
        })
    }
}

fn default_next_steps() -> Vec<NextStep> {
    vec![
        NextStep::new(
            "Start MongoDB (if not already running):",
            &[
                "Option A - Docker (Recommended):",
                "  docker run -d -p 27017:27017 --name mongodb mongo:latest",
                "",
                "Option B - Homebrew (macOS):",
                "  brew tap mongodb/brew",
                "  brew install mongodb-community@8.0",
                "  brew services start mongodb-community@8.0",
                "",
                "Option C - MongoDB Atlas (Cloud):",
                "  Sign up at https://www.mongodb.com/cloud/atlas",
                "  Update backend/.env with your Atlas connection string",
            ],
        ),
        NextStep::new(
            "Start the backend server (Terminal 1):",
            &["cd backend && npm run dev"],
        ),
        NextStep::new(
            "Start the frontend (Terminal 2):",
            &["cd frontend && npm run dev"],
        ),
        NextStep::new(
            "Test the tracking (optional, Terminal 3):",
            &[
                "cd demo && python3 -m http.server 8080",
                "Then open http://localhost:8080",
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::steps::Task;

    #[test]
    fn tasks_run_root_backend_config_frontend() {
        let plan = SetupPlan::for_project(Path::new("/app"));
        let phases: Vec<Phase> = plan.tasks.iter().map(|t| t.phase).collect();

        assert_eq!(
            phases,
            vec![
                Phase::InstallingRoot,
                Phase::InstallingBackend,
                Phase::MaterializingConfig,
                Phase::InstallingFrontend,
            ]
        );
    }

    #[test]
    fn install_steps_run_in_their_directories() {
        let root = Path::new("/app");
        let plan = SetupPlan::for_project(root);
        let dirs: Vec<PathBuf> = plan
            .tasks
            .iter()
            .filter_map(|t| match &t.task {
                Task::Install(step) => Some(step.working_directory.clone()),
                Task::Materialize(_) => None,
            })
            .collect();

        assert_eq!(
            dirs,
            vec![root.to_path_buf(), root.join("backend"), root.join("frontend")]
        );
    }

    #[test]
    fn every_install_step_is_fatal_npm_install() {
        let plan = SetupPlan::for_project(Path::new("/app"));
        for planned in &plan.tasks {
            if let Task::Install(step) = &planned.task {
                assert_eq!(step.command, "npm install");
                assert!(step.fatal_on_failure);
            }
        }
    }

    #[test]
    fn env_file_targets_backend() {
        let root = Path::new("/app");
        let plan = SetupPlan::for_project(root);
        let spec = plan.env_file().unwrap();

        assert_eq!(spec.target_path, root.join("backend").join(".env"));
        assert_eq!(spec.template_path, root.join("backend").join("env-template"));
        assert_eq!(
            spec.render_defaults(),
            "PORT=3001\nMONGODB_URI=mongodb://localhost:27017/analytics\nCORS_ORIGIN=http://localhost:3000\n"
        );
    }

    #[test]
    fn node_and_npm_required_mongod_optional() {
        let plan = SetupPlan::for_project(Path::new("/app"));
        let tools: Vec<(&str, bool)> = plan
            .tools
            .iter()
            .map(|t| (t.name.as_str(), t.required))
            .collect();

        assert_eq!(tools, vec![("node", true), ("npm", true), ("mongod", false)]);
    }

    #[test]
    fn next_steps_end_with_endpoints() {
        let plan = SetupPlan::for_project(Path::new("/app"));
        assert_eq!(plan.next_steps.len(), 4);
        assert!(plan.endpoints[0].contains("http://localhost:3000"));
        assert!(plan.endpoints[1].contains("http://localhost:3001"));
    }
}
