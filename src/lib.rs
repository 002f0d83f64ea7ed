//! analytics-setup - local development setup for the User Analytics app.
//!
//! Checks that the required tooling is installed, installs dependencies for
//! the root, backend and frontend projects, creates `backend/.env` when it
//! is missing, and prints what to do next.
//!
//! # Modules
//!
//! - [`cli`] - Command-line arguments and outcome rendering
//! - [`config`] - `.env` materialization and file-system capabilities
//! - [`error`] - Error types and result aliases
//! - [`requirements`] - Prerequisite tools and PATH detection
//! - [`runner`] - The orchestrator and its outcome types
//! - [`shell`] - Shell command execution
//! - [`steps`] - Steps, phases and the setup plan
//! - [`ui`] - Terminal output, spinners and a mock UI for tests
//!
//! # Example
//!
//! ```
//! use analytics_setup::config::{materialize, MaterializationOutcome, MemoryFileSystem};
//! use analytics_setup::steps::{SetupPlan, Task};
//! use std::path::Path;
//!
//! let plan = SetupPlan::for_project(Path::new("/work/analytics"));
//! let spec = plan
//!     .tasks
//!     .iter()
//!     .find_map(|t| match &t.task {
//!         Task::Materialize(spec) => Some(spec),
//!         Task::Install(_) => None,
//!     })
//!     .unwrap();
//!
//! let fs = MemoryFileSystem::new();
//! assert_eq!(materialize(spec, &fs).unwrap(), MaterializationOutcome::WroteDefaults);
//! assert!(fs.contents(&spec.target_path).unwrap().starts_with("PORT=3001\n"));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod requirements;
pub mod runner;
pub mod shell;
pub mod steps;
pub mod ui;

pub use error::{Result, SetupError};
