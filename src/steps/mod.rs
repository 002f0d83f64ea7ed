//! Setup steps and the plan that orders them.
//!
//! - [`Step`] - One install command in a project directory
//! - [`Phase`] - The states a setup run moves through
//! - [`SetupPlan`] - Tools, ordered tasks and follow-up instructions

pub mod plan;
pub mod step;

pub use plan::{NextStep, SetupPlan, INSTALL_COMMAND};
pub use step::{Phase, PlannedTask, Step, Task};
