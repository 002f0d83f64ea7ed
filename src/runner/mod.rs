//! Setup run orchestration.

pub mod orchestrator;
pub mod outcome;

pub use orchestrator::Orchestrator;
pub use outcome::{
    FailureReason, SetupFailure, SetupOutcome, SetupReport, StepRecord, StepStatus, ToolStatus,
};
