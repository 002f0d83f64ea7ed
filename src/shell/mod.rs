//! Shell command execution.

pub mod command;
pub mod platform;

pub use command::{CommandExecutor, CommandResult, ShellExecutor};
pub use platform::{is_ci, Shell};
