//! Command-line interface.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`run`] - Runs the setup and renders its outcome

pub mod args;
pub mod run;

pub use args::Cli;
pub use run::{render_outcome, SetupCommand};
