//! Console output.
//!
//! Everything the run prints goes through [`UserInterface`]. Real runs use
//! [`ConsoleUI`]; tests use [`MockUI`] and assert on what it recorded.

pub mod mock;
pub mod output;
pub mod spinner;
pub mod term;
pub mod theme;

pub use mock::{MockSpinner, MockUI, SpinnerStatus, UiEvent};
pub use output::{format_duration, OutputMode};
pub use spinner::ProgressSpinner;
pub use term::{create_ui, ConsoleUI};
pub use theme::{should_use_colors, SetupTheme, Status};

/// Sink for everything a setup run shows the user.
pub trait UserInterface {
    fn output_mode(&self) -> OutputMode;

    /// Plain line.
    fn message(&mut self, msg: &str);

    fn success(&mut self, msg: &str);

    fn warning(&mut self, msg: &str);

    /// Always shown, whatever the output mode.
    fn error(&mut self, msg: &str);

    /// Framed banner.
    fn show_header(&mut self, title: &str);

    /// Follow-up hint, dropped in quiet mode.
    fn show_hint(&mut self, hint: &str);

    /// Echo captured output of an install command.
    fn command_output(&mut self, output: &str);

    /// The command and output of a failed step.
    fn show_error_block(&mut self, command: &str, output: &str, hint: Option<&str>);

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle>;
}

/// A running step's spinner. Each handle is finished exactly once.
pub trait SpinnerHandle {
    fn finish_success(&mut self, msg: &str);

    fn finish_error(&mut self, msg: &str);

    fn finish_skipped(&mut self, msg: &str);
}
