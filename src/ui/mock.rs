//! Recording UI for tests.
//!
//! [`MockUI`] keeps every call as a [`UiEvent`] in one ordered log, so tests
//! can assert both on what was shown and on the order it was shown in.
//!
//! # Example
//!
//! ```
//! use analytics_setup::ui::{MockUI, UiEvent, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("Starting setup");
//! let mut spinner = ui.start_spinner("Installing");
//! spinner.finish_success("Installed");
//!
//! assert!(ui.has_message("Starting setup"));
//! assert_eq!(ui.spinners(), ["Installing"]);
//! assert!(ui.has_spinner_success("Installed"));
//! assert!(matches!(ui.events()[0], UiEvent::Message(_)));
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use super::{OutputMode, SpinnerHandle, UserInterface};

/// How a spinner was finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinnerStatus {
    Success,
    Error,
    Skipped,
}

/// One recorded UI call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Message(String),
    Success(String),
    Warning(String),
    Error(String),
    Header(String),
    Hint(String),
    CommandOutput(String),
    ErrorBlock {
        command: String,
        output: String,
        hint: Option<String>,
    },
    SpinnerStarted(String),
    SpinnerFinished(SpinnerStatus, String),
}

type EventLog = Rc<RefCell<Vec<UiEvent>>>;

/// UI that records instead of printing.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    events: EventLog,
}

impl MockUI {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Every recorded call, oldest first.
    pub fn events(&self) -> Vec<UiEvent> {
        self.events.borrow().clone()
    }

    fn record(&self, event: UiEvent) {
        self.events.borrow_mut().push(event);
    }

    fn collect<T>(&self, pick: impl Fn(&UiEvent) -> Option<T>) -> Vec<T> {
        self.events.borrow().iter().filter_map(pick).collect()
    }

    pub fn messages(&self) -> Vec<String> {
        self.collect(|e| match e {
            UiEvent::Message(m) => Some(m.clone()),
            _ => None,
        })
    }

    pub fn successes(&self) -> Vec<String> {
        self.collect(|e| match e {
            UiEvent::Success(m) => Some(m.clone()),
            _ => None,
        })
    }

    pub fn warnings(&self) -> Vec<String> {
        self.collect(|e| match e {
            UiEvent::Warning(m) => Some(m.clone()),
            _ => None,
        })
    }

    pub fn errors(&self) -> Vec<String> {
        self.collect(|e| match e {
            UiEvent::Error(m) => Some(m.clone()),
            _ => None,
        })
    }

    pub fn headers(&self) -> Vec<String> {
        self.collect(|e| match e {
            UiEvent::Header(m) => Some(m.clone()),
            _ => None,
        })
    }

    pub fn hints(&self) -> Vec<String> {
        self.collect(|e| match e {
            UiEvent::Hint(m) => Some(m.clone()),
            _ => None,
        })
    }

    pub fn command_outputs(&self) -> Vec<String> {
        self.collect(|e| match e {
            UiEvent::CommandOutput(m) => Some(m.clone()),
            _ => None,
        })
    }

    /// Error blocks as `(command, output, hint)`.
    pub fn error_blocks(&self) -> Vec<(String, String, Option<String>)> {
        self.collect(|e| match e {
            UiEvent::ErrorBlock {
                command,
                output,
                hint,
            } => Some((command.clone(), output.clone(), hint.clone())),
            _ => None,
        })
    }

    /// Messages spinners were started with.
    pub fn spinners(&self) -> Vec<String> {
        self.collect(|e| match e {
            UiEvent::SpinnerStarted(m) => Some(m.clone()),
            _ => None,
        })
    }

    /// How every spinner finished, in order.
    pub fn spinner_results(&self) -> Vec<(SpinnerStatus, String)> {
        self.collect(|e| match e {
            UiEvent::SpinnerFinished(status, m) => Some((*status, m.clone())),
            _ => None,
        })
    }

    pub fn has_message(&self, needle: &str) -> bool {
        self.messages().iter().any(|m| m.contains(needle))
    }

    pub fn has_success(&self, needle: &str) -> bool {
        self.successes().iter().any(|m| m.contains(needle))
    }

    pub fn has_warning(&self, needle: &str) -> bool {
        self.warnings().iter().any(|m| m.contains(needle))
    }

    pub fn has_error(&self, needle: &str) -> bool {
        self.errors().iter().any(|m| m.contains(needle))
    }

    pub fn has_hint(&self, needle: &str) -> bool {
        self.hints().iter().any(|m| m.contains(needle))
    }

    pub fn has_spinner_success(&self, needle: &str) -> bool {
        self.spinner_results()
            .iter()
            .any(|(status, m)| *status == SpinnerStatus::Success && m.contains(needle))
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.record(UiEvent::Message(msg.to_string()));
    }

    fn success(&mut self, msg: &str) {
        self.record(UiEvent::Success(msg.to_string()));
    }

    fn warning(&mut self, msg: &str) {
        self.record(UiEvent::Warning(msg.to_string()));
    }

    fn error(&mut self, msg: &str) {
        self.record(UiEvent::Error(msg.to_string()));
    }

    fn show_header(&mut self, title: &str) {
        self.record(UiEvent::Header(title.to_string()));
    }

    fn show_hint(&mut self, hint: &str) {
        self.record(UiEvent::Hint(hint.to_string()));
    }

    fn command_output(&mut self, output: &str) {
        self.record(UiEvent::CommandOutput(output.to_string()));
    }

    fn show_error_block(&mut self, command: &str, output: &str, hint: Option<&str>) {
        self.record(UiEvent::ErrorBlock {
            command: command.to_string(),
            output: output.to_string(),
            hint: hint.map(str::to_string),
        });
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.record(UiEvent::SpinnerStarted(message.to_string()));
        Box::new(MockSpinner {
            events: Rc::clone(&self.events),
        })
    }
}

/// Spinner that records how it finished in its [`MockUI`]'s log.
#[derive(Debug)]
pub struct MockSpinner {
    events: EventLog,
}

impl MockSpinner {
    fn finish(&mut self, status: SpinnerStatus, msg: &str) {
        self.events
            .borrow_mut()
            .push(UiEvent::SpinnerFinished(status, msg.to_string()));
    }
}

impl SpinnerHandle for MockSpinner {
    fn finish_success(&mut self, msg: &str) {
        self.finish(SpinnerStatus::Success, msg);
    }

    fn finish_error(&mut self, msg: &str) {
        self.finish(SpinnerStatus::Error, msg);
    }

    fn finish_skipped(&mut self, msg: &str) {
        self.finish(SpinnerStatus::Skipped, msg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_status_lines_by_kind() {
        let mut ui = MockUI::new();
        ui.message("Hello");
        ui.success("Done");
        ui.warning("Careful");
        ui.error("Oops");

        assert_eq!(ui.messages(), ["Hello"]);
        assert!(ui.has_success("Done"));
        assert!(ui.has_warning("Careful"));
        assert!(ui.has_error("Oops"));
        assert_eq!(ui.events().len(), 4);
    }

    #[test]
    fn spinner_finish_lands_after_its_start() {
        let mut ui = MockUI::new();
        let mut spinner = ui.start_spinner("Installing");
        ui.command_output("added 12 packages");
        spinner.finish_error("Failed: Installing");

        assert_eq!(
            ui.events(),
            vec![
                UiEvent::SpinnerStarted("Installing".into()),
                UiEvent::CommandOutput("added 12 packages".into()),
                UiEvent::SpinnerFinished(SpinnerStatus::Error, "Failed: Installing".into()),
            ]
        );
    }

    #[test]
    fn error_blocks_keep_their_parts() {
        let mut ui = MockUI::new();
        ui.show_error_block("npm install", "npm ERR!", Some("retry"));

        assert_eq!(
            ui.error_blocks(),
            vec![(
                "npm install".to_string(),
                "npm ERR!".to_string(),
                Some("retry".to_string())
            )]
        );
    }

    #[test]
    fn mode_is_reported() {
        let ui = MockUI::with_mode(OutputMode::Quiet);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }
}
