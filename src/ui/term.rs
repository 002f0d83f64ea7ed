//! Console output for real runs.

use console::Term;
use std::io::Write;

use super::theme::{SetupTheme, Status};
use super::{OutputMode, ProgressSpinner, SpinnerHandle, UserInterface};

/// Writes setup output to stdout, and warnings and errors to stderr.
///
/// On a terminal, steps get an animated spinner and colors. Elsewhere each
/// step prints a plain line when it starts and another when it ends.
pub struct ConsoleUI {
    stdout: Term,
    stderr: Term,
    /// Styles for stdout lines.
    theme: SetupTheme,
    /// Styles for stderr lines, decided separately since either stream may
    /// be redirected on its own.
    err_theme: SetupTheme,
    mode: OutputMode,
    live: bool,
}

impl ConsoleUI {
    /// Spinners, and colors on each stream that is a terminal (unless
    /// `NO_COLOR` is set).
    pub fn interactive(mode: OutputMode) -> Self {
        let stdout = Term::stdout();
        let stderr = Term::stderr();
        Self {
            theme: SetupTheme::for_term(&stdout),
            err_theme: SetupTheme::for_term(&stderr),
            stdout,
            stderr,
            mode,
            live: true,
        }
    }

    /// Uncolored line output for CI logs and pipes.
    pub fn plain(mode: OutputMode) -> Self {
        Self {
            stdout: Term::stdout(),
            stderr: Term::stderr(),
            theme: SetupTheme::plain(),
            err_theme: SetupTheme::plain(),
            mode,
            live: false,
        }
    }

    fn out(&mut self, line: &str) {
        writeln!(self.stdout, "{}", line).ok();
    }

    fn err(&mut self, line: &str) {
        writeln!(self.stderr, "{}", line).ok();
    }
}

impl UserInterface for ConsoleUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.out(msg);
    }

    fn success(&mut self, msg: &str) {
        let line = self.theme.status_line(Status::Success, msg);
        self.out(&line);
    }

    fn warning(&mut self, msg: &str) {
        let line = self.err_theme.status_line(Status::Warning, msg);
        self.err(&line);
    }

    fn error(&mut self, msg: &str) {
        let line = self.err_theme.status_line(Status::Error, msg);
        self.err(&line);
    }

    fn show_header(&mut self, title: &str) {
        for line in self.theme.banner(title) {
            self.out(&line);
        }
    }

    fn show_hint(&mut self, hint: &str) {
        if self.mode.shows_hints() {
            let line = self.theme.hint_line(hint);
            self.out(&line);
        }
    }

    fn command_output(&mut self, output: &str) {
        for line in self.theme.output_lines(output) {
            self.out(&line);
        }
    }

    fn show_error_block(&mut self, command: &str, output: &str, hint: Option<&str>) {
        for line in self.err_theme.error_block(command, output, hint) {
            self.err(&line);
        }
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.live {
            return Box::new(ProgressSpinner::live(message, self.theme.clone()));
        }
        if self.mode.announces_steps() {
            self.out(message);
        }
        Box::new(ProgressSpinner::lines(self.theme.clone()))
    }
}

/// Pick the console flavor for this process.
///
/// Spinners only make sense on a real terminal outside CI; CI logs, pipes
/// and test harnesses get plain lines.
pub fn create_ui(interactive: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    if interactive && Term::stdout().is_term() {
        Box::new(ConsoleUI::interactive(mode))
    } else {
        Box::new(ConsoleUI::plain(mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_ui_without_interaction_is_plain() {
        let ui = create_ui(false, OutputMode::Quiet);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }

    #[test]
    fn plain_spinner_finishes() {
        let mut ui = ConsoleUI::plain(OutputMode::Verbose);
        let mut spinner = ui.start_spinner("Installing root dependencies...");
        spinner.finish_success("Installing root dependencies (12ms)");
    }
}
