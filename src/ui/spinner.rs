//! Progress spinners.

use console::Term;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::io::Write;
use std::time::Duration;

use super::theme::{SetupTheme, Status};
use super::SpinnerHandle;

/// Spinner for a running install step.
///
/// The final status line is written by the spinner itself and never
/// depends on whether the animation was visible.
pub struct ProgressSpinner {
    /// `None` when nothing is animated.
    bar: Option<ProgressBar>,
    theme: SetupTheme,
    /// Where success and skipped lines go.
    status_out: Box<dyn Write>,
    /// Where failure lines go: stdout while animating, stderr in line mode.
    failure_out: Box<dyn Write>,
}

impl ProgressSpinner {
    /// Animated spinner drawn on stdout.
    pub fn live(message: &str, theme: SetupTheme) -> Self {
        let bar = ProgressBar::with_draw_target(None, ProgressDrawTarget::stdout());
        if let Ok(style) = ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ ")
            .template("{spinner:.cyan} {msg}")
        {
            bar.set_style(style);
        }
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));

        Self {
            bar: Some(bar),
            theme,
            status_out: Box::new(Term::stdout()),
            failure_out: Box::new(Term::stdout()),
        }
    }

    /// Spinner that only writes its final line, for logs and pipes.
    pub fn lines(theme: SetupTheme) -> Self {
        Self {
            bar: None,
            theme,
            status_out: Box::new(Term::stdout()),
            failure_out: Box::new(Term::stderr()),
        }
    }

    fn finish(&mut self, status: Status, msg: &str) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
        let line = self.theme.status_line(status, msg);
        let out = if status == Status::Error {
            &mut self.failure_out
        } else {
            &mut self.status_out
        };
        writeln!(out, "{}", line).ok();
    }
}

impl SpinnerHandle for ProgressSpinner {
    fn finish_success(&mut self, msg: &str) {
        self.finish(Status::Success, msg);
    }

    fn finish_error(&mut self, msg: &str) {
        self.finish(Status::Error, msg);
    }

    fn finish_skipped(&mut self, msg: &str) {
        self.finish(Status::Skipped, msg);
    }
}
