//! Styling for setup output.
//!
//! Both UIs render through [`SetupTheme`], so CI logs and the terminal show
//! the same lines; only the colors differ.

use console::{Style, Term};

/// Width of the `=` rules around banners.
pub const RULE_WIDTH: usize = 60;

/// Kind of a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Warning,
    Error,
    Skipped,
}

impl Status {
    /// Icon printed before the message.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Warning => "⚠",
            Self::Error => "✗",
            Self::Skipped => "○",
        }
    }
}

/// Colors for setup output.
#[derive(Debug, Clone)]
pub struct SetupTheme {
    success: Style,
    warning: Style,
    error: Style,
    skipped: Style,
    banner: Style,
    rule: Style,
    command: Style,
    hint: Style,
    output: Style,
}

impl SetupTheme {
    /// Colored theme for terminals.
    pub fn colored() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().yellow(),
            error: Style::new().red().bold(),
            skipped: Style::new().dim(),
            banner: Style::new().bold().cyan(),
            rule: Style::new().cyan(),
            command: Style::new().bold(),
            hint: Style::new().cyan().dim(),
            output: Style::new().dim(),
        }
    }

    /// Theme without any styling.
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            skipped: Style::new(),
            banner: Style::new(),
            rule: Style::new(),
            command: Style::new(),
            hint: Style::new(),
            output: Style::new(),
        }
    }

    /// Theme for lines written to `term`: colored only when
    /// [`should_use_colors`] allows it for that stream.
    pub fn for_term(term: &Term) -> Self {
        Self::for_stream(should_use_colors(term))
    }

    /// Colored for a color-capable stream, plain otherwise.
    pub fn for_stream(colors: bool) -> Self {
        if colors {
            Self::colored()
        } else {
            Self::plain()
        }
    }

    /// `✓ msg` and friends.
    pub fn status_line(&self, status: Status, msg: &str) -> String {
        let style = match status {
            Status::Success => &self.success,
            Status::Warning => &self.warning,
            Status::Error => &self.error,
            Status::Skipped => &self.skipped,
        };
        style
            .apply_to(format!("{} {}", status.icon(), msg))
            .to_string()
    }

    /// A title between two `=` rules, followed by a blank line.
    pub fn banner(&self, title: &str) -> Vec<String> {
        let rule = self.rule.apply_to("=".repeat(RULE_WIDTH)).to_string();
        vec![
            rule.clone(),
            self.banner.apply_to(title).to_string(),
            rule,
            String::new(),
        ]
    }

    /// Indented hint line.
    pub fn hint_line(&self, hint: &str) -> String {
        format!("  {}", self.hint.apply_to(hint))
    }

    /// Indented lines of captured command output.
    pub fn output_lines(&self, output: &str) -> Vec<String> {
        output
            .lines()
            .map(|line| format!("  {}", self.output.apply_to(line)))
            .collect()
    }

    /// The failed command, its output and an optional hint, boxed.
    pub fn error_block(&self, command: &str, output: &str, hint: Option<&str>) -> Vec<String> {
        let mut lines = vec![
            format!("    {}", self.rule.apply_to("┌─ Command")),
            format!("    │ {}", self.command.apply_to(command)),
        ];
        if !output.is_empty() {
            lines.push(format!("    {}", self.rule.apply_to("├─ Output")));
            lines.extend(output.lines().map(|line| format!("    │ {}", line)));
        }
        lines.push(format!("    {}", self.rule.apply_to("└─")));
        if let Some(hint) = hint {
            lines.push(format!("    {}", self.hint.apply_to(format!("Hint: {}", hint))));
        }
        lines
    }
}

/// Colors are off when `NO_COLOR` is set or `term` is not a terminal.
///
/// Each stream is checked on its own: stdout on a terminal says nothing
/// about a redirected stderr.
pub fn should_use_colors(term: &Term) -> bool {
    std::env::var_os("NO_COLOR").is_none() && term.is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_lines_carry_icons() {
        let theme = SetupTheme::plain();
        assert_eq!(theme.status_line(Status::Success, "Done"), "✓ Done");
        assert_eq!(theme.status_line(Status::Warning, "Careful"), "⚠ Careful");
        assert_eq!(theme.status_line(Status::Error, "Broken"), "✗ Broken");
        assert_eq!(theme.status_line(Status::Skipped, "Kept"), "○ Kept");
    }

    #[test]
    fn banner_is_framed_by_rules() {
        let lines = SetupTheme::plain().banner("✨ Setup Complete!");
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "=".repeat(RULE_WIDTH));
        assert_eq!(lines[1], "✨ Setup Complete!");
        assert_eq!(lines[2], lines[0]);
        assert!(lines[3].is_empty());
    }

    #[test]
    fn error_block_includes_output_and_hint() {
        let lines = SetupTheme::plain().error_block(
            "npm install",
            "npm ERR! one\nnpm ERR! two",
            Some("try again"),
        );
        assert_eq!(lines[1], "    │ npm install");
        assert!(lines.contains(&"    │ npm ERR! two".to_string()));
        assert_eq!(lines.last().map(String::as_str), Some("    Hint: try again"));
    }

    #[test]
    fn error_block_without_output_has_no_output_section() {
        let lines = SetupTheme::plain().error_block("npm install", "", None);
        assert_eq!(lines.len(), 3);
        assert!(!lines.iter().any(|l| l.contains("Output")));
    }

    #[test]
    fn stream_without_colors_gets_no_escape_codes() {
        let line = SetupTheme::for_stream(false).status_line(Status::Warning, "MongoDB not found");
        assert_eq!(line, "⚠ MongoDB not found");
        assert!(!line.contains('\x1b'));
    }

    #[test]
    fn output_lines_are_indented() {
        let lines = SetupTheme::plain().output_lines("added 3 packages\naudited 4");
        assert_eq!(lines, vec!["  added 3 packages", "  audited 4"]);
    }
}
