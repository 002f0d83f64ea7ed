//! Output verbosity.

use std::time::Duration;

/// How much the run prints besides its status lines.
///
/// Errors, status lines and captured install output are printed in every
/// mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Also echo stderr of successful steps and announce steps in CI logs.
    Verbose,
    #[default]
    Normal,
    /// Drop hints and step announcements.
    Quiet,
}

impl OutputMode {
    /// Pick the mode from the `--verbose`/`--quiet` flags.
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        match (verbose, quiet) {
            (_, true) => Self::Quiet,
            (true, false) => Self::Verbose,
            (false, false) => Self::Normal,
        }
    }

    /// Whether remediation and follow-up hints are printed.
    pub fn shows_hints(self) -> bool {
        self != Self::Quiet
    }

    /// Whether a step prints a line when it starts, not only when it ends.
    pub fn announces_steps(self) -> bool {
        self != Self::Quiet
    }

    /// Whether stderr of a successful step is echoed alongside its stdout.
    pub fn echoes_stderr(self) -> bool {
        self == Self::Verbose
    }
}

/// Format a duration for status lines.
pub fn format_duration(d: Duration) -> String {
    let millis = d.as_millis();
    if millis < 1000 {
        return format!("{}ms", millis);
    }
    let secs = d.as_secs_f64();
    if secs < 60.0 {
        format!("{:.1}s", secs)
    } else {
        format!("{}m {:02}s", d.as_secs() / 60, d.as_secs() % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_duration_scales() {
        assert_eq!(format_duration(Duration::from_millis(250)), "250ms");
        assert_eq!(format_duration(Duration::from_millis(3400)), "3.4s");
        assert_eq!(format_duration(Duration::from_secs(95)), "1m 35s");
    }

    #[test]
    fn quiet_wins_over_verbose() {
        assert_eq!(OutputMode::from_flags(true, true), OutputMode::Quiet);
        assert_eq!(OutputMode::from_flags(true, false), OutputMode::Verbose);
        assert_eq!(OutputMode::from_flags(false, false), OutputMode::Normal);
    }

    #[test]
    fn quiet_drops_hints_and_announcements() {
        assert!(OutputMode::Normal.shows_hints());
        assert!(OutputMode::Verbose.announces_steps());
        assert!(!OutputMode::Quiet.shows_hints());
        assert!(!OutputMode::Quiet.announces_steps());
    }

    #[test]
    fn only_verbose_echoes_stderr() {
        assert!(OutputMode::Verbose.echoes_stderr());
        assert!(!OutputMode::Normal.echoes_stderr());
        assert!(!OutputMode::Quiet.echoes_stderr());
    }
}
