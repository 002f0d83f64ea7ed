//! Prerequisite tools and their detection.
//!
//! A [`ToolRequirement`] names an executable the setup depends on. The
//! [`ToolDetector`] trait answers whether it is on PATH and which version
//! it reports; [`SystemToolDetector`] is the real implementation.

pub mod detector;
pub mod search_path;

pub use detector::{SystemToolDetector, ToolDetector};
pub use search_path::SearchPath;

/// An external binary the setup depends on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolRequirement {
    /// Executable name resolved on PATH.
    pub name: String,
    /// Human-readable name for status lines.
    pub display_name: String,
    /// Missing required tools abort the run; missing optional ones warn.
    pub required: bool,
    /// Argument that makes the tool print its version.
    pub version_flag: String,
    /// Remediation lines shown when the tool is missing.
    pub install_hint: Vec<String>,
}

impl ToolRequirement {
    /// A tool whose absence aborts the run.
    pub fn required(name: &str, display_name: &str) -> Self {
        Self {
            name: name.to_string(),
            display_name: display_name.to_string(),
            required: true,
            version_flag: "--version".to_string(),
            install_hint: Vec::new(),
        }
    }

    /// A tool whose absence is only a warning.
    pub fn optional(name: &str, display_name: &str) -> Self {
        Self {
            required: false,
            ..Self::required(name, display_name)
        }
    }

    /// Add a remediation line.
    pub fn with_hint(mut self, line: &str) -> Self {
        self.install_hint.push(line.to_string());
        self
    }
}
