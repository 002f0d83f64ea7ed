//! `.env` file materialization.
//!
//! Ensures a runtime configuration file exists without ever touching one a
//! developer has already created or edited.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::Result;

use super::fs::FileSystem;

/// Where an env file comes from and where it goes.
///
/// # Example
///
/// ```
/// use analytics_setup::config::{materialize, EnvFileSpec, MaterializationOutcome, MemoryFileSystem};
///
/// let spec = EnvFileSpec::new("/app/backend/env-template", "/app/backend/.env")
///     .with_default("PORT", "3001");
/// let fs = MemoryFileSystem::new();
///
/// assert_eq!(materialize(&spec, &fs).unwrap(), MaterializationOutcome::WroteDefaults);
/// assert_eq!(materialize(&spec, &fs).unwrap(), MaterializationOutcome::Skipped);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvFileSpec {
    /// Template copied verbatim when present.
    pub template_path: PathBuf,
    /// File to create; never overwritten.
    pub target_path: PathBuf,
    /// Fallback `KEY=value` pairs, written in order.
    pub defaults: Vec<(String, String)>,
}

impl EnvFileSpec {
    /// Create a spec with no defaults.
    pub fn new(template_path: impl Into<PathBuf>, target_path: impl Into<PathBuf>) -> Self {
        Self {
            template_path: template_path.into(),
            target_path: target_path.into(),
            defaults: Vec::new(),
        }
    }

    /// Append a default pair.
    pub fn with_default(mut self, key: &str, value: &str) -> Self {
        self.defaults.push((key.to_string(), value.to_string()));
        self
    }

    /// The defaults as file contents, one `key=value` line per pair.
    ///
    /// Values are written as given: no quoting, no escaping.
    pub fn render_defaults(&self) -> String {
        self.defaults
            .iter()
            .map(|(key, value)| format!("{}={}\n", key, value))
            .collect()
    }
}

/// What [`materialize`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterializationOutcome {
    /// The target already existed and was left alone.
    Skipped,
    /// The target was created from the template.
    CopiedFromTemplate,
    /// The target was created from the hard-coded defaults.
    WroteDefaults,
}

impl fmt::Display for MaterializationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Skipped => write!(f, "already exists"),
            Self::CopiedFromTemplate => write!(f, "created from template"),
            Self::WroteDefaults => write!(f, "created with default values"),
        }
    }
}

/// Ensure `spec.target_path` exists.
///
/// Existing target: no I/O beyond the existence check. Otherwise the
/// template is copied if present, else the defaults are written. Any I/O
/// error is returned; nothing is reported as created unless the write
/// completed.
pub fn materialize(spec: &EnvFileSpec, fs: &dyn FileSystem) -> Result<MaterializationOutcome> {
    if fs.exists(&spec.target_path) {
        tracing::debug!(path = %spec.target_path.display(), "env file exists, skipping");
        return Ok(MaterializationOutcome::Skipped);
    }

    let outcome = if fs.exists(&spec.template_path) {
        fs.copy(&spec.template_path, &spec.target_path)?;
        MaterializationOutcome::CopiedFromTemplate
    } else {
        fs.write(&spec.target_path, spec.render_defaults().as_bytes())?;
        MaterializationOutcome::WroteDefaults
    };

    tracing::info!(path = %spec.target_path.display(), %outcome, "materialized env file");
    Ok(outcome)
}

/// Path relative to `root` for display, falling back to the full path.
pub fn display_relative(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}
