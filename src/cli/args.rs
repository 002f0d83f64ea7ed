//! Command-line flags.
//!
//! A bare `analytics-setup` performs the whole setup in the current
//! directory. The flags only adjust where and how loudly it runs.

use clap::Parser;
use std::path::PathBuf;

/// Set up the User Analytics application for local development.
#[derive(Debug, Parser)]
#[command(name = "analytics-setup")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Project root to set up [default: current directory]
    #[arg(short, long, env = "ANALYTICS_SETUP_PROJECT")]
    pub project: Option<PathBuf>,

    /// Also echo stderr of successful install steps
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Skip hints and step announcements
    #[arg(short, long)]
    pub quiet: bool,

    /// Never color output (same as NO_COLOR=1)
    #[arg(long)]
    pub no_color: bool,

    /// Log debug traces to stderr
    #[arg(long)]
    pub debug: bool,
}
