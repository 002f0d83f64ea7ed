//! `analytics-setup` binary.

use std::path::PathBuf;
use std::process::ExitCode;

use analytics_setup::cli::{Cli, SetupCommand};
use analytics_setup::shell::is_ci;
use analytics_setup::ui::{create_ui, OutputMode};
use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the stderr log subscriber.
///
/// `--debug` beats `RUST_LOG`, which beats the ERROR default. Warnings
/// already reach the user through the UI.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("analytics_setup=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("analytics_setup=error"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Resolve the project root from `--project` or the current directory.
fn project_root(cli: &Cli) -> anyhow::Result<PathBuf> {
    let root = match &cli.project {
        Some(path) => path.clone(),
        None => std::env::current_dir().context("could not determine the current directory")?,
    };
    anyhow::ensure!(
        root.is_dir(),
        "project directory {} does not exist",
        root.display()
    );
    Ok(root)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("analytics-setup starting with args: {:?}", cli);

    let output_mode = OutputMode::from_flags(cli.verbose, cli.quiet);

    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let mut ui = create_ui(!is_ci(), output_mode);

    let root = match project_root(&cli) {
        Ok(root) => root,
        Err(e) => {
            ui.error(&format!("Error: {:#}", e));
            return ExitCode::from(1);
        }
    };

    let outcome = SetupCommand::new(&root).execute(ui.as_mut());
    if let Some(failure) = outcome.failure() {
        tracing::debug!(%failure, "setup failed");
    }
    ExitCode::from(outcome.exit_code())
}
