//! npr - project initializer
//!
//! This is the main entry point for the npr command-line interface.

mod cli;
mod commands;
mod output;
mod prompts;

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.quiet);

    match commands::init::run(cli.init, cli.config.as_deref()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if is_user_abort(&err) => {
            output::warning("Aborted");
            ExitCode::from(130)
        }
        Err(err) => {
            output::error(&format!("{:#}", err));
            ExitCode::FAILURE
        }
    }
}

fn is_user_abort(err: &anyhow::Error) -> bool {
    matches!(
        err.downcast_ref::<npr_projects::Error>(),
        Some(npr_projects::Error::UserAbort)
    )
}

/// Initialize tracing with appropriate verbosity
fn init_tracing(verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if quiet {
            EnvFilter::new("error")
        } else {
            match verbose {
                // Default stays quiet so log lines don't break up the spinner
                0 => EnvFilter::new("warn"),
                1 => EnvFilter::new("info"),
                2 => EnvFilter::new("debug"),
                _ => EnvFilter::new("trace"),
            }
        }
    });

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
