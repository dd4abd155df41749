//! github-update-secret - Rotate a GitHub Actions secret everywhere it is used.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use github_update_secret::cli::output;
use github_update_secret::cli::{execute, hint, Cli};
use github_update_secret::core::constants::LOG_ENV;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("github_update_secret=debug")
        } else {
            EnvFilter::new("github_update_secret=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();

    match execute(cli) {
        Ok(report) if report.is_complete() => {}
        Ok(_) => std::process::exit(1),
        Err(e) => {
            output::error(&e.to_string());
            if let Some(suggestion) = hint(&e) {
                output::hint(suggestion);
            }
            std::process::exit(1);
        }
    }
}
