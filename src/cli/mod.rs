//! Command-line interface.

pub mod output;

use clap::Parser;

use crate::core::config::Config;
use crate::core::constants::{API_URL_ENV, DEFAULT_API_URL, TOKEN_ENV};
use crate::core::domain::Report;
use crate::core::github::RestClient;
use crate::core::propagate::{self, Request};
use crate::error::{ConfigError, Error, Result};

/// Update a secret in all repositories that use it.
#[derive(Parser, Debug)]
#[command(
    name = "github-update-secret",
    about = "Update a secret in all repositories that use it",
    version,
    after_help = "Only repositories (and the organization) that already define the secret are updated."
)]
pub struct Cli {
    /// The user or org to update
    pub target: String,

    /// The name of the secret to update
    pub name: String,

    /// The new value for the secret
    pub value: String,

    /// GitHub personal access token
    #[arg(long, env = TOKEN_ENV, hide_env_values = true)]
    pub pat: Option<String>,

    /// REST API base URL (for GitHub Enterprise Server)
    #[arg(long, env = API_URL_ENV, default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Skip repositories whose API calls fail instead of aborting
    #[arg(long)]
    pub keep_going: bool,

    /// Show what would be updated without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Execute an update run.
///
/// The configuration is resolved before any network access, so a missing
/// token fails without contacting the API.
///
/// # Errors
///
/// Returns the first fatal error; see [`propagate::run`].
pub fn execute(cli: Cli) -> Result<Report> {
    let mut config = Config::resolve(cli.pat, Some(&cli.api_url))?;
    config.keep_going = cli.keep_going;
    config.dry_run = cli.dry_run;

    let request = Request::new(&cli.target, &cli.name, cli.value)?;
    let client = RestClient::new(&config)?;

    let report = propagate::run(&client, &config, &request)?;
    output::report(&report, &request.name);
    Ok(report)
}

/// Suggestion printed under an error, if one applies.
pub fn hint(error: &Error) -> Option<&'static str> {
    match error {
        Error::Config(ConfigError::MissingToken) => Some("pass --pat or set GITHUB_TOKEN"),
        e if e.is_authorization() => {
            Some("the token needs admin access to the repositories and org")
        }
        _ => None,
    }
}
