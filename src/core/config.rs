//! Run configuration.
//!
//! Built once from the parsed command line and passed by reference to
//! everything that needs it. Nothing below the CLI layer reads the process
//! environment.

use std::fmt;

use zeroize::Zeroizing;

use crate::core::constants::DEFAULT_API_URL;
use crate::error::ConfigError;

/// A personal access token, wiped from memory on drop.
pub struct Token(Zeroizing<String>);

impl Token {
    /// Wrap a token, rejecting empty or whitespace-only input.
    pub fn new(raw: String) -> Option<Self> {
        let raw = Zeroizing::new(raw);
        if raw.trim().is_empty() {
            return None;
        }
        Some(Self(Zeroizing::new(raw.trim().to_string())))
    }

    /// The raw token, for the Authorization header only.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Token(***)")
    }
}

/// Settings for one invocation
#[derive(Debug)]
pub struct Config {
    /// Credential for every API call
    pub token: Token,
    /// REST API base URL without a trailing slash
    pub api_url: String,
    /// Skip repositories whose calls fail instead of aborting
    pub keep_going: bool,
    /// Perform reads only; report what would be written
    pub dry_run: bool,
}

impl Config {
    /// Resolve the configuration from already-parsed inputs.
    ///
    /// `token` is the `--pat` value, or the `GITHUB_TOKEN` value when the
    /// flag is absent.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingToken` if no usable token was given and
    /// `ConfigError::InvalidApiUrl` for a non-HTTP(S) base URL.
    pub fn resolve(token: Option<String>, api_url: Option<&str>) -> Result<Self, ConfigError> {
        let token = token.and_then(Token::new).ok_or(ConfigError::MissingToken)?;

        let api_url = api_url.unwrap_or(DEFAULT_API_URL).trim();
        if !(api_url.starts_with("https://") || api_url.starts_with("http://")) {
            return Err(ConfigError::InvalidApiUrl(api_url.to_string()));
        }
        let api_url = api_url.trim_end_matches('/').to_string();

        Ok(Self {
            token,
            api_url,
            keep_going: false,
            dry_run: false,
        })
    }
}
