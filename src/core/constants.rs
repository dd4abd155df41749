//! Constants used throughout github-update-secret.
//!
//! Centralizes magic strings and configuration values.

/// Environment variable consulted when `--pat` is not given.
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Environment variable overriding the API base URL.
pub const API_URL_ENV: &str = "GITHUB_API_URL";

/// Public GitHub REST API.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// REST API version pinned on every request.
pub const API_VERSION: &str = "2022-11-28";

/// Media type requested on every request.
pub const ACCEPT: &str = "application/vnd.github+json";

/// Page size for list endpoints (the service maximum).
pub const PER_PAGE: u32 = 100;

/// Account type reported for organizations by `GET /users/{login}`.
pub const ORGANIZATION: &str = "Organization";

/// Log filter environment variable (e.g. `UPDATE_SECRET_LOG=trace`).
pub const LOG_ENV: &str = "UPDATE_SECRET_LOG";

/// Reserved prefix the service refuses for secret names.
pub const RESERVED_PREFIX: &str = "GITHUB_";
