//! Error types.
//!
//! One enum per concern, folded into [`Error`] so every layer can use `?`.

use thiserror::Error;

/// Top-level error returned by the library and reported by the binary.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Cipher(#[from] CipherError),

    #[error("failed to start async runtime: {0}")]
    Runtime(#[source] std::io::Error),

    #[error("failed to build http client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

/// Problems with arguments or credentials, detected before any remote call.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("no access token provided")]
    MissingToken,

    #[error("token contains characters not allowed in an http header")]
    InvalidToken,

    #[error("invalid api url: {0} (expected http:// or https://)")]
    InvalidApiUrl(String),

    #[error("invalid target: {login:?} ({reason})")]
    InvalidTarget { login: String, reason: &'static str },

    #[error("invalid secret name: {name} ({reason})")]
    InvalidSecretName { name: String, reason: &'static str },
}

/// Failures talking to the GitHub REST API.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("unauthorized: {path} rejected the token")]
    Unauthorized { path: String },

    #[error("forbidden: token lacks access to {path}")]
    Forbidden { path: String },

    #[error("not found: {path}")]
    NotFound { path: String },

    #[error("{path} returned {status}: {message}")]
    Status {
        path: String,
        status: reqwest::StatusCode,
        message: String,
    },

    #[error("request to {path} failed: {source}")]
    Transport {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("unexpected response from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    /// Build the error matching a non-success status code.
    pub fn from_status(path: &str, status: reqwest::StatusCode, message: String) -> Self {
        let path = path.to_string();
        match status.as_u16() {
            401 => ApiError::Unauthorized { path },
            403 => ApiError::Forbidden { path },
            404 => ApiError::NotFound { path },
            _ => ApiError::Status {
                path,
                status,
                message,
            },
        }
    }

    /// The resource does not exist (or is hidden from this token).
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound { .. })
    }

    /// The token was rejected or lacks permission.
    pub fn is_authorization(&self) -> bool {
        matches!(
            self,
            ApiError::Unauthorized { .. } | ApiError::Forbidden { .. }
        )
    }
}

/// Sealed-box encryption failures.
#[derive(Error, Debug)]
pub enum CipherError {
    #[error("public key is not valid base64: {0}")]
    InvalidEncoding(#[from] base64::DecodeError),

    #[error("public key must be 32 bytes, got {0}")]
    InvalidKeyLength(usize),

    #[error("encryption failed")]
    EncryptionFailed,
}

impl Error {
    /// True when the remote service rejected the token.
    pub fn is_authorization(&self) -> bool {
        matches!(self, Error::Api(e) if e.is_authorization())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
