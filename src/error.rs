//! Error types for Spotify calls and configuration loading.

use reqwest::StatusCode;
use thiserror::Error;

/// Failure outcome of a call to the Spotify accounts service or Web API.
///
/// `InvalidToken` is kept apart from every other failure: only a rejected
/// token clears the session, everything else is reported per route.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Spotify answered 401, the access token is no longer accepted.
    #[error("access token rejected by Spotify")]
    InvalidToken,

    /// Any other non-success status.
    #[error("Spotify responded with status {0}")]
    Status(StatusCode),

    /// HTTP request failed.
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A successful response without the body the call needs.
    #[error("Spotify returned an empty response")]
    EmptyResponse,

    /// The token endpoint answered without a usable token.
    #[error("OAuth error: {0}")]
    OAuth(String),
}

impl ApiError {
    pub fn is_invalid_token(&self) -> bool {
        matches!(self, ApiError::InvalidToken)
    }
}

/// Startup configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    MissingVar(&'static str),

    #[error("invalid URL in {0}: {1}")]
    InvalidUrl(&'static str, String),

    #[error("invalid server address {0}: {1}")]
    InvalidAddress(String, std::net::AddrParseError),

    #[error("cannot load env file {0}: {1}")]
    EnvFile(String, String),
}
