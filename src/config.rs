//! Configuration management for Statsify.
//!
//! This module handles loading configuration values from environment variables
//! and `.env` files. The values are read once at startup into an immutable
//! [`Config`] that is shared with every route handler through the application
//! state, so nothing reads the environment while requests are being served.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file (explicit path, working directory, or local data directory)
//! 3. Application defaults (where applicable)

use std::{
    env,
    net::SocketAddr,
    path::{Path, PathBuf},
};

use reqwest::Url;

use crate::error::ConfigError;

pub const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_PORT: u16 = 3000;

/// Scopes requested during authorization when `SPOTIFY_API_AUTH_SCOPE` is unset.
pub const DEFAULT_SCOPES: [&str; 5] = [
    "user-read-email",
    "user-read-private",
    "user-top-read",
    "playlist-read-private",
    "playlist-read-collaborative",
];

/// Immutable runtime configuration.
#[derive(Clone)]
pub struct Config {
    /// Client ID registered on the Spotify developer dashboard.
    pub client_id: String,
    /// Client secret, sent only to the token endpoint.
    pub client_secret: String,
    /// Callback URL, must match the one registered with Spotify.
    pub redirect_uri: String,
    pub scopes: Vec<String>,
    pub auth_url: Url,
    pub token_url: Url,
    /// Web API base URL without a trailing slash.
    pub api_url: String,
    pub server_address: SocketAddr,
    /// Secret used to derive the cookie signing key. `None` means an
    /// ephemeral key is generated at startup.
    pub session_secret: Option<String>,
}

impl Config {
    /// Builds the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if:
    /// - `SPOTIFY_API_AUTH_CLIENT_ID`, `SPOTIFY_API_AUTH_CLIENT_SECRET` or
    ///   `SPOTIFY_API_REDIRECT_URI` is missing
    /// - one of the URL variables does not parse
    /// - `SERVER_ADDRESS` (or `PORT`) is not a valid socket address
    ///
    /// # Example
    ///
    /// ```
    /// let config = Config::from_env()?;
    /// println!("Binding {}", config.server_address);
    /// ```
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let required = |name: &'static str| get(name).ok_or(ConfigError::MissingVar(name));
        let url = |name: &'static str, default: &str| {
            let raw = get(name).unwrap_or_else(|| default.to_string());
            Url::parse(&raw).map_err(|e| ConfigError::InvalidUrl(name, e.to_string()))
        };

        let scopes = match get("SPOTIFY_API_AUTH_SCOPE") {
            Some(raw) => raw.split_whitespace().map(str::to_string).collect(),
            None => DEFAULT_SCOPES.iter().map(|s| s.to_string()).collect(),
        };

        let api_url = url("SPOTIFY_API_URL", DEFAULT_API_URL)?
            .as_str()
            .trim_end_matches('/')
            .to_string();

        let address = match get("SERVER_ADDRESS") {
            Some(addr) => addr,
            None => format!(
                "0.0.0.0:{}",
                get("PORT").unwrap_or_else(|| DEFAULT_PORT.to_string())
            ),
        };
        let server_address = address
            .parse()
            .map_err(|e| ConfigError::InvalidAddress(address.clone(), e))?;

        Ok(Config {
            client_id: required("SPOTIFY_API_AUTH_CLIENT_ID")?,
            client_secret: required("SPOTIFY_API_AUTH_CLIENT_SECRET")?,
            redirect_uri: required("SPOTIFY_API_REDIRECT_URI")?,
            scopes,
            auth_url: url("SPOTIFY_API_AUTH_URL", DEFAULT_AUTH_URL)?,
            token_url: url("SPOTIFY_API_TOKEN_URL", DEFAULT_TOKEN_URL)?,
            api_url,
            server_address,
            session_secret: get("SESSION_SECRET"),
        })
    }
}

/// Loads environment variables from a `.env` file.
///
/// With an explicit `path` the file must exist and parse. Without one, the
/// function tries `./.env` and then the platform-specific local data
/// directory under `statsify/.env`; a missing file there is not an error,
/// since every variable can also come from the real environment.
///
/// # Directory Structure
///
/// The fallback location is:
/// - Linux: `~/.local/share/statsify/.env`
/// - macOS: `~/Library/Application Support/statsify/.env`
/// - Windows: `%LOCALAPPDATA%/statsify/.env`
///
/// Variables already present in the environment are never overwritten.
pub fn load_env(path: Option<&Path>) -> Result<(), ConfigError> {
    if let Some(path) = path {
        return dotenv::from_path(path)
            .map_err(|e| ConfigError::EnvFile(path.display().to_string(), e.to_string()));
    }

    for candidate in [PathBuf::from(".env"), local_env_path()] {
        if candidate.is_file() {
            return dotenv::from_path(&candidate).map_err(|e| {
                ConfigError::EnvFile(candidate.display().to_string(), e.to_string())
            });
        }
    }

    Ok(())
}

fn local_env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("statsify/.env");
    path
}
