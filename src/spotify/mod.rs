//! # Spotify Integration Module
//!
//! This module is the integration layer between Statsify and Spotify. It
//! holds [`SpotifyClient`], which owns the HTTP client and the immutable
//! configuration, and implements the OAuth authorization-code handshake plus
//! the handful of Web API reads the routes need.
//!
//! ## Architecture
//!
//! ```text
//! Route Handlers (api)
//!          ↓
//! SpotifyClient
//!     ├── Authentication (authorize URL, code exchange)
//!     ├── Profile (GET /me)
//!     ├── Artists (top artists, artist detail, top genres)
//!     └── Tracks (top tracks)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Accounts Service / Web API
//! ```
//!
//! ## Error Handling
//!
//! Every call returns `Result<_, ApiError>`:
//! - **401 Unauthorized** maps to [`ApiError::InvalidToken`], which the
//!   routes answer by clearing the session
//! - **Other statuses** map to [`ApiError::Status`]
//! - **Transport and decoding failures** map to [`ApiError::Request`] and
//!   [`ApiError::Parse`]
//!
//! Missing or `null` fields in a successful payload are defaulted instead of
//! failing the request. An empty body gives a default profile or an empty
//! list; only calls that need a payload report [`ApiError::EmptyResponse`].
//!
//! Nothing is retried and no request timeout is set: a hanging upstream call
//! hangs the request that issued it.
//!
//! ## API Coverage
//!
//! - `POST /api/token` - Authorization code exchange
//! - `GET /me` - Current user's profile
//! - `GET /me/top/artists` - Top artists for a time range
//! - `GET /me/top/tracks` - Top tracks for a time range
//! - `GET /artists/{id}` - Single artist details

mod artists;
mod auth;
mod profile;
mod tracks;

use std::sync::Arc;

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::{config::Config, error::ApiError};

/// Largest page size the top items endpoints accept.
pub const MAX_LIMIT: u32 = 50;

#[derive(Clone)]
pub struct SpotifyClient {
    http: Client,
    config: Arc<Config>,
}

impl SpotifyClient {
    pub fn new(config: Arc<Config>) -> Self {
        SpotifyClient {
            http: Client::new(),
            config,
        }
    }

    /// Performs an authenticated GET against the Web API and decodes the
    /// body. `Ok(None)` means Spotify answered with an empty body.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        token: &str,
        query: &[(&str, String)],
    ) -> Result<Option<T>, ApiError> {
        let url = format!("{}{}", self.config.api_url, path);
        let response = self
            .http
            .get(&url)
            .bearer_auth(token)
            .query(query)
            .send()
            .await?;

        parse_body(check_status(response)?).await
    }
}

fn check_status(response: Response) -> Result<Response, ApiError> {
    match response.status() {
        StatusCode::UNAUTHORIZED => Err(ApiError::InvalidToken),
        status if !status.is_success() => Err(ApiError::Status(status)),
        _ => Ok(response),
    }
}

async fn parse_body<T: DeserializeOwned>(response: Response) -> Result<Option<T>, ApiError> {
    let body = response.bytes().await?;
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    Ok(Some(serde_json::from_slice(&body)?))
}
