//! # API Module
//!
//! Route handlers for Statsify. Every handler rebuilds the session from the
//! signed cookie, talks to Spotify through the shared
//! [`SpotifyClient`](crate::spotify::SpotifyClient), and answers with a page,
//! a redirect or JSON.
//!
//! ## Endpoints
//!
//! ### Authentication
//!
//! - [`login`] - Redirects to the Spotify authorization page
//! - [`callback`] - Exchanges the authorization code and stores the tokens
//! - [`logout`] - Clears the session; safe to call repeatedly
//!
//! ### Pages
//!
//! - [`home`] - Landing page
//! - [`stats`] - Profile of the signed-in user
//! - [`top_artists`], [`top_tracks`], [`top_genres`] - Ranked lists
//!
//! ### Data
//!
//! - [`top_artists_data`] - Top artists as a JSON array
//! - [`health`] - Status and version for monitoring
//!
//! ## Session States
//!
//! ```text
//! Anonymous ──/callback ok──▶ Authenticated ──401 from Spotify──▶ Invalid
//!     ▲                            │                                 │
//!     └────────── /logout ─────────┴────── session cleared ──────────┘
//! ```
//!
//! Without a token, page routes redirect to `/` and the data route answers
//! 401. With a token:
//! - a 401 on `/stats` clears the session and redirects to `/`
//! - any other failure on `/stats` renders the "no data" page
//! - a failure on a list page redirects to `/login`
//! - a failure on the data route answers 500
//!
//! Every redirect is a `302 Found`.

mod auth;
mod pages;
mod top;

use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

pub use auth::{callback, login, logout};
pub use pages::{health, home, stats};
pub use top::{top_artists, top_artists_data, top_genres, top_tracks};

/// `302 Found` pointing at `to`.
pub(crate) fn redirect(to: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, to.to_string())]).into_response()
}
