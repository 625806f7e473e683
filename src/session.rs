//! Signed-cookie session holding the user's Spotify tokens.
//!
//! The session never lives on the server. Each request rebuilds a [`Session`]
//! from the signed cookie, handlers return the updated jar, and axum writes
//! the new `Set-Cookie` header. A missing, tampered or undecodable cookie is
//! simply an empty session.

use axum_extra::extract::{
    SignedCookieJar,
    cookie::{Cookie, SameSite},
};
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use serde::{Deserialize, Serialize};
use time::Duration;

pub const SESSION_COOKIE: &str = "spotify-auth-session";
pub const SESSION_MAX_AGE: Duration = Duration::hours(24);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
}

impl Session {
    /// Access token, if one is stored and non-empty.
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref().filter(|t| !t.is_empty())
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token().is_some()
    }

    /// Cookie payload: base64 of the JSON form, so the value carries no
    /// characters reserved by the cookie syntax.
    pub fn encode(&self) -> String {
        // Serialising two optional strings cannot fail.
        let json = serde_json::to_vec(self).unwrap_or_default();
        URL_SAFE_NO_PAD.encode(json)
    }

    pub fn decode(payload: &str) -> Option<Session> {
        let json = URL_SAFE_NO_PAD.decode(payload).ok()?;
        serde_json::from_slice(&json).ok()
    }
}

fn session_cookie(value: String, max_age: Duration) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(max_age)
        .build()
}

/// Reads the session from the request cookies.
pub fn get(jar: &SignedCookieJar) -> Session {
    jar.get(SESSION_COOKIE)
        .and_then(|cookie| Session::decode(cookie.value()))
        .unwrap_or_default()
}

/// Stores freshly obtained tokens, replacing any previous session.
pub fn set(
    jar: SignedCookieJar,
    access_token: String,
    refresh_token: Option<String>,
) -> SignedCookieJar {
    let session = Session {
        access_token: Some(access_token),
        refresh_token,
    };
    jar.add(session_cookie(session.encode(), SESSION_MAX_AGE))
}

/// Invalidates the session by overwriting the cookie with an empty, already
/// expired payload. The header is emitted even when no cookie was sent.
pub fn clear(jar: SignedCookieJar) -> SignedCookieJar {
    jar.add(session_cookie(String::new(), Duration::ZERO))
}
