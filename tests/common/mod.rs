//! In-process stand-in for the Spotify accounts service and Web API.
//!
//! The access token a request carries selects the fake's behaviour, and the
//! authorization code posted to `/api/token` selects which token is issued.
#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
};

use axum::{
    Form, Router,
    body::Body,
    extract::{Path, Query, State},
    http::{HeaderMap, Request, StatusCode, header},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
};
use reqwest::Url;
use serde_json::{Value, json};
use statsify::{
    config::{Config, DEFAULT_SCOPES},
    server::make_app,
    session::SESSION_COOKIE,
    state::AppState,
};
use tokio::net::TcpListener;
use tower::ServiceExt;

pub const VALID_TOKEN: &str = "valid-token";
pub const EXPIRED_TOKEN: &str = "expired-token";
pub const BROKEN_TOKEN: &str = "broken-token";
pub const EMPTY_TOKEN: &str = "empty-token";
pub const MALFORMED_TOKEN: &str = "malformed-token";

pub const GOOD_CODE: &str = "good-code";
pub const EXPIRED_CODE: &str = "expired-code";
pub const BROKEN_CODE: &str = "broken-code";
pub const EMPTY_CODE: &str = "empty-code";
pub const MALFORMED_CODE: &str = "malformed-code";
/// Answered with a 200 token response that has no `access_token`.
pub const NO_ACCESS_TOKEN_CODE: &str = "no-access-token-code";

pub const REFRESH_TOKEN: &str = "refresh-token";

pub struct FakeSpotify {
    pub base_url: String,
    calls: Arc<AtomicUsize>,
}

impl FakeSpotify {
    /// Spawns the fake on an ephemeral port of the current runtime.
    pub async fn start() -> Self {
        let calls = Arc::new(AtomicUsize::new(0));
        let app = Router::new()
            .route("/api/token", post(token))
            .route("/v1/me", get(me))
            .route("/v1/me/top/artists", get(top_artists))
            .route("/v1/me/top/tracks", get(top_tracks))
            .route("/v1/artists/{id}", get(artist))
            .with_state(Arc::clone(&calls));

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        FakeSpotify {
            base_url: format!("http://{}", addr),
            calls,
        }
    }

    /// Number of Web API requests served so far (token exchanges excluded).
    pub fn api_calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn config(&self) -> Config {
        Config {
            client_id: "client-id".to_string(),
            client_secret: "client-secret".to_string(),
            redirect_uri: "http://localhost:3000/callback".to_string(),
            scopes: DEFAULT_SCOPES.iter().map(|s| s.to_string()).collect(),
            auth_url: Url::parse(&format!("{}/authorize", self.base_url)).unwrap(),
            token_url: Url::parse(&format!("{}/api/token", self.base_url)).unwrap(),
            api_url: format!("{}/v1", self.base_url),
            server_address: "127.0.0.1:0".parse().unwrap(),
            session_secret: Some("integration-test-secret".to_string()),
        }
    }

    pub fn app(&self) -> Router {
        make_app(AppState::new(self.config()))
    }
}

fn bearer(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::to_string)
}

/// Shared token handling of the Web API routes. `Ok` carries the token when
/// the request should be answered with data.
fn authorize(headers: &HeaderMap, calls: &AtomicUsize) -> Result<String, Response> {
    calls.fetch_add(1, Ordering::SeqCst);
    match bearer(headers).as_deref() {
        Some(VALID_TOKEN) => Ok(VALID_TOKEN.to_string()),
        Some(EMPTY_TOKEN) => Ok(EMPTY_TOKEN.to_string()),
        Some(MALFORMED_TOKEN) => Ok(MALFORMED_TOKEN.to_string()),
        Some(BROKEN_TOKEN) => Err(StatusCode::INTERNAL_SERVER_ERROR.into_response()),
        _ => Err((
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": { "status": 401, "message": "The access token expired" } })),
        )
            .into_response()),
    }
}

async fn token(headers: HeaderMap, Form(form): Form<HashMap<String, String>>) -> Response {
    let basic = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("Basic "));
    if !basic || form.get("grant_type").map(String::as_str) != Some("authorization_code") {
        return (StatusCode::BAD_REQUEST, Json(json!({ "error": "invalid_client" }))).into_response();
    }

    let access_token = match form.get("code").map(String::as_str) {
        Some(GOOD_CODE) => VALID_TOKEN,
        Some(EXPIRED_CODE) => EXPIRED_TOKEN,
        Some(BROKEN_CODE) => BROKEN_TOKEN,
        Some(EMPTY_CODE) => EMPTY_TOKEN,
        Some(MALFORMED_CODE) => MALFORMED_TOKEN,
        Some(NO_ACCESS_TOKEN_CODE) => {
            return Json(json!({ "token_type": "Bearer", "expires_in": 3600 })).into_response();
        }
        _ => {
            return (StatusCode::BAD_REQUEST, Json(json!({ "error": "invalid_grant" })))
                .into_response();
        }
    };

    Json(json!({
        "access_token": access_token,
        "token_type": "Bearer",
        "scope": "user-read-email user-top-read",
        "expires_in": 3600,
        "refresh_token": REFRESH_TOKEN,
    }))
    .into_response()
}

async fn me(State(calls): State<Arc<AtomicUsize>>, headers: HeaderMap) -> Response {
    match authorize(&headers, &calls) {
        Ok(token) if token == EMPTY_TOKEN => StatusCode::OK.into_response(),
        Ok(token) if token == MALFORMED_TOKEN => {
            Json(json!({ "display_name": null, "email": null, "images": [{ "width": 64 }] }))
                .into_response()
        }
        Ok(_) => Json(json!({
            "display_name": "Test Listener",
            "email": "listener@example.com",
            "images": [{ "url": "https://i.scdn.co/image/me", "width": 300, "height": 300 }],
        }))
        .into_response(),
        Err(response) => response,
    }
}

fn image(url: &str) -> Value {
    json!({ "url": url, "width": 640, "height": 640 })
}

pub fn short_term_artists() -> Value {
    json!([
        {
            "id": "a1",
            "name": "Artist One",
            "genres": ["indie pop", "dream pop"],
            "images": [image("a1-640"), image("a1-320"), image("a1-160")],
            "followers": { "href": null, "total": 1000 },
            "popularity": 70,
            "type": "artist",
            "uri": "spotify:artist:a1",
        },
        {
            "id": "a2",
            "name": "Artist Two",
            "genres": ["dream pop", "shoegaze"],
            "images": [image("a2-640")],
            "type": "artist",
            "uri": "spotify:artist:a2",
        },
        {
            "id": "a3",
            "name": "Artist Three",
            "genres": ["shoegaze", "dream pop"],
            "images": null,
            "type": "artist",
            "uri": "spotify:artist:a3",
        },
    ])
}

/// Successful but sloppy payload: nulls and missing fields everywhere.
pub fn malformed_artists() -> Value {
    json!([
        {
            "id": null,
            "name": null,
            "genres": ["noise"],
            "images": [{ "width": 640 }, { "url": null, "height": 320 }],
            "popularity": null,
        },
        {
            "id": "ok",
            "name": "Tidy Artist",
            "genres": null,
            "images": [{ "url": "ok-640" }, { "url": "ok-320" }],
        },
    ])
}

pub fn medium_term_artists() -> Value {
    let artists: Vec<Value> = (1..=4)
        .map(|i| {
            json!({
                "id": format!("m{}", i),
                "name": format!("Medium Artist {}", i),
                "genres": [format!("genre {}", i)],
                "images": [image("m-640"), image("m-320")],
            })
        })
        .collect();
    Value::Array(artists)
}

async fn top_artists(
    State(calls): State<Arc<AtomicUsize>>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    let token = match authorize(&headers, &calls) {
        Ok(token) => token,
        Err(response) => return response,
    };
    if params.get("limit").map(String::as_str) != Some("50") {
        return StatusCode::BAD_REQUEST.into_response();
    }
    if token == MALFORMED_TOKEN {
        // short term gets broken artists, every other window a null page
        return match params.get("time_range").map(String::as_str) {
            Some("short_term") => Json(json!({ "items": malformed_artists() })).into_response(),
            _ => Json(json!({ "items": null })).into_response(),
        };
    }

    let items = match params.get("time_range").map(String::as_str) {
        Some("short_term") => short_term_artists(),
        Some("medium_term") => medium_term_artists(),
        Some("long_term") => return Json(json!({ "href": null, "total": 0 })).into_response(),
        _ => return StatusCode::BAD_REQUEST.into_response(),
    };
    Json(json!({ "items": items, "total": items.as_array().map(Vec::len) })).into_response()
}

async fn top_tracks(
    State(calls): State<Arc<AtomicUsize>>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    let token = match authorize(&headers, &calls) {
        Ok(token) => token,
        Err(response) => return response,
    };
    if params.get("time_range").is_none() {
        return StatusCode::BAD_REQUEST.into_response();
    }
    if token == MALFORMED_TOKEN {
        return Json(json!({ "items": null })).into_response();
    }

    Json(json!({
        "items": [
            { "id": "t1", "name": "First Song", "artists": [{ "name": "Artist One" }] },
            { "id": "t2", "name": "Second Song", "artists": [{ "name": "Artist Two" }, { "name": "Artist Three" }] },
        ]
    }))
    .into_response()
}

async fn artist(
    State(calls): State<Arc<AtomicUsize>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    if let Err(response) = authorize(&headers, &calls) {
        return response;
    }
    if id != "known" {
        return (StatusCode::NOT_FOUND, Json(json!({ "error": "not found" }))).into_response();
    }

    Json(json!({
        "id": "known",
        "name": "Known Artist",
        "followers": { "href": null, "total": 1234 },
        "popularity": 77,
    }))
    .into_response()
}

pub async fn send(app: &Router, uri: &str, cookie: Option<&str>) -> Response {
    let mut request = Request::builder().uri(uri);
    if let Some(cookie) = cookie {
        request = request.header(header::COOKIE, cookie);
    }
    app.clone()
        .oneshot(request.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub fn location(response: &Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

/// `name=value` part of the session `Set-Cookie` header, ready to be sent
/// back as a `Cookie` header.
pub fn session_cookie(response: &Response) -> Option<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find(|v| v.starts_with(&format!("{}=", SESSION_COOKIE)))
        .and_then(|v| v.split(';').next())
        .map(str::to_string)
}

pub fn set_cookie_header(response: &Response) -> Option<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find(|v| v.starts_with(&format!("{}=", SESSION_COOKIE)))
        .map(str::to_string)
}

pub async fn body_string(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Signs in through `/callback` and returns the session cookie.
pub async fn sign_in(app: &Router, code: &str) -> String {
    let response = send(app, &format!("/callback?code={}", code), None).await;
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), "/stats");
    session_cookie(&response).expect("callback should set the session cookie")
}
