use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use axum_extra::extract::SignedCookieJar;
use serde_json::json;

use super::redirect;
use crate::{
    session,
    spotify::MAX_LIMIT,
    state::AppState,
    types::TimeRange,
    views, warning,
};

/// Page routes fall back to the short term window on a missing or unknown
/// `time_range`.
fn page_time_range(params: &HashMap<String, String>) -> TimeRange {
    params
        .get("time_range")
        .and_then(|raw| raw.parse().ok())
        .unwrap_or_default()
}

fn json_error(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

pub async fn top_artists(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
    jar: SignedCookieJar,
) -> Response {
    let session = session::get(&jar);
    let Some(token) = session.access_token() else {
        return redirect("/");
    };

    let time_range = page_time_range(&params);
    match state
        .spotify
        .fetch_top_artists(token, time_range, MAX_LIMIT)
        .await
    {
        Ok(artists) => views::top_artists(&artists, time_range).into_response(),
        Err(e) => {
            warning!("Error fetching top artists: {}", e);
            redirect("/login")
        }
    }
}

pub async fn top_tracks(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
    jar: SignedCookieJar,
) -> Response {
    let session = session::get(&jar);
    let Some(token) = session.access_token() else {
        return redirect("/");
    };

    let time_range = page_time_range(&params);
    match state
        .spotify
        .fetch_top_tracks(token, time_range, MAX_LIMIT)
        .await
    {
        Ok(tracks) => views::top_tracks(&tracks, time_range).into_response(),
        Err(e) => {
            warning!("Error fetching top tracks: {}", e);
            redirect("/login")
        }
    }
}

pub async fn top_genres(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
    jar: SignedCookieJar,
) -> Response {
    let session = session::get(&jar);
    let Some(token) = session.access_token() else {
        return redirect("/");
    };

    let time_range = page_time_range(&params);
    match state.spotify.fetch_top_genres(token, time_range).await {
        Ok(genres) => views::top_genres(&genres, time_range).into_response(),
        Err(e) => {
            warning!("Error fetching top genres: {}", e);
            redirect("/login")
        }
    }
}

/// JSON variant of the top artists list, used by the time range switcher.
///
/// Answers 401 before touching Spotify when the session has no token.
pub async fn top_artists_data(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
    jar: SignedCookieJar,
) -> Response {
    let session = session::get(&jar);
    let Some(token) = session.access_token() else {
        return json_error(StatusCode::UNAUTHORIZED, "Unauthorized");
    };

    let time_range = match params.get("time_range").map(|raw| raw.parse::<TimeRange>()) {
        None => TimeRange::default(),
        Some(Ok(time_range)) => time_range,
        Some(Err(e)) => {
            warning!("Rejected top artists request: {}", e);
            return json_error(StatusCode::BAD_REQUEST, "Invalid time_range");
        }
    };

    match state
        .spotify
        .fetch_top_artists(token, time_range, MAX_LIMIT)
        .await
    {
        Ok(artists) => Json(artists).into_response(),
        Err(e) => {
            warning!("Error fetching top artists data: {}", e);
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch top artists")
        }
    }
}
