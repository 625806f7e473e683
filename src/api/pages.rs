use axum::{
    extract::State,
    response::{Html, IntoResponse, Json, Response},
};
use axum_extra::extract::SignedCookieJar;
use serde_json::{Value, json};

use super::redirect;
use crate::{error::ApiError, info, session, state::AppState, views, warning};

pub async fn home(jar: SignedCookieJar) -> Html<String> {
    views::home(session::get(&jar).is_authenticated())
}

pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

pub async fn stats(State(state): State<AppState>, jar: SignedCookieJar) -> Response {
    let session = session::get(&jar);
    let Some(token) = session.access_token() else {
        info!("No access token in session, redirecting to /");
        return (session::clear(jar), redirect("/")).into_response();
    };

    match state.spotify.fetch_profile(token).await {
        Ok(profile) => views::stats(&profile).into_response(),
        Err(ApiError::InvalidToken) => {
            warning!("Invalid access token, clearing session");
            (session::clear(jar), redirect("/")).into_response()
        }
        Err(e) => {
            warning!("Error fetching user data: {}", e);
            views::stats_no_data().into_response()
        }
    }
}
