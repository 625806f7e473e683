use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    response::Response,
};
use axum_extra::extract::SignedCookieJar;

use super::redirect;
use crate::{info, session, state::AppState, success, warning};

pub async fn login(State(state): State<AppState>) -> Response {
    info!("Redirecting to Spotify authorization");
    redirect(state.spotify.authorize_url().as_str())
}

pub async fn callback(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
    jar: SignedCookieJar,
) -> (SignedCookieJar, Response) {
    if let Some(error) = params.get("error") {
        warning!("Spotify authorization was not granted: {}", error);
        return (jar, redirect("/"));
    }

    let Some(code) = params.get("code") else {
        warning!("Callback reached without an authorization code");
        return (jar, redirect("/"));
    };

    match state.spotify.exchange_code(code).await {
        Ok(token) => {
            success!("Access token stored in session");
            let jar = session::set(jar, token.access_token, token.refresh_token);
            (jar, redirect("/stats"))
        }
        Err(e) => {
            warning!("Error getting access token: {}", e);
            (jar, redirect("/"))
        }
    }
}

pub async fn logout(jar: SignedCookieJar) -> (SignedCookieJar, Response) {
    (session::clear(jar), redirect("/"))
}
