use std::net::SocketAddr;

use axum::{Router, routing::get};
use tokio::net::TcpListener;

use crate::{Res, api, state::AppState};

pub fn make_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(api::home))
        .route("/health", get(api::health))
        .route("/login", get(api::login))
        .route("/callback", get(api::callback))
        .route("/logout", get(api::logout))
        .route("/stats", get(api::stats))
        .route("/top-artists", get(api::top_artists))
        .route("/top-tracks", get(api::top_tracks))
        .route("/top-genres", get(api::top_genres))
        .route("/top-artists-data", get(api::top_artists_data))
        .with_state(state)
}

pub async fn bind(addr: SocketAddr) -> Res<TcpListener> {
    Ok(TcpListener::bind(addr).await?)
}

pub async fn serve(listener: TcpListener, state: AppState) -> Res<()> {
    axum::serve(listener, make_app(state)).await?;
    Ok(())
}
