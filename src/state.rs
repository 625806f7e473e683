use std::sync::Arc;

use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;
use sha2::{Digest, Sha512};

use crate::{config::Config, spotify::SpotifyClient, utils, warning};

/// State shared by every route handler. Nothing in here is mutated after
/// startup; cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub spotify: SpotifyClient,
    key: Key,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let secret = match &config.session_secret {
            Some(secret) => secret.clone(),
            None => {
                warning!("SESSION_SECRET is not set, sessions will not survive a restart");
                utils::generate_session_secret()
            }
        };

        let config = Arc::new(config);
        AppState {
            spotify: SpotifyClient::new(Arc::clone(&config)),
            key: derive_key(&secret),
            config,
        }
    }
}

/// Stretches an arbitrary secret to the 64 bytes a cookie [`Key`] needs.
pub fn derive_key(secret: &str) -> Key {
    let digest = Sha512::digest(secret.as_bytes());
    Key::from(digest.as_slice())
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.key.clone()
    }
}
