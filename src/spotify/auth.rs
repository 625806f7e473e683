use reqwest::Url;

use super::{SpotifyClient, check_status, parse_body};
use crate::{error::ApiError, types::Token};

impl SpotifyClient {
    /// Builds the Spotify authorization URL the `/login` route redirects to.
    ///
    /// The URL carries the client ID, the registered redirect URI and the
    /// configured scopes (space separated). `show_dialog=true` makes Spotify
    /// ask for consent every time, so a user can switch accounts after
    /// logging out.
    ///
    /// # Example
    ///
    /// ```
    /// let url = client.authorize_url();
    /// // https://accounts.spotify.com/authorize?response_type=code&client_id=...
    /// ```
    pub fn authorize_url(&self) -> Url {
        let mut url = self.config.auth_url.clone();
        url.query_pairs_mut()
            .append_pair("response_type", "code")
            .append_pair("client_id", &self.config.client_id)
            .append_pair("redirect_uri", &self.config.redirect_uri)
            .append_pair("scope", &self.config.scopes.join(" "))
            .append_pair("show_dialog", "true");
        url
    }

    /// Exchanges an authorization code for an access token.
    ///
    /// Completes the OAuth 2.0 authorization-code flow by posting the code
    /// received on `/callback` to the token endpoint. The client credentials
    /// are sent with HTTP Basic authentication.
    ///
    /// # Arguments
    ///
    /// * `code` - Authorization code received from the OAuth callback
    ///
    /// # Returns
    ///
    /// Returns a `Result` containing:
    /// - `Ok(Token)` - Access token and, usually, a refresh token
    /// - `Err(ApiError)` - Rejected code, network error, or a response
    ///   without an `access_token`
    ///
    /// # Security Note
    ///
    /// The authorization code is single-use and expires quickly (typically
    /// 10 minutes). The exchange should happen immediately after receiving
    /// the code.
    pub async fn exchange_code(&self, code: &str) -> Result<Token, ApiError> {
        let response = self
            .http
            .post(self.config.token_url.clone())
            .basic_auth(&self.config.client_id, Some(&self.config.client_secret))
            .form(&[
                ("grant_type", "authorization_code"),
                ("code", code),
                ("redirect_uri", self.config.redirect_uri.as_str()),
            ])
            .send()
            .await?;

        let token: Token = parse_body(check_status(response)?)
            .await?
            .ok_or(ApiError::EmptyResponse)?;

        if token.access_token.is_empty() {
            return Err(ApiError::OAuth("token response without access_token".to_string()));
        }

        Ok(token)
    }
}
