use super::SpotifyClient;
use crate::{
    error::ApiError,
    types::{ProfileResponse, UserProfile},
};

impl SpotifyClient {
    /// Retrieves the current user's profile.
    ///
    /// Missing fields fall back to `"Unknown User"`, `"No email available"`
    /// and the default profile picture; an empty body yields all defaults.
    ///
    /// # Arguments
    ///
    /// * `token` - Access token stored in the session
    ///
    /// # Returns
    ///
    /// - `Ok(UserProfile)` - Profile with defaults applied
    /// - `Err(ApiError::InvalidToken)` - Spotify rejected the token (401)
    /// - `Err(_)` - Any other failure
    pub async fn fetch_profile(&self, token: &str) -> Result<UserProfile, ApiError> {
        let raw: Option<ProfileResponse> = self.get_json("/me", token, &[]).await?;
        Ok(raw.unwrap_or_default().into())
    }
}
