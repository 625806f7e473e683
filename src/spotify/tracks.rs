use super::{MAX_LIMIT, SpotifyClient};
use crate::{
    error::ApiError,
    types::{Paging, TimeRange, Track},
};

impl SpotifyClient {
    /// Retrieves the user's top tracks for a time range.
    ///
    /// Tracks are returned exactly as Spotify sent them. An upstream answer
    /// without items is an empty list, not an error.
    ///
    /// # Arguments
    ///
    /// * `token` - Access token stored in the session
    /// * `time_range` - Aggregation window
    /// * `limit` - Page size, clamped to 1..=50
    pub async fn fetch_top_tracks(
        &self,
        token: &str,
        time_range: TimeRange,
        limit: u32,
    ) -> Result<Vec<Track>, ApiError> {
        let query = [
            ("time_range", time_range.to_string()),
            ("limit", limit.clamp(1, MAX_LIMIT).to_string()),
        ];
        let page: Option<Paging<Track>> = self.get_json("/me/top/tracks", token, &query).await?;
        Ok(page.map(|p| p.items).unwrap_or_default())
    }
}
