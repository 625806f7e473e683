use super::{MAX_LIMIT, SpotifyClient};
use crate::{
    error::ApiError,
    types::{Artist, ArtistDetail, ArtistResponse, GenreRank, Paging, TimeRange},
    utils,
};

impl SpotifyClient {
    /// Retrieves the user's top artists for a time range.
    ///
    /// # Arguments
    ///
    /// * `token` - Access token stored in the session
    /// * `time_range` - Aggregation window (short, medium or long term)
    /// * `limit` - Page size, clamped to 1..=50
    ///
    /// # Returns
    ///
    /// - `Ok(Vec<Artist>)` - Artists in upstream order; empty when Spotify
    ///   has no data for the window
    /// - `Err(ApiError)` - The request failed
    ///
    /// # Example
    ///
    /// ```
    /// let artists = client
    ///     .fetch_top_artists(token, TimeRange::MediumTerm, 50)
    ///     .await?;
    /// println!("Top artist: {}", artists[0].name);
    /// ```
    pub async fn fetch_top_artists(
        &self,
        token: &str,
        time_range: TimeRange,
        limit: u32,
    ) -> Result<Vec<Artist>, ApiError> {
        let query = [
            ("time_range", time_range.to_string()),
            ("limit", limit.clamp(1, MAX_LIMIT).to_string()),
        ];
        let page: Option<Paging<Artist>> = self.get_json("/me/top/artists", token, &query).await?;
        Ok(page.map(|p| p.items).unwrap_or_default())
    }

    /// Retrieves follower count and popularity of a single artist.
    ///
    /// Not used by any route at the moment.
    pub async fn fetch_artist_detail(
        &self,
        token: &str,
        artist_id: &str,
    ) -> Result<ArtistDetail, ApiError> {
        let path = format!("/artists/{}", artist_id);
        let raw: Option<ArtistResponse> = self.get_json(&path, token, &[]).await?;
        raw.map(ArtistDetail::from).ok_or(ApiError::EmptyResponse)
    }

    /// Top genres derived from the top 50 artists of `time_range`.
    ///
    /// Fails exactly when the artist request fails.
    pub async fn fetch_top_genres(
        &self,
        token: &str,
        time_range: TimeRange,
    ) -> Result<Vec<GenreRank>, ApiError> {
        let artists = self.fetch_top_artists(token, time_range, MAX_LIMIT).await?;
        Ok(utils::rank_genres(&artists))
    }
}
