use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

pub const DEFAULT_DISPLAY_NAME: &str = "Unknown User";
pub const DEFAULT_EMAIL: &str = "No email available";
pub const DEFAULT_PROFILE_IMAGE: &str = "/default-profile-pic.png";
pub const DEFAULT_ARTIST_IMAGE: &str = "/default-artist-pic.png";

/// Treats an explicit JSON `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Token endpoint response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    #[serde(default, deserialize_with = "null_as_default")]
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
    #[serde(default)]
    pub expires_in: Option<u64>,
    #[serde(default)]
    pub token_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Followers {
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total: u64,
}

/// Raw `/me` payload; every field may be absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileResponse {
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<Image>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub display_name: String,
    pub email: String,
    pub image_url: String,
}

impl From<ProfileResponse> for UserProfile {
    fn from(raw: ProfileResponse) -> Self {
        UserProfile {
            display_name: raw
                .display_name
                .unwrap_or_else(|| DEFAULT_DISPLAY_NAME.to_string()),
            email: raw.email.unwrap_or_else(|| DEFAULT_EMAIL.to_string()),
            image_url: raw
                .images
                .into_iter()
                .next()
                .map(|image| image.url)
                .filter(|url| !url.is_empty())
                .unwrap_or_else(|| DEFAULT_PROFILE_IMAGE.to_string()),
        }
    }
}

/// Artist as returned by the top artists endpoint.
///
/// Only the fields the pages read are typed. A missing or `null` typed field
/// comes back as an empty string or list; everything else (followers,
/// popularity, uri, ...) stays in `extra` exactly as Spotify sent it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub genres: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<Image>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Tracks are passed through untouched.
pub type Track = Value;

/// Paging envelope of the top items endpoints. Missing or `null` items are
/// an empty page.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Paging<T> {
    #[serde(default = "Vec::new", deserialize_with = "null_as_default")]
    pub items: Vec<T>,
}

/// Raw `/artists/{id}` payload.
#[derive(Debug, Clone, Deserialize)]
pub struct ArtistResponse {
    #[serde(default)]
    pub followers: Option<Followers>,
    #[serde(default)]
    pub popularity: Option<u32>,
    #[serde(default)]
    pub monthly_listeners: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistDetail {
    pub followers: u64,
    pub popularity: u32,
    pub monthly_listeners: Option<u64>,
}

impl From<ArtistResponse> for ArtistDetail {
    fn from(raw: ArtistResponse) -> Self {
        ArtistDetail {
            followers: raw.followers.map(|f| f.total).unwrap_or_default(),
            popularity: raw.popularity.unwrap_or_default(),
            monthly_listeners: raw.monthly_listeners,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenreRank {
    pub rank: usize,
    pub name: String,
    pub artist_image: String,
}

/// Aggregation window of the top items endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeRange {
    /// Roughly the last 4 weeks.
    #[default]
    ShortTerm,
    /// Roughly the last 6 months.
    MediumTerm,
    /// Several years of data.
    LongTerm,
}

impl TimeRange {
    pub const ALL: [TimeRange; 3] = [
        TimeRange::ShortTerm,
        TimeRange::MediumTerm,
        TimeRange::LongTerm,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeRange::ShortTerm => "short_term",
            TimeRange::MediumTerm => "medium_term",
            TimeRange::LongTerm => "long_term",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeRange::ShortTerm => "Last 4 weeks",
            TimeRange::MediumTerm => "Last 6 months",
            TimeRange::LongTerm => "All time",
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "short_term" => Ok(TimeRange::ShortTerm),
            "medium_term" => Ok(TimeRange::MediumTerm),
            "long_term" => Ok(TimeRange::LongTerm),
            other => Err(format!("unknown time range: {}", other)),
        }
    }
}
