use std::collections::HashMap;

use rand::{Rng, distr::Alphanumeric};

use crate::types::{Artist, DEFAULT_ARTIST_IMAGE, GenreRank};

/// Upper bound on the number of ranked genres.
pub const MAX_GENRES: usize = 50;

pub fn generate_session_secret() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(64)
        .map(char::from)
        .collect()
}

/// Ranks genres by how often they appear across `artists`.
///
/// Every (artist, genre) occurrence counts, including a genre an artist lists
/// twice. The representative image of a genre is the second image of the
/// first artist it was seen on, or [`DEFAULT_ARTIST_IMAGE`] when that artist
/// has fewer than two images or that image has no URL. Equal counts keep
/// first-seen order. At most [`MAX_GENRES`] entries are returned, ranked
/// from 1.
pub fn rank_genres(artists: &[Artist]) -> Vec<GenreRank> {
    // (name, count, image) in first-seen order
    let mut tally: Vec<(&str, usize, &str)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for artist in artists {
        for genre in &artist.genres {
            match index.get(genre.as_str()) {
                Some(&i) => tally[i].1 += 1,
                None => {
                    let image = artist
                        .images
                        .get(1)
                        .map(|image| image.url.as_str())
                        .filter(|url| !url.is_empty())
                        .unwrap_or(DEFAULT_ARTIST_IMAGE);
                    index.insert(genre.as_str(), tally.len());
                    tally.push((genre.as_str(), 1, image));
                }
            }
        }
    }

    // sort_by is stable, ties stay in first-seen order
    tally.sort_by(|a, b| b.1.cmp(&a.1));

    tally
        .into_iter()
        .take(MAX_GENRES)
        .enumerate()
        .map(|(i, (name, _, image))| GenreRank {
            rank: i + 1,
            name: name.to_string(),
            artist_image: image.to_string(),
        })
        .collect()
}
