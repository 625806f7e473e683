//! Bare-bones HTML pages for the page routes.

use axum::response::Html;

use crate::types::{Artist, GenreRank, TimeRange, Track, UserProfile};

/// Escapes text for use in HTML content and double-quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

fn page(title: &str, body: &str) -> Html<String> {
    Html(format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title} | Statsify</title>\n</head>\n<body>\n\
         <nav><a href=\"/stats\">Profile</a> | <a href=\"/top-artists\">Top artists</a> | \
         <a href=\"/top-tracks\">Top tracks</a> | <a href=\"/top-genres\">Top genres</a> | \
         <a href=\"/logout\">Log out</a></nav>\n{body}\n</body>\n</html>\n",
        title = escape(title),
        body = body,
    ))
}

fn time_range_links(path: &str, current: TimeRange) -> String {
    let links: Vec<String> = TimeRange::ALL
        .iter()
        .map(|range| {
            if *range == current {
                format!("<strong>{}</strong>", range.label())
            } else {
                format!(
                    "<a href=\"{}?time_range={}\">{}</a>",
                    path,
                    range,
                    range.label()
                )
            }
        })
        .collect();
    format!("<p>{}</p>", links.join(" | "))
}

pub fn home(signed_in: bool) -> Html<String> {
    let action = if signed_in {
        "<a href=\"/stats\">See your stats</a>"
    } else {
        "<a href=\"/login\">Log in with Spotify</a>"
    };
    page(
        "Home",
        &format!("<h1>Statsify</h1>\n<p>Your Spotify listening, at a glance.</p>\n<p>{action}</p>"),
    )
}

pub fn stats(profile: &UserProfile) -> Html<String> {
    page(
        "Stats",
        &format!(
            "<h1>{name}</h1>\n<img src=\"{image}\" alt=\"Profile picture\" width=\"120\">\n<p>{email}</p>",
            name = escape(&profile.display_name),
            image = escape(&profile.image_url),
            email = escape(&profile.email),
        ),
    )
}

pub fn stats_no_data() -> Html<String> {
    page(
        "Stats",
        "<h1>No data available</h1>\n<p>Spotify did not return your profile. Try again later.</p>",
    )
}

fn empty_state(items: usize) -> &'static str {
    if items == 0 {
        "<p>Nothing here yet for this period.</p>"
    } else {
        ""
    }
}

pub fn top_artists(artists: &[Artist], time_range: TimeRange) -> Html<String> {
    let items: String = artists
        .iter()
        .map(|artist| format!("<li>{}</li>\n", escape(&artist.name)))
        .collect();
    page(
        "Top artists",
        &format!(
            "<h1>Top artists</h1>\n{links}\n{empty}<ol id=\"top-artists-list\">\n{items}</ol>",
            links = time_range_links("/top-artists", time_range),
            empty = empty_state(artists.len()),
        ),
    )
}

fn track_line(track: &Track) -> String {
    let name = track["name"].as_str().unwrap_or("Unknown track");
    let artists: Vec<&str> = track["artists"]
        .as_array()
        .map(|artists| artists.iter().filter_map(|a| a["name"].as_str()).collect())
        .unwrap_or_default();

    if artists.is_empty() {
        escape(name)
    } else {
        format!("{} - {}", escape(name), escape(&artists.join(", ")))
    }
}

pub fn top_tracks(tracks: &[Track], time_range: TimeRange) -> Html<String> {
    let items: String = tracks
        .iter()
        .map(|track| format!("<li>{}</li>\n", track_line(track)))
        .collect();
    page(
        "Top tracks",
        &format!(
            "<h1>Top tracks</h1>\n{links}\n{empty}<ol>\n{items}</ol>",
            links = time_range_links("/top-tracks", time_range),
            empty = empty_state(tracks.len()),
        ),
    )
}

pub fn top_genres(genres: &[GenreRank], time_range: TimeRange) -> Html<String> {
    let items: String = genres
        .iter()
        .map(|genre| {
            format!(
                "<li value=\"{rank}\"><img src=\"{image}\" alt=\"\" width=\"48\"> {name}</li>\n",
                rank = genre.rank,
                image = escape(&genre.artist_image),
                name = escape(&genre.name),
            )
        })
        .collect();
    page(
        "Top genres",
        &format!(
            "<h1>Top genres</h1>\n{links}\n{empty}<ol>\n{items}</ol>",
            links = time_range_links("/top-genres", time_range),
            empty = empty_state(genres.len()),
        ),
    )
}
