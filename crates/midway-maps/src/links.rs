//! Shareable Google Maps links for a ranked place.

use reqwest::Url;

const DIRECTIONS_BASE: &str = "https://www.google.com/maps/dir/";
const EMBED_BASE: &str = "https://www.google.com/maps/embed/v1/place";

/// Directions link to `place_id`, optionally starting from `origin`.
///
/// Spaces in the origin become `+`, matching the URL Google Maps itself
/// produces for typed-in origins.
#[must_use]
pub fn directions_url(place_id: &str, origin: Option<&str>) -> String {
    match origin.map(str::trim).filter(|o| !o.is_empty()) {
        Some(origin) => format!("{DIRECTIONS_BASE}{}/{place_id}", origin.replace(' ', "+")),
        None => format!("{DIRECTIONS_BASE}{place_id}"),
    }
}

/// Embeddable map URL for `place_id`.
#[must_use]
pub fn embed_url(api_key: &str, place_id: &str) -> String {
    match Url::parse_with_params(EMBED_BASE, &[("key", api_key), ("place_id", place_id)]) {
        Ok(url) => url.to_string(),
        Err(_) => format!("{EMBED_BASE}?key={api_key}&place_id={place_id}"),
    }
}
