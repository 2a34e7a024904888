//! HTTP client for the Google Maps web services.
//!
//! Wraps `reqwest` with Maps-specific envelope handling and typed response
//! deserialization. Every endpoint checks the `"status"` field: `OK` carries
//! data, `ZERO_RESULTS` is an empty answer, and anything else surfaces as
//! [`MapsError::Api`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};

use midway_core::{CandidatePlace, Coordinate, Location};

use crate::error::MapsError;
use crate::normalize::{normalize_details, normalize_geocode, normalize_place};
use crate::provider::{Geocoder, PlaceDetails, PlaceSearch};
use crate::types::{
    DetailsResponse, GeocodeResponse, TextSearchResponse, STATUS_OK, STATUS_ZERO_RESULTS,
};

const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/";

const GEOCODE_ENDPOINT: &str = "geocode/json";
const TEXT_SEARCH_ENDPOINT: &str = "place/textsearch/json";
const DETAILS_ENDPOINT: &str = "place/details/json";

/// Client for the Google Maps geocoding and places APIs.
///
/// Use [`GoogleMapsClient::new`] for production or
/// [`GoogleMapsClient::with_base_url`] to point at a mock server in tests.
pub struct GoogleMapsClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl GoogleMapsClient {
    /// Creates a new client pointed at the production Maps API.
    ///
    /// # Errors
    ///
    /// Returns [`MapsError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed.
    pub fn new(api_key: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, MapsError> {
        Self::with_base_url(api_key, timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL.
    ///
    /// # Errors
    ///
    /// Returns [`MapsError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed, or [`MapsError::InvalidBaseUrl`] if `base_url` does
    /// not parse as an absolute URL.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, MapsError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash so endpoint paths join under the base
        // path instead of replacing its last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let parsed = Url::parse(&normalised).map_err(|e| MapsError::InvalidBaseUrl {
            base_url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(MapsError::InvalidBaseUrl {
                base_url: base_url.to_string(),
                reason: "URL cannot be used as a base".to_string(),
            });
        }

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url: parsed,
        })
    }

    /// Builds the request URL for `endpoint` with percent-encoded query
    /// parameters. The API key always comes first.
    fn build_url(&self, endpoint: &str, extra: &[(&str, &str)]) -> Result<Url, MapsError> {
        let mut url = self
            .base_url
            .join(endpoint)
            .map_err(|e| MapsError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: e.to_string(),
            })?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("key", &self.api_key);
            for (k, v) in extra {
                pairs.append_pair(k, v);
            }
        }
        Ok(url)
    }

    /// Sends a GET request, asserts a 2xx HTTP status, and parses the body
    /// as JSON.
    async fn request_json(&self, url: &Url) -> Result<serde_json::Value, MapsError> {
        let response = self.client.get(url.clone()).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| MapsError::Deserialize {
            context: redact_key(url),
            source: e,
        })
    }

    /// Fetches `endpoint`, checks the envelope status and deserializes the
    /// body. Returns `Ok(None)` for `ZERO_RESULTS`.
    async fn fetch<T>(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
        context: &str,
    ) -> Result<Option<T>, MapsError>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = self.build_url(endpoint, params)?;
        tracing::debug!(endpoint, context, "maps request");
        let body = self.request_json(&url).await?;

        if check_status(&body)? == Status::ZeroResults {
            return Ok(None);
        }

        serde_json::from_value(body)
            .map(Some)
            .map_err(|e| MapsError::Deserialize {
                context: context.to_string(),
                source: e,
            })
    }
}

#[async_trait]
impl Geocoder for GoogleMapsClient {
    async fn geocode(&self, name: &str) -> Result<Option<Location>, MapsError> {
        let response: Option<GeocodeResponse> = self
            .fetch(
                GEOCODE_ENDPOINT,
                &[("address", name)],
                &format!("geocode(address={name})"),
            )
            .await?;

        Ok(response
            .and_then(|r| r.results.into_iter().next())
            .map(|first| normalize_geocode(&first)))
    }

    async fn reverse_geocode(&self, coordinate: Coordinate) -> Result<Option<String>, MapsError> {
        let latlng = format_latlng(coordinate);
        let response: Option<GeocodeResponse> = self
            .fetch(
                GEOCODE_ENDPOINT,
                &[("latlng", &latlng)],
                &format!("reverse_geocode(latlng={latlng})"),
            )
            .await?;

        Ok(response
            .and_then(|r| r.results.into_iter().next())
            .map(|first| first.formatted_address))
    }
}

#[async_trait]
impl PlaceSearch for GoogleMapsClient {
    async fn text_search(
        &self,
        query: &str,
        origin: Coordinate,
        radius_meters: u32,
    ) -> Result<Vec<CandidatePlace>, MapsError> {
        let location = format_latlng(origin);
        let radius = radius_meters.to_string();
        let response: Option<TextSearchResponse> = self
            .fetch(
                TEXT_SEARCH_ENDPOINT,
                &[
                    ("query", query),
                    ("location", &location),
                    ("radius", &radius),
                    ("type", "establishment"),
                ],
                &format!("text_search(query={query})"),
            )
            .await?;

        Ok(response
            .map(|r| r.results.into_iter().map(normalize_place).collect())
            .unwrap_or_default())
    }

    async fn details(&self, place_id: &str) -> Result<PlaceDetails, MapsError> {
        let response: Option<DetailsResponse> = self
            .fetch(
                DETAILS_ENDPOINT,
                &[("place_id", place_id), ("fields", "opening_hours,photos")],
                &format!("details(place_id={place_id})"),
            )
            .await?;

        Ok(response
            .and_then(|r| r.result)
            .map(normalize_details)
            .unwrap_or_default())
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Status {
    Ok,
    ZeroResults,
}

/// Reads the envelope `"status"` and turns error statuses into
/// [`MapsError::Api`]. A missing status is treated as an error too.
fn check_status(body: &serde_json::Value) -> Result<Status, MapsError> {
    let status = body
        .get("status")
        .and_then(serde_json::Value::as_str)
        .unwrap_or("MISSING_STATUS");
    match status {
        STATUS_OK => Ok(Status::Ok),
        STATUS_ZERO_RESULTS => Ok(Status::ZeroResults),
        other => Err(MapsError::Api {
            status: other.to_string(),
            message: body
                .get("error_message")
                .and_then(serde_json::Value::as_str)
                .map(str::to_string),
        }),
    }
}

fn format_latlng(coordinate: Coordinate) -> String {
    format!("{},{}", coordinate.lat, coordinate.lng)
}

/// URL rendered without its `key` parameter, for error messages and logs.
fn redact_key(url: &Url) -> String {
    let mut redacted = url.clone();
    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(k, _)| k != "key")
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    redacted.query_pairs_mut().clear().extend_pairs(kept);
    redacted.to_string()
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
