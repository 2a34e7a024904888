//! Google Maps web-service response types.
//!
//! Every endpoint wraps its payload in an envelope with a `status` string
//! (`"OK"`, `"ZERO_RESULTS"`, or an error code) and an optional
//! `error_message`. Only the fields the pipeline uses are modelled.

use serde::Deserialize;

use midway_core::OpeningHours;

/// Status for a successful call with data.
pub const STATUS_OK: &str = "OK";
/// Status for a successful call that matched nothing.
pub const STATUS_ZERO_RESULTS: &str = "ZERO_RESULTS";

// ---------------------------------------------------------------------------
// geocode/json
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct GeocodeResponse {
    pub status: String,
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
pub struct GeocodeResult {
    pub formatted_address: String,
    pub geometry: Geometry,
}

#[derive(Debug, Deserialize)]
pub struct Geometry {
    pub location: LatLng,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

// ---------------------------------------------------------------------------
// place/textsearch/json
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct TextSearchResponse {
    pub status: String,
    #[serde(default)]
    pub results: Vec<PlaceResult>,
}

/// One text-search hit.
#[derive(Debug, Deserialize)]
pub struct PlaceResult {
    pub place_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub formatted_address: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub price_level: Option<u8>,
    #[serde(default)]
    pub types: Vec<String>,
    pub geometry: Geometry,
}

// ---------------------------------------------------------------------------
// place/details/json
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct DetailsResponse {
    pub status: String,
    #[serde(default)]
    pub result: Option<DetailsResult>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DetailsResult {
    #[serde(default)]
    pub opening_hours: Option<OpeningHours>,
    #[serde(default)]
    pub photos: Vec<Photo>,
}

#[derive(Debug, Deserialize)]
pub struct Photo {
    pub photo_reference: String,
}
