//! Conversion of Google Maps response types into domain types.

use midway_core::{CandidatePlace, Coordinate, Location};

use crate::provider::PlaceDetails;
use crate::types::{DetailsResult, GeocodeResult, PlaceResult};

/// Name used when the provider omits one.
pub const UNKNOWN_NAME: &str = "Unknown";
/// Address used when the provider omits one.
pub const UNKNOWN_ADDRESS: &str = "Address not available";

#[must_use]
pub fn normalize_geocode(result: &GeocodeResult) -> Location {
    let point = result.geometry.location;
    Location::new(point.lat, point.lng, result.formatted_address.clone())
}

/// Converts a text-search hit into a [`CandidatePlace`]. Opening hours and
/// photos are left empty; they come from details enrichment.
#[must_use]
pub fn normalize_place(result: PlaceResult) -> CandidatePlace {
    let point = result.geometry.location;
    CandidatePlace {
        name: result.name.unwrap_or_else(|| UNKNOWN_NAME.to_string()),
        place_id: result.place_id,
        address: result
            .formatted_address
            .unwrap_or_else(|| UNKNOWN_ADDRESS.to_string()),
        rating: result.rating,
        price_level: result.price_level,
        opening_hours: None,
        photos: Vec::new(),
        types: result.types,
        location: Coordinate::new(point.lat, point.lng),
    }
}

#[must_use]
pub fn normalize_details(result: DetailsResult) -> PlaceDetails {
    PlaceDetails {
        opening_hours: result.opening_hours,
        photos: result
            .photos
            .into_iter()
            .map(|p| p.photo_reference)
            .collect(),
    }
}
