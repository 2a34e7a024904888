//! Geometric midpoint of two resolved locations.

use midway_core::{Coordinate, Location};
use midway_maps::Geocoder;

/// Arithmetic mean of the two coordinates. Not a great-circle midpoint.
#[must_use]
pub fn midpoint_coordinate(a: Coordinate, b: Coordinate) -> Coordinate {
    Coordinate::new((a.lat + b.lat) / 2.0, (a.lng + b.lng) / 2.0)
}

/// Midpoint of `a` and `b`, labelled by reverse geocoding.
///
/// Falls back to `placeholder` when reverse geocoding fails or finds
/// nothing, so this never fails.
pub async fn midpoint(
    geocoder: &dyn Geocoder,
    a: &Location,
    b: &Location,
    placeholder: &str,
) -> Location {
    let point = midpoint_coordinate(a.coordinate(), b.coordinate());

    let address = match geocoder.reverse_geocode(point).await {
        Ok(Some(address)) if !address.trim().is_empty() => address,
        Ok(_) => placeholder.to_string(),
        Err(e) => {
            tracing::warn!(lat = point.lat, lng = point.lng, error = %e, "reverse geocoding failed");
            placeholder.to_string()
        }
    };

    Location::new(point.lat, point.lng, address)
}
