//! Great-circle distance and distance labels.

use crate::types::Coordinate;

/// Mean Earth radius used by the haversine formula, in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Haversine distance between two coordinates, in meters.
#[must_use]
pub fn haversine_meters(from: Coordinate, to: Coordinate) -> f64 {
    let lat1 = from.lat.to_radians();
    let lat2 = to.lat.to_radians();
    let delta_lat = (to.lat - from.lat).to_radians();
    let delta_lng = (to.lng - from.lng).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_M * c
}

/// Human-readable distance: whole meters below one kilometer (`"850m"`),
/// otherwise kilometers with one decimal (`"67.6km"`).
#[must_use]
pub fn format_distance(meters: f64) -> String {
    if meters < 1000.0 {
        // Truncation toward zero is intended: 999.9 m reads as "999m".
        #[allow(clippy::cast_possible_truncation)]
        let whole = meters.trunc() as i64;
        format!("{whole}m")
    } else {
        format!("{:.1}km", meters / 1000.0)
    }
}
