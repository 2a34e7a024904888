//! Location name to coordinates, over the geocoding capability.

use futures::future::join_all;
use midway_core::Location;
use midway_maps::Geocoder;

use crate::error::PipelineError;

/// Geocodes a single named location.
///
/// A geocoder error, an empty answer and a coordinate outside the valid
/// latitude/longitude ranges are all reported as
/// [`PipelineError::LocationNotFound`]; the cause is logged.
///
/// # Errors
///
/// Returns [`PipelineError::LocationNotFound`] when `name` cannot be resolved.
pub async fn resolve(geocoder: &dyn Geocoder, name: &str) -> Result<Location, PipelineError> {
    match geocoder.geocode(name).await {
        Ok(Some(location)) if !location.coordinate().is_valid() => {
            tracing::warn!(
                name,
                lat = location.lat,
                lng = location.lng,
                "geocoder returned an out-of-range coordinate"
            );
            Err(PipelineError::LocationNotFound {
                name: name.to_string(),
            })
        }
        Ok(Some(location)) => {
            tracing::debug!(name, lat = location.lat, lng = location.lng, "location resolved");
            Ok(location)
        }
        Ok(None) => {
            tracing::info!(name, "geocoder returned no match");
            Err(PipelineError::LocationNotFound {
                name: name.to_string(),
            })
        }
        Err(e) => {
            tracing::warn!(name, error = %e, "geocoding failed");
            Err(PipelineError::LocationNotFound {
                name: name.to_string(),
            })
        }
    }
}

/// Geocodes every name concurrently. Locations come back in input order and
/// the first unresolvable name, in input order, is the error.
///
/// # Errors
///
/// Returns [`PipelineError::LocationNotFound`] for the first name that cannot
/// be resolved.
pub async fn resolve_all(
    geocoder: &dyn Geocoder,
    names: &[String],
) -> Result<Vec<Location>, PipelineError> {
    join_all(names.iter().map(|name| resolve(geocoder, name)))
        .await
        .into_iter()
        .collect()
}
