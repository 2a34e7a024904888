//! Capability traits the search pipeline consumes.
//!
//! The pipeline only ever talks to these traits. [`crate::GoogleMapsClient`]
//! and [`crate::DemoMaps`] are the two implementations shipped here; tests
//! supply their own.

use async_trait::async_trait;
use midway_core::{CandidatePlace, Coordinate, Location, OpeningHours};

use crate::error::MapsError;

/// Extra place information used to enrich results after ranking.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaceDetails {
    pub opening_hours: Option<OpeningHours>,
    pub photos: Vec<String>,
}

/// Forward and reverse geocoding.
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Best match for a free-text place name, or `Ok(None)` when the provider
    /// knows no such place.
    async fn geocode(&self, name: &str) -> Result<Option<Location>, MapsError>;

    /// Formatted address for a coordinate, or `Ok(None)` when the provider
    /// has nothing for it.
    async fn reverse_geocode(&self, coordinate: Coordinate) -> Result<Option<String>, MapsError>;
}

/// Text search for places around an origin.
#[async_trait]
pub trait PlaceSearch: Send + Sync {
    /// Candidate places for `query` near `origin`, in provider order. The
    /// result is unbounded; callers cap how many they consume.
    async fn text_search(
        &self,
        query: &str,
        origin: Coordinate,
        radius_meters: u32,
    ) -> Result<Vec<CandidatePlace>, MapsError>;

    /// Opening hours and photos for one place.
    async fn details(&self, place_id: &str) -> Result<PlaceDetails, MapsError>;
}
