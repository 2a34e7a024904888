//! Maps capabilities for midway: geocoding, reverse geocoding, text place
//! search and place details, with a Google Maps implementation and an
//! in-memory demo provider.

pub mod client;
pub mod demo;
pub mod error;
pub mod links;
pub mod normalize;
pub mod provider;
pub mod types;

pub use client::GoogleMapsClient;
pub use demo::DemoMaps;
pub use error::MapsError;
pub use links::{directions_url, embed_url};
pub use provider::{Geocoder, PlaceDetails, PlaceSearch};
