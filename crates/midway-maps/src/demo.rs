//! In-memory maps provider with fixed Bay Area fixtures.
//!
//! Lets the CLI and the pipeline tests run without an API key. Fixture places
//! are laid out at fixed offsets north-east of whatever origin is searched,
//! so distances and ordering are deterministic.

use async_trait::async_trait;

use midway_core::{haversine_meters, CandidatePlace, Coordinate, Location, OpeningHours};

use crate::error::MapsError;
use crate::provider::{Geocoder, PlaceDetails, PlaceSearch};

/// Known demo locations: lower-cased lookup name, lat, lng, address.
const DEMO_LOCATIONS: &[(&str, f64, f64, &str)] = &[
    ("san francisco", 37.7749, -122.4194, "San Francisco, CA"),
    ("san jose", 37.3382, -121.8863, "San Jose, CA"),
    ("palo alto", 37.4419, -122.1430, "Palo Alto, CA"),
    ("oakland", 37.8044, -122.2712, "Oakland, CA"),
    ("berkeley", 37.8719, -122.2585, "Berkeley, CA"),
    ("stanford", 37.4241, -122.1661, "Stanford, CA"),
    (
        "union square",
        37.7880,
        -122.4074,
        "Union Square, San Francisco, CA",
    ),
    ("downtown", 37.7749, -122.4194, "Downtown San Francisco, CA"),
];

/// A fixture place: name, rating, price level, address, extra tags.
type Fixture = (&'static str, f64, u8, &'static str, &'static [&'static str]);

const COFFEE_SHOPS: &[Fixture] = &[
    ("Blue Bottle Coffee", 4.2, 2, "66 Mint St, San Francisco, CA", &[]),
    ("Philz Coffee", 4.3, 2, "3101 24th St, San Francisco, CA", &["parking"]),
    ("Ritual Coffee", 4.1, 2, "1026 Valencia St, San Francisco, CA", &[]),
    ("Sightglass Coffee", 4.4, 2, "270 7th St, San Francisco, CA", &[]),
    ("Four Barrel Coffee", 4.0, 1, "375 Valencia St, San Francisco, CA", &["parking"]),
];

const RESTAURANTS: &[Fixture] = &[
    ("State Bird Provisions", 4.5, 3, "1529 Fillmore St, San Francisco, CA", &[]),
    ("Zuni Café", 4.2, 3, "1658 Market St, San Francisco, CA", &["parking"]),
    ("Foreign Cinema", 4.3, 3, "2534 Mission St, San Francisco, CA", &[]),
    ("Slanted Door", 4.4, 3, "1 Ferry Building, San Francisco, CA", &["parking"]),
    ("Gary Danko", 4.6, 4, "800 North Point St, San Francisco, CA", &[]),
];

const CAFES: &[Fixture] = &[
    ("Tartine Bakery", 4.3, 2, "600 Guerrero St, San Francisco, CA", &[]),
    ("Craftsman and Wolves", 4.1, 2, "746 Valencia St, San Francisco, CA", &[]),
    ("Jane", 4.0, 1, "2123 Fillmore St, San Francisco, CA", &["parking"]),
    ("Cafe Flore", 4.2, 2, "2298 Market St, San Francisco, CA", &[]),
];

const BARS: &[Fixture] = &[
    ("The Alembic", 4.2, 2, "1725 Haight St, San Francisco, CA", &[]),
    ("Smuggler's Cove", 4.4, 2, "650 Gough St, San Francisco, CA", &[]),
    ("Trick Dog", 4.3, 2, "3010 20th St, San Francisco, CA", &["parking"]),
    ("Local Edition", 4.1, 3, "691 Market St, San Francisco, CA", &[]),
];

/// Catalogue per place type. Unknown types fall back to restaurants.
const CATALOGUE: &[(&str, &[Fixture])] = &[
    ("coffee shop", COFFEE_SHOPS),
    ("restaurant", RESTAURANTS),
    ("cafe", CAFES),
    ("bar", BARS),
];

/// Degrees added per fixture index when placing fixtures around the origin.
const LAT_STEP: f64 = 0.0025;
const LNG_STEP: f64 = 0.0015;

/// Reverse geocoding only names points within this distance of a demo location.
const REVERSE_GEOCODE_RADIUS_M: f64 = 10_000.0;

const DEMO_HOURS: &str = "Mon-Sun: 7:00 AM - 10:00 PM";

/// Deterministic in-memory implementation of [`Geocoder`] and [`PlaceSearch`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoMaps;

impl DemoMaps {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn catalogue_for(query: &str) -> (&'static str, &'static [Fixture]) {
        let lower = query.to_lowercase();
        CATALOGUE
            .iter()
            .filter(|(place_type, _)| lower.starts_with(place_type))
            .max_by_key(|(place_type, _)| place_type.len())
            .or_else(|| CATALOGUE.iter().find(|(t, _)| *t == "restaurant"))
            .map_or(("restaurant", RESTAURANTS), |(t, f)| (*t, *f))
    }
}

fn slug(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

#[async_trait]
impl Geocoder for DemoMaps {
    async fn geocode(&self, name: &str) -> Result<Option<Location>, MapsError> {
        let key = name.trim().to_lowercase();
        Ok(DEMO_LOCATIONS
            .iter()
            .find(|(known, ..)| *known == key)
            .map(|(_, lat, lng, address)| Location::new(*lat, *lng, *address)))
    }

    async fn reverse_geocode(&self, coordinate: Coordinate) -> Result<Option<String>, MapsError> {
        let nearest = DEMO_LOCATIONS
            .iter()
            .map(|(_, lat, lng, address)| {
                (haversine_meters(coordinate, Coordinate::new(*lat, *lng)), *address)
            })
            .min_by(|a, b| a.0.total_cmp(&b.0));

        Ok(nearest
            .filter(|(distance, _)| *distance <= REVERSE_GEOCODE_RADIUS_M)
            .map(|(_, address)| format!("Near {address}")))
    }
}

#[async_trait]
impl PlaceSearch for DemoMaps {
    async fn text_search(
        &self,
        query: &str,
        origin: Coordinate,
        radius_meters: u32,
    ) -> Result<Vec<CandidatePlace>, MapsError> {
        let (place_type, fixtures) = Self::catalogue_for(query);
        tracing::debug!(query, place_type, "demo text search");

        let places = fixtures
            .iter()
            .zip(1_u32..)
            .map(|((name, rating, price, address, tags), step)| {
                let step = f64::from(step);
                let mut types = vec![place_type.replace(' ', "_")];
                types.extend(tags.iter().map(|t| (*t).to_string()));
                CandidatePlace {
                    name: (*name).to_string(),
                    place_id: format!("demo_{}", slug(name)),
                    address: (*address).to_string(),
                    rating: Some(*rating),
                    price_level: Some(*price),
                    opening_hours: None,
                    photos: Vec::new(),
                    types,
                    location: Coordinate::new(
                        origin.lat + LAT_STEP * step,
                        origin.lng + LNG_STEP * step,
                    ),
                }
            })
            .filter(|place| haversine_meters(origin, place.location) <= f64::from(radius_meters))
            .collect();

        Ok(places)
    }

    async fn details(&self, place_id: &str) -> Result<PlaceDetails, MapsError> {
        let known = CATALOGUE
            .iter()
            .flat_map(|(_, fixtures)| fixtures.iter())
            .any(|(name, ..)| format!("demo_{}", slug(name)) == place_id);

        if !known {
            return Ok(PlaceDetails::default());
        }

        Ok(PlaceDetails {
            opening_hours: Some(OpeningHours {
                open_now: None,
                weekday_text: vec![DEMO_HOURS.to_string()],
            }),
            photos: Vec::new(),
        })
    }
}
