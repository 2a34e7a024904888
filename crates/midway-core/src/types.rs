//! Domain types shared by the parser, the maps adapters and the ranking engine.
//!
//! Everything here is created per query and dropped once the answer has been
//! produced. None of these types hold references back to the query text.

use serde::{Deserialize, Serialize};

/// A point on the globe in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Returns `true` when latitude is within `[-90, 90]` and longitude within
    /// `[-180, 180]`.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
    }
}

/// A resolved place: a coordinate plus the address the geocoder reported for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
    pub address: String,
}

impl Location {
    #[must_use]
    pub fn new(lat: f64, lng: f64, address: impl Into<String>) -> Self {
        Self {
            lat,
            lng,
            address: address.into(),
        }
    }

    #[must_use]
    pub const fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lng)
    }
}

/// The kind of a [`Constraint`], without its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstraintKind {
    Parking,
    Quiet,
    OpenLate,
    Wifi,
    RatingMin,
    PriceRange,
    TimeLimit,
}

impl ConstraintKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Parking => "parking",
            Self::Quiet => "quiet",
            Self::OpenLate => "open_late",
            Self::Wifi => "wifi",
            Self::RatingMin => "rating_min",
            Self::PriceRange => "price_range",
            Self::TimeLimit => "time_limit",
        }
    }
}

impl std::fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A filter criterion extracted from the query.
///
/// Serialized as `{"type": "<kind>", "value": <value>}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Constraint {
    Parking(bool),
    Quiet(bool),
    OpenLate(bool),
    Wifi(bool),
    /// Minimum acceptable rating on the 0–5 scale.
    RatingMin(f64),
    /// Maximum acceptable price level (1–4).
    PriceRange(u8),
    /// Time the user has available, in minutes.
    TimeLimit(u32),
}

impl Constraint {
    #[must_use]
    pub const fn kind(&self) -> ConstraintKind {
        match self {
            Self::Parking(_) => ConstraintKind::Parking,
            Self::Quiet(_) => ConstraintKind::Quiet,
            Self::OpenLate(_) => ConstraintKind::OpenLate,
            Self::Wifi(_) => ConstraintKind::Wifi,
            Self::RatingMin(_) => ConstraintKind::RatingMin,
            Self::PriceRange(_) => ConstraintKind::PriceRange,
            Self::TimeLimit(_) => ConstraintKind::TimeLimit,
        }
    }
}

/// Structured interpretation of a free-text place search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedIntent {
    /// One of [`crate::intent::PLACE_TYPES`].
    pub place_type: String,
    /// Canonical location names in contribution order. The first two are the
    /// midpoint endpoints.
    pub locations: Vec<String>,
    /// At most one constraint per [`ConstraintKind`].
    pub constraints: Vec<Constraint>,
    pub midpoint_requested: bool,
    pub radius_meters: u32,
}

impl ParsedIntent {
    /// Returns the constraint of the given kind, if the query produced one.
    #[must_use]
    pub fn constraint(&self, kind: ConstraintKind) -> Option<&Constraint> {
        self.constraints.iter().find(|c| c.kind() == kind)
    }
}

/// Opening hours as reported by the place-details capability.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OpeningHours {
    #[serde(default)]
    pub open_now: Option<bool>,
    #[serde(default)]
    pub weekday_text: Vec<String>,
}

/// A raw, unfiltered place returned by the place-search capability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidatePlace {
    pub name: String,
    /// Provider-assigned stable identifier.
    pub place_id: String,
    pub address: String,
    /// 0–5 when present.
    pub rating: Option<f64>,
    /// 1–4 when present.
    pub price_level: Option<u8>,
    pub opening_hours: Option<OpeningHours>,
    /// Provider photo references, filled in by details enrichment.
    #[serde(default)]
    pub photos: Vec<String>,
    /// Category tags, e.g. `"cafe"`, `"parking"`.
    #[serde(default)]
    pub types: Vec<String>,
    pub location: Coordinate,
}

/// A candidate that survived filtering, annotated with its distance from the
/// search origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedResult {
    #[serde(flatten)]
    pub place: CandidatePlace,
    pub distance_meters: f64,
    pub distance_label: String,
}
