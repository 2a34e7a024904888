//! Place search, constraint filtering and ranking.
//!
//! The engine asks the place-search capability for candidates around an
//! origin, scores each by great-circle distance, drops those failing a
//! constraint, orders the rest by rating then distance and keeps the top
//! few. Survivors are enriched with opening hours and photos.

use futures::future::join_all;
use serde::Serialize;

use midway_core::{
    format_distance, haversine_meters, CandidatePlace, Constraint, Coordinate, RankedResult,
    SearchDefaults,
};
use midway_maps::PlaceSearch;

/// What a search produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", content = "data", rename_all = "snake_case")]
pub enum SearchOutcome {
    /// The provider answered. May be empty.
    Results(Vec<RankedResult>),
    /// The place-search capability failed.
    UpstreamFailure { reason: String },
}

impl SearchOutcome {
    /// Ranked results, or an empty slice on upstream failure.
    #[must_use]
    pub fn results(&self) -> &[RankedResult] {
        match self {
            Self::Results(results) => results,
            Self::UpstreamFailure { .. } => &[],
        }
    }

    #[must_use]
    pub const fn is_upstream_failure(&self) -> bool {
        matches!(self, Self::UpstreamFailure { .. })
    }
}

#[derive(Debug, Clone)]
pub struct SearchEngine {
    max_candidates: usize,
    max_results: usize,
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new(&SearchDefaults::default())
    }
}

impl SearchEngine {
    #[must_use]
    pub fn new(defaults: &SearchDefaults) -> Self {
        Self {
            max_candidates: defaults.max_candidates,
            max_results: defaults.max_results,
        }
    }

    /// Searches for `place_type` around `origin` and returns at most
    /// `max_results` ranked places.
    ///
    /// A provider failure is reported as [`SearchOutcome::UpstreamFailure`],
    /// never as an error.
    pub async fn search(
        &self,
        places: &dyn PlaceSearch,
        place_type: &str,
        origin: Coordinate,
        radius_meters: u32,
        constraints: &[Constraint],
    ) -> SearchOutcome {
        let query = build_query(place_type, constraints);

        let candidates = match places.text_search(&query, origin, radius_meters).await {
            Ok(candidates) => candidates,
            Err(e) => {
                tracing::warn!(query = %query, error = %e, "place search failed");
                return SearchOutcome::UpstreamFailure {
                    reason: e.to_string(),
                };
            }
        };

        let received = candidates.len();
        let mut ranked: Vec<RankedResult> = candidates
            .into_iter()
            .take(self.max_candidates)
            .map(|place| score(place, origin))
            .filter(|result| passes_filters(&result.place, constraints))
            .collect();
        rank(&mut ranked);
        ranked.truncate(self.max_results);

        tracing::info!(
            query = %query,
            received,
            returned = ranked.len(),
            "place search complete"
        );

        SearchOutcome::Results(enrich(places, ranked).await)
    }
}

/// Provider query for `place_type`, with " quiet" and " open late" appended
/// for each quiet or open-late constraint that is set.
#[must_use]
pub fn build_query(place_type: &str, constraints: &[Constraint]) -> String {
    let mut query = place_type.to_string();
    for constraint in constraints {
        match constraint {
            Constraint::Quiet(true) => query.push_str(" quiet"),
            Constraint::OpenLate(true) => query.push_str(" open late"),
            _ => {}
        }
    }
    query
}

fn score(place: CandidatePlace, origin: Coordinate) -> RankedResult {
    let distance_meters = haversine_meters(origin, place.location);
    RankedResult {
        distance_label: format_distance(distance_meters),
        distance_meters,
        place,
    }
}

/// True when `place` satisfies every constraint. Kinds without a filter
/// always pass.
#[must_use]
pub fn passes_filters(place: &CandidatePlace, constraints: &[Constraint]) -> bool {
    constraints.iter().all(|constraint| match *constraint {
        Constraint::RatingMin(min) => place.rating.is_none_or(|rating| rating >= min),
        Constraint::Parking(true) => {
            place.types.iter().any(|t| t == "parking")
                || place.name.to_lowercase().contains("parking")
        }
        Constraint::PriceRange(max) => place.price_level.is_none_or(|level| level <= max),
        _ => true,
    })
}

/// Stable sort by rating (highest first, unrated as 0) then distance.
pub fn rank(results: &mut [RankedResult]) {
    results.sort_by(|a, b| {
        let rating_a = a.place.rating.unwrap_or(0.0);
        let rating_b = b.place.rating.unwrap_or(0.0);
        rating_b
            .total_cmp(&rating_a)
            .then_with(|| a.distance_meters.total_cmp(&b.distance_meters))
    });
}

async fn enrich(places: &dyn PlaceSearch, results: Vec<RankedResult>) -> Vec<RankedResult> {
    let details = join_all(
        results
            .iter()
            .map(|result| places.details(&result.place.place_id)),
    )
    .await;

    results
        .into_iter()
        .zip(details)
        .map(|(mut result, details)| {
            match details {
                Ok(details) => {
                    if details.opening_hours.is_some() {
                        result.place.opening_hours = details.opening_hours;
                    }
                    if !details.photos.is_empty() {
                        result.place.photos = details.photos;
                    }
                }
                Err(e) => tracing::warn!(
                    place_id = %result.place.place_id,
                    error = %e,
                    "place details failed"
                ),
            }
            result
        })
        .collect()
}

#[cfg(test)]
#[path = "engine_test.rs"]
mod tests;
