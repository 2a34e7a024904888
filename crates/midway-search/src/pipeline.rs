//! One query, end to end: parse, resolve, pick an origin, search.

use std::sync::Arc;
use std::time::Instant;

use serde::Serialize;

use midway_core::{IntentParser, Location, ParsedIntent, RankedResult, SearchDefaults};
use midway_maps::{Geocoder, PlaceSearch};

use crate::engine::{SearchEngine, SearchOutcome};
use crate::error::PipelineError;
use crate::midpoint::midpoint;
use crate::resolver::resolve_all;

/// How a completed run turned out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Found,
    NoResults,
    UpstreamUnavailable,
}

/// Everything one pipeline run produced.
#[derive(Debug, Clone, Serialize)]
pub struct SearchReport {
    pub intent: ParsedIntent,
    pub locations: Vec<Location>,
    pub midpoint: Option<Location>,
    /// Where the place search was centred.
    pub origin: Location,
    pub outcome: SearchOutcome,
    pub execution_time_secs: f64,
}

impl SearchReport {
    #[must_use]
    pub fn status(&self) -> ReportStatus {
        match &self.outcome {
            SearchOutcome::UpstreamFailure { .. } => ReportStatus::UpstreamUnavailable,
            SearchOutcome::Results(results) if results.is_empty() => ReportStatus::NoResults,
            SearchOutcome::Results(_) => ReportStatus::Found,
        }
    }

    #[must_use]
    pub fn results(&self) -> &[RankedResult] {
        self.outcome.results()
    }
}

/// Runs queries against a geocoder and a place-search provider.
pub struct Pipeline {
    parser: IntentParser,
    engine: SearchEngine,
    geocoder: Arc<dyn Geocoder>,
    places: Arc<dyn PlaceSearch>,
    midpoint_label: String,
}

impl Pipeline {
    #[must_use]
    pub fn new(
        defaults: &SearchDefaults,
        geocoder: Arc<dyn Geocoder>,
        places: Arc<dyn PlaceSearch>,
    ) -> Self {
        Self {
            parser: IntentParser::new(defaults),
            engine: SearchEngine::new(defaults),
            geocoder,
            places,
            midpoint_label: defaults.midpoint_label.clone(),
        }
    }

    #[must_use]
    pub fn parser(&self) -> &IntentParser {
        &self.parser
    }

    /// Parses `text`, resolves its locations, picks the search origin and
    /// runs the place search.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::NoLocations`] when the text names no known
    /// location and [`PipelineError::LocationNotFound`] when one of the named
    /// locations cannot be geocoded. No search is issued in either case.
    pub async fn run(&self, text: &str) -> Result<SearchReport, PipelineError> {
        let started = Instant::now();

        let intent = self.parser.parse(text);
        tracing::debug!(
            place_type = %intent.place_type,
            locations = ?intent.locations,
            midpoint = intent.midpoint_requested,
            "query parsed"
        );

        if intent.locations.is_empty() {
            return Err(PipelineError::NoLocations);
        }

        let locations = resolve_all(self.geocoder.as_ref(), &intent.locations).await?;

        let midpoint = match (intent.midpoint_requested, locations.as_slice()) {
            (true, [a, b, ..]) => Some(
                midpoint(self.geocoder.as_ref(), a, b, &self.midpoint_label).await,
            ),
            _ => None,
        };

        let origin = match (&midpoint, locations.first()) {
            (Some(m), _) => m.clone(),
            (None, Some(first)) => first.clone(),
            (None, None) => return Err(PipelineError::NoLocations),
        };

        let outcome = self
            .engine
            .search(
                self.places.as_ref(),
                &intent.place_type,
                origin.coordinate(),
                intent.radius_meters,
                &intent.constraints,
            )
            .await;

        let report = SearchReport {
            intent,
            locations,
            midpoint,
            origin,
            outcome,
            execution_time_secs: started.elapsed().as_secs_f64(),
        };

        tracing::info!(
            status = ?report.status(),
            results = report.results().len(),
            elapsed_secs = report.execution_time_secs,
            "query complete"
        );

        Ok(report)
    }
}
