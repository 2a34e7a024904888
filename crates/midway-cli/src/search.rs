//! Handlers for the `search` and `parse` commands.

use std::sync::Arc;

use midway_core::{AppConfig, IntentParser, RankedResult};
use midway_maps::{
    directions_url, embed_url, DemoMaps, Geocoder, GoogleMapsClient, PlaceSearch,
};
use midway_search::{Pipeline, SearchOutcome, SearchReport};

type Providers = (Arc<dyn Geocoder>, Arc<dyn PlaceSearch>);

/// Picks the maps providers: the demo data when asked for or when no API
/// key is configured, Google Maps otherwise.
///
/// # Errors
///
/// Returns an error if the Google Maps client cannot be built.
pub(crate) fn build_providers(config: &AppConfig, demo: bool) -> anyhow::Result<Providers> {
    if let Some(key) = google_key(config, demo) {
        let client = Arc::new(GoogleMapsClient::with_base_url(
            key,
            config.maps_request_timeout_secs,
            &config.maps_user_agent,
            &config.maps_base_url,
        )?);
        let geocoder: Arc<dyn Geocoder> = client.clone();
        let places: Arc<dyn PlaceSearch> = client;
        return Ok((geocoder, places));
    }

    if demo {
        tracing::info!("using demo data");
    } else {
        tracing::warn!("GOOGLE_MAPS_API_KEY not set; using demo data");
    }
    let maps = Arc::new(DemoMaps::new());
    let geocoder: Arc<dyn Geocoder> = maps.clone();
    let places: Arc<dyn PlaceSearch> = maps;
    Ok((geocoder, places))
}

/// The Google Maps API key, unless demo data was requested.
fn google_key(config: &AppConfig, demo: bool) -> Option<&str> {
    if demo {
        None
    } else {
        config.google_maps_api_key.as_deref()
    }
}

/// Runs `query` through the pipeline and prints the outcome.
///
/// # Errors
///
/// Returns an error when the query names no known location, a location
/// cannot be found, or the report cannot be serialized.
pub(crate) async fn run_search(
    config: &AppConfig,
    query: &str,
    demo: bool,
    json: bool,
) -> anyhow::Result<()> {
    let (geocoder, places) = build_providers(config, demo)?;
    let pipeline = Pipeline::new(&config.search, geocoder, places);

    let report = pipeline.run(query).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_report(&report, google_key(config, demo)));
    }
    Ok(())
}

/// Prints how `query` parses.
///
/// # Errors
///
/// Returns an error if the intent cannot be serialized.
pub(crate) fn run_parse(config: &AppConfig, query: &str) -> anyhow::Result<()> {
    let intent = IntentParser::new(&config.search).parse(query);
    println!("{}", serde_json::to_string_pretty(&intent)?);
    Ok(())
}

/// Text rendering of `report`. With an API key, each result also gets an
/// embeddable map link.
pub(crate) fn render_report(report: &SearchReport, embed_key: Option<&str>) -> String {
    let origin = &report.origin;
    let mut out = format!(
        "Searching for {} near {} ({:.4}, {:.4})\n",
        report.intent.place_type, origin.address, origin.lat, origin.lng
    );

    match &report.outcome {
        SearchOutcome::UpstreamFailure { reason } => {
            out.push_str(&format!(
                "Place search is unavailable right now ({reason}). Try again later.\n"
            ));
        }
        SearchOutcome::Results(results) if results.is_empty() => {
            out.push_str("No places matched. Try widening the radius or dropping a constraint.\n");
        }
        SearchOutcome::Results(results) => {
            let from = format!("{},{}", origin.lat, origin.lng);
            for (rank, result) in results.iter().enumerate() {
                out.push_str(&render_result(rank + 1, result, &from, embed_key));
            }
        }
    }

    out.push_str(&format!("({:.2}s)\n", report.execution_time_secs));
    out
}

fn render_result(
    rank: usize,
    result: &RankedResult,
    from: &str,
    embed_key: Option<&str>,
) -> String {
    let place = &result.place;
    let rating = place
        .rating
        .map_or_else(|| "unrated".to_string(), |r| format!("{r:.1}"));
    let mut out = format!(
        "{rank}. {} ({rating}, {})\n   {}\n   {}\n",
        place.name,
        result.distance_label,
        place.address,
        directions_url(&place.place_id, Some(from)),
    );
    if let Some(key) = embed_key {
        out.push_str(&format!("   {}\n", embed_url(key, &place.place_id)));
    }
    out
}
