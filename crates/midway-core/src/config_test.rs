use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

fn empty_env<'a>() -> HashMap<&'a str, &'a str> {
    HashMap::new()
}

#[test]
fn parse_environment_development() {
    assert_eq!(
        parse_environment("development").unwrap(),
        Environment::Development
    );
}

#[test]
fn parse_environment_test() {
    assert_eq!(parse_environment("test").unwrap(), Environment::Test);
}

#[test]
fn parse_environment_production() {
    assert_eq!(
        parse_environment("production").unwrap(),
        Environment::Production
    );
}

#[test]
fn parse_environment_unknown_fails() {
    let err = parse_environment("unknown").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "MIDWAY_ENV"));
}

#[test]
fn build_app_config_succeeds_with_empty_env() {
    let map = empty_env();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.log_level, "info");
    assert!(cfg.google_maps_api_key.is_none());
    assert_eq!(cfg.maps_base_url, "https://maps.googleapis.com/maps/api/");
    assert_eq!(cfg.maps_request_timeout_secs, 30);
    assert_eq!(cfg.maps_user_agent, "midway/0.1 (place-search)");
    assert_eq!(cfg.search, SearchDefaults::default());
}

#[test]
fn search_defaults_match_documented_values() {
    let defaults = SearchDefaults::default();
    assert_eq!(defaults.place_type, "restaurant");
    assert_eq!(defaults.radius_meters, 5000);
    assert!((defaults.rating_min - 4.0).abs() < f64::EPSILON);
    assert_eq!(defaults.budget_price_level, 2);
    assert_eq!(defaults.max_candidates, 10);
    assert_eq!(defaults.max_results, 3);
    assert_eq!(defaults.midpoint_label, "Midpoint Location");
}

#[test]
fn production_requires_api_key() {
    let mut map = empty_env();
    map.insert("MIDWAY_ENV", "production");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "GOOGLE_MAPS_API_KEY"),
        "expected MissingEnvVar(GOOGLE_MAPS_API_KEY), got: {result:?}"
    );
}

#[test]
fn production_accepts_api_key() {
    let mut map = empty_env();
    map.insert("MIDWAY_ENV", "production");
    map.insert("GOOGLE_MAPS_API_KEY", "secret-key");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.env, Environment::Production);
    assert_eq!(cfg.google_maps_api_key.as_deref(), Some("secret-key"));
}

#[test]
fn blank_api_key_is_treated_as_unset() {
    let mut map = empty_env();
    map.insert("GOOGLE_MAPS_API_KEY", "   ");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.google_maps_api_key.is_none());
}

#[test]
fn debug_output_redacts_api_key() {
    let mut map = empty_env();
    map.insert("GOOGLE_MAPS_API_KEY", "secret-key");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    let rendered = format!("{cfg:?}");
    assert!(!rendered.contains("secret-key"), "{rendered}");
    assert!(rendered.contains("[redacted]"), "{rendered}");
}

#[test]
fn build_app_config_fails_on_invalid_midway_env() {
    let mut map = empty_env();
    map.insert("MIDWAY_ENV", "producton");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "MIDWAY_ENV"),
        "expected InvalidEnvVar(MIDWAY_ENV), got: {result:?}"
    );
}

#[test]
fn maps_request_timeout_secs_override() {
    let mut map = empty_env();
    map.insert("MIDWAY_MAPS_REQUEST_TIMEOUT_SECS", "5");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.maps_request_timeout_secs, 5);
}

#[test]
fn maps_request_timeout_secs_invalid() {
    let mut map = empty_env();
    map.insert("MIDWAY_MAPS_REQUEST_TIMEOUT_SECS", "not-a-number");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "MIDWAY_MAPS_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(MIDWAY_MAPS_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn default_radius_override() {
    let mut map = empty_env();
    map.insert("MIDWAY_DEFAULT_RADIUS_METERS", "8000");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.search.radius_meters, 8000);
}

#[test]
fn default_radius_zero_is_rejected() {
    let mut map = empty_env();
    map.insert("MIDWAY_DEFAULT_RADIUS_METERS", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "MIDWAY_DEFAULT_RADIUS_METERS"),
        "expected InvalidEnvVar(MIDWAY_DEFAULT_RADIUS_METERS), got: {result:?}"
    );
}

#[test]
fn default_rating_min_override() {
    let mut map = empty_env();
    map.insert("MIDWAY_DEFAULT_RATING_MIN", "4.5");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!((cfg.search.rating_min - 4.5).abs() < f64::EPSILON);
}

#[test]
fn default_rating_min_out_of_range() {
    let mut map = empty_env();
    map.insert("MIDWAY_DEFAULT_RATING_MIN", "7");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "MIDWAY_DEFAULT_RATING_MIN"),
        "expected InvalidEnvVar(MIDWAY_DEFAULT_RATING_MIN), got: {result:?}"
    );
}

#[test]
fn budget_price_level_out_of_range() {
    let mut map = empty_env();
    map.insert("MIDWAY_BUDGET_PRICE_LEVEL", "5");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "MIDWAY_BUDGET_PRICE_LEVEL"),
        "expected InvalidEnvVar(MIDWAY_BUDGET_PRICE_LEVEL), got: {result:?}"
    );
}

#[test]
fn max_results_override() {
    let mut map = empty_env();
    map.insert("MIDWAY_MAX_RESULTS", "5");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.search.max_results, 5);
    assert_eq!(cfg.search.max_candidates, 10);
}

#[test]
fn max_results_exceeding_candidates_fails() {
    let mut map = empty_env();
    map.insert("MIDWAY_MAX_CANDIDATES", "2");
    map.insert("MIDWAY_MAX_RESULTS", "3");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "MIDWAY_MAX_RESULTS"),
        "expected InvalidEnvVar(MIDWAY_MAX_RESULTS), got: {result:?}"
    );
}

#[test]
fn midpoint_label_override() {
    let mut map = empty_env();
    map.insert("MIDWAY_MIDPOINT_LABEL", "Somewhere in between");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.search.midpoint_label, "Somewhere in between");
}
