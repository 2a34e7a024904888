use crate::app_config::{
    AppConfig, Environment, SearchDefaults, DEFAULT_BUDGET_PRICE_LEVEL, DEFAULT_MAX_CANDIDATES,
    DEFAULT_MAX_RESULTS, DEFAULT_MIDPOINT_LABEL, DEFAULT_PLACE_TYPE, DEFAULT_RADIUS_METERS,
    DEFAULT_RATING_MIN,
};
use crate::ConfigError;

const DEFAULT_MAPS_BASE_URL: &str = "https://maps.googleapis.com/maps/api/";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so it can be tested with a plain
/// `HashMap` lookup.
#[allow(clippy::too_many_lines)]
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        or_default(var, default)
            .parse::<u32>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        or_default(var, default)
            .parse::<usize>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let env = parse_environment(&or_default("MIDWAY_ENV", "development"))?;
    let log_level = or_default("MIDWAY_LOG_LEVEL", "info");

    let google_maps_api_key = lookup("GOOGLE_MAPS_API_KEY")
        .ok()
        .filter(|key| !key.trim().is_empty());
    if env == Environment::Production && google_maps_api_key.is_none() {
        return Err(ConfigError::MissingEnvVar("GOOGLE_MAPS_API_KEY".to_string()));
    }

    let maps_base_url = or_default("MIDWAY_MAPS_BASE_URL", DEFAULT_MAPS_BASE_URL);
    let maps_request_timeout_secs = parse_u64("MIDWAY_MAPS_REQUEST_TIMEOUT_SECS", "30")?;
    let maps_user_agent = or_default("MIDWAY_MAPS_USER_AGENT", "midway/0.1 (place-search)");

    let radius_meters = parse_u32(
        "MIDWAY_DEFAULT_RADIUS_METERS",
        &DEFAULT_RADIUS_METERS.to_string(),
    )?;
    if radius_meters == 0 {
        return Err(invalid(
            "MIDWAY_DEFAULT_RADIUS_METERS",
            "must be greater than zero".to_string(),
        ));
    }

    let rating_raw = or_default(
        "MIDWAY_DEFAULT_RATING_MIN",
        &DEFAULT_RATING_MIN.to_string(),
    );
    let rating_min = rating_raw
        .parse::<f64>()
        .map_err(|e| invalid("MIDWAY_DEFAULT_RATING_MIN", e.to_string()))?;
    if !(0.0..=5.0).contains(&rating_min) {
        return Err(invalid(
            "MIDWAY_DEFAULT_RATING_MIN",
            format!("{rating_min} is outside 0.0..=5.0"),
        ));
    }

    let budget_price_level = or_default(
        "MIDWAY_BUDGET_PRICE_LEVEL",
        &DEFAULT_BUDGET_PRICE_LEVEL.to_string(),
    )
    .parse::<u8>()
    .map_err(|e| invalid("MIDWAY_BUDGET_PRICE_LEVEL", e.to_string()))?;
    if !(1..=4).contains(&budget_price_level) {
        return Err(invalid(
            "MIDWAY_BUDGET_PRICE_LEVEL",
            format!("{budget_price_level} is outside 1..=4"),
        ));
    }

    let max_candidates = parse_usize(
        "MIDWAY_MAX_CANDIDATES",
        &DEFAULT_MAX_CANDIDATES.to_string(),
    )?;
    let max_results = parse_usize("MIDWAY_MAX_RESULTS", &DEFAULT_MAX_RESULTS.to_string())?;
    if max_results > max_candidates {
        return Err(invalid(
            "MIDWAY_MAX_RESULTS",
            format!("max results ({max_results}) exceeds max candidates ({max_candidates})"),
        ));
    }

    let midpoint_label = or_default("MIDWAY_MIDPOINT_LABEL", DEFAULT_MIDPOINT_LABEL);

    Ok(AppConfig {
        env,
        log_level,
        google_maps_api_key,
        maps_base_url,
        maps_request_timeout_secs,
        maps_user_agent,
        search: SearchDefaults {
            place_type: DEFAULT_PLACE_TYPE.to_string(),
            radius_meters,
            rating_min,
            budget_price_level,
            max_candidates,
            max_results,
            midpoint_label,
        },
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "MIDWAY_ENV".to_string(),
            reason: format!("expected development, test, or production; got '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
