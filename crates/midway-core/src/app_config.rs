#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Default radius when the query names none, in meters.
pub const DEFAULT_RADIUS_METERS: u32 = 5000;
/// Threshold attached to every `rating_min` constraint the parser emits.
pub const DEFAULT_RATING_MIN: f64 = 4.0;
/// Price level attached to `price_range` when the query asks for something cheap.
pub const DEFAULT_BUDGET_PRICE_LEVEL: u8 = 2;
/// Raw candidates consumed from one place search.
pub const DEFAULT_MAX_CANDIDATES: usize = 10;
/// Ranked results returned to the caller.
pub const DEFAULT_MAX_RESULTS: usize = 3;
/// Address used for a midpoint the reverse geocoder could not name.
pub const DEFAULT_MIDPOINT_LABEL: &str = "Midpoint Location";
/// Place type used when no trigger phrase matches.
pub const DEFAULT_PLACE_TYPE: &str = "restaurant";

/// Tunables shared by the intent parser and the ranking engine.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchDefaults {
    pub place_type: String,
    pub radius_meters: u32,
    pub rating_min: f64,
    pub budget_price_level: u8,
    pub max_candidates: usize,
    pub max_results: usize,
    pub midpoint_label: String,
}

impl Default for SearchDefaults {
    fn default() -> Self {
        Self {
            place_type: DEFAULT_PLACE_TYPE.to_string(),
            radius_meters: DEFAULT_RADIUS_METERS,
            rating_min: DEFAULT_RATING_MIN,
            budget_price_level: DEFAULT_BUDGET_PRICE_LEVEL,
            max_candidates: DEFAULT_MAX_CANDIDATES,
            max_results: DEFAULT_MAX_RESULTS,
            midpoint_label: DEFAULT_MIDPOINT_LABEL.to_string(),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    pub google_maps_api_key: Option<String>,
    pub maps_base_url: String,
    pub maps_request_timeout_secs: u64,
    pub maps_user_agent: String,
    pub search: SearchDefaults,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("log_level", &self.log_level)
            .field(
                "google_maps_api_key",
                &self.google_maps_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("maps_base_url", &self.maps_base_url)
            .field("maps_request_timeout_secs", &self.maps_request_timeout_secs)
            .field("maps_user_agent", &self.maps_user_agent)
            .field("search", &self.search)
            .finish()
    }
}
