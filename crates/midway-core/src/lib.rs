//! Core domain for Midway: types, geo primitives, the intent parser and
//! configuration.

mod app_config;
mod config;
mod error;
pub mod geo;
pub mod intent;
pub mod types;

pub use app_config::{AppConfig, Environment, SearchDefaults};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::ConfigError;
pub use geo::{format_distance, haversine_meters};
pub use intent::IntentParser;
pub use types::{
    CandidatePlace, Constraint, ConstraintKind, Coordinate, Location, OpeningHours, ParsedIntent,
    RankedResult,
};
