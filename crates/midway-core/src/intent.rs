//! Deterministic intent parser.
//!
//! Turns free text into a [`ParsedIntent`] by scanning a handful of ordered
//! tables. Every table is plain data so it can be tested (and extended)
//! without touching the scanning code. Matching is substring based on the
//! lower-cased input; the parser never fails.

use std::sync::LazyLock;

use regex::Regex;

use crate::app_config::SearchDefaults;
use crate::types::{Constraint, ConstraintKind, ParsedIntent};

/// Recognized place categories and their trigger phrases, in priority order.
/// The first category with any matching trigger wins.
pub const PLACE_TYPES: &[(&str, &[&str])] = &[
    ("coffee shop", &["coffee shop", "coffee", "coffeeshop"]),
    ("cafe", &["cafe", "café"]),
    ("restaurant", &["restaurant", "restaurants", "dining"]),
    ("bar", &["bar", "pub", "tavern"]),
    ("hotel", &["hotel", "inn", "lodge"]),
    ("gas station", &["gas station", "gas", "fuel"]),
    ("pharmacy", &["pharmacy", "drugstore", "chemist"]),
    ("hospital", &["hospital", "medical center", "clinic"]),
];

/// Presence-style constraints and their trigger phrases, in emission order.
pub const CONSTRAINT_TRIGGERS: &[(ConstraintKind, &[&str])] = &[
    (ConstraintKind::Parking, &["parking", "park", "car"]),
    (
        ConstraintKind::Quiet,
        &["quiet", "silent", "peaceful", "calm"],
    ),
    (
        ConstraintKind::OpenLate,
        &["open late", "late", "until late", "night"],
    ),
    (ConstraintKind::Wifi, &["wifi", "internet", "wireless"]),
    (
        ConstraintKind::RatingMin,
        &["good rating", "high rating", "rated", "stars"],
    ),
];

/// Phrases that ask for an inexpensive place.
pub const BUDGET_TRIGGERS: &[&str] = &["cheap", "budget", "inexpensive", "affordable"];

/// Known place names. Each pattern contributes at most one location, and
/// locations come out in table order.
pub const LOCATION_PATTERNS: &[&str] = &[
    r"san francisco|sf",
    r"san jose|sanjose",
    r"palo alto|paloalto",
    r"oakland",
    r"berkeley",
    r"stanford",
    r"union square",
    r"downtown",
    r"mission district",
    r"castro district",
];

/// Fixed spelling substitutions applied to a matched location before
/// title-casing.
pub const LOCATION_CANONICAL: &[(&str, &str)] =
    &[("sanjose", "San Jose"), ("paloalto", "Palo Alto")];

/// Phrases that ask for a search around the midpoint of two locations.
pub const MIDPOINT_TRIGGERS: &[&str] = &["halfway", "between", "midpoint", "middle"];

static LOCATION_REGEXES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    LOCATION_PATTERNS
        .iter()
        .map(|p| Regex::new(p).expect("valid regex"))
        .collect()
});

static RADIUS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"within (\d+)\s*(km|miles?|meters?)").expect("valid regex"));

static TIME_LIMIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*(?:minutes?|mins?)\b").expect("valid regex"));

/// Parses free-text queries using the thresholds from [`SearchDefaults`].
#[derive(Debug, Clone)]
pub struct IntentParser {
    default_place_type: String,
    default_radius_meters: u32,
    rating_min: f64,
    budget_price_level: u8,
}

impl Default for IntentParser {
    fn default() -> Self {
        Self::new(&SearchDefaults::default())
    }
}

impl IntentParser {
    #[must_use]
    pub fn new(defaults: &SearchDefaults) -> Self {
        Self {
            default_place_type: defaults.place_type.clone(),
            default_radius_meters: defaults.radius_meters,
            rating_min: defaults.rating_min,
            budget_price_level: defaults.budget_price_level,
        }
    }

    /// Parse `text` into a [`ParsedIntent`]. Text that matches nothing yields
    /// the default place type, no locations, no constraints, no midpoint and
    /// the default radius.
    #[must_use]
    pub fn parse(&self, text: &str) -> ParsedIntent {
        let lower = text.to_lowercase();

        ParsedIntent {
            place_type: self.place_type(&lower),
            locations: extract_locations(&lower),
            constraints: self.constraints(&lower),
            midpoint_requested: contains_any(&lower, MIDPOINT_TRIGGERS),
            radius_meters: self.radius_meters(&lower),
        }
    }

    fn place_type(&self, lower: &str) -> String {
        PLACE_TYPES
            .iter()
            .find(|(_, triggers)| contains_any(lower, triggers))
            .map_or_else(
                || self.default_place_type.clone(),
                |(place, _)| (*place).to_string(),
            )
    }

    fn constraints(&self, lower: &str) -> Vec<Constraint> {
        let mut constraints = Vec::new();

        for (kind, triggers) in CONSTRAINT_TRIGGERS {
            if !contains_any(lower, triggers) {
                continue;
            }
            if let Some(constraint) = self.flag_constraint(*kind) {
                push_first(&mut constraints, constraint);
            }
        }

        if let Some(minutes) = extract_time_limit(lower) {
            push_first(&mut constraints, Constraint::TimeLimit(minutes));
        }

        if contains_any(lower, BUDGET_TRIGGERS) {
            push_first(
                &mut constraints,
                Constraint::PriceRange(self.budget_price_level),
            );
        }

        constraints
    }

    /// Constraint emitted for a triggered entry of [`CONSTRAINT_TRIGGERS`].
    /// Value-bearing kinds that are not trigger driven yield `None`.
    fn flag_constraint(&self, kind: ConstraintKind) -> Option<Constraint> {
        match kind {
            ConstraintKind::Parking => Some(Constraint::Parking(true)),
            ConstraintKind::Quiet => Some(Constraint::Quiet(true)),
            ConstraintKind::OpenLate => Some(Constraint::OpenLate(true)),
            ConstraintKind::Wifi => Some(Constraint::Wifi(true)),
            ConstraintKind::RatingMin => Some(Constraint::RatingMin(self.rating_min)),
            ConstraintKind::PriceRange | ConstraintKind::TimeLimit => None,
        }
    }

    /// Kilometers and miles are both multiplied by 1000, so a radius given in
    /// miles comes out roughly 38% short. Metre units keep the default.
    fn radius_meters(&self, lower: &str) -> u32 {
        let Some(caps) = RADIUS_RE.captures(lower) else {
            return self.default_radius_meters;
        };
        let Ok(value) = caps[1].parse::<u32>() else {
            return self.default_radius_meters;
        };
        let unit = &caps[2];
        if unit.contains("km") || unit.contains("mile") {
            value.saturating_mul(1000)
        } else {
            self.default_radius_meters
        }
    }
}

/// Adds `constraint` unless one of the same kind is already present.
fn push_first(constraints: &mut Vec<Constraint>, constraint: Constraint) {
    if constraints.iter().all(|c| c.kind() != constraint.kind()) {
        constraints.push(constraint);
    }
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

fn extract_locations(lower: &str) -> Vec<String> {
    LOCATION_REGEXES
        .iter()
        .filter_map(|re| re.find(lower))
        .map(|m| canonical_location(m.as_str()))
        .collect()
}

fn canonical_location(matched: &str) -> String {
    let substituted = LOCATION_CANONICAL
        .iter()
        .fold(matched.to_string(), |acc, (from, to)| acc.replace(from, to));
    title_case(&substituted)
}

fn extract_time_limit(lower: &str) -> Option<u32> {
    TIME_LIMIT_RE
        .captures(lower)
        .and_then(|caps| caps[1].parse::<u32>().ok())
        .filter(|minutes| *minutes > 0)
}

/// Upper-cases the first letter of every alphabetic run and lower-cases the
/// rest, so `"union square"` becomes `"Union Square"`.
#[must_use]
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for ch in s.chars() {
        if ch.is_alphabetic() {
            if prev_alpha {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(ch);
            prev_alpha = false;
        }
    }
    out
}

#[cfg(test)]
#[path = "intent_test.rs"]
mod tests;
