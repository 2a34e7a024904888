use super::*;

fn parse(text: &str) -> ParsedIntent {
    IntentParser::default().parse(text)
}

// ---------------------------------------------------------------------------
// Place type
// ---------------------------------------------------------------------------

#[test]
fn text_without_triggers_defaults_to_restaurant() {
    for text in [
        "",
        "somewhere nice in oakland",
        "show me options near stanford",
    ] {
        assert_eq!(parse(text).place_type, "restaurant", "input: {text:?}");
    }
}

#[test]
fn earlier_table_entry_wins_place_type_ties() {
    assert_eq!(parse("coffee and then a bar").place_type, "coffee shop");
    assert_eq!(parse("a cafe or a bar").place_type, "cafe");
}

#[test]
fn place_type_match_is_substring_based() {
    // "barbecue" contains the "bar" trigger.
    assert_eq!(parse("best barbecue in oakland").place_type, "bar");
}

#[test]
fn place_type_is_case_insensitive() {
    let intent = parse("COFFEE near SAN FRANCISCO");
    assert_eq!(intent.place_type, "coffee shop");
    assert_eq!(intent.locations, vec!["San Francisco"]);
}

#[test]
fn parsed_place_type_is_always_recognized() {
    for text in ["", "pharmacy", "gas please", "a lodge", "the clinic", "xyz"] {
        let place = parse(text).place_type;
        assert!(
            place == "restaurant" || PLACE_TYPES.iter().any(|(p, _)| *p == place),
            "unexpected place type {place:?} for {text:?}"
        );
    }
}

// ---------------------------------------------------------------------------
// Constraints
// ---------------------------------------------------------------------------

#[test]
fn parking_and_quiet_each_appear_once() {
    let intent = parse("I need parking and a quiet cafe, somewhere to park");
    let parking = intent
        .constraints
        .iter()
        .filter(|c| c.kind() == ConstraintKind::Parking)
        .count();
    let quiet = intent
        .constraints
        .iter()
        .filter(|c| c.kind() == ConstraintKind::Quiet)
        .count();
    assert_eq!(parking, 1);
    assert_eq!(quiet, 1);
    assert_eq!(
        intent.constraint(ConstraintKind::Parking),
        Some(&Constraint::Parking(true))
    );
    assert_eq!(
        intent.constraint(ConstraintKind::Quiet),
        Some(&Constraint::Quiet(true))
    );
}

#[test]
fn constraints_follow_table_order() {
    let intent = parse("a quiet bar with parking");
    assert_eq!(
        intent.constraints,
        vec![Constraint::Parking(true), Constraint::Quiet(true)]
    );
}

#[test]
fn rating_trigger_uses_default_threshold() {
    let intent = parse("a highly rated cafe");
    assert_eq!(intent.constraints, vec![Constraint::RatingMin(4.0)]);
}

#[test]
fn injected_defaults_drive_thresholds() {
    let defaults = SearchDefaults {
        rating_min: 4.5,
        radius_meters: 8000,
        budget_price_level: 1,
        ..SearchDefaults::default()
    };
    let intent = IntentParser::new(&defaults).parse("cheap place with 5 stars");
    assert_eq!(
        intent.constraints,
        vec![Constraint::RatingMin(4.5), Constraint::PriceRange(1)]
    );
    assert_eq!(intent.radius_meters, 8000);
}

#[test]
fn time_limit_is_extracted_in_minutes() {
    let intent = parse("quiet restaurants where I can finish a meeting in 45 minutes");
    assert_eq!(intent.place_type, "restaurant");
    assert_eq!(
        intent.constraints,
        vec![Constraint::Quiet(true), Constraint::TimeLimit(45)]
    );
}

#[test]
fn budget_phrase_adds_price_range() {
    let intent = parse("cheap eats in berkeley");
    assert_eq!(intent.constraints, vec![Constraint::PriceRange(2)]);
    assert_eq!(intent.locations, vec!["Berkeley"]);
}

#[test]
fn first_constraint_of_a_kind_wins() {
    let mut constraints = vec![Constraint::Parking(true)];
    push_first(&mut constraints, Constraint::Parking(false));
    push_first(&mut constraints, Constraint::RatingMin(3.0));
    push_first(&mut constraints, Constraint::RatingMin(4.5));
    assert_eq!(
        constraints,
        vec![Constraint::Parking(true), Constraint::RatingMin(3.0)]
    );
}

#[test]
fn constraint_serializes_as_type_and_value() {
    let json = serde_json::to_value(Constraint::Parking(true)).unwrap();
    assert_eq!(json, serde_json::json!({"type": "parking", "value": true}));

    let json = serde_json::to_value(Constraint::RatingMin(4.0)).unwrap();
    assert_eq!(json, serde_json::json!({"type": "rating_min", "value": 4.0}));

    let back: Constraint =
        serde_json::from_value(serde_json::json!({"type": "open_late", "value": true})).unwrap();
    assert_eq!(back, Constraint::OpenLate(true));
}

// ---------------------------------------------------------------------------
// Locations
// ---------------------------------------------------------------------------

#[test]
fn locations_follow_table_order_not_text_order() {
    let intent = parse("halfway between san jose and san francisco");
    assert_eq!(intent.locations, vec!["San Francisco", "San Jose"]);
}

#[test]
fn joined_spellings_are_canonicalized() {
    let intent = parse("paloalto to sanjose");
    assert_eq!(intent.locations, vec!["San Jose", "Palo Alto"]);
}

#[test]
fn pattern_contributes_at_most_one_location() {
    let intent = parse("oakland to oakland and back to oakland");
    assert_eq!(intent.locations, vec!["Oakland"]);
}

#[test]
fn abbreviation_is_title_cased_not_expanded() {
    let intent = parse("coffee in sf");
    assert_eq!(intent.locations, vec!["Sf"]);
}

#[test]
fn multi_word_locations_are_title_cased() {
    let intent = parse("a bar near union square or the mission district");
    assert_eq!(intent.locations, vec!["Union Square", "Mission District"]);
}

#[test]
fn every_location_pattern_compiles() {
    assert_eq!(LOCATION_REGEXES.len(), LOCATION_PATTERNS.len());
}

// ---------------------------------------------------------------------------
// Radius
// ---------------------------------------------------------------------------

#[test]
fn radius_in_km_is_converted() {
    assert_eq!(parse("within 3 km of oakland").radius_meters, 3000);
    assert_eq!(parse("within 10km of oakland").radius_meters, 10_000);
}

#[test]
fn radius_in_miles_is_multiplied_by_one_thousand() {
    assert_eq!(parse("within 2 miles of oakland").radius_meters, 2000);
    assert_eq!(parse("within 1 mile of oakland").radius_meters, 1000);
}

#[test]
fn radius_in_meters_keeps_default() {
    assert_eq!(parse("within 500 meters of oakland").radius_meters, 5000);
}

#[test]
fn radius_defaults_when_absent() {
    assert_eq!(parse("a bar in oakland").radius_meters, 5000);
}

// ---------------------------------------------------------------------------
// Midpoint
// ---------------------------------------------------------------------------

#[test]
fn midpoint_triggers_set_flag() {
    for text in [
        "halfway to oakland",
        "between berkeley and oakland",
        "the midpoint of two cities",
        "in the middle of nowhere",
    ] {
        assert!(parse(text).midpoint_requested, "input: {text:?}");
    }
}

#[test]
fn midpoint_flag_absent_without_triggers() {
    assert!(!parse("a bar near oakland").midpoint_requested);
}

// ---------------------------------------------------------------------------
// Whole-query examples
// ---------------------------------------------------------------------------

#[test]
fn coffee_shop_halfway_example() {
    let intent =
        parse("Find me a coffee shop halfway between San Francisco and San Jose with parking");
    assert_eq!(
        intent,
        ParsedIntent {
            place_type: "coffee shop".to_string(),
            locations: vec!["San Francisco".to_string(), "San Jose".to_string()],
            constraints: vec![Constraint::Parking(true)],
            midpoint_requested: true,
            radius_meters: 5000,
        }
    );
}

#[test]
fn empty_text_yields_defaults() {
    let intent = parse("");
    assert_eq!(intent.place_type, "restaurant");
    assert!(intent.locations.is_empty());
    assert!(intent.constraints.is_empty());
    assert!(!intent.midpoint_requested);
    assert_eq!(intent.radius_meters, 5000);
}

#[test]
fn title_case_matches_word_boundaries() {
    assert_eq!(title_case("union square"), "Union Square");
    assert_eq!(title_case("San Jose"), "San Jose");
    assert_eq!(title_case("CASTRO district"), "Castro District");
    assert_eq!(title_case("o'neil"), "O'Neil");
}
