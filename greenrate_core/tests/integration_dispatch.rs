//! Integration tests for query dispatch.
//!
//! This test suite verifies:
//! - The highest-priority intent wins when several phrases match
//! - Queries without digits are rejected before any handler runs
//! - Queries with digits but no known metric get the fallback message
//! - Evaluation is case-insensitive, stateless and safe to share across threads

use greenrate_core::{CalcError, Engine, Intent, respond};

fn engine() -> Engine {
    Engine::with_defaults().expect("Failed to build default engine")
}

#[test]
fn test_long_term_outranks_showers() {
    let engine = engine();
    let text = "long-term bicycle storage with shower facilities, commercial, regular building occupants = 200";

    let flags = engine.intents(text);
    assert!(flags.get(Intent::LongTermStorage));
    assert!(flags.get(Intent::ShowerFacilities));

    let evaluation = engine.evaluate(text);
    assert_eq!(evaluation.intent, Some(Intent::LongTermStorage));
    assert_eq!(
        evaluation.to_string(),
        "10 Bicycles required for long-term storage (commercial)"
    );
}

#[test]
fn test_runoff_outranks_depression_storage() {
    assert_eq!(
        respond("runoff given depression storage = 4, rainfall = 20, infiltration = 6"),
        "Runoff = 10 mm/hr"
    );
}

#[test]
fn test_vegetated_outranks_open_space() {
    let evaluation = engine().evaluate("vegetated space for the required open space = 40");
    assert_eq!(evaluation.intent, Some(Intent::VegetatedSpace));
    assert_eq!(evaluation.to_string(), "Vegetated space ≥ 10 (25% of required open space)");
}

#[test]
fn test_query_without_digits() {
    let evaluation = engine().evaluate("long-term bicycle storage for a residential building");
    assert_eq!(evaluation.intent, Some(Intent::LongTermStorage));
    assert_eq!(evaluation.outcome, Err(CalcError::NoNumericData));
    assert_eq!(evaluation.to_string(), "No valid number in the response");

    assert_eq!(respond(""), "No valid number in the response");
    assert_eq!(respond("tell me about green buildings"), "No valid number in the response");
}

#[test]
fn test_query_without_intent() {
    let evaluation = engine().evaluate("the building has 40 floors");
    assert_eq!(evaluation.intent, None);
    assert_eq!(
        evaluation.to_string(),
        "No valid numerical data found for required calculation"
    );
}

#[test]
fn test_case_insensitive() {
    assert_eq!(
        respond("SHOWER FACILITIES, Regular Building Occupants = 100"),
        "1 Showers required"
    );
}

#[test]
fn test_repeated_evaluation_is_identical() {
    let engine = engine();
    let text = "short-term bicycle storage, peak visitors = 120";

    let first = engine.evaluate(text);
    let second = engine.evaluate(text);
    assert_eq!(first, second);
    assert_eq!(
        first.to_string(),
        "3 Bicycles required for short-term storage based on peak visitors"
    );
    assert_eq!(respond(text), first.to_string());
}

#[test]
fn test_engine_shared_across_threads() {
    let engine = engine();
    let queries = [
        ("fueling stations, total parking spaces = 120", "3 fueling stations required"),
        ("connectivity index, street links = 9, nodes = 4", "Connectivity Index = 3"),
        ("size of outdoor space, total occupancy = 8", "Size of outdoor space = 2 m²"),
    ];

    std::thread::scope(|scope| {
        for (text, expected) in queries {
            let engine = &engine;
            scope.spawn(move || {
                for _ in 0..20 {
                    assert_eq!(engine.respond(text), expected);
                }
            });
        }
    });
}

#[test]
fn test_json_outcome() {
    let engine = engine();

    let ok = engine.evaluate("required open space, total site area = 1000").to_json();
    assert_eq!(ok["intent"], "open_space");
    assert_eq!(ok["value"], 300);

    let err = engine.evaluate("the building has 40 floors").to_json();
    assert_eq!(err["ok"], false);
    assert!(err["intent"].is_null());
    assert_eq!(err["error_kind"], "no_intent_matched");
}
