//! Query evaluation: normalize, extract, classify, dispatch.

use once_cell::sync::Lazy;
use serde_json::{Value, json};
use tracing::{debug, warn};

use crate::error::{BuildError, CalcError, Result};
use crate::extraction::{Dimensions, FieldExtractor, FieldSet};
use crate::formulas::{self, Computed};
use crate::intent::{Intent, IntentClassifier, IntentFlags};
use crate::normalize::{has_digit, normalize};

/// Outcome of one query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// The intent that was dispatched, or that would have been when the
    /// query was rejected for lacking digits.
    pub intent: Option<Intent>,
    pub outcome: Result<Computed>,
}

impl Evaluation {
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }

    /// Machine-readable form of the answer.
    #[must_use]
    pub fn to_json(&self) -> Value {
        match &self.outcome {
            Ok(computed) => json!({
                "intent": self.intent,
                "ok": true,
                "value": computed.value,
                "message": computed.message,
            }),
            Err(err) => json!({
                "intent": self.intent,
                "ok": false,
                "message": err.to_string(),
                "error_kind": err.kind(),
            }),
        }
    }
}

impl std::fmt::Display for Evaluation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.outcome {
            Ok(computed) => write!(f, "{computed}"),
            Err(err) => write!(f, "{err}"),
        }
    }
}

/// Immutable pattern and intent registry.
///
/// Built once, then shared freely: evaluation takes `&self` and keeps no
/// state between calls.
#[derive(Debug, Clone)]
pub struct Engine {
    extractor: FieldExtractor,
    classifier: IntentClassifier,
}

impl Engine {
    #[must_use]
    pub const fn new(extractor: FieldExtractor, classifier: IntentClassifier) -> Self {
        Self {
            extractor,
            classifier,
        }
    }

    /// Compile the built-in registry.
    pub fn with_defaults() -> std::result::Result<Self, BuildError> {
        Ok(Self::new(
            FieldExtractor::with_defaults()?,
            IntentClassifier::with_defaults(),
        ))
    }

    #[must_use]
    pub const fn extractor(&self) -> &FieldExtractor {
        &self.extractor
    }

    #[must_use]
    pub const fn classifier(&self) -> &IntentClassifier {
        &self.classifier
    }

    /// Fields found in a raw query.
    #[must_use]
    pub fn extract(&self, text: &str) -> FieldSet {
        self.extractor.extract(&normalize(text))
    }

    /// Intent predicates that hold for a raw query.
    #[must_use]
    pub fn intents(&self, text: &str) -> IntentFlags {
        self.classifier.flags(&normalize(text))
    }

    /// Evaluate a raw query.
    #[must_use]
    pub fn evaluate(&self, text: &str) -> Evaluation {
        let text = normalize(text);
        let intent = self.classifier.classify(&text);

        if !has_digit(&text) {
            debug!("No digits in query, intent {intent:?} not dispatched");
            return Evaluation {
                intent,
                outcome: Err(CalcError::NoNumericData),
            };
        }

        let Some(intent) = intent else {
            debug!("No intent matched");
            return Evaluation {
                intent: None,
                outcome: Err(CalcError::NoIntentMatched),
            };
        };

        let fields = self.extractor.extract(&text);
        debug!("Dispatching {intent} with {} extracted fields", fields.len());

        let outcome = check_dimensions(&fields).and_then(|()| formulas::compute(intent, &fields));
        if let Err(err) = &outcome {
            warn!("{intent} failed: {err}");
        }

        Evaluation {
            intent: Some(intent),
            outcome,
        }
    }

    /// Evaluate a raw query and render the single answer string.
    #[must_use]
    pub fn respond(&self, text: &str) -> String {
        self.evaluate(text).to_string()
    }
}

/// Mixed length/width families are rejected whichever metric asked.
fn check_dimensions(fields: &FieldSet) -> Result<()> {
    match fields.dimensions().map(Dimensions::family) {
        Some(Err(CalcError::UnitMismatch)) => Err(CalcError::UnitMismatch),
        _ => Ok(()),
    }
}

static DEFAULT_ENGINE: Lazy<std::result::Result<Engine, BuildError>> =
    Lazy::new(Engine::with_defaults);

/// Answer a query with the process-wide default engine.
#[must_use]
pub fn respond(text: &str) -> String {
    match DEFAULT_ENGINE.as_ref() {
        Ok(engine) => engine.respond(text),
        Err(err) => {
            warn!("Default engine unavailable: {err}");
            err.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn engine() -> Engine {
        Engine::with_defaults().expect("default engine should build")
    }

    #[test]
    fn test_evaluate_records_intent() {
        let evaluation = engine().evaluate("Shower Facilities, regular building occupants = 400");
        assert_eq!(evaluation.intent, Some(Intent::ShowerFacilities));
        assert_eq!(evaluation.to_string(), "3 Showers required");
    }

    #[test]
    fn test_no_digit_wins_over_intent() {
        let evaluation = engine().evaluate("shower facilities please");
        assert_eq!(evaluation.intent, Some(Intent::ShowerFacilities));
        assert_eq!(evaluation.outcome, Err(CalcError::NoNumericData));
    }

    #[test]
    fn test_unknown_query_with_digits() {
        assert_eq!(
            engine().respond("what is 2 + 2"),
            "No valid numerical data found for required calculation"
        );
    }

    #[test]
    fn test_mismatch_checked_before_handler() {
        let response =
            engine().respond("shower facilities, regular building occupants = 90, length = 2 m, width = 3 ft");
        assert_eq!(
            response,
            "Inconsistent units. Length and width must be specified in the same unit, either feet or meters."
        );
    }

    #[test]
    fn test_json_shape() {
        let ok = engine().evaluate("fueling stations, total parking spaces = 100").to_json();
        assert_eq!(ok["ok"], true);
        assert_eq!(ok["value"], 2);
        assert_eq!(ok["intent"], "fueling_stations");

        let err = engine().evaluate("fueling stations, 4 floors").to_json();
        assert_eq!(err["ok"], false);
        assert_eq!(err["error_kind"], "missing_field");
    }

    #[test]
    fn test_global_respond_matches_engine() {
        let text = "connectivity index, street links = 10, nodes = 5";
        assert_eq!(respond(text), engine().respond(text));
        assert_eq!(respond(text), "Connectivity Index = 2");
    }
}
