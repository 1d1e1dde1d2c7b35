use thiserror::Error;

pub type Result<T> = std::result::Result<T, CalcError>;

/// Everything that can stop a query from producing a number.
///
/// The `Display` output of each variant is the exact message returned to the
/// caller, so every variant carries enough context to be actionable on its own.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("Missing input for {metric} calculation. Please specify: {}.", .fields.join(", "))]
    MissingField {
        metric: &'static str,
        fields: Vec<&'static str>,
    },

    #[error("Invalid input for {field}: '{raw}' is not a number. Please specify a correct number.")]
    InvalidNumber { field: &'static str, raw: String },

    #[error(
        "Inconsistent units. Length and width must be specified in the same unit, either feet or meters."
    )]
    UnitMismatch,

    #[error("Specify the unit for required calculation")]
    MissingUnit,

    #[error("The unit for {quantity} must be in {expected}.")]
    UnsupportedUnit {
        quantity: &'static str,
        expected: &'static str,
    },

    #[error("{quantity} cannot be zero.")]
    DegenerateInput { quantity: &'static str },

    #[error("Specify just one of these: {}.", .options.join(", "))]
    MultipleConflictingInputs { options: Vec<&'static str> },

    #[error("Invalid {subject}: {combination} has no formula.")]
    UnsupportedCombination {
        subject: &'static str,
        combination: String,
    },

    #[error("No valid numerical data found for required calculation")]
    NoIntentMatched,

    #[error("No valid number in the response")]
    NoNumericData,
}

impl CalcError {
    /// Shorthand for a missing-field error.
    #[must_use]
    pub const fn missing(metric: &'static str, fields: Vec<&'static str>) -> Self {
        Self::MissingField { metric, fields }
    }

    /// Stable snake_case tag, used in JSON output.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::MissingField { .. } => "missing_field",
            Self::InvalidNumber { .. } => "invalid_number",
            Self::UnitMismatch => "unit_mismatch",
            Self::MissingUnit => "missing_unit",
            Self::UnsupportedUnit { .. } => "unsupported_unit",
            Self::DegenerateInput { .. } => "degenerate_input",
            Self::MultipleConflictingInputs { .. } => "multiple_conflicting_inputs",
            Self::UnsupportedCombination { .. } => "unsupported_combination",
            Self::NoIntentMatched => "no_intent_matched",
            Self::NoNumericData => "no_numeric_data",
        }
    }
}

/// Failure while compiling the pattern registry.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("invalid regex for field {field}: {source}")]
    Regex {
        field: String,
        #[source]
        source: regex::Error,
    },

    #[error("duplicate pattern for field {0}")]
    DuplicateField(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_lists_every_name() {
        let err = CalcError::missing("depression storage", vec!["fmin", "k"]);
        assert_eq!(
            err.to_string(),
            "Missing input for depression storage calculation. Please specify: fmin, k."
        );
    }

    #[test]
    fn test_degenerate_message() {
        let err = CalcError::DegenerateInput {
            quantity: "Total previously disturbed site area",
        };
        assert_eq!(
            err.to_string(),
            "Total previously disturbed site area cannot be zero."
        );
        assert_eq!(err.kind(), "degenerate_input");
    }

    #[test]
    fn test_conflicting_inputs_message() {
        let err = CalcError::MultipleConflictingInputs {
            options: vec!["recycled", "reused"],
        };
        assert_eq!(err.to_string(), "Specify just one of these: recycled, reused.");
    }

    #[test]
    fn test_fallback_messages_are_fixed() {
        assert_eq!(
            CalcError::NoNumericData.to_string(),
            "No valid number in the response"
        );
        assert_eq!(
            CalcError::NoIntentMatched.to_string(),
            "No valid numerical data found for required calculation"
        );
    }
}
