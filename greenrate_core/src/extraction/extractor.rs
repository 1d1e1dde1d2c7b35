//! Field extraction engine.
//!
//! The extractor applies every compiled pattern to the normalized query and
//! keeps the raw captured strings. Numbers are parsed lazily by the formula
//! that needs them, so a malformed value only matters when it is used.

use regex::{Captures, Regex};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, warn};

use super::field::Field;
use super::patterns::{LENGTH_FIRST, PatternDef, WIDTH_FIRST, default_patterns};
use crate::error::{BuildError, CalcError, Result};
use crate::units::UnitFamily;

/// A compiled field pattern.
#[derive(Debug, Clone)]
pub struct FieldPattern {
    pub field: Field,
    pub regex: Regex,
    pub value_group: usize,
    pub unit_group: Option<usize>,
}

impl FieldPattern {
    fn compile(def: &PatternDef) -> std::result::Result<Self, BuildError> {
        let regex = Regex::new(&def.pattern).map_err(|source| BuildError::Regex {
            field: def.field.as_str().to_string(),
            source,
        })?;
        Ok(Self {
            field: def.field,
            regex,
            value_group: def.value_group,
            unit_group: def.unit_group,
        })
    }

    /// First match in the text, if any.
    fn capture(&self, text: &str) -> Option<Capture> {
        let caps = self.regex.captures(text)?;
        let groups = caps
            .iter()
            .skip(1)
            .map(|group| group.map(|m| m.as_str().to_string()))
            .collect();
        Some(Capture {
            groups,
            value_group: self.value_group,
            unit_group: self.unit_group,
        })
    }
}

/// Raw capture groups of one matched field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Capture {
    /// Capture groups 1..n; unmatched optional groups are `None`.
    pub groups: Vec<Option<String>>,
    #[serde(skip)]
    value_group: usize,
    #[serde(skip)]
    unit_group: Option<usize>,
}

impl Capture {
    fn group(&self, index: usize) -> Option<&str> {
        self.groups
            .get(index.checked_sub(1)?)
            .and_then(Option::as_deref)
    }

    /// The captured value, as written.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.group(self.value_group)
    }

    /// The captured unit token, if the pattern has one and it matched.
    #[must_use]
    pub fn unit(&self) -> Option<&str> {
        self.unit_group.and_then(|index| self.group(index))
    }
}

/// Length and width with units, from one compound phrase in either order or
/// from two separately labelled values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dimensions {
    pub length: String,
    pub length_unit: String,
    pub width: String,
    pub width_unit: String,
}

impl Dimensions {
    fn from_captures(caps: &Captures<'_>) -> Option<Self> {
        Some(Self {
            length: caps.name("length")?.as_str().to_string(),
            length_unit: caps.name("length_unit")?.as_str().to_string(),
            width: caps.name("width")?.as_str().to_string(),
            width_unit: caps.name("width_unit")?.as_str().to_string(),
        })
    }

    /// The shared unit family, or `UnitMismatch` when the two sides disagree.
    pub fn family(&self) -> Result<UnitFamily> {
        match (
            UnitFamily::resolve(&self.length_unit),
            UnitFamily::resolve(&self.width_unit),
        ) {
            (Some(length), Some(width)) if length == width => Ok(length),
            (Some(_), Some(_)) => Err(CalcError::UnitMismatch),
            _ => Err(CalcError::MissingUnit),
        }
    }

    /// Length × width in the shared unit family.
    pub fn area(&self) -> Result<(f64, UnitFamily)> {
        let family = self.family()?;
        let length = parse_number(Field::Length.label(), &self.length)?;
        let width = parse_number(Field::Width.label(), &self.width)?;
        Ok((length * width, family))
    }
}

/// Everything extracted from one query. Absence means "not mentioned".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldSet {
    captures: BTreeMap<Field, Capture>,
    dimensions: Option<Dimensions>,
}

impl FieldSet {
    /// True when the field was mentioned.
    #[must_use]
    pub fn contains(&self, field: Field) -> bool {
        match field {
            Field::Dimensions => self.dimensions.is_some(),
            _ => self.captures.contains_key(&field),
        }
    }

    /// True when every listed field was mentioned.
    #[must_use]
    pub fn all(&self, fields: &[Field]) -> bool {
        fields.iter().all(|f| self.contains(*f))
    }

    /// True when at least one listed field was mentioned.
    #[must_use]
    pub fn any(&self, fields: &[Field]) -> bool {
        fields.iter().any(|f| self.contains(*f))
    }

    /// Labels of the listed fields that were not mentioned, in the given order.
    #[must_use]
    pub fn missing(&self, fields: &[Field]) -> Vec<&'static str> {
        fields
            .iter()
            .filter(|f| !self.contains(**f))
            .map(Field::label)
            .collect()
    }

    #[must_use]
    pub fn capture(&self, field: Field) -> Option<&Capture> {
        self.captures.get(&field)
    }

    /// Raw value text of a field.
    #[must_use]
    pub fn text(&self, field: Field) -> Option<&str> {
        self.capture(field).and_then(Capture::value)
    }

    /// Raw unit token attached to a field.
    #[must_use]
    pub fn unit(&self, field: Field) -> Option<&str> {
        self.capture(field).and_then(Capture::unit)
    }

    #[must_use]
    pub const fn dimensions(&self) -> Option<&Dimensions> {
        self.dimensions.as_ref()
    }

    /// Parse a field as a number; `Ok(None)` when the field is absent.
    pub fn number(&self, field: Field) -> Result<Option<f64>> {
        self.text(field)
            .map(|raw| parse_number(field.label(), raw))
            .transpose()
    }

    /// Fail with `MissingField` unless every listed field was mentioned.
    pub fn ensure(&self, metric: &'static str, fields: &[Field]) -> Result<()> {
        let missing = self.missing(fields);
        if missing.is_empty() {
            Ok(())
        } else {
            Err(CalcError::missing(metric, missing))
        }
    }

    /// Check presence of all fields, then parse each of them.
    pub fn require<const N: usize>(
        &self,
        metric: &'static str,
        fields: [Field; N],
    ) -> Result<[f64; N]> {
        self.ensure(metric, &fields)?;
        let mut values = [0.0; N];
        for (slot, field) in values.iter_mut().zip(fields) {
            *slot = self
                .number(field)?
                .ok_or_else(|| CalcError::missing(metric, vec![field.label()]))?;
        }
        Ok(values)
    }

    /// Iterate over the matched fields in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &Capture)> {
        self.captures.iter().map(|(field, capture)| (*field, capture))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.captures.len() + usize::from(self.dimensions.is_some())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn parse_number(label: &'static str, raw: &str) -> Result<f64> {
    raw.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| {
            warn!("Value for {label} is not a number: {raw:?}");
            CalcError::InvalidNumber {
                field: label,
                raw: raw.to_string(),
            }
        })
}

/// Length and width labelled apart from each other, each with its own unit.
fn separate_dimensions(fields: &FieldSet) -> Option<Dimensions> {
    let length = fields.capture(Field::Length)?;
    let width = fields.capture(Field::Width)?;
    Some(Dimensions {
        length: length.value()?.to_string(),
        length_unit: length.unit()?.to_string(),
        width: width.value()?.to_string(),
        width_unit: width.unit()?.to_string(),
    })
}

/// Compiled field registry, built once and shared read-only.
#[derive(Debug, Clone)]
pub struct FieldExtractor {
    patterns: Vec<FieldPattern>,
    length_first: Regex,
    width_first: Regex,
}

impl FieldExtractor {
    /// Compile a registry from pattern definitions.
    ///
    /// # Errors
    /// Returns an error if a regex is invalid or a field is defined twice.
    pub fn new(defs: &[PatternDef]) -> std::result::Result<Self, BuildError> {
        let mut patterns: Vec<FieldPattern> = Vec::with_capacity(defs.len());
        for def in defs {
            if def.field == Field::Dimensions || patterns.iter().any(|p| p.field == def.field) {
                return Err(BuildError::DuplicateField(def.field.as_str().to_string()));
            }
            patterns.push(FieldPattern::compile(def)?);
        }

        let compound = |pattern: &str| {
            Regex::new(pattern).map_err(|source| BuildError::Regex {
                field: Field::Dimensions.as_str().to_string(),
                source,
            })
        };

        Ok(Self {
            patterns,
            length_first: compound(LENGTH_FIRST)?,
            width_first: compound(WIDTH_FIRST)?,
        })
    }

    /// Compile the built-in registry.
    ///
    /// # Errors
    /// Returns an error if a built-in pattern fails to compile.
    pub fn with_defaults() -> std::result::Result<Self, BuildError> {
        Self::new(&default_patterns())
    }

    #[must_use]
    pub fn patterns(&self) -> &[FieldPattern] {
        &self.patterns
    }

    /// Run every pattern once against already-normalized text.
    #[must_use]
    pub fn extract(&self, text: &str) -> FieldSet {
        let mut fields = FieldSet::default();

        for pattern in &self.patterns {
            if let Some(capture) = pattern.capture(text) {
                debug!("Match for {}: {:?}", pattern.field, capture.groups);
                fields.captures.insert(pattern.field, capture);
            }
        }

        let dimensions = self
            .dimensions(text)
            .or_else(|| separate_dimensions(&fields));
        fields.dimensions = dimensions;
        if let Some(dimensions) = &fields.dimensions {
            debug!("Match for {}: {dimensions:?}", Field::Dimensions);
        }

        fields
    }

    /// Try both orderings and keep whichever starts first in the text.
    fn dimensions(&self, text: &str) -> Option<Dimensions> {
        let length_first = self.length_first.captures(text);
        let width_first = self.width_first.captures(text);

        let start = |caps: &Captures<'_>| caps.get(0).map_or(usize::MAX, |m| m.start());
        let earliest = match (length_first, width_first) {
            (Some(a), Some(b)) => Some(if start(&b) < start(&a) { b } else { a }),
            (a, b) => a.or(b),
        }?;

        Dimensions::from_captures(&earliest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn extractor() -> FieldExtractor {
        FieldExtractor::with_defaults().expect("default patterns should compile")
    }

    #[test]
    fn test_extract_labelled_value() {
        let fields = extractor().extract("regular building occupants = 120, residential");
        assert_eq!(fields.text(Field::Occupants), Some("120"));
        assert_eq!(fields.text(Field::BuildingType), Some("residential"));
        assert!(!fields.contains(Field::DwellingUnits));
    }

    #[test]
    fn test_first_occurrence_wins() {
        let fields = extractor().extract("rainfall = 10, rainfall = 99");
        assert_eq!(fields.text(Field::Rainfall), Some("10"));
    }

    #[test]
    fn test_area_unit_is_optional() {
        let ex = extractor();

        let fields = ex.extract("area = 10000 ft");
        assert_eq!(fields.text(Field::Area), Some("10000"));
        assert_eq!(fields.unit(Field::Area), Some("ft"));

        let fields = ex.extract("area = 250");
        assert_eq!(fields.text(Field::Area), Some("250"));
        assert_eq!(fields.unit(Field::Area), None);

        let fields = ex.extract("floor area = 80 m2, more text");
        assert_eq!(fields.unit(Field::Area), Some("m2"));
    }

    #[test]
    fn test_standalone_unit_ignores_letters_inside_words() {
        let ex = extractor();
        assert!(!ex.extract("compute the minimum").contains(Field::Unit));
        assert_eq!(
            ex.extract("outdoor area in feet, peak inpatients = 3").text(Field::Unit),
            Some("feet")
        );
    }

    #[test]
    fn test_dimensions_either_order() {
        let ex = extractor();

        let fields = ex.extract("length = 20 ft, width = 10 ft");
        let dims = fields.dimensions().cloned();
        assert_eq!(
            dims,
            Some(Dimensions {
                length: "20".to_string(),
                length_unit: "ft".to_string(),
                width: "10".to_string(),
                width_unit: "ft".to_string(),
            })
        );

        let fields = ex.extract("width = 4 m and length = 7 m");
        let dims = fields.dimensions().cloned();
        assert_eq!(
            dims,
            Some(Dimensions {
                length: "7".to_string(),
                length_unit: "m".to_string(),
                width: "4".to_string(),
                width_unit: "m".to_string(),
            })
        );
    }

    #[test]
    fn test_dimensions_without_units_are_not_compound() {
        let fields = extractor().extract("length = 20, width = 10");
        assert!(fields.dimensions().is_none());
        assert!(fields.contains(Field::Length));
        assert!(fields.contains(Field::Width));
    }

    #[test]
    fn test_separate_length_and_width_with_units() {
        let ex = extractor();

        let fields = ex.extract("length = 100 ft, the width = 100 ft");
        assert_eq!(
            fields.dimensions().cloned(),
            Some(Dimensions {
                length: "100".to_string(),
                length_unit: "ft".to_string(),
                width: "100".to_string(),
                width_unit: "ft".to_string(),
            })
        );

        let fields = ex.extract("length = 20 ft; width = 10 m");
        assert_eq!(
            fields.dimensions().map(Dimensions::family),
            Some(Err(CalcError::UnitMismatch))
        );

        let fields = ex.extract("length = 20 ft; width = 10");
        assert!(fields.dimensions().is_none());
    }

    #[test]
    fn test_length_unit_needs_word_boundary() {
        let fields = extractor().extract("length = 5 more or less, width = 2 m");
        assert_eq!(fields.unit(Field::Length), None);
        assert!(fields.dimensions().is_none());
    }

    #[test]
    fn test_dimension_family_mismatch() {
        let fields = extractor().extract("length = 20 feet, width = 10 meters");
        let dims = fields.dimensions().cloned();
        assert_eq!(dims.map(|d| d.family()), Some(Err(CalcError::UnitMismatch)));
    }

    #[test]
    fn test_number_parsing_is_lazy() {
        let fields = extractor().extract("rainfall = 1.2.3");
        assert_eq!(fields.text(Field::Rainfall), Some("1.2.3"));
        assert_eq!(
            fields.number(Field::Rainfall),
            Err(CalcError::InvalidNumber {
                field: "rainfall",
                raw: "1.2.3".to_string(),
            })
        );
        assert_eq!(fields.number(Field::Infiltration), Ok(None));
    }

    #[test]
    fn test_require_reports_every_missing_field() {
        let fields = extractor().extract("fmax = 0.8, t = 5");
        assert_eq!(
            fields.require("depression storage", [Field::Fmin, Field::Fmax, Field::K, Field::T]),
            Err(CalcError::missing("depression storage", vec!["fmin", "k"]))
        );
    }

    #[test]
    fn test_require_returns_values_in_order() {
        let fields = extractor().extract("t = 5, k = 0.3");
        assert_eq!(
            fields.require("decay", [Field::K, Field::T]),
            Ok([0.3, 5.0])
        );
    }

    #[test]
    fn test_single_letter_fields_need_word_boundary() {
        let fields = extractor().extract("development footprint = 100");
        assert!(!fields.contains(Field::T));
    }

    #[test]
    fn test_duplicate_field_is_rejected() {
        let defs = vec![
            PatternDef::new(Field::Nodes, r"nodes\s*=\s*(\d+)"),
            PatternDef::new(Field::Nodes, r"node\s*=\s*(\d+)"),
        ];
        assert!(matches!(
            FieldExtractor::new(&defs),
            Err(BuildError::DuplicateField(name)) if name == "nodes"
        ));
    }

    #[test]
    fn test_invalid_regex_is_rejected() {
        let defs = vec![PatternDef::new(Field::Nodes, r"nodes\s*=\s*(\d+")];
        assert!(matches!(
            FieldExtractor::new(&defs),
            Err(BuildError::Regex { .. })
        ));
    }
}
