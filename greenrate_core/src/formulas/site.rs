//! Site restoration, open space, storm water and land reuse.

use super::{Computed, percentage, round_up};
use crate::error::{CalcError, Result};
use crate::extraction::{Field, FieldSet};
use crate::units::UnitFamily;
use tracing::debug;

pub(super) const RESTORATION_INPUTS: &[Field] = &[Field::RestorationArea, Field::DisturbedArea];
pub(super) const VEGETATED_INPUTS: &[Field] = &[Field::RequiredOpenSpace, Field::TotalSiteArea];
pub(super) const OUTDOOR_AREA_INPUTS: &[Field] =
    &[Field::Unit, Field::PeakInpatients, Field::QualifyingOutpatients];
pub(super) const DECAY_INPUTS: &[Field] = &[Field::Fmin, Field::Fmax, Field::K, Field::T];
pub(super) const RUNOFF_INPUTS: &[Field] = &[
    Field::Rainfall,
    Field::Infiltration,
    Field::DepressionStorage,
    Field::Fmin,
    Field::Fmax,
    Field::K,
    Field::T,
];
pub(super) const DEVELOPMENT_INPUTS: &[Field] =
    &[Field::PreviouslyDevelopedArea, Field::DevelopmentFootprint];

const OPEN_SPACE_SHARE: f64 = 0.30;
const VEGETATED_SHARE: f64 = 0.25;
const OUTDOOR_SHARE: f64 = 0.75;

pub(super) fn restoration_area(fields: &FieldSet) -> Result<Computed> {
    let [restoration, disturbed] = fields.require("restoration area", [
        Field::RestorationArea,
        Field::DisturbedArea,
    ])?;
    let share = percentage(restoration, disturbed, "Total previously disturbed site area")?;
    Ok(Computed::new(
        share,
        format!("Percentage of restoration area = {share}%"),
    ))
}

fn required_open_space(site_area: f64) -> i64 {
    round_up(site_area * OPEN_SPACE_SHARE)
}

pub(super) fn open_space(fields: &FieldSet) -> Result<Computed> {
    let [site_area] = fields.require("required open space", [Field::TotalSiteArea])?;
    let open = required_open_space(site_area);
    Ok(Computed::new(
        open,
        format!("Required open space ≥ {open} (30% of total site area)"),
    ))
}

/// A directly given open space wins over one derived from the site area.
pub(super) fn vegetated_space(fields: &FieldSet) -> Result<Computed> {
    let open = match fields.number(Field::RequiredOpenSpace)? {
        Some(open) => open,
        None => match fields.number(Field::TotalSiteArea)? {
            Some(site_area) => required_open_space(site_area) as f64,
            None => {
                return Err(CalcError::missing(
                    "vegetated space",
                    vec!["total site area or required open space"],
                ));
            }
        },
    };

    let vegetated = round_up(open * VEGETATED_SHARE);
    Ok(Computed::new(
        vegetated,
        format!("Vegetated space ≥ {vegetated} (25% of required open space)"),
    ))
}

/// Healthcare outdoor area for patients and visitors.
pub(super) fn outdoor_area(fields: &FieldSet) -> Result<Computed> {
    fields.ensure("outdoor area", OUTDOOR_AREA_INPUTS)?;
    let family = fields
        .text(Field::Unit)
        .and_then(UnitFamily::resolve)
        .ok_or(CalcError::MissingUnit)?;
    let [inpatients, outpatients] = fields.require("outdoor area", [
        Field::PeakInpatients,
        Field::QualifyingOutpatients,
    ])?;

    let per_patient = family.coefficient(5.0, 0.5);
    let area = round_up(per_patient * OUTDOOR_SHARE * (inpatients + outpatients));
    Ok(Computed::new(
        area,
        format!("Required outdoor area: {area} {}", family.area_symbol()),
    ))
}

/// `fmin + (fmax - fmin) * e^(-k t)`, unrounded.
fn decay_storage(fmin: f64, fmax: f64, k: f64, t: f64) -> f64 {
    (fmax - fmin).mul_add((-k * t).exp(), fmin)
}

pub(super) fn depression_storage(fields: &FieldSet) -> Result<Computed> {
    let [fmin, fmax, k, t] = fields.require("depression storage", [
        Field::Fmin,
        Field::Fmax,
        Field::K,
        Field::T,
    ])?;
    let storage = round_up(decay_storage(fmin, fmax, k, t));
    Ok(Computed::new(
        storage,
        format!("Calculated depression storage: {storage} mm/hr"),
    ))
}

pub(super) fn runoff(fields: &FieldSet) -> Result<Computed> {
    const METRIC: &str = "runoff";

    let mut missing = fields.missing(&[Field::Rainfall, Field::Infiltration]);
    if !fields.contains(Field::DepressionStorage) {
        if fields.any(DECAY_INPUTS) {
            missing.extend(fields.missing(DECAY_INPUTS));
        } else {
            missing.push(Field::DepressionStorage.label());
        }
    }
    if !missing.is_empty() {
        return Err(CalcError::missing(METRIC, missing));
    }

    let [rainfall, infiltration] = fields.require(METRIC, [Field::Rainfall, Field::Infiltration])?;
    let storage = if let Some(storage) = fields.number(Field::DepressionStorage)? {
        storage
    } else {
        let [fmin, fmax, k, t] = fields.require(METRIC, [Field::Fmin, Field::Fmax, Field::K, Field::T])?;
        decay_storage(fmin, fmax, k, t)
    };
    debug!("Depression storage used for runoff: {storage}");

    let runoff = round_up(rainfall - storage - infiltration);
    Ok(Computed::new(runoff, format!("Runoff = {runoff} mm/hr")))
}

pub(super) fn development_percentage(fields: &FieldSet) -> Result<Computed> {
    let [previous, footprint] = fields.require("development percentage", [
        Field::PreviouslyDevelopedArea,
        Field::DevelopmentFootprint,
    ])?;
    let share = percentage(previous, footprint, "Area of development footprint")?;
    Ok(Computed::new(
        share,
        format!("Percentage of development on previously developed land = {share}%"),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::FieldExtractor;

    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn extract(text: &str) -> FieldSet {
        FieldExtractor::with_defaults()
            .expect("default patterns should compile")
            .extract(text)
    }

    #[test]
    fn test_restoration_percentage() {
        let fields = extract("restoration area = 30, total previously disturbed site area = 200");
        assert_eq!(
            restoration_area(&fields).map(|c| c.message),
            Ok("Percentage of restoration area = 15%".to_string())
        );
    }

    #[test]
    fn test_restoration_zero_disturbed_area() {
        let fields = extract("restoration area = 50, total previously disturbed site area = 0");
        assert_eq!(
            restoration_area(&fields),
            Err(CalcError::DegenerateInput {
                quantity: "Total previously disturbed site area"
            })
        );
    }

    #[test]
    fn test_open_space_and_vegetated_space() {
        let fields = extract("total site area = 1000");
        assert_eq!(open_space(&fields).map(|c| c.value), Ok(300));
        assert_eq!(vegetated_space(&fields).map(|c| c.value), Ok(75));

        let fields = extract("open space = 90");
        assert_eq!(vegetated_space(&fields).map(|c| c.value), Ok(23));

        assert!(vegetated_space(&extract("vegetated space for lot 7")).is_err());
    }

    #[test]
    fn test_outdoor_area_per_unit_family() {
        let fields = extract("outdoor area in ft, peak inpatients = 10, qualifying outpatients = 6");
        assert_eq!(
            outdoor_area(&fields).map(|c| c.message),
            Ok("Required outdoor area: 60 ft²".to_string())
        );

        let fields = extract("outdoor area in m2, peak inpatients = 10, qualifying outpatients = 6");
        assert_eq!(
            outdoor_area(&fields).map(|c| c.message),
            Ok("Required outdoor area: 6 m²".to_string())
        );
    }

    #[test]
    fn test_outdoor_area_names_missing_inputs() {
        let fields = extract("outdoor area, peak inpatients = 10");
        assert_eq!(
            outdoor_area(&fields),
            Err(CalcError::missing(
                "outdoor area",
                vec!["area unit", "qualifying outpatients"]
            ))
        );
    }

    #[test]
    fn test_depression_storage() {
        let fields = extract("fmin = 0.2, fmax = 0.8, k = 0.3, t = 5");
        assert_eq!(
            depression_storage(&fields).map(|c| c.message),
            Ok("Calculated depression storage: 1 mm/hr".to_string())
        );
    }

    #[test]
    fn test_runoff_with_direct_and_computed_storage() {
        let fields = extract("rainfall = 30, depression storage = 2, infiltration = 5");
        assert_eq!(runoff(&fields).map(|c| c.value), Ok(23));

        // 30 - 0.3339 - 5 rounds up to 25
        let fields = extract("rainfall = 30, infiltration = 5, fmin = 0.2, fmax = 0.8, k = 0.3, t = 5");
        assert_eq!(runoff(&fields).map(|c| c.value), Ok(25));
    }

    #[test]
    fn test_runoff_missing_inputs() {
        assert_eq!(
            runoff(&extract("runoff for 3 days")),
            Err(CalcError::missing(
                "runoff",
                vec!["rainfall", "infiltration", "depression storage"]
            ))
        );
        assert_eq!(
            runoff(&extract("rainfall = 30, infiltration = 5, fmin = 0.2, t = 5")),
            Err(CalcError::missing("runoff", vec!["fmax", "k"]))
        );
    }

    #[test]
    fn test_negative_runoff_is_reported() {
        let fields = extract("rainfall = 2, depression storage = 3, infiltration = 1.5");
        assert_eq!(
            runoff(&fields).map(|c| c.message),
            Ok("Runoff = -2 mm/hr".to_string())
        );
    }

    #[test]
    fn test_development_zero_footprint() {
        let fields = extract(
            "area of previously developed land = 10, development footprint = 0",
        );
        assert_eq!(
            development_percentage(&fields),
            Err(CalcError::DegenerateInput {
                quantity: "Area of development footprint"
            })
        );
    }
}
