//! Bicycle storage, showers and parking allocations.

use super::{Computed, area_with_unit, measured_area, round_up};
use crate::error::{CalcError, Result};
use crate::extraction::{Field, FieldSet};

const RESIDENTIAL_RATE: f64 = 0.30;
const NON_RESIDENTIAL_RATE: f64 = 0.05;
const VISITOR_RATE: f64 = 0.025;
const PREFERRED_RATE: f64 = 0.05;
const FUELING_RATE: f64 = 0.02;

pub(super) const LONG_TERM_INPUTS: &[Field] =
    &[Field::BuildingType, Field::Occupants, Field::DwellingUnits];

pub(super) const SHORT_TERM_INPUTS: &[Field] = &[
    Field::PeakVisitors,
    Field::Area,
    Field::Length,
    Field::Width,
    Field::Dimensions,
];

pub(super) const RACK_INPUTS: &[Field] = &[
    Field::LongTerm,
    Field::ShortTerm,
    Field::Occupants,
    Field::RackArea,
];

pub(super) fn long_term_storage(fields: &FieldSet) -> Result<Computed> {
    const METRIC: &str = "long-term bicycle storage";

    let mut missing = Vec::new();
    if !fields.contains(Field::BuildingType) {
        missing.push(Field::BuildingType.label());
    }
    if !fields.any(&[Field::Occupants, Field::DwellingUnits]) {
        missing.push("regular building occupants or number of dwelling units");
    }
    if !missing.is_empty() {
        return Err(CalcError::missing(METRIC, missing));
    }

    let building = fields.text(Field::BuildingType).unwrap_or_default();
    let occupants = fields.number(Field::Occupants)?;

    let bikes = if building == "residential" {
        let by_occupants = occupants.map_or(0, |o| round_up(o * RESIDENTIAL_RATE));
        let by_units = fields.number(Field::DwellingUnits)?.map_or(0, round_up);
        by_occupants.max(by_units)
    } else {
        let occupants =
            occupants.ok_or_else(|| CalcError::missing(METRIC, vec![Field::Occupants.label()]))?;
        round_up(occupants * NON_RESIDENTIAL_RATE)
    };

    Ok(Computed::new(
        bikes,
        format!("{bikes} Bicycles required for long-term storage ({building})"),
    ))
}

pub(super) fn short_term_storage(fields: &FieldSet) -> Result<Computed> {
    if let Some(visitors) = fields.number(Field::PeakVisitors)? {
        let bikes = round_up(visitors * VISITOR_RATE);
        return Ok(Computed::new(
            bikes,
            format!("{bikes} Bicycles required for short-term storage based on peak visitors"),
        ));
    }

    // A unit-bearing area is checked before length and width here.
    let area = match area_with_unit(fields)? {
        Some(area) => area,
        None => measured_area(fields, "short-term bicycle storage").map_err(|err| match err {
            CalcError::MissingField { metric, .. } => CalcError::missing(
                metric,
                vec!["peak visitors, area with unit, or length and width with units"],
            ),
            other => other,
        })?,
    };
    let per_bike = area.family.coefficient(5000.0, 465.0);
    let bikes = round_up(2.0 * area.value / per_bike);

    let message = if area.from_dimensions {
        format!(
            "{bikes} Bicycles required for short-term storage based on length and width (area: {} {})",
            area.value,
            area.family.area_symbol()
        )
    } else {
        format!("{bikes} Bicycles required for short-term storage based on area")
    };
    Ok(Computed::new(bikes, message))
}

pub(super) fn shower_facilities(fields: &FieldSet) -> Result<Computed> {
    let [occupants] = fields.require("shower facilities", [Field::Occupants])?;
    let showers = if occupants <= 100.0 {
        1
    } else {
        round_up((1.0 + (occupants - 100.0)) / 150.0)
    };
    Ok(Computed::new(showers, format!("{showers} Showers required")))
}

pub(super) fn preferred_spaces(fields: &FieldSet) -> Result<Computed> {
    let [total] = fields.require("preferred parking spaces", [Field::TotalParkingSpaces])?;
    let spaces = round_up(total * PREFERRED_RATE);
    Ok(Computed::new(
        spaces,
        format!("{spaces} preferred parking spaces required"),
    ))
}

pub(super) fn fueling_stations(fields: &FieldSet) -> Result<Computed> {
    let [total] = fields.require("fueling stations", [Field::TotalParkingSpaces])?;
    let stations = round_up(total * FUELING_RATE);
    Ok(Computed::new(
        stations,
        format!("{stations} fueling stations required"),
    ))
}

/// Racks are sized on occupants for long-term storage and on area for
/// short-term storage; each mode falls back to the other measure.
pub(super) fn bicycle_racks(fields: &FieldSet) -> Result<Computed> {
    let short_term = fields.contains(Field::ShortTerm) && !fields.contains(Field::LongTerm);

    let by_occupants = fields.number(Field::Occupants)?.map(|o| round_up(o / 20.0));
    let by_area = fields.number(Field::RackArea)?.map(|a| round_up(a / 500.0));

    let (mode, racks) = if short_term {
        ("short-term", by_area.or(by_occupants))
    } else {
        ("long-term", by_occupants.or(by_area))
    };

    let racks = racks.ok_or_else(|| {
        CalcError::missing("bicycle racks", vec!["regular building occupants or area"])
    })?;
    Ok(Computed::new(
        racks,
        format!("Total number of bicycle racks required ({mode}): {racks}"),
    ))
}
