//! Occupant density and outdoor space for dwellings.

use super::{Computed, ratio, round_up};
use crate::error::{CalcError, Result};
use crate::extraction::{Field, FieldSet};
use crate::units::UnitFamily;

pub(super) const DENSITY_INPUTS: &[Field] = &[
    Field::DesignedOccupancy,
    Field::ExpectedOccupancy,
    Field::Area,
    Field::Dimensions,
];
pub(super) const DWELLING_INPUTS: &[Field] = &[
    Field::DwellingCategory,
    Field::DwellingScope,
    Field::Persons,
    Field::TotalOccupancy,
];

const OUTDOOR_SHARE: f64 = 0.25;
const MIN_PRIVATE_SPACE: i64 = 5;

/// Floor area in square meters; feet are refused rather than converted.
fn metric_area(fields: &FieldSet) -> Result<f64> {
    if let Some(dimensions) = fields.dimensions() {
        let (area, family) = dimensions.area()?;
        return match family {
            UnitFamily::Metric => Ok(area),
            UnitFamily::Imperial => Err(CalcError::UnsupportedUnit {
                quantity: "length and width",
                expected: "meters",
            }),
        };
    }

    let area = fields.number(Field::Area)?.ok_or_else(|| {
        CalcError::missing(
            "occupant density",
            vec!["area in square meters, or length and width in meters"],
        )
    })?;
    match fields.unit(Field::Area).and_then(UnitFamily::resolve) {
        Some(UnitFamily::Imperial) => Err(CalcError::UnsupportedUnit {
            quantity: "area",
            expected: "meters",
        }),
        _ => Ok(area),
    }
}

pub(super) fn occupant_density(fields: &FieldSet) -> Result<Computed> {
    let occupancy = match fields.number(Field::DesignedOccupancy)? {
        Some(designed) => designed,
        None => fields.number(Field::ExpectedOccupancy)?.ok_or_else(|| {
            CalcError::missing(
                "occupant density",
                vec!["designed maximum occupancy or expected occupancy"],
            )
        })?,
    };
    let area = metric_area(fields)?;
    let density = round_up(ratio(occupancy, area, "Area")?);
    Ok(Computed::new(
        density,
        format!("Occupant Density = {density} people per square meter"),
    ))
}

pub(super) fn outdoor_space_size(fields: &FieldSet) -> Result<Computed> {
    let [occupancy] = fields.require("size of outdoor space", [Field::TotalOccupancy])?;
    let size = round_up(occupancy * OUTDOOR_SHARE);
    Ok(Computed::new(size, format!("Size of outdoor space = {size} m²")))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Dwelling {
    Individual,
    MultiResidential,
}

impl Dwelling {
    fn parse(text: &str) -> Self {
        if text.starts_with("multi") {
            Self::MultiResidential
        } else {
            Self::Individual
        }
    }

    const fn heading(self) -> &'static str {
        match self {
            Self::Individual => "Individual Dwelling",
            Self::MultiResidential => "Multi-Residential Building",
        }
    }
}

pub(super) fn dwelling_size(fields: &FieldSet) -> Result<Computed> {
    const METRIC: &str = "dwelling size";

    fields.ensure(METRIC, &[Field::DwellingCategory, Field::DwellingScope])?;
    let dwelling = Dwelling::parse(fields.text(Field::DwellingCategory).unwrap_or_default());
    let communal = fields.text(Field::DwellingScope) == Some("communal");

    match (dwelling, communal) {
        (_, false) => {
            let [persons] = fields.require(METRIC, [Field::Persons])?;
            let size = if persons <= 2.0 {
                MIN_PRIVATE_SPACE
            } else {
                round_up(persons) + 3
            };
            Ok(Computed::new(
                size,
                format!("{} - Size of Private: {size} m²", dwelling.heading()),
            ))
        }
        (Dwelling::MultiResidential, true) => {
            let [occupancy] = fields.require(METRIC, [Field::TotalOccupancy])?;
            let size = round_up(occupancy * OUTDOOR_SHARE);
            Ok(Computed::new(
                size,
                format!(
                    "{} - Size of Communal Outdoor Space: {size} m²",
                    dwelling.heading()
                ),
            ))
        }
        (Dwelling::Individual, true) => Err(CalcError::UnsupportedCombination {
            subject: "dwelling size",
            combination: "individual dwelling with communal space".to_string(),
        }),
    }
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
    fn test_density_prefers_designed_occupancy() {
        let fields = extract("designed maximum occupancy = 90, expected occupancy = 10, area = 40 m2");
        assert_eq!(
            occupant_density(&fields).map(|c| c.message),
            Ok("Occupant Density = 3 people per square meter".to_string())
        );
    }

    #[test]
    fn test_density_area_without_unit_is_metric() {
        let fields = extract("expected occupancy = 10, area = 4");
        assert_eq!(occupant_density(&fields).map(|c| c.value), Ok(3));
    }

    #[test]
    fn test_density_rejects_feet() {
        assert_eq!(
            occupant_density(&extract("expected occupancy = 10, area = 4 ft2")),
            Err(CalcError::UnsupportedUnit {
                quantity: "area",
                expected: "meters"
            })
        );
        assert_eq!(
            occupant_density(&extract("expected occupancy = 10, length = 2 ft, width = 2 ft")),
            Err(CalcError::UnsupportedUnit {
                quantity: "length and width",
                expected: "meters"
            })
        );
    }

    #[test]
    fn test_density_dimensions_win_over_area() {
        let fields = extract("expected occupancy = 10, area = 1 m2, length = 5 m, width = 2 m");
        assert_eq!(occupant_density(&fields).map(|c| c.value), Ok(1));
    }

    #[test]
    fn test_density_zero_area() {
        assert_eq!(
            occupant_density(&extract("expected occupancy = 10, area = 0 m")),
            Err(CalcError::DegenerateInput { quantity: "Area" })
        );
    }

    #[test]
    fn test_outdoor_space_size() {
        let fields = extract("total occupancy = 30");
        assert_eq!(
            outdoor_space_size(&fields).map(|c| c.message),
            Ok("Size of outdoor space = 8 m²".to_string())
        );
    }

    #[test]
    fn test_private_dwelling_size() {
        assert_eq!(
            dwelling_size(&extract("individual private, people = 2")).map(|c| c.message),
            Ok("Individual Dwelling - Size of Private: 5 m²".to_string())
        );
        assert_eq!(
            dwelling_size(&extract("multi-residential private, people = 4")).map(|c| c.message),
            Ok("Multi-Residential Building - Size of Private: 7 m²".to_string())
        );
    }

    #[test]
    fn test_communal_dwelling_size() {
        let fields = extract("multi-residential communal, total occupancy = 30");
        assert_eq!(
            dwelling_size(&fields).map(|c| c.message),
            Ok("Multi-Residential Building - Size of Communal Outdoor Space: 8 m²".to_string())
        );

        let fields = extract("individual communal, total occupancy = 30");
        assert!(matches!(
            dwelling_size(&fields),
            Err(CalcError::UnsupportedCombination { .. })
        ));
    }
}
