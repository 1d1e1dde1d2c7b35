//! Flush-out air volumes.

use super::{Computed, measured_area, round_up};
use crate::error::Result;
use crate::extraction::FieldSet;
use crate::units::UnitFamily;

#[derive(Debug, Clone, Copy)]
enum Phase {
    BeforeOccupancy,
    DuringOccupancy,
    ToComplete,
}

impl Phase {
    /// Air per unit of floor area: ft³ per ft², or liters per m².
    const fn coefficient(self, family: UnitFamily) -> f64 {
        match self {
            Self::BeforeOccupancy => family.coefficient(14_000.0, 4_267_140.0),
            Self::DuringOccupancy => family.coefficient(3_500.0, 1_066_260.0),
            Self::ToComplete => family.coefficient(10_500.0, 3_200_880.0),
        }
    }

    const fn describe(self) -> &'static str {
        match self {
            Self::BeforeOccupancy => "before occupancy",
            Self::DuringOccupancy => "during occupancy",
            Self::ToComplete => "during occupancy to complete",
        }
    }
}

const fn volume_symbol(family: UnitFamily) -> &'static str {
    match family {
        UnitFamily::Imperial => "ft³",
        UnitFamily::Metric => "l",
    }
}

fn air_volume(fields: &FieldSet, phase: Phase) -> Result<Computed> {
    let area = measured_area(fields, "air volume")?;
    let volume = round_up(area.value * phase.coefficient(area.family));
    Ok(Computed::new(
        volume,
        format!(
            "Air volume needed {}: {volume} {}",
            phase.describe(),
            volume_symbol(area.family)
        ),
    ))
}

pub(super) fn before_occupancy(fields: &FieldSet) -> Result<Computed> {
    air_volume(fields, Phase::BeforeOccupancy)
}

pub(super) fn during_occupancy(fields: &FieldSet) -> Result<Computed> {
    air_volume(fields, Phase::DuringOccupancy)
}

pub(super) fn to_complete(fields: &FieldSet) -> Result<Computed> {
    air_volume(fields, Phase::ToComplete)
}
