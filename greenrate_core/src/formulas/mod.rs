//! Formula registry.
//!
//! One pure handler per intent, held in a static table indexed by the intent's
//! priority. Handlers validate presence of their inputs before any arithmetic
//! and never see raw text, only the extracted [`FieldSet`].

mod air;
mod energy;
mod materials;
mod occupancy;
mod site;
mod transport;
mod urban;

use serde::Serialize;
use tracing::debug;

use crate::error::{CalcError, Result};
use crate::extraction::{Field, FieldSet};
use crate::intent::Intent;
use crate::units::UnitFamily;

/// A successful calculation: the rounded-up value and its formatted answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Computed {
    pub value: i64,
    pub message: String,
}

impl Computed {
    #[must_use]
    pub fn new(value: i64, message: impl Into<String>) -> Self {
        Self {
            value,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Computed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

pub type Compute = fn(&FieldSet) -> Result<Computed>;

/// Registry entry for one intent.
#[derive(Debug, Clone, Copy)]
pub struct FormulaSpec {
    pub intent: Intent,
    /// Fields the handler may consult.
    pub inputs: &'static [Field],
    pub compute: Compute,
}

impl FormulaSpec {
    /// Run the handler.
    pub fn run(&self, fields: &FieldSet) -> Result<Computed> {
        (self.compute)(fields)
    }
}

const fn spec(intent: Intent, inputs: &'static [Field], compute: Compute) -> FormulaSpec {
    FormulaSpec {
        intent,
        inputs,
        compute,
    }
}

/// Every handler, in dispatch priority order.
pub static FORMULAS: [FormulaSpec; Intent::COUNT] = [
    spec(Intent::LongTermStorage, transport::LONG_TERM_INPUTS, transport::long_term_storage),
    spec(Intent::ShortTermStorage, transport::SHORT_TERM_INPUTS, transport::short_term_storage),
    spec(Intent::ShowerFacilities, &[Field::Occupants], transport::shower_facilities),
    spec(Intent::PreferredSpaces, &[Field::TotalParkingSpaces], transport::preferred_spaces),
    spec(Intent::FuelingStations, &[Field::TotalParkingSpaces], transport::fueling_stations),
    spec(Intent::RestorationArea, site::RESTORATION_INPUTS, site::restoration_area),
    spec(Intent::VegetatedSpace, site::VEGETATED_INPUTS, site::vegetated_space),
    spec(Intent::OpenSpace, &[Field::TotalSiteArea], site::open_space),
    spec(Intent::OutdoorArea, site::OUTDOOR_AREA_INPUTS, site::outdoor_area),
    spec(Intent::AirVolumeBeforeOccupancy, AREA_INPUTS, air::before_occupancy),
    spec(Intent::AirVolumeDuringOccupancy, AREA_INPUTS, air::during_occupancy),
    spec(Intent::AirVolumeToComplete, AREA_INPUTS, air::to_complete),
    spec(Intent::Runoff, site::RUNOFF_INPUTS, site::runoff),
    spec(Intent::DepressionStorage, site::DECAY_INPUTS, site::depression_storage),
    spec(Intent::DevelopmentPercentage, site::DEVELOPMENT_INPUTS, site::development_percentage),
    spec(Intent::BicycleRacks, transport::RACK_INPUTS, transport::bicycle_racks),
    spec(Intent::EnergyPerformance, energy::PERFORMANCE_INPUTS, energy::energy_performance),
    spec(Intent::UValue, energy::U_VALUE_INPUTS, energy::u_value),
    spec(Intent::RValue, energy::R_VALUE_INPUTS, energy::r_value),
    spec(Intent::SolarHotWater, energy::SHW_INPUTS, energy::solar_hot_water),
    spec(Intent::RenewableEnergy, energy::RENEWABLE_INPUTS, energy::renewable_energy),
    spec(Intent::OccupantDensity, occupancy::DENSITY_INPUTS, occupancy::occupant_density),
    spec(Intent::OutdoorSpaceSize, &[Field::TotalOccupancy], occupancy::outdoor_space_size),
    spec(Intent::AdhesivesSealants, materials::ADHESIVE_INPUTS, materials::adhesives_sealants),
    spec(Intent::WasteDiverted, materials::WASTE_INPUTS, materials::waste_diverted),
    spec(Intent::ConnectivityIndex, urban::CONNECTIVITY_INPUTS, urban::connectivity_index),
    spec(Intent::IntersectionDensity, urban::INTERSECTION_INPUTS, urban::intersection_density),
    spec(Intent::ContinuousWalkway, urban::WALKWAY_INPUTS, urban::continuous_walkway),
    spec(Intent::FloorAreaRatio, urban::FAR_INPUTS, urban::floor_area_ratio),
    spec(Intent::Seer, energy::SEER_INPUTS, energy::seer),
    spec(Intent::CompliantPaints, materials::PAINT_INPUTS, materials::compliant_paints),
    spec(Intent::DwellingSize, occupancy::DWELLING_INPUTS, occupancy::dwelling_size),
];

/// The registry entry for an intent.
#[must_use]
pub fn spec_for(intent: Intent) -> &'static FormulaSpec {
    &FORMULAS[intent.priority()]
}

/// Run the handler registered for an intent.
pub fn compute(intent: Intent, fields: &FieldSet) -> Result<Computed> {
    let computed = spec_for(intent).run(fields)?;
    debug!("{intent} = {}", computed.value);
    Ok(computed)
}

/// Inputs of every metric measured by area or by length and width.
pub(crate) const AREA_INPUTS: &[Field] = &[Field::Area, Field::Length, Field::Width, Field::Dimensions];

/// Round up to a whole unit.
///
/// The value is first snapped to six decimals so binary noise such as
/// `100.0 * 0.30 == 30.000000000000004` does not push it to the next integer.
#[must_use]
pub fn round_up(value: f64) -> i64 {
    ((value * 1e6).round() / 1e6).ceil() as i64
}

/// `numerator / denominator`, refusing a zero denominator.
pub(crate) fn ratio(numerator: f64, denominator: f64, quantity: &'static str) -> Result<f64> {
    if denominator.abs() < f64::EPSILON {
        return Err(CalcError::DegenerateInput { quantity });
    }
    Ok(numerator / denominator)
}

/// Rounded-up percentage of `part` in `whole`.
pub(crate) fn percentage(part: f64, whole: f64, quantity: &'static str) -> Result<i64> {
    ratio(part, whole, quantity).map(|r| round_up(r * 100.0))
}

/// An area measured either from compound dimensions or from a unit-bearing area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct MeasuredArea {
    pub value: f64,
    pub family: UnitFamily,
    pub from_dimensions: bool,
}

/// A plain area, only when it was written with a recognized unit.
pub(crate) fn area_with_unit(fields: &FieldSet) -> Result<Option<MeasuredArea>> {
    let Some(family) = fields.unit(Field::Area).and_then(UnitFamily::resolve) else {
        return Ok(None);
    };
    let Some(value) = fields.number(Field::Area)? else {
        return Ok(None);
    };
    debug!("Area: {value} {}", family.area_symbol());
    Ok(Some(MeasuredArea {
        value,
        family,
        from_dimensions: false,
    }))
}

/// Resolve the area a metric is measured on.
///
/// Compound length/width wins over a plain area. An area or a length/width
/// pair written without units is a `MissingUnit` error.
pub(crate) fn measured_area(fields: &FieldSet, metric: &'static str) -> Result<MeasuredArea> {
    if let Some(dimensions) = fields.dimensions() {
        let (value, family) = dimensions.area()?;
        debug!("Area from dimensions: {value} {}", family.area_symbol());
        return Ok(MeasuredArea {
            value,
            family,
            from_dimensions: true,
        });
    }

    if let Some(area) = area_with_unit(fields)? {
        return Ok(area);
    }
    if fields.contains(Field::Area) || fields.all(&[Field::Length, Field::Width]) {
        return Err(CalcError::MissingUnit);
    }

    Err(CalcError::missing(
        metric,
        vec!["area with unit, or length and width with units"],
    ))
}
