//! Energy performance, envelope and on-site generation.

use super::{Computed, percentage, ratio, round_up};
use crate::error::{CalcError, Result};
use crate::extraction::{Field, FieldSet};
use tracing::debug;

pub(super) const PERFORMANCE_INPUTS: &[Field] = &[Field::BaselineEnergy, Field::ProposedEnergy];
pub(super) const R_VALUE_INPUTS: &[Field] = &[Field::MaterialThickness, Field::ThermalConductivity];
pub(super) const U_VALUE_INPUTS: &[Field] = &[
    Field::RValue,
    Field::MaterialThickness,
    Field::ThermalConductivity,
];
pub(super) const SHW_INPUTS: &[Field] = &[Field::ShwGenerated, Field::HotWaterDemand];
pub(super) const RENEWABLE_INPUTS: &[Field] = &[
    Field::PvEnergyGenerated,
    Field::ProposedEnergyConsumption,
    Field::AnnualEnergyGenerated,
    Field::CommunityEnergyConsumption,
];
pub(super) const SEER_INPUTS: &[Field] = &[Field::CoolingProvided, Field::EnergyConsumed];

pub(super) fn energy_performance(fields: &FieldSet) -> Result<Computed> {
    let [baseline, proposed] = fields.require("energy performance", [
        Field::BaselineEnergy,
        Field::ProposedEnergy,
    ])?;
    let improvement = percentage(
        baseline - proposed,
        baseline,
        "Baseline annual energy consumption",
    )?;
    Ok(Computed::new(
        improvement,
        format!("Percentage Improvement in Energy Consumption: {improvement}%"),
    ))
}

/// Thermal resistance of a layer, rounded up.
fn resistance(fields: &FieldSet, metric: &'static str) -> Result<i64> {
    let [thickness, conductivity] = fields.require(metric, [
        Field::MaterialThickness,
        Field::ThermalConductivity,
    ])?;
    ratio(thickness, conductivity, "Thermal conductivity").map(round_up)
}

pub(super) fn r_value(fields: &FieldSet) -> Result<Computed> {
    let r = resistance(fields, "R-value")?;
    Ok(Computed::new(r, format!("R-value = {r} (m²·K/W)")))
}

/// A given R-value is used as is; otherwise it is derived from the layer.
pub(super) fn u_value(fields: &FieldSet) -> Result<Computed> {
    let r = match fields.number(Field::RValue)? {
        Some(r) => r,
        None => resistance(fields, "U-value")? as f64,
    };
    debug!("R-value used for U-value: {r}");
    let u = round_up(ratio(1.0, r, "R-value")?);
    Ok(Computed::new(u, format!("U-value = {u} (W/m²·K)")))
}

pub(super) fn solar_hot_water(fields: &FieldSet) -> Result<Computed> {
    let [generated, demand] = fields.require("SHW", [Field::ShwGenerated, Field::HotWaterDemand])?;
    let share = percentage(generated, demand, "Annual hot water demand")?;
    Ok(Computed::new(
        share,
        format!("{share}% of hot water demand is provided by SHW panels"),
    ))
}

const PV_PAIR: [Field; 2] = [Field::PvEnergyGenerated, Field::ProposedEnergyConsumption];
const COMMUNITY_PAIR: [Field; 2] = [
    Field::AnnualEnergyGenerated,
    Field::CommunityEnergyConsumption,
];

/// A complete pair is used before a half-given one; the PV pair wins a tie.
pub(super) fn renewable_energy(fields: &FieldSet) -> Result<Computed> {
    const METRIC: &str = "renewable energy";

    let pv_complete = fields.all(&PV_PAIR);
    let community_complete = fields.all(&COMMUNITY_PAIR);

    if pv_complete || (!community_complete && fields.any(&PV_PAIR)) {
        let [generated, consumed] = fields.require(METRIC, PV_PAIR)?;
        let share = percentage(
            generated,
            consumed,
            "Proposed building annual energy consumption",
        )?;
        return Ok(Computed::new(
            share,
            format!("{share}% of the building's energy is provided by the PV system"),
        ));
    }

    if fields.any(&COMMUNITY_PAIR) {
        let [generated, consumed] = fields.require(METRIC, COMMUNITY_PAIR)?;
        let share = percentage(generated, consumed, "Annual community energy consumption")?;
        return Ok(Computed::new(share, format!("Renewable Energy = {share}%")));
    }

    Err(CalcError::missing(
        METRIC,
        vec![
            "energy generated by PV and proposed building annual energy consumption",
            "or annual energy generated and community energy consumption",
        ],
    ))
}

pub(super) fn seer(fields: &FieldSet) -> Result<Computed> {
    let [cooling, consumed] = fields.require("SEER", [Field::CoolingProvided, Field::EnergyConsumed])?;
    let value = percentage(cooling, consumed, "Amount of energy consumed")?;
    Ok(Computed::new(value, format!("SEER = {value}%")))
}
