//! Street network and urban-form ratios.

use super::{Computed, measured_area, percentage, ratio, round_up};
use crate::error::Result;
use crate::extraction::{Field, FieldSet};

pub(super) const CONNECTIVITY_INPUTS: &[Field] = &[Field::StreetLinks, Field::Nodes];
pub(super) const INTERSECTION_INPUTS: &[Field] = &[
    Field::Intersections,
    Field::Area,
    Field::Length,
    Field::Width,
    Field::Dimensions,
];
pub(super) const WALKWAY_INPUTS: &[Field] = &[Field::ContinuousWalkway, Field::AllWalkways];
pub(super) const FAR_INPUTS: &[Field] = &[Field::GrossFloorArea, Field::TotalSiteArea];

pub(super) fn connectivity_index(fields: &FieldSet) -> Result<Computed> {
    let [links, nodes] = fields.require("connectivity index", [Field::StreetLinks, Field::Nodes])?;
    let index = round_up(ratio(links, nodes, "Number of nodes")?);
    Ok(Computed::new(index, format!("Connectivity Index = {index}")))
}

/// Intersections per square meter; areas in feet are converted first.
pub(super) fn intersection_density(fields: &FieldSet) -> Result<Computed> {
    const METRIC: &str = "intersection density";

    let [intersections] = fields.require(METRIC, [Field::Intersections])?;
    let area = measured_area(fields, METRIC)?;
    let square_meters = area.family.to_square_meters(area.value);
    let density = round_up(ratio(intersections, square_meters, "Area")?);
    Ok(Computed::new(
        density,
        format!("Intersection Density = {density} intersections/m²"),
    ))
}

pub(super) fn continuous_walkway(fields: &FieldSet) -> Result<Computed> {
    let [continuous, all] = fields.require("continuous walkway", [
        Field::ContinuousWalkway,
        Field::AllWalkways,
    ])?;
    let share = percentage(continuous, all, "Total length of all walkways")?;
    Ok(Computed::new(
        share,
        format!("Continuous Walkway (CW) = {share}%"),
    ))
}

pub(super) fn floor_area_ratio(fields: &FieldSet) -> Result<Computed> {
    let [gfa, site_area] = fields.require("floor area ratio", [
        Field::GrossFloorArea,
        Field::TotalSiteArea,
    ])?;
    let far = percentage(gfa, site_area, "Total site area")?;
    Ok(Computed::new(far, format!("Floor Area Ratio (FAR) = {far}%")))
}
