//! Low-emitting materials and construction waste.

use super::{Computed, percentage};
use crate::error::{CalcError, Result};
use crate::extraction::{Field, FieldSet};

pub(super) const ADHESIVE_INPUTS: &[Field] = &[Field::CompliantAdhesives, Field::TotalWeight];
pub(super) const PAINT_INPUTS: &[Field] = &[Field::CompliantPaints, Field::TotalWeight];

const WASTE_METHODS: [Field; 5] = [
    Field::Recycled,
    Field::Reused,
    Field::Salvaged,
    Field::Donated,
    Field::Reclaimed,
];

pub(super) const WASTE_INPUTS: &[Field] = &[
    Field::Recycled,
    Field::Reused,
    Field::Salvaged,
    Field::Donated,
    Field::Reclaimed,
    Field::TotalWaste,
];

pub(super) fn adhesives_sealants(fields: &FieldSet) -> Result<Computed> {
    let [compliant, total] = fields.require("adhesives and sealants", [
        Field::CompliantAdhesives,
        Field::TotalWeight,
    ])?;
    let share = percentage(compliant, total, "Total weight of all adhesives and sealants")?;
    Ok(Computed::new(
        share,
        format!("{share}% of adhesives and sealants are compliant"),
    ))
}

pub(super) fn compliant_paints(fields: &FieldSet) -> Result<Computed> {
    let [compliant, total] = fields.require("paints and coatings", [
        Field::CompliantPaints,
        Field::TotalWeight,
    ])?;
    let share = percentage(compliant, total, "Total weight of all paints and coatings")?;
    Ok(Computed::new(
        share,
        format!("{share}% of paints and coatings are compliant"),
    ))
}

/// Exactly one diversion method may be given alongside the total.
pub(super) fn waste_diverted(fields: &FieldSet) -> Result<Computed> {
    const METRIC: &str = "waste diverted";

    let mut methods = WASTE_METHODS.into_iter().filter(|m| fields.contains(*m));
    let method = methods.next();
    if methods.next().is_some() {
        return Err(CalcError::MultipleConflictingInputs {
            options: WASTE_METHODS.iter().map(Field::label).collect(),
        });
    }

    let mut missing = Vec::new();
    if method.is_none() {
        missing.push("amount of waste recycled, reused, salvaged, donated or reclaimed");
    }
    if !fields.contains(Field::TotalWaste) {
        missing.push(Field::TotalWaste.label());
    }
    let Some(method) = method.filter(|_| missing.is_empty()) else {
        return Err(CalcError::missing(METRIC, missing));
    };

    let [diverted, total] = fields.require(METRIC, [method, Field::TotalWaste])?;
    let share = percentage(diverted, total, "Total amount of waste generated")?;
    Ok(Computed::new(
        share,
        format!("{share}% of waste is diverted from landfill"),
    ))
}
