//! Field pattern definitions.
//!
//! Every pattern is written against already-normalized (lower-cased) text and
//! is searched exactly once per query. The definitions are plain data so the
//! whole registry can be listed, serialized, or swapped out in tests.

use serde::{Deserialize, Serialize};

use super::field::Field;

/// Area/length unit token: feet, foot, ft, meter(s), m, optionally squared.
pub const UNIT_TOKEN: &str = r"(?:feet|foot|ft|meters?|m)(?:2|²|\^2)?";

/// Length unit token used inside compound length/width captures.
pub const LENGTH_UNIT_TOKEN: &str = r"(?:feet|foot|ft|meters?|m)";

/// Compound dimensions, length given first.
pub const LENGTH_FIRST: &str = r"length\s*=\s*(?P<length>[\d.]+)\s*(?P<length_unit>feet|foot|ft|meters?|m)\s*(?:,|and)?\s*width\s*=\s*(?P<width>[\d.]+)\s*(?P<width_unit>feet|foot|ft|meters?|m)";

/// Compound dimensions, width given first.
pub const WIDTH_FIRST: &str = r"width\s*=\s*(?P<width>[\d.]+)\s*(?P<width_unit>feet|foot|ft|meters?|m)\s*(?:,|and)?\s*length\s*=\s*(?P<length>[\d.]+)\s*(?P<length_unit>feet|foot|ft|meters?|m)";

/// Definition of a single field pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternDef {
    /// Field this pattern populates.
    pub field: Field,

    /// Regex searched against the normalized query.
    pub pattern: String,

    /// Capture group holding the field's value.
    #[serde(default = "default_value_group")]
    pub value_group: usize,

    /// Capture group holding a unit token, if the pattern captures one.
    #[serde(default)]
    pub unit_group: Option<usize>,
}

const fn default_value_group() -> usize {
    1
}

impl PatternDef {
    /// Create a pattern whose value is capture group 1.
    #[must_use]
    pub fn new(field: Field, pattern: impl Into<String>) -> Self {
        Self {
            field,
            pattern: pattern.into(),
            value_group: default_value_group(),
            unit_group: None,
        }
    }

    /// Read the value from a different capture group.
    #[must_use]
    pub const fn value_at(mut self, group: usize) -> Self {
        self.value_group = group;
        self
    }

    /// Read a unit token from the given capture group.
    #[must_use]
    pub const fn unit_at(mut self, group: usize) -> Self {
        self.unit_group = Some(group);
        self
    }
}

/// The built-in field registry.
#[must_use]
pub fn default_patterns() -> Vec<PatternDef> {
    let mut patterns = Vec::new();
    patterns.extend(occupancy_patterns());
    patterns.extend(dimension_patterns());
    patterns.extend(site_patterns());
    patterns.extend(energy_patterns());
    patterns.extend(material_patterns());
    patterns.extend(urban_patterns());
    patterns
}

/// Building categories, occupant and visitor counts.
fn occupancy_patterns() -> Vec<PatternDef> {
    vec![
        PatternDef::new(
            Field::BuildingType,
            r"(commercial|institutional|residential|retail)",
        ),
        PatternDef::new(Field::DwellingCategory, r"(multi[\s-]?residential|individual)"),
        PatternDef::new(Field::DwellingScope, r"(communal|private)"),
        PatternDef::new(
            Field::Occupants,
            r"(regular\s*building\s*occupants|people|residents)\s*=\s*(\d+)",
        )
        .value_at(2),
        // First `= N` in the text, optionally labelled.
        PatternDef::new(Field::Persons, r"(people|residents)?\s*=\s*(\d+)").value_at(2),
        PatternDef::new(
            Field::DwellingUnits,
            r"number\s*of\s*dwelling\s*units\s*=\s*(\d+)",
        ),
        PatternDef::new(Field::PeakVisitors, r"peak\s*visitors\s*=\s*([\d.]+)"),
        PatternDef::new(Field::PeakInpatients, r"peak\s*inpatients\s*=\s*([\d.]+)"),
        PatternDef::new(
            Field::QualifyingOutpatients,
            r"qualifying\s*outpatients\s*=\s*([\d.]+)",
        ),
        PatternDef::new(
            Field::TotalParkingSpaces,
            r"(total\s*parking\s*spaces?|total\s*spaces?)\s*=\s*(\d+)",
        )
        .value_at(2),
        PatternDef::new(Field::DesignedOccupancy, r"designed\s*maximum\s*occupancy\s*=\s*(\d+)"),
        PatternDef::new(Field::ExpectedOccupancy, r"expected\s*occupancy\s*=\s*(\d+)"),
        PatternDef::new(Field::TotalOccupancy, r"total\s*occupancy\s*=\s*(\d+)"),
        PatternDef::new(Field::LongTerm, r"long\s*term\s*=\s*(\d+)"),
        PatternDef::new(Field::ShortTerm, r"short\s*term\s*=\s*(\d+)"),
    ]
}

/// Units, areas, and bare lengths.
fn dimension_patterns() -> Vec<PatternDef> {
    vec![
        // A unit token standing on its own; a bare `m` inside a word does not count.
        PatternDef::new(
            Field::Unit,
            format!(r"(?:^|[^a-z])({UNIT_TOKEN})(?:[^a-z0-9]|$)"),
        ),
        PatternDef::new(
            Field::Area,
            format!(
                r"(?:floor\s*area|building\s*area|area)\s*=\s*([\d.]+)\s*({UNIT_TOKEN})?(?:[^a-z0-9]|$)"
            ),
        )
        .unit_at(2),
        PatternDef::new(
            Field::Length,
            format!(r"length\s*=\s*([\d.]+)\s*(?:({LENGTH_UNIT_TOKEN})\b)?"),
        )
        .unit_at(2),
        PatternDef::new(
            Field::Width,
            format!(r"width\s*=\s*([\d.]+)\s*(?:({LENGTH_UNIT_TOKEN})\b)?"),
        )
        .unit_at(2),
        PatternDef::new(Field::RackArea, r"(area|floor|building)\s*=\s*([\d.]+)").value_at(2),
    ]
}

/// Site, storm-water and land-use quantities.
fn site_patterns() -> Vec<PatternDef> {
    vec![
        PatternDef::new(Field::RestorationArea, r"restoration\s*area\s*=\s*([\d.]+)"),
        PatternDef::new(
            Field::DisturbedArea,
            r"total\s*previously\s*disturbed\s*site\s*area\s*=\s*([\d.]+)",
        ),
        PatternDef::new(Field::TotalSiteArea, r"total\s*site\s*area\s*=\s*([\d.]+)"),
        PatternDef::new(
            Field::RequiredOpenSpace,
            r"(required\s*open\s*space|open\s*space)\s*=\s*([\d.]+)",
        )
        .value_at(2),
        PatternDef::new(Field::Rainfall, r"rainfall\s*=\s*([\d.]+)"),
        PatternDef::new(Field::DepressionStorage, r"depression\s*storage\s*=\s*([\d.]+)"),
        PatternDef::new(Field::Infiltration, r"infiltration\s*=\s*([\d.]+)"),
        PatternDef::new(Field::Fmin, r"fmin\s*=\s*([\d.]+)"),
        PatternDef::new(Field::Fmax, r"fmax\s*=\s*([\d.]+)"),
        PatternDef::new(Field::K, r"\bk\s*=\s*([\d.]+)"),
        PatternDef::new(Field::T, r"\bt\s*=\s*([\d.]+)"),
        PatternDef::new(
            Field::PreviouslyDevelopedArea,
            r"area\s*of\s*previously\s*developed\s*land\s*=\s*([\d.]+)",
        ),
        PatternDef::new(
            Field::DevelopmentFootprint,
            r"development\s*footprint\s*=\s*([\d.]+)",
        ),
    ]
}

/// Envelope, energy and hot-water quantities.
fn energy_patterns() -> Vec<PatternDef> {
    vec![
        PatternDef::new(
            Field::BaselineEnergy,
            r"\bbaseline\s+(?:annual\s+)?energy\s*=\s*([\d.]+)",
        ),
        PatternDef::new(
            Field::ProposedEnergy,
            r"\bproposed\s+(?:annual\s+)?energy\s*=\s*([\d.]+)",
        ),
        PatternDef::new(Field::MaterialThickness, r"material\s*thickness\s*=\s*([\d.]+)"),
        PatternDef::new(
            Field::ThermalConductivity,
            r"thermal\s*conductivity\s*=\s*([\d.]+)",
        ),
        PatternDef::new(Field::RValue, r"\br[\s-]*value\s*=\s*([\d.]+)"),
        PatternDef::new(
            Field::ShwGenerated,
            r"annual\s*hot\s*water\s*generated\s*by\s*shw(?:\s*panels)?\s*=\s*([\d.]+)",
        ),
        PatternDef::new(
            Field::HotWaterDemand,
            r"annual\s*hot\s*water\s*demand\s*=\s*([\d.]+)",
        ),
        PatternDef::new(
            Field::PvEnergyGenerated,
            r"energy\s*generated\s*by\s*pv\s*=\s*([\d.]+)",
        ),
        PatternDef::new(
            Field::ProposedEnergyConsumption,
            r"proposed\s*annual\s*energy\s*consumption\s*=\s*([\d.]+)",
        ),
        PatternDef::new(
            Field::AnnualEnergyGenerated,
            r"annual\s*energy\s*generated\s*=\s*([\d.]+)",
        ),
        PatternDef::new(
            Field::CommunityEnergyConsumption,
            r"community\s*energy\s*consumption\s*=\s*([\d.]+)",
        ),
        PatternDef::new(Field::CoolingProvided, r"cooling\s*provided\s*=\s*([\d.]+)"),
        PatternDef::new(Field::EnergyConsumed, r"energy\s*consumed\s*=\s*([\d.]+)"),
    ]
}

/// Low-emitting materials and construction waste.
fn material_patterns() -> Vec<PatternDef> {
    vec![
        PatternDef::new(
            Field::CompliantAdhesives,
            r"weight\s*of\s*adhesives\s*and\s*sealants\s*not\s*exceeding\s*voc(?:\s*limits?)?\s*=\s*([\d.]+)",
        ),
        PatternDef::new(
            Field::CompliantPaints,
            r"weight\s*not\s*exceeding\s*voc(?:\s*limits?)?\s*=\s*([\d.]+)",
        ),
        PatternDef::new(Field::TotalWeight, r"total\s*weight\s*=\s*([\d.]+)"),
        PatternDef::new(Field::Recycled, r"(?:amount\s*of\s*)?recycled\s*=\s*([\d.]+)"),
        PatternDef::new(Field::Reused, r"(?:amount\s*of\s*)?reused\s*=\s*([\d.]+)"),
        PatternDef::new(Field::Salvaged, r"(?:amount\s*of\s*)?salvaged\s*=\s*([\d.]+)"),
        PatternDef::new(Field::Donated, r"(?:amount\s*of\s*)?donated\s*=\s*([\d.]+)"),
        PatternDef::new(Field::Reclaimed, r"(?:amount\s*of\s*)?reclaimed\s*=\s*([\d.]+)"),
        PatternDef::new(
            Field::TotalWaste,
            r"(?:total\s*amount\s*of\s*waste\s*generated|total\s*waste)\s*=\s*([\d.]+)",
        ),
    ]
}

/// Street network and urban-form quantities.
fn urban_patterns() -> Vec<PatternDef> {
    vec![
        PatternDef::new(Field::StreetLinks, r"street\s*links\s*=\s*(\d+)"),
        PatternDef::new(Field::Nodes, r"\bnodes\s*=\s*(\d+)"),
        PatternDef::new(Field::Intersections, r"intersections\s*=\s*(\d+)"),
        PatternDef::new(
            Field::ContinuousWalkway,
            r"linear\s*length\s*on\s*both\s*sides\s*=\s*([\d.]+)",
        ),
        PatternDef::new(Field::AllWalkways, r"all\s*walkways\s*=\s*([\d.]+)"),
        PatternDef::new(
            Field::GrossFloorArea,
            r"(?:gross\s*(?:floor\s*)?area|gfa)\s*=\s*([\d.]+)",
        ),
    ]
}
