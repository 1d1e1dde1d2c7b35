//! Names of every quantity the extractor can pull out of a query.

use serde::{Deserialize, Serialize};

/// A named, independently-matched field.
///
/// Declaration order has no meaning for matching; it only fixes the order in
/// which diagnostics list fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    BuildingType,
    DwellingCategory,
    Occupants,
    Persons,
    DwellingUnits,
    PeakVisitors,
    PeakInpatients,
    QualifyingOutpatients,
    Unit,
    Area,
    Length,
    Width,
    /// Compound length + width with units, captured as one record.
    Dimensions,
    TotalParkingSpaces,
    RestorationArea,
    DisturbedArea,
    TotalSiteArea,
    RequiredOpenSpace,
    Rainfall,
    DepressionStorage,
    Infiltration,
    Fmin,
    Fmax,
    K,
    T,
    PreviouslyDevelopedArea,
    DevelopmentFootprint,
    LongTerm,
    ShortTerm,
    RackArea,
    BaselineEnergy,
    ProposedEnergy,
    MaterialThickness,
    ThermalConductivity,
    RValue,
    ShwGenerated,
    HotWaterDemand,
    PvEnergyGenerated,
    ProposedEnergyConsumption,
    AnnualEnergyGenerated,
    CommunityEnergyConsumption,
    DesignedOccupancy,
    ExpectedOccupancy,
    TotalOccupancy,
    CompliantAdhesives,
    TotalWeight,
    Recycled,
    Reused,
    Salvaged,
    Donated,
    Reclaimed,
    TotalWaste,
    StreetLinks,
    Nodes,
    Intersections,
    ContinuousWalkway,
    AllWalkways,
    GrossFloorArea,
    CoolingProvided,
    EnergyConsumed,
    CompliantPaints,
    DwellingScope,
}

impl Field {
    /// Registry key, identical to the serde name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BuildingType => "building_type",
            Self::DwellingCategory => "dwelling_category",
            Self::Occupants => "occupants",
            Self::Persons => "persons",
            Self::DwellingUnits => "dwelling_units",
            Self::PeakVisitors => "peak_visitors",
            Self::PeakInpatients => "peak_inpatients",
            Self::QualifyingOutpatients => "qualifying_outpatients",
            Self::Unit => "unit",
            Self::Area => "area",
            Self::Length => "length",
            Self::Width => "width",
            Self::Dimensions => "dimensions",
            Self::TotalParkingSpaces => "total_parking_spaces",
            Self::RestorationArea => "restoration_area",
            Self::DisturbedArea => "disturbed_area",
            Self::TotalSiteArea => "total_site_area",
            Self::RequiredOpenSpace => "required_open_space",
            Self::Rainfall => "rainfall",
            Self::DepressionStorage => "depression_storage",
            Self::Infiltration => "infiltration",
            Self::Fmin => "fmin",
            Self::Fmax => "fmax",
            Self::K => "k",
            Self::T => "t",
            Self::PreviouslyDevelopedArea => "previously_developed_area",
            Self::DevelopmentFootprint => "development_footprint",
            Self::LongTerm => "long_term",
            Self::ShortTerm => "short_term",
            Self::RackArea => "rack_area",
            Self::BaselineEnergy => "baseline_energy",
            Self::ProposedEnergy => "proposed_energy",
            Self::MaterialThickness => "material_thickness",
            Self::ThermalConductivity => "thermal_conductivity",
            Self::RValue => "r_value",
            Self::ShwGenerated => "shw_generated",
            Self::HotWaterDemand => "hot_water_demand",
            Self::PvEnergyGenerated => "pv_energy_generated",
            Self::ProposedEnergyConsumption => "proposed_energy_consumption",
            Self::AnnualEnergyGenerated => "annual_energy_generated",
            Self::CommunityEnergyConsumption => "community_energy_consumption",
            Self::DesignedOccupancy => "designed_occupancy",
            Self::ExpectedOccupancy => "expected_occupancy",
            Self::TotalOccupancy => "total_occupancy",
            Self::CompliantAdhesives => "compliant_adhesives",
            Self::TotalWeight => "total_weight",
            Self::Recycled => "recycled",
            Self::Reused => "reused",
            Self::Salvaged => "salvaged",
            Self::Donated => "donated",
            Self::Reclaimed => "reclaimed",
            Self::TotalWaste => "total_waste",
            Self::StreetLinks => "street_links",
            Self::Nodes => "nodes",
            Self::Intersections => "intersections",
            Self::ContinuousWalkway => "continuous_walkway",
            Self::AllWalkways => "all_walkways",
            Self::GrossFloorArea => "gross_floor_area",
            Self::CoolingProvided => "cooling_provided",
            Self::EnergyConsumed => "energy_consumed",
            Self::CompliantPaints => "compliant_paints",
            Self::DwellingScope => "dwelling_scope",
        }
    }

    /// Human-readable name used in missing-field and invalid-number messages.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::BuildingType => "building type",
            Self::DwellingCategory => "individual or multi-residential",
            Self::Occupants => "regular building occupants",
            Self::Persons => "people",
            Self::DwellingUnits => "number of dwelling units",
            Self::PeakVisitors => "peak visitors",
            Self::PeakInpatients => "peak inpatients",
            Self::QualifyingOutpatients => "qualifying outpatients",
            Self::Unit => "area unit",
            Self::Area => "area",
            Self::Length => "length",
            Self::Width => "width",
            Self::Dimensions => "length and width with units",
            Self::TotalParkingSpaces => "total parking spaces",
            Self::RestorationArea => "restoration area",
            Self::DisturbedArea => "total previously disturbed site area",
            Self::TotalSiteArea => "total site area",
            Self::RequiredOpenSpace => "required open space",
            Self::Rainfall => "rainfall",
            Self::DepressionStorage => "depression storage",
            Self::Infiltration => "infiltration",
            Self::Fmin => "fmin",
            Self::Fmax => "fmax",
            Self::K => "k",
            Self::T => "t",
            Self::PreviouslyDevelopedArea => "area of previously developed land",
            Self::DevelopmentFootprint => "area of development footprint",
            Self::LongTerm => "long term",
            Self::ShortTerm => "short term",
            Self::RackArea => "area",
            Self::BaselineEnergy => "baseline energy",
            Self::ProposedEnergy => "proposed energy",
            Self::MaterialThickness => "material thickness",
            Self::ThermalConductivity => "thermal conductivity",
            Self::RValue => "R-value",
            Self::ShwGenerated => "annual hot water generated by SHW panels",
            Self::HotWaterDemand => "annual hot water demand",
            Self::PvEnergyGenerated => "energy generated by PV",
            Self::ProposedEnergyConsumption => "proposed building annual energy consumption",
            Self::AnnualEnergyGenerated => "annual energy generated",
            Self::CommunityEnergyConsumption => "community energy consumption",
            Self::DesignedOccupancy => "designed maximum occupancy",
            Self::ExpectedOccupancy => "expected occupancy",
            Self::TotalOccupancy => "total occupancy",
            Self::CompliantAdhesives => "weight of adhesives and sealants not exceeding VOC limits",
            Self::TotalWeight => "total weight",
            Self::Recycled => "recycled",
            Self::Reused => "reused",
            Self::Salvaged => "salvaged",
            Self::Donated => "donated",
            Self::Reclaimed => "reclaimed",
            Self::TotalWaste => "total amount of waste generated",
            Self::StreetLinks => "street links",
            Self::Nodes => "nodes",
            Self::Intersections => "intersections",
            Self::ContinuousWalkway => "linear length on both sides",
            Self::AllWalkways => "all walkways",
            Self::GrossFloorArea => "gross floor area",
            Self::CoolingProvided => "cooling provided",
            Self::EnergyConsumed => "energy consumed",
            Self::CompliantPaints => "weight not exceeding VOC",
            Self::DwellingScope => "communal or private",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
