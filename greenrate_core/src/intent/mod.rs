//! Compliance intents and their phrase-based classifier.

pub mod classifier;

pub use classifier::{INTENT_TABLE, IntentClassifier, IntentFlags, Phrase};

use serde::{Deserialize, Serialize};

/// The compliance metric a query asks for.
///
/// Declaration order is dispatch priority: when several intents match, the
/// one declared first wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Intent {
    LongTermStorage = 0,
    ShortTermStorage = 1,
    ShowerFacilities = 2,
    PreferredSpaces = 3,
    FuelingStations = 4,
    RestorationArea = 5,
    VegetatedSpace = 6,
    OpenSpace = 7,
    OutdoorArea = 8,
    AirVolumeBeforeOccupancy = 9,
    AirVolumeDuringOccupancy = 10,
    AirVolumeToComplete = 11,
    Runoff = 12,
    DepressionStorage = 13,
    DevelopmentPercentage = 14,
    BicycleRacks = 15,
    EnergyPerformance = 16,
    UValue = 17,
    RValue = 18,
    SolarHotWater = 19,
    RenewableEnergy = 20,
    OccupantDensity = 21,
    OutdoorSpaceSize = 22,
    AdhesivesSealants = 23,
    WasteDiverted = 24,
    ConnectivityIndex = 25,
    IntersectionDensity = 26,
    ContinuousWalkway = 27,
    FloorAreaRatio = 28,
    Seer = 29,
    CompliantPaints = 30,
    DwellingSize = 31,
}

impl Intent {
    pub const COUNT: usize = 32;

    /// Every intent, highest priority first.
    pub const ALL: [Self; Self::COUNT] = [
        Self::LongTermStorage,
        Self::ShortTermStorage,
        Self::ShowerFacilities,
        Self::PreferredSpaces,
        Self::FuelingStations,
        Self::RestorationArea,
        Self::VegetatedSpace,
        Self::OpenSpace,
        Self::OutdoorArea,
        Self::AirVolumeBeforeOccupancy,
        Self::AirVolumeDuringOccupancy,
        Self::AirVolumeToComplete,
        Self::Runoff,
        Self::DepressionStorage,
        Self::DevelopmentPercentage,
        Self::BicycleRacks,
        Self::EnergyPerformance,
        Self::UValue,
        Self::RValue,
        Self::SolarHotWater,
        Self::RenewableEnergy,
        Self::OccupantDensity,
        Self::OutdoorSpaceSize,
        Self::AdhesivesSealants,
        Self::WasteDiverted,
        Self::ConnectivityIndex,
        Self::IntersectionDensity,
        Self::ContinuousWalkway,
        Self::FloorAreaRatio,
        Self::Seer,
        Self::CompliantPaints,
        Self::DwellingSize,
    ];

    /// Position in the dispatch order, 0 being highest.
    #[must_use]
    pub const fn priority(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::LongTermStorage => "long_term_storage",
            Self::ShortTermStorage => "short_term_storage",
            Self::ShowerFacilities => "shower_facilities",
            Self::PreferredSpaces => "preferred_spaces",
            Self::FuelingStations => "fueling_stations",
            Self::RestorationArea => "restoration_area",
            Self::VegetatedSpace => "vegetated_space",
            Self::OpenSpace => "open_space",
            Self::OutdoorArea => "outdoor_area",
            Self::AirVolumeBeforeOccupancy => "air_volume_before_occupancy",
            Self::AirVolumeDuringOccupancy => "air_volume_during_occupancy",
            Self::AirVolumeToComplete => "air_volume_to_complete",
            Self::Runoff => "runoff",
            Self::DepressionStorage => "depression_storage",
            Self::DevelopmentPercentage => "development_percentage",
            Self::BicycleRacks => "bicycle_racks",
            Self::EnergyPerformance => "energy_performance",
            Self::UValue => "u_value",
            Self::RValue => "r_value",
            Self::SolarHotWater => "solar_hot_water",
            Self::RenewableEnergy => "renewable_energy",
            Self::OccupantDensity => "occupant_density",
            Self::OutdoorSpaceSize => "outdoor_space_size",
            Self::AdhesivesSealants => "adhesives_sealants",
            Self::WasteDiverted => "waste_diverted",
            Self::ConnectivityIndex => "connectivity_index",
            Self::IntersectionDensity => "intersection_density",
            Self::ContinuousWalkway => "continuous_walkway",
            Self::FloorAreaRatio => "floor_area_ratio",
            Self::Seer => "seer",
            Self::CompliantPaints => "compliant_paints",
            Self::DwellingSize => "dwelling_size",
        }
    }

    /// Parse from the snake_case name; unknown names yield `None`.
    #[must_use]
    pub fn from_str_lowercase(s: &str) -> Option<Self> {
        let s = s.to_lowercase();
        Self::ALL.into_iter().find(|intent| intent.as_str() == s)
    }
}

impl std::str::FromStr for Intent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_lowercase(s).ok_or_else(|| format!("unknown intent: {s}"))
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
