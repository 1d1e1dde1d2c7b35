//! Phrase-table intent classification.
//!
//! Each intent owns a list of literal phrases. A predicate is true when any of
//! its phrases occurs in the normalized query. Predicates are independent, so
//! several can be true at once; the table order decides which one is acted on.

use serde::Serialize;

use super::Intent;

/// A literal trigger for an intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum Phrase {
    /// Matches anywhere, including inside longer words.
    Contains(&'static str),
    /// Matches only as a whole word (short keywords such as `far` or `cw`).
    Word(&'static str),
}

impl Phrase {
    #[must_use]
    pub const fn text(&self) -> &'static str {
        match self {
            Self::Contains(text) | Self::Word(text) => text,
        }
    }

    /// Test the phrase against already-normalized text.
    #[must_use]
    pub fn matches(&self, text: &str) -> bool {
        match self {
            Self::Contains(phrase) => text.contains(phrase),
            Self::Word(word) => text.match_indices(word).any(|(start, _)| {
                let before = text[..start].chars().next_back();
                let after = text[start + word.len()..].chars().next();
                !before.is_some_and(char::is_alphanumeric)
                    && !after.is_some_and(char::is_alphanumeric)
            }),
        }
    }
}

use Phrase::{Contains, Word};

/// Trigger phrases per intent, in dispatch priority order.
pub const INTENT_TABLE: &[(Intent, &[Phrase])] = &[
    (Intent::LongTermStorage, &[Contains("long-term bicycle storage")]),
    (Intent::ShortTermStorage, &[Contains("short-term bicycle storage")]),
    (
        Intent::ShowerFacilities,
        &[
            Contains("shower facilities"),
            Contains("shower facility"),
            Contains("shower"),
        ],
    ),
    (
        Intent::PreferredSpaces,
        &[
            Contains("required number of preferred spaces"),
            Contains("preferred spaces"),
            Contains("preferred space"),
        ],
    ),
    (
        Intent::FuelingStations,
        &[
            Contains("required number of fueling stations"),
            Contains("fueling stations"),
            Contains("fuel stations"),
        ],
    ),
    (
        Intent::RestorationArea,
        &[
            Contains("percentage of restoration area"),
            Contains("restoration area percentage"),
        ],
    ),
    (Intent::VegetatedSpace, &[Contains("vegetated space")]),
    (
        Intent::OpenSpace,
        &[
            Contains("required open space"),
            Contains("open space requirement"),
        ],
    ),
    (
        Intent::OutdoorArea,
        &[
            Contains("required outdoor area"),
            Contains("outdoor area requirement"),
            Contains("outdoor area"),
        ],
    ),
    (
        Intent::AirVolumeBeforeOccupancy,
        &[
            Contains("air volume before occupancy"),
            Contains("flush out before occupancy"),
        ],
    ),
    (
        Intent::AirVolumeDuringOccupancy,
        &[
            Contains("air volume during occupancy"),
            Contains("flush out during occupancy"),
        ],
    ),
    (
        Intent::AirVolumeToComplete,
        &[
            Contains("air volume to complete"),
            Contains("flush out to complete"),
        ],
    ),
    (
        Intent::Runoff,
        &[
            Contains("expected runoff"),
            Contains("runoff"),
            Contains("run off"),
        ],
    ),
    (Intent::DepressionStorage, &[Contains("depression storage")]),
    (
        Intent::DevelopmentPercentage,
        &[
            Contains("percentage of previously developed land"),
            Contains("previously developed land"),
        ],
    ),
    (
        Intent::BicycleRacks,
        &[
            Contains("number of bicycle racks required"),
            Contains("total of bicycle racks"),
            Contains("bicycle racks"),
        ],
    ),
    (
        Intent::EnergyPerformance,
        &[
            Contains("energy performance"),
            Contains("energy improvement"),
        ],
    ),
    (Intent::UValue, &[Contains("u-value"), Contains("u value")]),
    (Intent::RValue, &[Contains("r-value"), Contains("r value")]),
    (
        Intent::SolarHotWater,
        &[Contains("hot water demand provided by shw")],
    ),
    (Intent::RenewableEnergy, &[Contains("renewable energy")]),
    (Intent::OccupantDensity, &[Contains("occupant density")]),
    (Intent::OutdoorSpaceSize, &[Contains("size of outdoor space")]),
    (
        Intent::AdhesivesSealants,
        &[Contains("compliant adhesives and sealants")],
    ),
    (
        Intent::WasteDiverted,
        &[Contains("waste diverted from landfill")],
    ),
    (Intent::ConnectivityIndex, &[Contains("connectivity index")]),
    (Intent::IntersectionDensity, &[Contains("intersection density")]),
    (
        Intent::ContinuousWalkway,
        &[Contains("continuous walkway"), Word("cw")],
    ),
    (
        Intent::FloorAreaRatio,
        &[Contains("floor area ratio"), Word("far")],
    ),
    (Intent::Seer, &[Word("seer")]),
    (
        Intent::CompliantPaints,
        &[
            Contains("compliant paints and coatings"),
            Contains("compliant paints and coating"),
        ],
    ),
    (
        Intent::DwellingSize,
        &[Contains("dwelling size"), Contains("building size")],
    ),
];

/// Every intent whose predicate held for one query, in priority order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IntentFlags(Vec<Intent>);

impl IntentFlags {
    /// Whether the intent's predicate was true.
    #[must_use]
    pub fn get(&self, intent: Intent) -> bool {
        self.0.contains(&intent)
    }

    /// The highest-priority true intent.
    #[must_use]
    pub fn primary(&self) -> Option<Intent> {
        self.0.first().copied()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Intent] {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Intent classifier over a phrase table.
#[derive(Debug, Clone, Copy)]
pub struct IntentClassifier {
    table: &'static [(Intent, &'static [Phrase])],
}

impl IntentClassifier {
    /// Create a classifier from a table already in priority order.
    #[must_use]
    pub const fn new(table: &'static [(Intent, &'static [Phrase])]) -> Self {
        Self { table }
    }

    /// Create a classifier over the built-in table.
    #[must_use]
    pub const fn with_defaults() -> Self {
        Self::new(INTENT_TABLE)
    }

    /// Evaluate every predicate against already-normalized text.
    #[must_use]
    pub fn flags(&self, text: &str) -> IntentFlags {
        IntentFlags(
            self.table
                .iter()
                .filter(|(_, phrases)| phrases.iter().any(|p| p.matches(text)))
                .map(|(intent, _)| *intent)
                .collect(),
        )
    }

    /// The first intent, in priority order, whose predicate holds.
    #[must_use]
    pub fn classify(&self, text: &str) -> Option<Intent> {
        self.table
            .iter()
            .find(|(_, phrases)| phrases.iter().any(|p| p.matches(text)))
            .map(|(intent, _)| *intent)
    }

    #[must_use]
    pub const fn table(&self) -> &'static [(Intent, &'static [Phrase])] {
        self.table
    }

    /// Trigger phrases of one intent.
    #[must_use]
    pub fn phrases(&self, intent: Intent) -> &'static [Phrase] {
        self.table
            .iter()
            .find(|(candidate, _)| *candidate == intent)
            .map_or(&[], |(_, phrases)| *phrases)
    }
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::with_defaults()
    }
}
