//! Unit canonicalization.
//!
//! Every unit token the patterns accept collapses into one of two families.
//! Formulas never look at the raw token; they ask the family for the right
//! coefficient.

use serde::Serialize;

/// Square feet per square meter.
pub const SQ_FT_PER_SQ_M: f64 = 10.764;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitFamily {
    /// foot, feet, ft and their squared forms.
    Imperial,
    /// meter, meters, m and their squared forms.
    Metric,
}

impl UnitFamily {
    /// Canonicalize a unit token, ignoring any squared suffix.
    #[must_use]
    pub fn resolve(token: &str) -> Option<Self> {
        let token = token.trim().to_lowercase();
        let base = token
            .strip_suffix("^2")
            .or_else(|| token.strip_suffix('²'))
            .or_else(|| token.strip_suffix('2'))
            .unwrap_or(token.as_str());

        match base {
            "foot" | "feet" | "ft" => Some(Self::Imperial),
            "meter" | "meters" | "metre" | "metres" | "m" => Some(Self::Metric),
            _ => None,
        }
    }

    /// Pick the coefficient for this family.
    #[must_use]
    pub const fn coefficient(self, imperial: f64, metric: f64) -> f64 {
        match self {
            Self::Imperial => imperial,
            Self::Metric => metric,
        }
    }

    /// Symbol for an area in this family.
    #[must_use]
    pub const fn area_symbol(self) -> &'static str {
        match self {
            Self::Imperial => "ft²",
            Self::Metric => "m²",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Imperial => "imperial",
            Self::Metric => "metric",
        }
    }

    /// Convert an area in this family to square meters.
    #[must_use]
    pub fn to_square_meters(self, area: f64) -> f64 {
        match self {
            Self::Imperial => area / SQ_FT_PER_SQ_M,
            Self::Metric => area,
        }
    }
}
