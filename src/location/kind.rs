//! Administrative granularity tags.

use serde::{Deserialize, Serialize};

/// Administrative granularity of a location.
///
/// A tag, not a level: a city-state may carry `State` and still have
/// `CityDistrict` children, so nothing in the hierarchy code may derive
/// depth from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LocationKind {
    State,
    GovernmentalDistrict,
    County,
    IndependentCity,
    Municipality,
    CityDistrict,
    Neighborhood,
}

impl LocationKind {
    /// All kinds, in coarse-to-fine display order.
    pub const ALL: [Self; 7] = [
        Self::State,
        Self::GovernmentalDistrict,
        Self::County,
        Self::IndependentCity,
        Self::Municipality,
        Self::CityDistrict,
        Self::Neighborhood,
    ];

    /// Wire name as used in the dataset.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::State => "state",
            Self::GovernmentalDistrict => "governmental-district",
            Self::County => "county",
            Self::IndependentCity => "independent-city",
            Self::Municipality => "municipality",
            Self::CityDistrict => "city-district",
            Self::Neighborhood => "neighborhood",
        }
    }

    /// Display label for page headings and badges.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::State => "Bundesland",
            Self::GovernmentalDistrict => "Regierungsbezirk",
            Self::County => "Landkreis",
            Self::IndependentCity => "Kreisfreie Stadt",
            Self::Municipality => "Gemeinde",
            Self::CityDistrict => "Stadtbezirk",
            Self::Neighborhood => "Stadtteil",
        }
    }

    /// Badge color (hex) for navigation collaborators.
    pub const fn color(&self) -> &'static str {
        match self {
            Self::State => "#1d4ed8",
            Self::GovernmentalDistrict => "#7c3aed",
            Self::County => "#047857",
            Self::IndependentCity => "#b91c1c",
            Self::Municipality => "#0f766e",
            Self::CityDistrict => "#c2410c",
            Self::Neighborhood => "#4d7c0f",
        }
    }
}

impl std::fmt::Display for LocationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
