//! Country, continent and region data structures.

use serde::{Deserialize, Serialize};

/// Continent as spelled in the country dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Continent {
    Europe,
    Asia,
    Oceania,
    Africa,
    #[serde(rename = "North America")]
    NorthAmerica,
    #[serde(rename = "South America")]
    SouthAmerica,
}

impl Continent {
    pub const ALL: [Continent; 6] = [
        Continent::Europe,
        Continent::Asia,
        Continent::Oceania,
        Continent::Africa,
        Continent::NorthAmerica,
        Continent::SouthAmerica,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Europe => "Europe",
            Self::Asia => "Asia",
            Self::Oceania => "Oceania",
            Self::Africa => "Africa",
            Self::NorthAmerica => "North America",
            Self::SouthAmerica => "South America",
        }
    }
}

/// A quiz-time grouping of continents. Not stored, only used to filter the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Europe,
    /// Asia and Oceania
    Asia,
    Africa,
    /// North and South America
    America,
    All,
}

impl Region {
    pub const ALL: [Region; 5] = [
        Region::Europe,
        Region::Asia,
        Region::Africa,
        Region::America,
        Region::All,
    ];

    /// Region label, also used as the filter key ("Asia" covers Oceania).
    pub fn name(&self) -> &'static str {
        match self {
            Self::Europe => "Europe",
            Self::Asia => "Asia",
            Self::Africa => "Africa",
            Self::America => "America",
            Self::All => "All",
        }
    }

    /// Menu label.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Europe => "Europe",
            Self::Asia => "Asia & Oceania",
            Self::Africa => "Africa",
            Self::America => "America (North & South)",
            Self::All => "All",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|r| r.name() == name)
    }

    pub fn contains(&self, continent: Continent) -> bool {
        match self {
            Self::Europe => continent == Continent::Europe,
            Self::Asia => matches!(continent, Continent::Asia | Continent::Oceania),
            Self::Africa => continent == Continent::Africa,
            Self::America => {
                matches!(continent, Continent::NorthAmerica | Continent::SouthAmerica)
            }
            Self::All => true,
        }
    }

    /// Only quizzes over every region are saved to the leaderboard.
    pub fn saves_scores(&self) -> bool {
        *self == Self::All
    }
}

/// A country record from the dataset. Never mutated after loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub name: String,
    pub code: String,
    pub capital: String,
    pub continent: Continent,
    /// Surface area in km²
    pub area: f64,
    pub landlocked: bool,
    #[serde(default)]
    pub borders: Vec<String>,
}

impl Country {
    /// Identity used for "already picked" checks: name plus capital.
    pub fn same_as(&self, other: &Country) -> bool {
        self.name == other.name && self.capital == other.capital
    }

    pub fn is_bigger_than(&self, other: &Country) -> bool {
        self.area > other.area
    }

    pub fn is_smaller_than(&self, other: &Country) -> bool {
        self.area < other.area
    }
}
