use serde::{Deserialize, Serialize};

/// User-selected travel preference. Fixed set, no lifecycle; each style maps
/// to a per-category score multiplier table used by the scoring engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TravelStyle {
    #[serde(rename = "active")]
    Active,
    #[serde(rename = "relaxation")]
    Relaxation,
    #[serde(rename = "dining")]
    Dining,
    #[serde(rename = "shopping")]
    Shopping,
    #[serde(rename = "history/culture")]
    HistoryCulture,
    #[serde(rename = "nature")]
    Nature,
}

/// Categories boosted when the party includes children.
pub const FAMILY_FRIENDLY_CATEGORIES: [&str; 3] = ["exhibition", "sports", "park"];

/// Fixed multiplier applied on top of style weights for family-friendly categories.
pub const CHILD_FRIENDLY_BOOST: f32 = 1.2;

impl TravelStyle {
    pub const ALL: [TravelStyle; 6] = [
        TravelStyle::Active,
        TravelStyle::Relaxation,
        TravelStyle::Dining,
        TravelStyle::Shopping,
        TravelStyle::HistoryCulture,
        TravelStyle::Nature,
    ];

    /// Wire name as accepted/emitted by the API.
    pub fn wire_name(&self) -> &'static str {
        match self {
            TravelStyle::Active => "active",
            TravelStyle::Relaxation => "relaxation",
            TravelStyle::Dining => "dining",
            TravelStyle::Shopping => "shopping",
            TravelStyle::HistoryCulture => "history/culture",
            TravelStyle::Nature => "nature",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TravelStyle::Active => "Active",
            TravelStyle::Relaxation => "Relaxation",
            TravelStyle::Dining => "Dining",
            TravelStyle::Shopping => "Shopping",
            TravelStyle::HistoryCulture => "History & Culture",
            TravelStyle::Nature => "Nature",
        }
    }

    /// Score multiplier this style assigns to a (lowercased) place category.
    /// Categories a style has no opinion on return `None` and leave the score
    /// untouched.
    pub fn category_weight(&self, category: &str) -> Option<f32> {
        let weight = match (self, category) {
            (TravelStyle::Active, "sports") => 1.5,
            (TravelStyle::Active, "attraction") => 1.2,
            (TravelStyle::Active, "park") => 1.2,
            (TravelStyle::Relaxation, "park") => 1.4,
            (TravelStyle::Relaxation, "nature") => 1.3,
            (TravelStyle::Dining, "dining") => 1.5,
            (TravelStyle::Dining, "market") => 1.3,
            (TravelStyle::Shopping, "shopping") => 1.5,
            (TravelStyle::Shopping, "souvenir") => 1.4,
            (TravelStyle::Shopping, "market") => 1.3,
            (TravelStyle::HistoryCulture, "culture") => 1.5,
            (TravelStyle::HistoryCulture, "history") => 1.5,
            (TravelStyle::HistoryCulture, "exhibition") => 1.4,
            (TravelStyle::HistoryCulture, "attraction") => 1.3,
            (TravelStyle::Nature, "nature") => 1.5,
            (TravelStyle::Nature, "park") => 1.5,
            _ => return None,
        };
        Some(weight)
    }
}
