use serde::{Deserialize, Serialize};

use crate::models::place::Coordinate;
use crate::models::travel_style::TravelStyle;

/// Body of `POST /api/recommendations`.
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationRequest {
    #[serde(default)]
    pub styles: Vec<TravelStyle>,
    pub num_days: usize,
    #[serde(default)]
    pub include_children: bool,
    #[serde(default)]
    pub places_per_day: Option<usize>,
    #[serde(default)]
    pub start_location: Option<Coordinate>,
}

/// One scheduled stop within a day.
#[derive(Debug, Clone, Serialize)]
pub struct ItineraryStop {
    pub title: String,
    pub category: String,
    pub latitude: f64,
    pub longitude: f64,
    pub score: f32,
    pub time_slot: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
}

/// Ordered stops for a single day; order is visiting order. Days may be
/// shorter than requested, or empty, when the catalog runs out.
#[derive(Debug, Clone, Serialize)]
pub struct DailyItinerary {
    pub day: u32,
    pub stops: Vec<ItineraryStop>,
}

/// Full recommendation response. `place_names` is the day-order, then
/// within-day-order flattening of all stop titles; clients rely on that
/// ordering. `fallback` marks itineraries served from the built-in templates
/// with synthetic coordinates.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub course_label: String,
    pub place_names: Vec<String>,
    pub days: Vec<DailyItinerary>,
    pub fallback: bool,
}
