use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// (latitude, longitude) in decimal degrees.
pub type Coordinate = (f64, f64);

/// Seoul metro bounding box. Catalog records outside of it are dropped at load time.
pub const REGION_LAT_RANGE: RangeInclusive<f64> = 37.3..=37.8;
pub const REGION_LNG_RANGE: RangeInclusive<f64> = 126.6..=127.3;

fn default_importance() -> f32 {
    1.0
}

/// A point of interest from the catalog. Produced by an external ingestion
/// step; by the time it reaches this service the coordinates are expected to
/// be inside the Seoul region and the category lowercased (`dining`,
/// `culture`, `park`, ...). Unknown categories are legal and score neutrally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Place {
    pub title: String,
    pub category: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default = "default_importance")]
    pub importance: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
}

impl Place {
    pub fn coordinate(&self) -> Coordinate {
        (self.latitude, self.longitude)
    }

    pub fn is_within_region(&self) -> bool {
        REGION_LAT_RANGE.contains(&self.latitude) && REGION_LNG_RANGE.contains(&self.longitude)
    }
}

/// A catalog place plus its computed suitability score. Built per
/// recommendation request and discarded after the response is rendered.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredPlace {
    #[serde(flatten)]
    pub place: Place,
    pub score: f32,
}
