use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A recorded place visit. XP is awarded at record time from the catalog
/// importance of the visited place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisitRecord {
    pub id: Uuid,
    pub place_name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub xp_gained: u32,
    pub visited_at: DateTime<Utc>,
}

/// Body of `POST /api/visits`.
#[derive(Debug, Clone, Deserialize)]
pub struct NewVisit {
    pub username: String,
    pub place_name: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct VisitStats {
    pub total_visits: usize,
    pub unique_places: usize,
    pub total_xp: u32,
    pub level: u32,
    pub xp_into_level: u32,
    pub xp_to_next_level: u32,
}

/// Response of `GET /api/visits/{username}`.
#[derive(Debug, Clone, Serialize)]
pub struct VisitHistory {
    pub visits: Vec<VisitRecord>,
    pub stats: VisitStats,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedCourse {
    pub id: Uuid,
    pub course_label: String,
    pub num_days: usize,
    pub place_names: Vec<String>,
    pub saved_at: DateTime<Utc>,
}

/// Body of `POST /api/courses`.
#[derive(Debug, Clone, Deserialize)]
pub struct NewCourse {
    pub username: String,
    pub course_label: String,
    pub num_days: usize,
    pub place_names: Vec<String>,
}
