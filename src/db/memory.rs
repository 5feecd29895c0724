use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

use serde::Serialize;

use crate::models::place::Place;
use crate::models::visit::{SavedCourse, VisitRecord};

/// Shared application state. The catalog is loaded once (startup seed file or
/// `POST /api/places`) and read as an immutable snapshot per request; visits
/// and saved courses are keyed by username.
pub struct AppState {
    catalog: RwLock<Vec<Place>>,
    visits: RwLock<HashMap<String, Vec<VisitRecord>>>,
    courses: RwLock<HashMap<String, Vec<SavedCourse>>>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct CatalogLoad {
    pub loaded: usize,
    pub skipped: usize,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            catalog: RwLock::new(Vec::new()),
            visits: RwLock::new(HashMap::new()),
            courses: RwLock::new(HashMap::new()),
        }
    }

    pub fn with_catalog(places: Vec<Place>) -> Self {
        let state = Self::new();
        state.replace_catalog(places);
        state
    }

    /// Replace the catalog, dropping records outside the Seoul region and
    /// repeated titles (first occurrence wins). Titles are unique within a
    /// catalog, and the itinerary builder relies on that to keep a place from
    /// appearing twice across a trip.
    pub fn replace_catalog(&self, places: Vec<Place>) -> CatalogLoad {
        let total = places.len();
        let mut seen_titles = HashSet::new();
        let accepted: Vec<Place> = places
            .into_iter()
            .filter(|p| p.is_within_region() && seen_titles.insert(p.title.clone()))
            .collect();
        let load = CatalogLoad {
            loaded: accepted.len(),
            skipped: total - accepted.len(),
        };
        *self.catalog.write().unwrap_or_else(|e| e.into_inner()) = accepted;
        load
    }

    pub fn catalog_snapshot(&self) -> Vec<Place> {
        self.catalog.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn catalog_len(&self) -> usize {
        self.catalog.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn add_visit(&self, username: &str, visit: VisitRecord) {
        self.visits
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .entry(username.to_string())
            .or_default()
            .push(visit);
    }

    pub fn visits_for(&self, username: &str) -> Vec<VisitRecord> {
        self.visits
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(username)
            .cloned()
            .unwrap_or_default()
    }

    pub fn add_course(&self, username: &str, course: SavedCourse) {
        self.courses
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .entry(username.to_string())
            .or_default()
            .push(course);
    }

    pub fn courses_for(&self, username: &str) -> Vec<SavedCourse> {
        self.courses
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(username)
            .cloned()
            .unwrap_or_default()
    }
}

/// Seed the catalog from the JSON file named by `CATALOG_PATH`, if set.
/// A malformed or missing seed file is reported and skipped; the service
/// still starts and serves template fallbacks.
pub fn seed_catalog_from_env(state: &AppState) {
    let Ok(path) = std::env::var("CATALOG_PATH") else {
        println!("CATALOG_PATH not set, starting with an empty catalog");
        return;
    };

    let contents = match std::fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(e) => {
            eprintln!("Failed to read catalog seed file {}: {}", path, e);
            return;
        }
    };

    match serde_json::from_str::<Vec<Place>>(&contents) {
        Ok(places) => {
            let load = state.replace_catalog(places);
            println!(
                "Catalog seeded from {}: {} places loaded, {} skipped (outside region)",
                path, load.loaded, load.skipped
            );
        }
        Err(e) => {
            eprintln!("Failed to parse catalog seed file {}: {}", path, e);
        }
    }
}
