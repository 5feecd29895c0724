use rand::Rng;

use crate::models::itinerary::{DailyItinerary, ItineraryStop, Recommendation, RecommendationRequest};
use crate::models::place::{Coordinate, Place, ScoredPlace};
use crate::models::travel_style::TravelStyle;
use crate::services::itinerary_builder::ItineraryBuilder;
use crate::services::scoring_service::ScoringEngine;

/// Seoul city center, the map default of the client app.
pub const DEFAULT_START: Coordinate = (37.5665, 126.978);

pub const DEFAULT_PLACES_PER_DAY: usize = 3;

/// Default day length when the request leaves `places_per_day` unset,
/// overridable via `RECO_PLACES_PER_DAY`. Clamped to at least 1 so a
/// degenerate override cannot produce all-empty days.
fn default_places_per_day() -> usize {
    std::env::var("RECO_PLACES_PER_DAY")
        .ok()
        .and_then(|s| s.parse::<usize>().ok())
        .map(|v| v.max(1))
        .unwrap_or(DEFAULT_PLACES_PER_DAY)
}

/// Visiting windows cycled through the stops of a day.
pub const TIME_SLOTS: [&str; 3] = ["09:00-12:00", "13:00-16:00", "16:00-19:00"];

const CULTURE_COURSE: &[&str] = &[
    "Gyeongbokgung Palace",
    "National Folk Museum of Korea",
    "Bukchon Hanok Village",
    "Changdeokgung Palace",
    "Insadong",
    "Jongmyo Shrine",
    "Deoksugung Palace",
    "Seoul Museum of Art",
    "National Museum of Korea",
];

const SHOPPING_COURSE: &[&str] = &[
    "Myeongdong",
    "Namdaemun Market",
    "Dongdaemun Design Plaza",
    "Gwangjang Market",
    "Hongdae",
    "Garosu-gil",
    "Itaewon",
    "Lotte World Mall",
    "Common Ground",
];

const NATURE_COURSE: &[&str] = &[
    "Namsan Park",
    "Cheonggyecheon Stream",
    "Seoul Forest",
    "Hangang Park Yeouido",
    "Haneul Park",
    "Olympic Park",
    "Bukhansan National Park",
    "Seokchon Lake",
    "Achasan Mountain",
];

const POPULAR_COURSE: &[&str] = &[
    "Gyeongbokgung Palace",
    "N Seoul Tower",
    "Myeongdong",
    "Bukchon Hanok Village",
    "Cheonggyecheon Stream",
    "Hongdae",
    "Dongdaemun Design Plaza",
    "Insadong",
    "Namdaemun Market",
];

/// Orchestrates scoring and itinerary building, and serves the fixed course
/// templates when no catalog is loaded.
pub struct RecommendationService {
    builder: ItineraryBuilder,
}

impl Default for RecommendationService {
    fn default() -> Self {
        Self::new()
    }
}

impl RecommendationService {
    pub fn new() -> Self {
        Self {
            builder: ItineraryBuilder::new(),
        }
    }

    pub fn with_builder(builder: ItineraryBuilder) -> Self {
        Self { builder }
    }

    /// Run one recommendation over an immutable catalog snapshot.
    pub fn recommend(&self, catalog: &[Place], request: &RecommendationRequest) -> Recommendation {
        let places_per_day = request.places_per_day.unwrap_or_else(default_places_per_day);
        let start = request.start_location.unwrap_or(DEFAULT_START);

        if catalog.is_empty() {
            return Self::fallback(&request.styles, request.num_days, places_per_day);
        }

        let scored = ScoringEngine::score_catalog(catalog, &request.styles, request.include_children);
        let day_lists = self
            .builder
            .build(scored, request.num_days, places_per_day, start);

        let days: Vec<DailyItinerary> = day_lists
            .into_iter()
            .enumerate()
            .map(|(day_idx, stops)| DailyItinerary {
                day: day_idx as u32 + 1,
                stops: stops
                    .into_iter()
                    .enumerate()
                    .map(|(slot, sp)| Self::to_stop(sp, slot))
                    .collect(),
            })
            .collect();

        Recommendation {
            course_label: Self::course_label(&request.styles),
            place_names: Self::flatten_names(&days),
            days,
            fallback: false,
        }
    }

    /// Human-readable course label from the selected styles.
    pub fn course_label(styles: &[TravelStyle]) -> String {
        if styles.is_empty() {
            return "Popular Course".to_string();
        }
        let names: Vec<&str> = styles.iter().map(|s| s.display_name()).collect();
        format!("{} Course", names.join(", "))
    }

    /// Template itinerary for an empty catalog. The place-name sequence is
    /// deterministic per style selection; only the synthetic coordinates are
    /// jittered around the city center, and every stop is marked as
    /// non-geolocated.
    fn fallback(styles: &[TravelStyle], num_days: usize, places_per_day: usize) -> Recommendation {
        let (label, names) = Self::fallback_template(styles);
        let mut rng = rand::thread_rng();

        let mut days: Vec<DailyItinerary> = Vec::with_capacity(num_days);
        let mut chunks = names.chunks(places_per_day.max(1));

        for day_idx in 0..num_days {
            // Template exhausted: remaining days stay empty, titles never repeat.
            let chunk = chunks.next().unwrap_or(&[]);
            let stops = chunk
                .iter()
                .enumerate()
                .map(|(slot, title)| ItineraryStop {
                    title: title.to_string(),
                    category: "attraction".to_string(),
                    latitude: DEFAULT_START.0 + rng.gen_range(-0.02..0.02),
                    longitude: DEFAULT_START.1 + rng.gen_range(-0.02..0.02),
                    score: 1.0,
                    time_slot: TIME_SLOTS[slot % TIME_SLOTS.len()].to_string(),
                    info: Some("Template stop, coordinates are approximate".to_string()),
                })
                .collect();
            days.push(DailyItinerary {
                day: day_idx as u32 + 1,
                stops,
            });
        }

        Recommendation {
            course_label: label.to_string(),
            place_names: Self::flatten_names(&days),
            days,
            fallback: true,
        }
    }

    /// Style-to-template precedence: culture beats shopping/dining beats
    /// relaxation/nature, everything else gets the popular course.
    fn fallback_template(styles: &[TravelStyle]) -> (&'static str, &'static [&'static str]) {
        if styles.contains(&TravelStyle::HistoryCulture) {
            ("Culture Course", CULTURE_COURSE)
        } else if styles.contains(&TravelStyle::Shopping) || styles.contains(&TravelStyle::Dining) {
            ("Shopping Course", SHOPPING_COURSE)
        } else if styles.contains(&TravelStyle::Relaxation) || styles.contains(&TravelStyle::Nature)
        {
            ("Nature Course", NATURE_COURSE)
        } else {
            ("Popular Course", POPULAR_COURSE)
        }
    }

    fn to_stop(scored: ScoredPlace, slot: usize) -> ItineraryStop {
        ItineraryStop {
            title: scored.place.title,
            category: scored.place.category,
            latitude: scored.place.latitude,
            longitude: scored.place.longitude,
            score: scored.score,
            time_slot: TIME_SLOTS[slot % TIME_SLOTS.len()].to_string(),
            info: scored.place.info,
        }
    }

    fn flatten_names(days: &[DailyItinerary]) -> Vec<String> {
        days.iter()
            .flat_map(|day| day.stops.iter().map(|stop| stop.title.clone()))
            .collect()
    }
}
