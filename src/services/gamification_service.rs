use std::collections::HashSet;

use crate::models::place::Place;
use crate::models::visit::{VisitRecord, VisitStats};

/// XP needed to advance one level.
pub const XP_PER_LEVEL: u32 = 100;

const MIN_VISIT_XP: i64 = 10;
const MAX_VISIT_XP: i64 = 100;

/// XP and level arithmetic for the visit history.
pub struct GamificationService;

impl GamificationService {
    /// XP awarded for visiting a place: 25 per importance point, clamped to
    /// 10..=100. Importance comes from the catalog; an uncataloged place
    /// counts as importance 1.0.
    pub fn xp_for_visit(importance: f32) -> u32 {
        let importance = if importance.is_finite() && importance >= 0.0 {
            importance
        } else {
            1.0
        };
        let xp = (importance * 25.0).round() as i64;
        xp.clamp(MIN_VISIT_XP, MAX_VISIT_XP) as u32
    }

    /// Catalog lookup by exact title for the award above.
    pub fn importance_of(catalog: &[Place], place_name: &str) -> f32 {
        catalog
            .iter()
            .find(|p| p.title == place_name)
            .map(|p| p.importance)
            .unwrap_or(1.0)
    }

    pub fn level(total_xp: u32) -> u32 {
        total_xp / XP_PER_LEVEL + 1
    }

    pub fn xp_into_level(total_xp: u32) -> u32 {
        total_xp % XP_PER_LEVEL
    }

    pub fn xp_to_next_level(total_xp: u32) -> u32 {
        XP_PER_LEVEL - total_xp % XP_PER_LEVEL
    }

    pub fn stats(visits: &[VisitRecord]) -> VisitStats {
        let total_xp: u32 = visits.iter().map(|v| v.xp_gained).sum();
        let unique_places = visits
            .iter()
            .map(|v| v.place_name.as_str())
            .collect::<HashSet<_>>()
            .len();

        VisitStats {
            total_visits: visits.len(),
            unique_places,
            total_xp,
            level: Self::level(total_xp),
            xp_into_level: Self::xp_into_level(total_xp),
            xp_to_next_level: Self::xp_to_next_level(total_xp),
        }
    }
}
