use crate::models::place::{Place, ScoredPlace};
use crate::models::travel_style::{TravelStyle, CHILD_FRIENDLY_BOOST, FAMILY_FRIENDLY_CATEGORIES};

/// Computes per-place suitability scores from the user's selected travel
/// styles. Pure and deterministic; no clamping is applied, so scores can grow
/// past the base importance when several styles match.
pub struct ScoringEngine;

impl ScoringEngine {
    /// Score a single place. Starts from the place importance (1.0 when the
    /// stored value is non-finite or negative), then compounds the weight of
    /// every selected style that has an entry for the place category, then
    /// applies the child-friendly boost for family categories. A missing or
    /// unrecognized category is neutral, not an error.
    pub fn score(place: &Place, styles: &[TravelStyle], include_children: bool) -> f32 {
        let mut score = if place.importance.is_finite() && place.importance >= 0.0 {
            place.importance
        } else {
            1.0
        };

        let category = place.category.trim().to_lowercase();

        for (i, style) in styles.iter().enumerate() {
            // Styles form a set; a repeated selection must not double-apply.
            if styles[..i].contains(style) {
                continue;
            }
            if let Some(weight) = style.category_weight(&category) {
                score *= weight;
            }
        }

        if include_children && FAMILY_FRIENDLY_CATEGORIES.contains(&category.as_str()) {
            score *= CHILD_FRIENDLY_BOOST;
        }

        score
    }

    /// Score the whole catalog, preserving catalog order.
    pub fn score_catalog(
        catalog: &[Place],
        styles: &[TravelStyle],
        include_children: bool,
    ) -> Vec<ScoredPlace> {
        catalog
            .iter()
            .map(|place| ScoredPlace {
                place: place.clone(),
                score: Self::score(place, styles, include_children),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(category: &str, importance: f32) -> Place {
        Place {
            title: "test".to_string(),
            category: category.to_string(),
            latitude: 37.5665,
            longitude: 126.978,
            importance,
            address: None,
            info: None,
        }
    }

    #[test]
    fn test_single_style_weight() {
        let p = place("culture", 1.0);
        let score = ScoringEngine::score(&p, &[TravelStyle::HistoryCulture], false);
        assert_eq!(score, 1.5);
    }

    #[test]
    fn test_styles_compound_multiplicatively() {
        // park is weighted 1.2 by active and 1.5 by nature: 1.2 * 1.5 = 1.8.
        let p = place("park", 1.0);
        let score =
            ScoringEngine::score(&p, &[TravelStyle::Active, TravelStyle::Nature], false);
        assert!((score - 1.8).abs() < 1e-6);
    }

    #[test]
    fn test_duplicate_style_applies_once() {
        let p = place("culture", 1.0);
        let once = ScoringEngine::score(&p, &[TravelStyle::HistoryCulture], false);
        let twice = ScoringEngine::score(
            &p,
            &[TravelStyle::HistoryCulture, TravelStyle::HistoryCulture],
            false,
        );
        assert_eq!(once, twice);
    }

    #[test]
    fn test_unknown_category_is_neutral() {
        let p = place("submarine", 2.0);
        let score = ScoringEngine::score(&p, &[TravelStyle::HistoryCulture], false);
        assert_eq!(score, 2.0);
    }

    #[test]
    fn test_child_boost_applies_only_to_family_categories() {
        let park = place("park", 1.0);
        let dining = place("dining", 1.0);
        assert!((ScoringEngine::score(&park, &[], true) - 1.2).abs() < 1e-6);
        assert_eq!(ScoringEngine::score(&dining, &[], true), 1.0);
    }

    #[test]
    fn test_score_monotonic_in_importance() {
        let styles = [TravelStyle::HistoryCulture, TravelStyle::Shopping];
        let low = ScoringEngine::score(&place("culture", 1.0), &styles, true);
        let high = ScoringEngine::score(&place("culture", 2.5), &styles, true);
        assert!(high > low);
    }

    #[test]
    fn test_invalid_importance_defaults_to_one() {
        assert_eq!(ScoringEngine::score(&place("dining", f32::NAN), &[], false), 1.0);
        assert_eq!(ScoringEngine::score(&place("dining", -3.0), &[], false), 1.0);
    }

    #[test]
    fn test_category_matching_is_case_insensitive() {
        let p = place("Culture", 1.0);
        let score = ScoringEngine::score(&p, &[TravelStyle::HistoryCulture], false);
        assert_eq!(score, 1.5);
    }
}
