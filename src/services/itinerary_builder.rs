use crate::models::place::{Coordinate, ScoredPlace};
use crate::services::distance_service::DistanceService;

#[derive(Debug, Clone)]
pub struct BuilderConfig {
    /// Candidate pool cap is `num_days * places_per_day * pool_multiplier`.
    pub pool_multiplier: usize,
    /// Distance at which the decay factor reaches its floor.
    pub distance_threshold_km: f64,
    /// Lower bound of the decay factor; distant places are deprioritized,
    /// never excluded.
    pub distance_floor: f32,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            pool_multiplier: 4,
            distance_threshold_km: 20.0,
            distance_floor: 0.2,
        }
    }
}

impl BuilderConfig {
    /// Create config from environment variables or use defaults. A zero
    /// multiplier would empty every candidate pool, so overrides are clamped
    /// to at least 1.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            pool_multiplier: std::env::var("RECO_POOL_MULTIPLIER")
                .ok()
                .and_then(|s| s.parse::<usize>().ok())
                .map(|v| v.max(1))
                .unwrap_or(defaults.pool_multiplier),
            distance_threshold_km: std::env::var("RECO_DISTANCE_THRESHOLD_KM")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.distance_threshold_km),
            distance_floor: std::env::var("RECO_DISTANCE_FLOOR")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.distance_floor),
        }
    }
}

/// Builds day-by-day visiting orders with a greedy best-next scan: at each
/// slot the unconsumed candidate with the highest distance-adjusted score
/// wins and becomes the new reference position.
pub struct ItineraryBuilder {
    config: BuilderConfig,
}

impl Default for ItineraryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ItineraryBuilder {
    pub fn new() -> Self {
        Self {
            config: BuilderConfig::from_env(),
        }
    }

    pub fn with_config(config: BuilderConfig) -> Self {
        Self { config }
    }

    /// Produce exactly `num_days` day vectors from the scored candidates.
    ///
    /// Candidates are ranked by score (stable, so catalog order breaks ties)
    /// and truncated to the bounded pool before the greedy scan. A place is
    /// consumed globally once chosen, so no title repeats across the trip.
    /// Days run short or empty when the pool runs out; they are never padded.
    pub fn build(
        &self,
        scored: Vec<ScoredPlace>,
        num_days: usize,
        places_per_day: usize,
        start: Coordinate,
    ) -> Vec<Vec<ScoredPlace>> {
        let mut pool = scored;
        pool.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        pool.truncate(num_days * places_per_day * self.config.pool_multiplier);

        let mut consumed = vec![false; pool.len()];
        let mut days: Vec<Vec<ScoredPlace>> = Vec::with_capacity(num_days);

        for day_idx in 0..num_days {
            // Reference position: last stop of the previous day, or the
            // start location on day 1 and after an empty day.
            let mut reference = match days.last().and_then(|day| day.last()) {
                Some(prev) if day_idx > 0 => prev.place.coordinate(),
                _ => start,
            };

            let mut day = Vec::with_capacity(places_per_day);

            for _ in 0..places_per_day {
                let mut best: Option<(usize, f32)> = None;

                for (idx, candidate) in pool.iter().enumerate() {
                    if consumed[idx] {
                        continue;
                    }
                    let adjusted = candidate.score
                        * self.distance_factor(reference, candidate.place.coordinate());
                    // Strict > keeps ties on the earlier (higher-ranked) candidate.
                    if best.map_or(true, |(_, best_score)| adjusted > best_score) {
                        best = Some((idx, adjusted));
                    }
                }

                let Some((idx, _)) = best else {
                    break;
                };

                consumed[idx] = true;
                reference = pool[idx].place.coordinate();
                day.push(pool[idx].clone());
            }

            days.push(day);
        }

        days
    }

    /// Decay factor for a candidate at the given position: linear falloff to
    /// the configured floor at `distance_threshold_km`. A malformed candidate
    /// coordinate is treated as maximally distant rather than failing the
    /// whole build.
    fn distance_factor(&self, reference: Coordinate, candidate: Coordinate) -> f32 {
        match DistanceService::haversine_km(reference, candidate) {
            Some(distance_km) => {
                let decay = 1.0 - (distance_km / self.config.distance_threshold_km) as f32;
                decay.max(self.config.distance_floor)
            }
            None => self.config.distance_floor,
        }
    }
}
