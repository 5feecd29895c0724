use crate::models::place::Coordinate;

pub struct DistanceService;

const EARTH_RADIUS_KM: f64 = 6371.0088;

impl DistanceService {
    /// Great-circle distance in kilometers via the haversine formula.
    /// Returns `None` when either coordinate is malformed (non-finite or out
    /// of the valid degree range); callers decide how to absorb that.
    pub fn haversine_km(from: Coordinate, to: Coordinate) -> Option<f64> {
        if !Self::is_valid(from) || !Self::is_valid(to) {
            return None;
        }

        let lat1_rad = from.0.to_radians();
        let lat2_rad = to.0.to_radians();
        let delta_lat = (to.0 - from.0).to_radians();
        let delta_lng = (to.1 - from.1).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        Some(EARTH_RADIUS_KM * c)
    }

    fn is_valid(coord: Coordinate) -> bool {
        coord.0.is_finite() && coord.1.is_finite() && coord.0.abs() <= 90.0 && coord.1.abs() <= 180.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_distance() {
        let city_hall = (37.5665, 126.9780);
        let d = DistanceService::haversine_km(city_hall, city_hall).unwrap();
        assert!(d < 1e-9);
    }

    #[test]
    fn test_known_distance_across_seoul() {
        // City Hall to Gangnam station is roughly 8-9 km.
        let city_hall = (37.5665, 126.9780);
        let gangnam = (37.4979, 127.0276);
        let d = DistanceService::haversine_km(city_hall, gangnam).unwrap();
        assert!(d > 7.0 && d < 10.0, "unexpected distance: {}", d);
    }

    #[test]
    fn test_longitude_is_not_euclidean() {
        // One degree of longitude at Seoul's latitude is much shorter than
        // one degree of latitude.
        let origin = (37.5665, 126.9780);
        let lat_step = DistanceService::haversine_km(origin, (38.5665, 126.9780)).unwrap();
        let lng_step = DistanceService::haversine_km(origin, (37.5665, 127.9780)).unwrap();
        assert!(lng_step < lat_step * 0.85);
    }

    #[test]
    fn test_malformed_coordinates_rejected() {
        let city_hall = (37.5665, 126.9780);
        assert!(DistanceService::haversine_km(city_hall, (f64::NAN, 126.9)).is_none());
        assert!(DistanceService::haversine_km((91.0, 0.0), city_hall).is_none());
        assert!(DistanceService::haversine_km(city_hall, (37.5, 181.0)).is_none());
    }
}
