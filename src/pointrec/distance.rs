//! Great-circle distance between two coordinates.
//!
//! Uses the haversine formula on a sphere of radius 6371 km. Results are whole
//! meters, rounded with [`f64::round`], i.e. halves round away from zero.

use crate::model::Coordinates;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Unrounded haversine distance in meters.
pub fn haversine_meters(a: Coordinates, b: Coordinates) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();
    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c * 1000.0
}

/// Distance in meters, rounded to the nearest integer.
pub fn distance_meters(a: Coordinates, b: Coordinates) -> u64 {
    if a == b {
        return 0;
    }
    round_meters(haversine_meters(a, b))
}

/// Rounds a non-negative meter value to the nearest whole meter, halves away from zero.
pub fn round_meters(meters: f64) -> u64 {
    meters.max(0.0).round() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(lat: f64, lon: f64) -> Coordinates {
        Coordinates::new(lat, lon)
    }

    #[test]
    fn same_point_is_zero() {
        let p = c(40.7128, -74.006);
        assert_eq!(distance_meters(p, p), 0);
    }

    #[test]
    fn one_degree_latitude_at_equator() {
        let d = distance_meters(c(0.0, 0.0), c(1.0, 0.0));
        assert!((111_194..=111_196).contains(&d), "got {}", d);
        assert_eq!(d, 111_195);
    }

    #[test]
    fn symmetric() {
        let a = c(51.5074, -0.1278);
        let b = c(48.8566, 2.3522);
        assert_eq!(distance_meters(a, b), distance_meters(b, a));
    }

    #[test]
    fn london_to_paris_is_about_344_km() {
        let d = distance_meters(c(51.5074, -0.1278), c(48.8566, 2.3522));
        assert!((343_000..=345_000).contains(&d), "got {}", d);
    }

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(round_meters(10.5), 11);
        assert_eq!(round_meters(10.49), 10);
        assert_eq!(round_meters(0.5), 1);
        assert_eq!(round_meters(-3.0), 0);
    }

    #[test]
    fn short_hop_rounds_to_whole_meters() {
        // ~11.1 m north
        let d = distance_meters(c(0.0, 0.0), c(0.0001, 0.0));
        assert_eq!(d, 11);
    }
}
