//! Great-circle distance on a spherical Earth.

use crate::models::Coordinate;

/// Mean Earth radius used by the haversine approximation, in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two coordinates, in kilometers.
///
/// Symmetric, and exactly zero when `a == b`.
///
/// # Examples
///
/// ```
/// use u_georoute::models::Coordinate;
/// use u_georoute::distance::haversine_km;
///
/// let a = Coordinate::new(0.0, 0.0).unwrap();
/// let b = Coordinate::new(0.0, 1.0).unwrap();
/// // One degree of longitude on the equator is ~111.19 km.
/// assert!((haversine_km(&a, &b) - 111.19).abs() < 0.01);
/// assert_eq!(haversine_km(&a, &a), 0.0);
/// ```
pub fn haversine_km(a: &Coordinate, b: &Coordinate) -> f64 {
    let (lat1, lat2) = (a.lat().to_radians(), b.lat().to_radians());
    let dlat = lat2 - lat1;
    let dlon = (b.lon() - a.lon()).to_radians();
    let s1 = (dlat / 2.0).sin();
    let s2 = (dlon / 2.0).sin();
    let h = s1 * s1 + lat1.cos() * lat2.cos() * s2 * s2;
    // Rounding can push `h` a hair above 1 for antipodal points.
    2.0 * EARTH_RADIUS_KM * h.sqrt().min(1.0).asin()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(lat: f64, lon: f64) -> Coordinate {
        Coordinate::new(lat, lon).expect("valid")
    }

    #[test]
    fn test_zero_for_same_point() {
        let p = c(37.7749, -122.4194);
        assert_eq!(haversine_km(&p, &p), 0.0);
    }

    #[test]
    fn test_symmetric() {
        let sf = c(37.7749, -122.4194);
        let la = c(34.0522, -118.2437);
        assert_eq!(haversine_km(&sf, &la), haversine_km(&la, &sf));
    }

    #[test]
    fn test_known_distance() {
        // San Francisco to Los Angeles, ~559 km on a 6371 km sphere.
        let sf = c(37.7749, -122.4194);
        let la = c(34.0522, -118.2437);
        let d = haversine_km(&sf, &la);
        assert!((d - 559.1).abs() < 1.0, "got {d}");
    }

    #[test]
    fn test_meridian_degree() {
        let d = haversine_km(&c(0.0, 0.0), &c(1.0, 0.0));
        let expected = EARTH_RADIUS_KM * 1.0_f64.to_radians();
        assert!((d - expected).abs() < 1e-9);
    }

    #[test]
    fn test_antipodal_is_half_circumference() {
        let d = haversine_km(&c(0.0, 0.0), &c(0.0, 180.0));
        assert!((d - std::f64::consts::PI * EARTH_RADIUS_KM).abs() < 1e-6);
        assert!(d.is_finite());
    }
}
