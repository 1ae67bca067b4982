//! Closed-tour length.

use crate::distance::haversine_km;
use crate::models::Coordinate;

/// Total length of a closed tour in kilometers.
///
/// Sums the haversine distance of each consecutive pair plus the closing
/// edge from the last coordinate back to the first. Routes with fewer than
/// two coordinates have length zero.
///
/// # Examples
///
/// ```
/// use u_georoute::models::Coordinate;
/// use u_georoute::distance::haversine_km;
/// use u_georoute::evaluation::tour_distance;
///
/// let a = Coordinate::new(0.0, 0.0).unwrap();
/// let b = Coordinate::new(0.0, 1.0).unwrap();
/// assert_eq!(tour_distance(&[]), 0.0);
/// assert_eq!(tour_distance(&[a]), 0.0);
/// assert!((tour_distance(&[a, b]) - 2.0 * haversine_km(&a, &b)).abs() < 1e-9);
/// ```
pub fn tour_distance(route: &[Coordinate]) -> f64 {
    let n = route.len();
    if n < 2 {
        return 0.0;
    }
    let open: f64 = route
        .windows(2)
        .map(|w| haversine_km(&w[0], &w[1]))
        .sum();
    open + haversine_km(&route[n - 1], &route[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Coordinate> {
        [(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]
            .iter()
            .map(|&(lat, lon)| Coordinate::new(lat, lon).expect("valid"))
            .collect()
    }

    #[test]
    fn test_includes_closing_edge() {
        let r = square();
        let expected = haversine_km(&r[0], &r[1])
            + haversine_km(&r[1], &r[2])
            + haversine_km(&r[2], &r[3])
            + haversine_km(&r[3], &r[0]);
        assert!((tour_distance(&r) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_rotation_invariant() {
        let r = square();
        let base = tour_distance(&r);
        for k in 1..r.len() {
            let mut rotated = r.clone();
            rotated.rotate_left(k);
            assert!((tour_distance(&rotated) - base).abs() < 1e-9);
        }
    }

    #[test]
    fn test_reversal_invariant() {
        let r = square();
        let mut rev = r.clone();
        rev.reverse();
        assert!((tour_distance(&rev) - tour_distance(&r)).abs() < 1e-9);
    }

    #[test]
    fn test_matches_matrix() {
        let r = square();
        let dm = crate::distance::DistanceMatrix::from_coordinates(&r);
        assert_eq!(tour_distance(&r), dm.tour_length(&[0, 1, 2, 3]));
    }

    #[test]
    fn test_duplicate_points() {
        let p = Coordinate::new(5.0, 5.0).expect("valid");
        assert_eq!(tour_distance(&[p, p, p]), 0.0);
    }
}
