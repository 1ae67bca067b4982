//! Nearest-neighbor tour construction.
//!
//! Builds a closed tour greedily: starting from location 0, always extend to
//! the closest location not yet visited. There is no backtracking, so the
//! closing edge back to the start can be long; 2-opt usually repairs it.
//!
//! # Complexity
//!
//! O(n²) where n = number of locations.

use crate::distance::DistanceMatrix;

/// Constructs a tour over every location in `distances` using nearest neighbor.
///
/// The tour starts at index 0. When several unvisited locations are equally
/// close, the one with the lowest index wins.
///
/// # Examples
///
/// ```
/// use u_georoute::models::Coordinate;
/// use u_georoute::distance::DistanceMatrix;
/// use u_georoute::constructive::nearest_neighbor;
///
/// let coords: Vec<Coordinate> = [(0.0, 0.0), (0.0, 3.0), (0.0, 1.0), (0.0, 2.0)]
///     .iter()
///     .map(|&(lat, lon)| Coordinate::new(lat, lon).unwrap())
///     .collect();
/// let dm = DistanceMatrix::from_coordinates(&coords);
///
/// assert_eq!(nearest_neighbor(&dm), vec![0, 2, 3, 1]);
/// ```
pub fn nearest_neighbor(distances: &DistanceMatrix) -> Vec<usize> {
    let n = distances.size();
    if n == 0 {
        return Vec::new();
    }

    let mut unvisited: Vec<usize> = (1..n).collect();
    let mut tour = Vec::with_capacity(n);
    tour.push(0);
    let mut current = 0;

    while let Some(next) = distances.nearest_neighbor(current, &unvisited) {
        if let Some(pos) = unvisited.iter().position(|&c| c == next) {
            unvisited.remove(pos);
        }
        tour.push(next);
        current = next;
    }

    log::debug!(
        "nearest_neighbor: n={n} length_km={:.3}",
        distances.tour_length(&tour)
    );
    tour
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Coordinate;

    fn matrix(points: &[(f64, f64)]) -> DistanceMatrix {
        let coords: Vec<Coordinate> = points
            .iter()
            .map(|&(lat, lon)| Coordinate::new(lat, lon).expect("valid"))
            .collect();
        DistanceMatrix::from_coordinates(&coords)
    }

    #[test]
    fn test_nn_line() {
        let dm = matrix(&[(0.0, 0.0), (0.0, 1.0), (0.0, 2.0), (0.0, 3.0)]);
        assert_eq!(nearest_neighbor(&dm), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_nn_chooses_nearest() {
        let dm = matrix(&[(0.0, 0.0), (0.0, 10.0), (0.0, 1.0)]);
        // From 0: index 2 is 1 degree away, index 1 is 10.
        assert_eq!(nearest_neighbor(&dm), vec![0, 2, 1]);
    }

    #[test]
    fn test_nn_starts_at_first() {
        let dm = matrix(&[(5.0, 5.0), (0.0, 0.0), (0.0, 0.1)]);
        let tour = nearest_neighbor(&dm);
        assert_eq!(tour[0], 0);
        assert_eq!(tour.len(), 3);
    }

    #[test]
    fn test_nn_tie_prefers_earlier() {
        let dm = matrix(&[(0.0, 0.0), (0.0, 1.0), (0.0, -1.0)]);
        assert_eq!(nearest_neighbor(&dm), vec![0, 1, 2]);
    }

    #[test]
    fn test_nn_empty_and_single() {
        assert!(nearest_neighbor(&matrix(&[])).is_empty());
        assert_eq!(nearest_neighbor(&matrix(&[(1.0, 1.0)])), vec![0]);
    }

    #[test]
    fn test_nn_duplicate_points() {
        let dm = matrix(&[(1.0, 1.0), (1.0, 1.0), (2.0, 2.0)]);
        assert_eq!(nearest_neighbor(&dm), vec![0, 1, 2]);
    }
}
