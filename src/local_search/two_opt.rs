//! Closed-tour 2-opt improvement.
//!
//! # Algorithm
//!
//! For each pair of edges (t[i], t[i+1]) and (t[j], t[j+1 mod n]) with
//! `j ≥ i + 2`, compute the change in length from reversing t[i+1..=j]:
//!
//! ```text
//! delta = d(t[i], t[j]) + d(t[i+1], t[j+1]) - d(t[i], t[i+1]) - d(t[j], t[j+1])
//! ```
//!
//! The pair `i = 0, j = n-1` shares the start node through the closing edge
//! and reversing it reproduces the same cycle, so it is skipped.
//!
//! First improvement: the first move with delta < 0 (scanning `i` then `j`
//! ascending) is applied and the scan restarts. The search stops when a full
//! scan finds nothing or `max_iterations` moves have been applied.
//!
//! # Complexity
//!
//! O(n²) per scan, at most `max_iterations + 1` scans.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use crate::distance::DistanceMatrix;

/// Relative rounding allowance on the tour length. A move counts as improving
/// only if it shortens the tour by more than `length * IMPROVEMENT_REL_EPS`.
const IMPROVEMENT_REL_EPS: f64 = 4.0 * f64::EPSILON;

/// Applies 2-opt improvement to a closed tour given as location indices.
///
/// Returns the improved order and its closed length. The first entry of the
/// tour never moves, and the length never exceeds that of the input.
///
/// The acceptance tolerance scales with the current tour length, so moves
/// are found at any spatial scale. Only gains within a few ulps of the length
/// are ignored.
///
/// # Examples
///
/// ```
/// use u_georoute::models::Coordinate;
/// use u_georoute::distance::DistanceMatrix;
/// use u_georoute::local_search::two_opt_improve;
///
/// let coords: Vec<Coordinate> = [(0.0, 0.0), (1.0, 1.0), (0.0, 1.0), (1.0, 0.0)]
///     .iter()
///     .map(|&(lat, lon)| Coordinate::new(lat, lon).unwrap())
///     .collect();
/// let dm = DistanceMatrix::from_coordinates(&coords);
///
/// // 0 → 1 → 2 → 3 crosses the square's diagonals.
/// let (improved, dist) = two_opt_improve(&[0, 1, 2, 3], &dm, 1000);
/// assert_eq!(improved, vec![0, 2, 1, 3]);
/// assert!(dist < dm.tour_length(&[0, 1, 2, 3]));
/// ```
pub fn two_opt_improve(
    tour: &[usize],
    distances: &DistanceMatrix,
    max_iterations: usize,
) -> (Vec<usize>, f64) {
    let mut current = tour.to_vec();
    let n = current.len();
    if n < 4 {
        let dist = distances.tour_length(&current);
        return (current, dist);
    }

    let mut moves = 0;
    while moves < max_iterations {
        let tolerance = distances.tour_length(&current) * IMPROVEMENT_REL_EPS;
        match first_improving_move(&current, distances, tolerance) {
            Some((i, j, delta)) => {
                current[i + 1..=j].reverse();
                moves += 1;
                log::trace!(
                    "two_opt: move {moves} reversed {}..={j} delta_km={delta:.6}",
                    i + 1
                );
            }
            None => break,
        }
    }

    let dist = distances.tour_length(&current);
    log::debug!(
        "two_opt: n={n} moves={moves} capped={} length_km={dist:.3}",
        moves == max_iterations
    );
    (current, dist)
}

/// Scans for the first improving 2-opt move.
///
/// Returns `(i, j, delta)`; reversing `tour[i+1..=j]` changes the length by `delta`.
fn first_improving_move(
    tour: &[usize],
    distances: &DistanceMatrix,
    tolerance: f64,
) -> Option<(usize, usize, f64)> {
    let n = tour.len();
    for i in 0..n - 2 {
        for j in i + 2..n {
            if i == 0 && j == n - 1 {
                continue;
            }
            let delta = two_opt_delta(tour, distances, i, j);
            if delta < -tolerance {
                return Some((i, j, delta));
            }
        }
    }
    None
}

/// Length change from reconnecting edges (t[i], t[i+1]) and (t[j], t[j+1]).
///
/// Before: ... - t[i] - t[i+1] - ... - t[j] - t[j+1] - ...
/// After:  ... - t[i] - t[j] - ... - t[i+1] - t[j+1] - ...
fn two_opt_delta(tour: &[usize], distances: &DistanceMatrix, i: usize, j: usize) -> f64 {
    let n = tour.len();
    let a = tour[i];
    let b = tour[i + 1];
    let c = tour[j];
    let d = tour[(j + 1) % n];

    let old_cost = distances.get(a, b) + distances.get(c, d);
    let new_cost = distances.get(a, c) + distances.get(b, d);

    new_cost - old_cost
}
