//! Exhaustive permutation search.
//!
//! # Algorithm
//!
//! Location 0 is pinned as the start of every tour, which removes rotational
//! duplicates. The remaining `n-1` indices are enumerated in lexicographic
//! order and the first tour with the minimal closed length is kept.
//!
//! # Complexity
//!
//! O((n-1)! · n). Callers must pass a point cap; the search itself has no
//! other bound.

use crate::distance::DistanceMatrix;
use crate::{Error, Result};

/// Largest input exact search will ever accept, whatever `limit` a caller
/// passes (11! ≈ 40M tours).
pub const EXACT_HARD_LIMIT: usize = 12;

/// Finds an optimal closed tour by enumerating every permutation.
///
/// Returns the visit order as indices into `distances`, starting at 0.
/// Fails with [`Error::TooManyPoints`] before any work if the matrix holds
/// more than `limit` locations, or more than [`EXACT_HARD_LIMIT`].
///
/// # Examples
///
/// ```
/// use u_georoute::models::Coordinate;
/// use u_georoute::distance::DistanceMatrix;
/// use u_georoute::exact::brute_force;
///
/// // Corners of a one-degree square, listed in crossing order.
/// let coords: Vec<Coordinate> = [(0.0, 0.0), (1.0, 1.0), (0.0, 1.0), (1.0, 0.0)]
///     .iter()
///     .map(|&(lat, lon)| Coordinate::new(lat, lon).unwrap())
///     .collect();
/// let dm = DistanceMatrix::from_coordinates(&coords);
///
/// let order = brute_force(&dm, 8).unwrap();
/// assert_eq!(order[0], 0);
/// assert!(dm.tour_length(&order) < dm.tour_length(&[0, 1, 2, 3]));
/// ```
pub fn brute_force(distances: &DistanceMatrix, limit: usize) -> Result<Vec<usize>> {
    let n = distances.size();
    let limit = limit.min(EXACT_HARD_LIMIT);
    if n > limit {
        return Err(Error::TooManyPoints { points: n, limit });
    }

    let mut order: Vec<usize> = (0..n).collect();
    if n < 3 {
        return Ok(order);
    }

    let mut best = order.clone();
    let mut best_len = distances.tour_length(&order);
    let mut evaluated: u64 = 1;

    while next_permutation(&mut order[1..]) {
        evaluated += 1;
        let len = distances.tour_length(&order);
        if len < best_len {
            best_len = len;
            best.copy_from_slice(&order);
        }
    }

    log::debug!("exact: n={n} permutations={evaluated} best_km={best_len:.3}");
    Ok(best)
}

/// Rearranges `items` into the next lexicographic permutation.
///
/// Returns `false` (leaving `items` sorted ascending) once the last
/// permutation has been passed.
///
/// # Examples
///
/// ```
/// use u_georoute::exact::next_permutation;
///
/// let mut v = [1, 2, 3];
/// assert!(next_permutation(&mut v));
/// assert_eq!(v, [1, 3, 2]);
///
/// let mut last = [3, 2, 1];
/// assert!(!next_permutation(&mut last));
/// assert_eq!(last, [1, 2, 3]);
/// ```
pub fn next_permutation<T: Ord>(items: &mut [T]) -> bool {
    let n = items.len();
    if n < 2 {
        return false;
    }

    // Rightmost ascent.
    let mut i = n - 1;
    while i > 0 && items[i - 1] >= items[i] {
        i -= 1;
    }
    if i == 0 {
        items.reverse();
        return false;
    }

    let mut j = n - 1;
    while items[j] <= items[i - 1] {
        j -= 1;
    }
    items.swap(i - 1, j);
    items[i..].reverse();
    true
}
