//! Dense distance matrix.

use super::haversine_km;
use crate::models::Coordinate;

/// A dense n×n haversine distance matrix stored in row-major order.
///
/// Built once per optimization call so the search strategies can work on
/// index permutations without recomputing trigonometry.
///
/// # Examples
///
/// ```
/// use u_georoute::models::Coordinate;
/// use u_georoute::distance::{haversine_km, DistanceMatrix};
///
/// let coords = vec![
///     Coordinate::new(0.0, 0.0).unwrap(),
///     Coordinate::new(0.0, 1.0).unwrap(),
///     Coordinate::new(1.0, 1.0).unwrap(),
/// ];
/// let dm = DistanceMatrix::from_coordinates(&coords);
/// assert_eq!(dm.size(), 3);
/// assert_eq!(dm.get(0, 1), haversine_km(&coords[0], &coords[1]));
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes the haversine matrix for the given coordinates.
    pub fn from_coordinates(coords: &[Coordinate]) -> Self {
        let n = coords.len();
        let mut dm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = haversine_km(&coords[i], &coords[j]);
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        dm
    }

    /// Returns the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Closed-tour length of an index order, including the return edge.
    ///
    /// Zero for orders with fewer than two entries.
    pub fn tour_length(&self, order: &[usize]) -> f64 {
        let n = order.len();
        if n < 2 {
            return 0.0;
        }
        let open: f64 = order.windows(2).map(|w| self.get(w[0], w[1])).sum();
        open + self.get(order[n - 1], order[0])
    }

    /// Returns the nearest of `candidates` to `from`.
    ///
    /// Ties go to the earliest candidate. Returns `None` if `candidates` is empty.
    pub fn nearest_neighbor(&self, from: usize, candidates: &[usize]) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for &c in candidates {
            let d = self.get(from, c);
            match best {
                Some((_, bd)) if d >= bd => {}
                _ => best = Some((c, d)),
            }
        }
        best.map(|(c, _)| c)
    }
}
