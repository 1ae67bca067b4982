//! Optimization result type.

use serde::{Deserialize, Serialize};

use super::Coordinate;
use crate::optimizer::Method;

/// A closed tour produced by the optimizer.
///
/// `route` lists the coordinates in visit order. The closing edge from the
/// last coordinate back to the first is implicit and already included in
/// `distance`.
///
/// # Examples
///
/// ```
/// use u_georoute::models::{Coordinate, Solution};
/// use u_georoute::optimizer::Method;
///
/// let p = Coordinate::new(10.0, 20.0).unwrap();
/// let sol = Solution::new(vec![p], 0.0, Method::Auto);
/// assert_eq!(sol.len(), 1);
/// assert_eq!(sol.distance(), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    route: Vec<Coordinate>,
    distance: f64,
    method: Method,
}

impl Solution {
    /// Creates a solution from a visit order and its closed-tour length.
    pub fn new(route: Vec<Coordinate>, distance: f64, method: Method) -> Self {
        Self {
            route,
            distance,
            method,
        }
    }

    /// Coordinates in visit order.
    pub fn route(&self) -> &[Coordinate] {
        &self.route
    }

    /// Closed-tour length in kilometers.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Strategy that produced this route.
    ///
    /// [`Method::Auto`] only appears when no strategy ran (fewer than two points).
    pub fn method(&self) -> Method {
        self.method
    }

    /// Number of coordinates in the route.
    pub fn len(&self) -> usize {
        self.route.len()
    }

    /// Returns `true` if the route is empty.
    pub fn is_empty(&self) -> bool {
        self.route.is_empty()
    }
}
