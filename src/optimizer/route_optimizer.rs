//! Strategy dispatch.

use crate::constructive::nearest_neighbor;
use crate::distance::DistanceMatrix;
use crate::evaluation::tour_distance;
use crate::exact::brute_force;
use crate::local_search::two_opt_improve;
use crate::models::{Coordinate, Solution};
use crate::Result;

use super::{Method, OptimizerConfig};

/// Picks and runs a tour strategy for a set of coordinates.
///
/// Each call owns its working data, so one optimizer can serve any number
/// of independent inputs.
///
/// # Examples
///
/// ```
/// use u_georoute::models::Coordinate;
/// use u_georoute::optimizer::{Method, RouteOptimizer};
///
/// let coords: Vec<Coordinate> = [(0.0, 0.0), (1.0, 1.0), (0.0, 1.0), (1.0, 0.0)]
///     .iter()
///     .map(|&(lat, lon)| Coordinate::new(lat, lon).unwrap())
///     .collect();
///
/// let optimizer = RouteOptimizer::default();
/// let sol = optimizer.optimize(&coords, Method::Auto).unwrap();
/// assert_eq!(sol.method(), Method::Exact);
/// assert_eq!(sol.len(), 4);
///
/// assert!(optimizer.optimize_named(&coords, "bogus").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RouteOptimizer {
    config: OptimizerConfig,
}

impl RouteOptimizer {
    /// Creates an optimizer with the given configuration.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidConfig`](crate::Error::InvalidConfig) if the
    /// configuration fails [`OptimizerConfig::validate`].
    pub fn new(config: OptimizerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The active configuration.
    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// Resolves `Auto` to a concrete strategy for an input of `n` points.
    ///
    /// Exact search is chosen only when `n` is within both the threshold and
    /// the exact-search cap. Other methods pass through unchanged.
    pub fn resolve(&self, method: Method, n: usize) -> Method {
        match method {
            Method::Auto => {
                let limit = self.config.exact_threshold.min(self.config.exact_max_points);
                if n <= limit {
                    Method::Exact
                } else {
                    Method::TwoOpt
                }
            }
            other => other,
        }
    }

    /// Computes a short closed tour through `coords`.
    ///
    /// Empty input yields an empty route and a single point yields itself,
    /// both with distance 0. The returned distance is always the closed
    /// length of the returned route.
    ///
    /// # Errors
    ///
    /// [`Error::TooManyPoints`](crate::Error::TooManyPoints) when exact search
    /// is requested on more points than `exact_max_points`.
    pub fn optimize(&self, coords: &[Coordinate], method: Method) -> Result<Solution> {
        let n = coords.len();
        if n <= 1 {
            return Ok(Solution::new(coords.to_vec(), 0.0, Method::Auto));
        }

        let resolved = self.resolve(method, n);
        log::debug!("optimize: n={n} requested={method} resolved={resolved}");

        let distances = DistanceMatrix::from_coordinates(coords);
        let order = match resolved {
            Method::Exact => brute_force(&distances, self.config.exact_max_points)?,
            Method::NearestNeighbor => nearest_neighbor(&distances),
            Method::TwoOpt | Method::Auto => {
                let initial = nearest_neighbor(&distances);
                let (improved, _) =
                    two_opt_improve(&initial, &distances, self.config.two_opt_max_iterations);
                improved
            }
        };

        let route: Vec<Coordinate> = order.iter().map(|&i| coords[i]).collect();
        let distance = tour_distance(&route);
        log::debug!("optimize: method={resolved} distance_km={distance:.3}");
        Ok(Solution::new(route, distance, resolved))
    }

    /// Like [`optimize`](Self::optimize), taking the method by name.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidMethod`](crate::Error::InvalidMethod) for an
    /// unrecognized name, raised before any search work.
    pub fn optimize_named(&self, coords: &[Coordinate], method: &str) -> Result<Solution> {
        let method: Method = method.parse()?;
        self.optimize(coords, method)
    }
}

/// Optimizes with the default configuration.
///
/// # Examples
///
/// ```
/// use u_georoute::models::Coordinate;
/// use u_georoute::optimizer::{optimize, Method};
///
/// let sol = optimize(&[], Method::Auto).unwrap();
/// assert!(sol.is_empty());
/// assert_eq!(sol.distance(), 0.0);
/// ```
pub fn optimize(coords: &[Coordinate], method: Method) -> Result<Solution> {
    RouteOptimizer::default().optimize(coords, method)
}
