//! # u-georoute
//!
//! Short closed tours through GPS coordinates (approximate TSP on a sphere).
//!
//! ## Modules
//!
//! - [`models`] — Coordinate and solution types
//! - [`distance`] — Haversine distance and the dense distance matrix
//! - [`evaluation`] — Closed-tour length
//! - [`exact`] — Exhaustive permutation search for small inputs
//! - [`constructive`] — Nearest-neighbor tour construction
//! - [`local_search`] — 2-opt improvement
//! - [`optimizer`] — Method selection and dispatch
//! - [`io`] — Coordinate file reading and route writing
//!
//! ## Example
//!
//! ```
//! use u_georoute::models::Coordinate;
//! use u_georoute::optimizer::{optimize, Method};
//!
//! let coords: Vec<Coordinate> = [(37.57, 126.98), (35.18, 129.08), (35.87, 128.60)]
//!     .iter()
//!     .map(|&(lat, lon)| Coordinate::new(lat, lon).unwrap())
//!     .collect();
//!
//! let sol = optimize(&coords, Method::Auto).unwrap();
//! assert_eq!(sol.len(), 3);
//! assert!(sol.distance() > 0.0);
//! ```

pub mod cli;
pub mod constructive;
pub mod distance;
mod error;
pub mod evaluation;
pub mod exact;
pub mod io;
pub mod local_search;
pub mod logging;
pub mod models;
pub mod optimizer;

pub use error::{Error, Result};
