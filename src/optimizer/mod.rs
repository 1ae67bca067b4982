//! Tour optimization entry points.
//!
//! - [`Method`] — Closed set of strategies, parsed from user-facing names
//! - [`OptimizerConfig`] — Threshold, exact-search cap, and 2-opt iteration cap
//! - [`RouteOptimizer`] — Dispatches to exact search, nearest neighbor, or 2-opt

mod config;
mod method;
mod route_optimizer;

pub use crate::exact::EXACT_HARD_LIMIT;
pub use config::{
    OptimizerConfig, DEFAULT_EXACT_MAX_POINTS, DEFAULT_EXACT_THRESHOLD,
    DEFAULT_TWO_OPT_MAX_ITERATIONS,
};
pub use method::Method;
pub use route_optimizer::{optimize, RouteOptimizer};
