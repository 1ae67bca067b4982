//! Domain model types.
//!
//! Validated geographic coordinates and the closed-tour solution returned by
//! the optimizer.

mod coordinate;
mod tour;

pub use coordinate::Coordinate;
pub use tour::Solution;
