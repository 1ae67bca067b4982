//! Distance computation.
//!
//! Provides the haversine great-circle metric and a dense matrix cache over it.

mod haversine;
mod matrix;

pub use haversine::{haversine_km, EARTH_RADIUS_KM};
pub use matrix::DistanceMatrix;
