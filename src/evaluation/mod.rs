//! Tour cost evaluation.

mod tour;

pub use tour::tour_distance;
