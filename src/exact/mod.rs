//! Exact tour search.
//!
//! - [`brute_force`] — Exhaustive permutation search, O((n-1)!)

mod brute_force;

pub use brute_force::{brute_force, next_permutation, EXACT_HARD_LIMIT};
