//! Optimizer configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::exact::EXACT_HARD_LIMIT;
use crate::{Error, Result};

/// Largest input for which `auto` picks exact search.
///
/// 8 points means 7! = 5040 tours, well under a millisecond.
pub const DEFAULT_EXACT_THRESHOLD: usize = 8;

/// Default hard cap on exact search (10! ≈ 3.6M tours).
pub const DEFAULT_EXACT_MAX_POINTS: usize = 11;

/// Default cap on applied 2-opt moves.
pub const DEFAULT_TWO_OPT_MAX_ITERATIONS: usize = 1000;

/// Tuning knobs for [`RouteOptimizer`](super::RouteOptimizer).
///
/// Missing fields take their defaults when deserializing.
///
/// # Examples
///
/// ```
/// use u_georoute::optimizer::OptimizerConfig;
///
/// let config = OptimizerConfig::from_json_str(r#"{ "exact_threshold": 6 }"#).unwrap();
/// assert_eq!(config.exact_threshold, 6);
/// assert_eq!(config.two_opt_max_iterations, 1000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OptimizerConfig {
    /// `auto` uses exact search when the input has at most this many points.
    pub exact_threshold: usize,
    /// Exact search refuses inputs larger than this.
    pub exact_max_points: usize,
    /// Maximum number of improving 2-opt moves applied.
    pub two_opt_max_iterations: usize,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            exact_threshold: DEFAULT_EXACT_THRESHOLD,
            exact_max_points: DEFAULT_EXACT_MAX_POINTS,
            two_opt_max_iterations: DEFAULT_TWO_OPT_MAX_ITERATIONS,
        }
    }
}

impl OptimizerConfig {
    /// Sets the `auto` cutoff for exact search.
    pub fn with_exact_threshold(mut self, threshold: usize) -> Self {
        self.exact_threshold = threshold;
        self
    }

    /// Sets the hard cap on exact search.
    pub fn with_exact_max_points(mut self, max_points: usize) -> Self {
        self.exact_max_points = max_points;
        self
    }

    /// Sets the 2-opt iteration cap.
    pub fn with_max_iterations(mut self, iterations: usize) -> Self {
        self.two_opt_max_iterations = iterations;
        self
    }

    /// Checks the configuration for values the optimizer cannot honor.
    pub fn validate(&self) -> Result<()> {
        if self.exact_max_points == 0 {
            return Err(Error::invalid_config("exact_max_points must be at least 1"));
        }
        if self.exact_max_points > EXACT_HARD_LIMIT {
            return Err(Error::invalid_config(format!(
                "exact_max_points {} exceeds the hard limit of {EXACT_HARD_LIMIT}",
                self.exact_max_points
            )));
        }
        Ok(())
    }

    /// Parses and validates a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON configuration file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        log::debug!("config: loaded {} -> {config:?}", path.display());
        Ok(config)
    }
}
