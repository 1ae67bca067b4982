//! Error types.

use thiserror::Error as ThisError;

/// Errors raised by the optimizer and its I/O shell.
#[derive(Debug, ThisError)]
pub enum Error {
    /// Unrecognized optimization method identifier.
    #[error("invalid method '{0}': expected one of auto, exact, nearest_neighbor, two_opt")]
    InvalidMethod(String),
    /// Exact search requested on more points than the configured cap allows.
    #[error("exact search limited to {limit} points, got {points}")]
    TooManyPoints {
        /// Number of points in the request.
        points: usize,
        /// Configured cap.
        limit: usize,
    },
    /// Latitude or longitude outside the valid range.
    #[error("invalid coordinate ({lat}, {lon})")]
    InvalidCoordinate {
        /// Offending latitude.
        lat: f64,
        /// Offending longitude.
        lon: f64,
    },
    /// Optimizer configuration rejected by validation.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    /// Bad input supplied to the shell (arguments, empty files).
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Logger could not be installed.
    #[error("logger init failed: {0}")]
    Logger(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_method(name: impl Into<String>) -> Self {
        Self::InvalidMethod(name.into())
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}
