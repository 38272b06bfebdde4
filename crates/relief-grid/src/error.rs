//! Error types for grid construction and persistence.

use thiserror::Error;

/// Errors that can occur when validating a grid configuration or writing
/// the result document.
#[derive(Debug, Error)]
pub enum GridError {
    /// Latitude bounds are inverted or degenerate.
    #[error("Invalid bounding box: min_lat {min_lat} must be less than max_lat {max_lat}")]
    InvalidLatBounds {
        /// Southern edge in degrees.
        min_lat: f64,
        /// Northern edge in degrees.
        max_lat: f64,
    },

    /// Longitude bounds are inverted or degenerate.
    #[error("Invalid bounding box: min_lon {min_lon} must be less than max_lon {max_lon}")]
    InvalidLonBounds {
        /// Western edge in degrees.
        min_lon: f64,
        /// Eastern edge in degrees.
        max_lon: f64,
    },

    /// Grid spacing must be a positive number of degrees.
    #[error("Invalid grid spacing {0} (must be > 0)")]
    InvalidSpacing(f64),

    /// I/O error writing the output document.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
