//! Error types for the elevation client.

use thiserror::Error;

/// Errors that can occur when talking to the elevation endpoint.
///
/// These are internal to the crate's lookup path: [`crate::ElevationSource`]
/// implementations absorb them into [`crate::LookupOutcome::Absent`]. They
/// surface to callers only from client construction.
#[derive(Debug, Error)]
pub enum ElevationError {
    /// HTTP transport or body decode error.
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Endpoint answered with a non-success status.
    #[error("Lookup for ({lat}, {lon}) failed: HTTP {status}")]
    BadStatus {
        /// Requested latitude.
        lat: f64,
        /// Requested longitude.
        lon: f64,
        /// Response status code.
        status: reqwest::StatusCode,
    },

    /// Endpoint answered success but the payload held no result entries.
    #[error("Lookup for ({lat}, {lon}) returned an empty result list")]
    EmptyResults {
        /// Requested latitude.
        lat: f64,
        /// Requested longitude.
        lon: f64,
    },
}
