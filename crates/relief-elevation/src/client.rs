//! Open-Elevation API client.
//!
//! Performs single-point queries against the public Open-Elevation lookup
//! endpoint:
//!
//! `https://api.open-elevation.com/api/v1/lookup?locations={lat},{lon}`
//!
//! The success payload is a JSON document with a `results` array; each
//! entry carries an `elevation` field in meters. Only the first entry is
//! used, since a single-point query yields a single result.
//!
//! Each lookup is an independent unauthenticated GET. There are no
//! retries, no caching between calls, and no timeout beyond the transport
//! default.

use crate::{ElevationError, ElevationSource, LookupOutcome, Result};
use serde::Deserialize;
use tracing::warn;

/// Default base URL of the public Open-Elevation API.
pub const DEFAULT_BASE_URL: &str = "https://api.open-elevation.com";

/// Success payload of the lookup endpoint.
#[derive(Debug, Deserialize)]
struct LookupResponse {
    /// Result entries, one per requested location.
    results: Vec<LookupResult>,
}

/// A single entry in the lookup response.
#[derive(Debug, Deserialize)]
struct LookupResult {
    /// Elevation in meters.
    elevation: f64,
}

/// Blocking client for the Open-Elevation point-query API.
///
/// Implements [`ElevationSource`]: lookup failures are reported via a
/// `warn!` diagnostic naming the coordinate and the cause, and surface to
/// the caller only as [`LookupOutcome::Absent`].
#[derive(Debug)]
pub struct OpenElevationClient {
    /// Base URL of the endpoint (scheme + host, no trailing slash).
    base_url: String,
    /// HTTP client reused across lookups.
    client: reqwest::blocking::Client,
}

impl OpenElevationClient {
    /// Create a client for the public Open-Elevation API.
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client against an alternate base URL.
    ///
    /// Useful for self-hosted Open-Elevation instances.
    pub fn with_base_url<S: Into<String>>(base_url: S) -> Result<Self> {
        let client = reqwest::blocking::Client::builder().build()?;
        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the lookup URL for a coordinate.
    fn lookup_url(&self, lat: f64, lon: f64) -> String {
        format!("{}/api/v1/lookup?locations={},{}", self.base_url, lat, lon)
    }

    /// Perform one lookup, surfacing every failure mode as an error.
    fn try_lookup(&self, lat: f64, lon: f64) -> Result<f64> {
        let response = self.client.get(self.lookup_url(lat, lon)).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(ElevationError::BadStatus { lat, lon, status });
        }

        let payload: LookupResponse = response.json()?;
        payload
            .results
            .first()
            .map(|entry| entry.elevation)
            .ok_or(ElevationError::EmptyResults { lat, lon })
    }
}

impl ElevationSource for OpenElevationClient {
    fn lookup(&self, lat: f64, lon: f64) -> LookupOutcome {
        match self.try_lookup(lat, lon) {
            Ok(elevation) => LookupOutcome::Elevation(elevation),
            Err(e) => {
                warn!("Elevation lookup failed for ({}, {}): {}", lat, lon, e);
                LookupOutcome::Absent
            }
        }
    }
}
