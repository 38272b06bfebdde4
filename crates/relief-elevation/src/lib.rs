//! # relief-elevation
//!
//! Elevation lookup client for the Open-Elevation point-query API.
//!
//! This crate provides a blocking HTTP client that resolves a single
//! geographic coordinate to an elevation in meters, plus the
//! [`ElevationSource`] trait that lets callers substitute a deterministic
//! stub for testing.
//!
//! Lookup failures are not propagated as errors. Every failure mode
//! (unreachable endpoint, non-success status, malformed or empty payload)
//! is absorbed into [`LookupOutcome::Absent`] after emitting a diagnostic,
//! so a caller iterating over many coordinates never has to handle a
//! per-point error path.
//!
//! ## Example
//!
//! ```no_run
//! use relief_elevation::{ElevationSource, LookupOutcome, OpenElevationClient};
//!
//! let client = OpenElevationClient::new()?;
//! match client.lookup(36.1699, -115.1398) {
//!     LookupOutcome::Elevation(meters) => println!("Las Vegas: {} m", meters),
//!     LookupOutcome::Absent => println!("lookup failed"),
//! }
//! # Ok::<(), relief_elevation::ElevationError>(())
//! ```

mod client;
mod error;
mod source;

pub use client::{OpenElevationClient, DEFAULT_BASE_URL};
pub use error::ElevationError;
pub use source::{ElevationSource, LookupOutcome};

/// Result type for elevation client operations.
pub type Result<T> = std::result::Result<T, ElevationError>;
