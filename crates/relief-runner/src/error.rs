//! Runner error type.

use thiserror::Error;

/// Errors that abort a run.
///
/// Individual lookup failures never end up here; they are absorbed into
/// zero-delta cells by the builder. Only configuration problems, client
/// construction, and the final write are fatal.
#[derive(Debug, Error)]
pub enum RunnerError {
    /// Grid validation or output write error.
    #[error(transparent)]
    Grid(#[from] relief_grid::GridError),

    /// Elevation client construction error.
    #[error(transparent)]
    Elevation(#[from] relief_elevation::ElevationError),

    /// Config file read error.
    #[error("Failed to read config file: {0}")]
    ConfigRead(#[from] std::io::Error),

    /// Config file parse error.
    #[error("Failed to parse config file: {0}")]
    ConfigParse(#[from] serde_yaml::Error),
}
