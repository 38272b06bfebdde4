//! # relief-grid
//!
//! Elevation-change grid construction over a geographic bounding box.
//!
//! The bounding box is divided into square cells of a fixed angular
//! spacing. For each cell, two diagonally opposed corner points (northwest
//! and southeast) are sampled from an elevation source and the absolute
//! elevation difference is recorded as a terrain-roughness proxy. The
//! resulting row-major matrix is persisted as a JSON document for
//! downstream visualization.
//!
//! ## Example
//!
//! ```no_run
//! use relief_elevation::OpenElevationClient;
//! use relief_grid::{BoundingBox, GridBuilder, GridConfig, write_grid};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = GridConfig {
//!     bounds: BoundingBox {
//!         min_lat: 36.0,
//!         max_lat: 36.3,
//!         min_lon: -115.4,
//!         max_lon: -115.0,
//!     },
//!     spacing: 0.004167,
//! };
//! config.validate()?;
//!
//! let client = OpenElevationClient::new()?;
//! let grid = GridBuilder::new(&config).build(&client, None);
//! write_grid(&grid, "elevation_data.json", None)?;
//! # Ok(())
//! # }
//! ```

mod builder;
mod error;
mod geometry;
mod grid;
mod writer;

pub use builder::{GridBuilder, ProgressCallback};
pub use error::GridError;
pub use geometry::{BoundingBox, GridConfig, GridGeometry};
pub use grid::ElevationGrid;
pub use writer::{write_grid, StatusCallback};

/// Result type for grid operations.
pub type Result<T> = std::result::Result<T, GridError>;
