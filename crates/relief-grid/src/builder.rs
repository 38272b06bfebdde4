//! Grid builder: drives the elevation source across every cell.
//!
//! Cells are visited strictly sequentially in row-major order, and for
//! each cell the northwest sample is fetched before the southeast one.
//! There is no early termination: the loop runs over all cells regardless
//! of how many lookups fail.

use crate::{ElevationGrid, GridConfig, GridGeometry};
use relief_elevation::ElevationSource;
use tracing::{debug, info};

/// Callback for per-cell progress, invoked with (completed, total).
///
/// Advisory telemetry only; the grid contents are the same whether or not
/// a callback is installed.
pub type ProgressCallback = Box<dyn Fn(usize, usize) + Send + Sync>;

/// Builds an [`ElevationGrid`] by sampling an elevation source at the two
/// diagonal corners of every cell.
#[derive(Debug)]
pub struct GridBuilder {
    geometry: GridGeometry,
}

impl GridBuilder {
    /// Create a builder for a configuration.
    ///
    /// The configuration is assumed to have passed
    /// [`GridConfig::validate`].
    pub fn new(config: &GridConfig) -> Self {
        Self {
            geometry: GridGeometry::new(config),
        }
    }

    /// The derived geometry.
    pub fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }

    /// Build the full elevation-change grid.
    ///
    /// For each cell: fetch the northwest and southeast corner elevations
    /// and store `|nw - se|`. If either lookup comes back absent the cell
    /// stores `0.0` — a failed pair contributes zero change rather than
    /// being marked missing. The progress callback, if any, is invoked
    /// after every cell with the completed and total cell counts.
    pub fn build(
        &self,
        source: &dyn ElevationSource,
        progress: Option<&ProgressCallback>,
    ) -> ElevationGrid {
        let num_rows = self.geometry.num_rows();
        let num_cols = self.geometry.num_cols();
        let total = num_rows * num_cols;

        info!(
            "Building {} x {} grid ({} cells, {} lookups)",
            num_rows,
            num_cols,
            total,
            total * 2
        );

        let mut grid = ElevationGrid::new(num_rows, num_cols);
        let mut completed = 0;

        for row in 0..num_rows {
            for col in 0..num_cols {
                let (nw_lat, nw_lon) = self.geometry.northwest_sample(row, col);
                let (se_lat, se_lon) = self.geometry.southeast_sample(row, col);

                let nw = source.lookup(nw_lat, nw_lon);
                let se = source.lookup(se_lat, se_lon);

                let change = match (nw.elevation(), se.elevation()) {
                    (Some(a), Some(b)) => (a - b).abs(),
                    _ => {
                        debug!("Cell ({}, {}) missing a sample, storing 0", row, col);
                        0.0
                    }
                };
                grid.set(row, col, change);

                completed += 1;
                if let Some(cb) = progress {
                    cb(completed, total);
                }
            }
        }

        grid
    }
}
