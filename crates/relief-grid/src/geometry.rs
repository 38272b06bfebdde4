//! Grid geometry: mapping a bounding box and spacing to cells and sample
//! coordinates.
//!
//! Cell (i, j) has its center at `(min_lat + i * spacing, min_lon +
//! j * spacing)`. Its two sample points are the northwest corner (half a
//! spacing north and west of the center) and the southeast corner (half a
//! spacing south and east). Everything here is pure arithmetic with no
//! failure conditions once the configuration has been validated.

use crate::{GridError, Result};
use serde::{Deserialize, Serialize};

/// Absorbs f64 representation error in the span/spacing ratio before
/// truncation. 36.01 - 36.0 is slightly under 0.01 in f64, so a naive
/// floor of 0.01 / 0.005 would yield 1 cell instead of 2. Genuinely
/// fractional cells are still truncated away.
const SPAN_EPSILON: f64 = 1e-9;

/// A rectangular geographic region in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Southern edge (degrees latitude).
    pub min_lat: f64,
    /// Northern edge (degrees latitude).
    pub max_lat: f64,
    /// Western edge (degrees longitude).
    pub min_lon: f64,
    /// Eastern edge (degrees longitude).
    pub max_lon: f64,
}

impl BoundingBox {
    /// Latitude span in degrees.
    pub fn lat_span(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    /// Longitude span in degrees.
    pub fn lon_span(&self) -> f64 {
        self.max_lon - self.min_lon
    }

    /// Check the min < max invariant on both axes.
    pub fn validate(&self) -> Result<()> {
        if self.min_lat >= self.max_lat {
            return Err(GridError::InvalidLatBounds {
                min_lat: self.min_lat,
                max_lat: self.max_lat,
            });
        }
        if self.min_lon >= self.max_lon {
            return Err(GridError::InvalidLonBounds {
                min_lon: self.min_lon,
                max_lon: self.max_lon,
            });
        }
        Ok(())
    }
}

/// Configuration for one grid run: the region and the cell size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Region to sample.
    pub bounds: BoundingBox,
    /// Angular size of one cell along each axis, in degrees.
    pub spacing: f64,
}

impl GridConfig {
    /// Validate bounds and spacing.
    ///
    /// A spacing larger than an axis span is allowed and yields an empty
    /// grid on that axis; only non-positive spacing is rejected.
    pub fn validate(&self) -> Result<()> {
        self.bounds.validate()?;
        if !(self.spacing > 0.0) {
            return Err(GridError::InvalidSpacing(self.spacing));
        }
        Ok(())
    }
}

/// Cell layout derived from a [`GridConfig`].
///
/// Pure and deterministic: the same configuration always produces the
/// same dimensions and sample coordinates.
#[derive(Debug, Clone, Copy)]
pub struct GridGeometry {
    bounds: BoundingBox,
    spacing: f64,
}

impl GridGeometry {
    /// Derive the geometry from a configuration.
    pub fn new(config: &GridConfig) -> Self {
        Self {
            bounds: config.bounds,
            spacing: config.spacing,
        }
    }

    /// Number of whole cells along an axis span.
    fn cells_in_span(&self, span: f64) -> usize {
        let ratio = span / self.spacing + SPAN_EPSILON;
        if ratio <= 0.0 {
            0
        } else {
            ratio.floor() as usize
        }
    }

    /// Number of rows (latitude axis).
    pub fn num_rows(&self) -> usize {
        self.cells_in_span(self.bounds.lat_span())
    }

    /// Number of columns (longitude axis).
    pub fn num_cols(&self) -> usize {
        self.cells_in_span(self.bounds.lon_span())
    }

    /// Total number of cells.
    pub fn num_cells(&self) -> usize {
        self.num_rows() * self.num_cols()
    }

    /// Center coordinate of cell (row, col) as (lat, lon).
    pub fn cell_center(&self, row: usize, col: usize) -> (f64, f64) {
        (
            self.bounds.min_lat + row as f64 * self.spacing,
            self.bounds.min_lon + col as f64 * self.spacing,
        )
    }

    /// Northwest sample coordinate of cell (row, col) as (lat, lon).
    ///
    /// Half a spacing north and half a spacing west of the center.
    pub fn northwest_sample(&self, row: usize, col: usize) -> (f64, f64) {
        let (lat, lon) = self.cell_center(row, col);
        (lat + self.spacing / 2.0, lon - self.spacing / 2.0)
    }

    /// Southeast sample coordinate of cell (row, col) as (lat, lon).
    ///
    /// Half a spacing south and half a spacing east of the center.
    pub fn southeast_sample(&self, row: usize, col: usize) -> (f64, f64) {
        let (lat, lon) = self.cell_center(row, col);
        (lat - self.spacing / 2.0, lon + self.spacing / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn vegas_config() -> GridConfig {
        GridConfig {
            bounds: BoundingBox {
                min_lat: 36.0,
                max_lat: 36.3,
                min_lon: -115.4,
                max_lon: -115.0,
            },
            spacing: 0.004167,
        }
    }

    #[test]
    fn test_vegas_dimensions() {
        // 0.3 / 0.004167 = 71.99..., 0.4 / 0.004167 = 95.99...
        let geometry = GridGeometry::new(&vegas_config());
        assert_eq!(geometry.num_rows(), 71);
        assert_eq!(geometry.num_cols(), 95);
        assert_eq!(geometry.num_cells(), 71 * 95);
    }

    #[test]
    fn test_exact_multiple_dimensions() {
        // Spans that are exact decimal multiples of the spacing must give
        // the full cell count despite f64 representation error.
        let config = GridConfig {
            bounds: BoundingBox {
                min_lat: 36.0,
                max_lat: 36.01,
                min_lon: -115.0,
                max_lon: -114.99,
            },
            spacing: 0.005,
        };
        let geometry = GridGeometry::new(&config);
        assert_eq!(geometry.num_rows(), 2);
        assert_eq!(geometry.num_cols(), 2);
    }

    #[test]
    fn test_spacing_larger_than_span() {
        let config = GridConfig {
            bounds: BoundingBox {
                min_lat: 0.0,
                max_lat: 0.1,
                min_lon: 0.0,
                max_lon: 0.1,
            },
            spacing: 1.0,
        };
        let geometry = GridGeometry::new(&config);
        assert_eq!(geometry.num_rows(), 0);
        assert_eq!(geometry.num_cols(), 0);
        assert_eq!(geometry.num_cells(), 0);
    }

    #[test]
    fn test_cell_center() {
        let geometry = GridGeometry::new(&vegas_config());
        let (lat, lon) = geometry.cell_center(0, 0);
        assert_abs_diff_eq!(lat, 36.0);
        assert_abs_diff_eq!(lon, -115.4);

        let (lat, lon) = geometry.cell_center(2, 3);
        assert_abs_diff_eq!(lat, 36.0 + 2.0 * 0.004167, epsilon = 1e-12);
        assert_abs_diff_eq!(lon, -115.4 + 3.0 * 0.004167, epsilon = 1e-12);
    }

    #[test]
    fn test_sample_corners_symmetric_around_center() {
        let geometry = GridGeometry::new(&vegas_config());
        let spacing = vegas_config().spacing;

        for (row, col) in [(0, 0), (1, 4), (70, 94)] {
            let (c_lat, c_lon) = geometry.cell_center(row, col);
            let (nw_lat, nw_lon) = geometry.northwest_sample(row, col);
            let (se_lat, se_lon) = geometry.southeast_sample(row, col);

            // Offset by exactly spacing/2 per axis, in opposite directions.
            assert_abs_diff_eq!(nw_lat - c_lat, spacing / 2.0, epsilon = 1e-12);
            assert_abs_diff_eq!(c_lon - nw_lon, spacing / 2.0, epsilon = 1e-12);
            assert_abs_diff_eq!(c_lat - se_lat, spacing / 2.0, epsilon = 1e-12);
            assert_abs_diff_eq!(se_lon - c_lon, spacing / 2.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_bounds_validation() {
        let mut config = vegas_config();
        assert!(config.validate().is_ok());

        config.bounds.min_lat = 37.0;
        assert!(matches!(
            config.validate(),
            Err(GridError::InvalidLatBounds { .. })
        ));

        let mut config = vegas_config();
        config.bounds.max_lon = -116.0;
        assert!(matches!(
            config.validate(),
            Err(GridError::InvalidLonBounds { .. })
        ));
    }

    #[test]
    fn test_spacing_validation() {
        let mut config = vegas_config();
        config.spacing = 0.0;
        assert!(matches!(
            config.validate(),
            Err(GridError::InvalidSpacing(_))
        ));

        config.spacing = -0.1;
        assert!(matches!(
            config.validate(),
            Err(GridError::InvalidSpacing(_))
        ));

        config.spacing = f64::NAN;
        assert!(matches!(
            config.validate(),
            Err(GridError::InvalidSpacing(_))
        ));
    }
}
