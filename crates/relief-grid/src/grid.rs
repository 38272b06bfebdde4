//! The elevation-change matrix.

use serde::Serialize;

/// Row-major matrix of elevation-change values in meters.
///
/// Built fresh for every run: allocated at its final dimensions, filled
/// in row-major order, and never mutated after it has been written out.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ElevationGrid {
    rows: Vec<Vec<f64>>,
}

impl ElevationGrid {
    /// Allocate a zero-filled grid of the given dimensions.
    pub fn new(num_rows: usize, num_cols: usize) -> Self {
        Self {
            rows: vec![vec![0.0; num_cols]; num_rows],
        }
    }

    /// Number of rows.
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn num_cols(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Get the value at (row, col).
    ///
    /// # Panics
    /// Panics if the indices are out of range.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.rows[row][col]
    }

    /// Set the value at (row, col).
    ///
    /// # Panics
    /// Panics if the indices are out of range.
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.rows[row][col] = value;
    }

    /// The rows of the matrix.
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_zero_filled() {
        let grid = ElevationGrid::new(3, 4);
        assert_eq!(grid.num_rows(), 3);
        assert_eq!(grid.num_cols(), 4);
        for row in grid.rows() {
            assert!(row.iter().all(|&v| v == 0.0));
        }
    }

    #[test]
    fn test_set_get() {
        let mut grid = ElevationGrid::new(2, 2);
        grid.set(1, 0, 12.5);
        assert_eq!(grid.get(1, 0), 12.5);
        assert_eq!(grid.get(0, 0), 0.0);
    }

    #[test]
    fn test_empty_grid() {
        let grid = ElevationGrid::new(0, 0);
        assert_eq!(grid.num_rows(), 0);
        assert_eq!(grid.num_cols(), 0);
    }

    #[test]
    fn test_serializes_as_nested_array() {
        let mut grid = ElevationGrid::new(2, 2);
        grid.set(0, 1, 1.5);
        let json = serde_json::to_string(&grid).unwrap();
        assert_eq!(json, "[[0.0,1.5],[0.0,0.0]]");
    }
}
