//! Result writer: persists the grid as a JSON document.
//!
//! The output is a single object with a `grid` key holding the row-major
//! nested array of elevation-change values, pretty-printed for easy
//! inspection. Writing is all-or-nothing: any I/O or serialization
//! failure is fatal to the run and there is no partial-write recovery.

use crate::{ElevationGrid, Result};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Callback for completion status messages.
pub type StatusCallback = Box<dyn Fn(&str) + Send + Sync>;

/// Output document shape: `{"grid": [[...], ...]}`.
#[derive(Serialize)]
struct GridDocument<'a> {
    grid: &'a ElevationGrid,
}

/// Write the grid to a JSON file at `path`.
///
/// The status callback, if any, is invoked once after a successful write.
pub fn write_grid<P: AsRef<Path>>(
    grid: &ElevationGrid,
    path: P,
    status: Option<&StatusCallback>,
) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &GridDocument { grid })?;
    writer.flush()?;

    info!(
        "Wrote {} x {} grid to {}",
        grid.num_rows(),
        grid.num_cols(),
        path.display()
    );
    if let Some(cb) = status {
        cb(&format!("Elevation data saved to {}", path.display()));
    }
    Ok(())
}
