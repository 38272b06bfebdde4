//! `relief` — sample an elevation API over a bounding box and write an
//! elevation-change grid.
//!
//! For every cell of the grid, two diagonally opposed corner points are
//! looked up against the Open-Elevation API and the absolute elevation
//! difference is recorded. The result is written as JSON
//! (`{"grid": [[...], ...]}`) for downstream visualization.
//!
//! Lookups run strictly sequentially, so wall-clock time scales with
//! `rows * cols * 2` network round-trips. Individual lookup failures are
//! logged and contribute zero-delta cells; only a failure to write the
//! output file aborts with a non-zero exit status.

mod config;
mod error;

use clap::Parser;
use config::{FileConfig, RunConfig};
use error::RunnerError;
use relief_elevation::OpenElevationClient;
use relief_grid::{write_grid, GridBuilder, ProgressCallback, StatusCallback};
use std::path::PathBuf;
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Compute an elevation-change grid over a geographic bounding box.
#[derive(Debug, Parser)]
#[command(name = "relief", version, about)]
struct Cli {
    /// Southern edge of the region (degrees latitude).
    #[arg(long)]
    min_lat: Option<f64>,

    /// Northern edge of the region (degrees latitude).
    #[arg(long)]
    max_lat: Option<f64>,

    /// Western edge of the region (degrees longitude).
    #[arg(long)]
    min_lon: Option<f64>,

    /// Eastern edge of the region (degrees longitude).
    #[arg(long)]
    max_lon: Option<f64>,

    /// Cell size in degrees along each axis.
    #[arg(long)]
    spacing: Option<f64>,

    /// Output JSON file path.
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Base URL of the elevation endpoint.
    #[arg(long)]
    endpoint: Option<String>,

    /// YAML config file; command-line flags take precedence over it.
    #[arg(long, short)]
    config: Option<PathBuf>,
}

impl Cli {
    /// Resolve defaults, config file, and flags into a run configuration.
    fn resolve(&self) -> Result<RunConfig, RunnerError> {
        let mut config = RunConfig::default();

        if let Some(path) = &self.config {
            config.apply_file(&FileConfig::from_file(path)?);
        }

        if let Some(v) = self.min_lat {
            config.grid.bounds.min_lat = v;
        }
        if let Some(v) = self.max_lat {
            config.grid.bounds.max_lat = v;
        }
        if let Some(v) = self.min_lon {
            config.grid.bounds.min_lon = v;
        }
        if let Some(v) = self.max_lon {
            config.grid.bounds.max_lon = v;
        }
        if let Some(v) = self.spacing {
            config.grid.spacing = v;
        }
        if let Some(v) = &self.output {
            config.output = v.clone();
        }
        if let Some(v) = &self.endpoint {
            config.endpoint = v.clone();
        }

        Ok(config)
    }
}

fn run(cli: &Cli) -> Result<(), RunnerError> {
    let config = cli.resolve()?;
    config.grid.validate()?;

    let client = OpenElevationClient::with_base_url(&config.endpoint)?;
    let builder = GridBuilder::new(&config.grid);

    let geometry = builder.geometry();
    eprintln!(
        "Processing {} x {} grid (~{} points)",
        geometry.num_rows(),
        geometry.num_cols(),
        geometry.num_cells()
    );

    // In-place progress line, one update per cell like the grid itself.
    let progress: ProgressCallback = Box::new(|completed, total| {
        eprint!("\rFetching elevation data: {} / {} cells", completed, total);
        if completed == total {
            eprintln!();
        }
    });

    let grid = builder.build(&client, Some(&progress));

    let status: StatusCallback = Box::new(|msg| eprintln!("{}", msg));
    write_grid(&grid, &config.output, Some(&status))?;

    Ok(())
}

fn main() -> std::process::ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            error!("Run failed: {}", e);
            eprintln!("Error: {}", e);
            std::process::ExitCode::FAILURE
        }
    }
}
