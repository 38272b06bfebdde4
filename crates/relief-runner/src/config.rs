//! Run configuration: built-in defaults, optional YAML file, CLI flags.
//!
//! Precedence, lowest to highest: built-in defaults (the Las Vegas
//! region), values from the config file, flags given on the command line.

use crate::error::RunnerError;
use relief_elevation::DEFAULT_BASE_URL;
use relief_grid::{BoundingBox, GridConfig};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default region: the Las Vegas valley.
pub const DEFAULT_MIN_LAT: f64 = 36.0;
/// Northern edge of the default region.
pub const DEFAULT_MAX_LAT: f64 = 36.3;
/// Western edge of the default region.
pub const DEFAULT_MIN_LON: f64 = -115.4;
/// Eastern edge of the default region.
pub const DEFAULT_MAX_LON: f64 = -115.0;
/// Default cell size: ~1/4 mile in both latitude and longitude.
pub const DEFAULT_SPACING: f64 = 0.004167;
/// Default output filename, written to the working directory.
pub const DEFAULT_OUTPUT: &str = "elevation_data.json";

/// Fully resolved configuration for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    /// Region and cell size.
    pub grid: GridConfig,
    /// Output file path.
    pub output: PathBuf,
    /// Base URL of the elevation endpoint.
    pub endpoint: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            grid: GridConfig {
                bounds: BoundingBox {
                    min_lat: DEFAULT_MIN_LAT,
                    max_lat: DEFAULT_MAX_LAT,
                    min_lon: DEFAULT_MIN_LON,
                    max_lon: DEFAULT_MAX_LON,
                },
                spacing: DEFAULT_SPACING,
            },
            output: PathBuf::from(DEFAULT_OUTPUT),
            endpoint: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Partial configuration loaded from a YAML file; every field optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Region to sample.
    pub bounds: Option<BoundingBox>,
    /// Cell size in degrees.
    pub spacing: Option<f64>,
    /// Output file path.
    pub output: Option<PathBuf>,
    /// Base URL of the elevation endpoint.
    pub endpoint: Option<String>,
}

impl FileConfig {
    /// Load a partial configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, RunnerError> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&text)?)
    }
}

impl RunConfig {
    /// Apply file values over the defaults.
    pub fn apply_file(&mut self, file: &FileConfig) {
        if let Some(bounds) = file.bounds {
            self.grid.bounds = bounds;
        }
        if let Some(spacing) = file.spacing {
            self.grid.spacing = spacing;
        }
        if let Some(output) = &file.output {
            self.output = output.clone();
        }
        if let Some(endpoint) = &file.endpoint {
            self.endpoint = endpoint.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_the_vegas_region() {
        let config = RunConfig::default();
        assert_eq!(config.grid.bounds.min_lat, 36.0);
        assert_eq!(config.grid.bounds.max_lat, 36.3);
        assert_eq!(config.grid.bounds.min_lon, -115.4);
        assert_eq!(config.grid.bounds.max_lon, -115.0);
        assert_eq!(config.grid.spacing, 0.004167);
        assert_eq!(config.output, PathBuf::from("elevation_data.json"));
        assert!(config.grid.validate().is_ok());
    }

    #[test]
    fn test_parse_full_file() {
        let yaml = r#"
bounds:
  min_lat: 10.0
  max_lat: 10.5
  min_lon: 20.0
  max_lon: 20.5
spacing: 0.01
output: out.json
endpoint: http://localhost:8080
"#;
        let file: FileConfig = serde_yaml::from_str(yaml).unwrap();
        let mut config = RunConfig::default();
        config.apply_file(&file);

        assert_eq!(config.grid.bounds.min_lat, 10.0);
        assert_eq!(config.grid.spacing, 0.01);
        assert_eq!(config.output, PathBuf::from("out.json"));
        assert_eq!(config.endpoint, "http://localhost:8080");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let yaml = "spacing: 0.02\n";
        let file: FileConfig = serde_yaml::from_str(yaml).unwrap();
        let mut config = RunConfig::default();
        config.apply_file(&file);

        assert_eq!(config.grid.spacing, 0.02);
        assert_eq!(config.grid.bounds.min_lat, DEFAULT_MIN_LAT);
        assert_eq!(config.endpoint, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let yaml = "zoom: 12\n";
        assert!(serde_yaml::from_str::<FileConfig>(yaml).is_err());
    }
}
