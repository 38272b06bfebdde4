//! The elevation source abstraction.

/// Outcome of a single elevation lookup.
///
/// A lookup either yields an elevation in meters or it doesn't; absence is
/// the sole failure signal and carries no error detail (diagnostics are
/// emitted at the point of failure instead).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LookupOutcome {
    /// Elevation in meters at the requested coordinate.
    Elevation(f64),
    /// The lookup failed; no elevation is available for the coordinate.
    Absent,
}

impl LookupOutcome {
    /// Returns the elevation if present.
    pub fn elevation(&self) -> Option<f64> {
        match self {
            LookupOutcome::Elevation(m) => Some(*m),
            LookupOutcome::Absent => None,
        }
    }

    /// Returns true if the lookup failed.
    pub fn is_absent(&self) -> bool {
        matches!(self, LookupOutcome::Absent)
    }
}

/// A source of elevation data addressed by geographic coordinate.
///
/// The production implementation is [`crate::OpenElevationClient`]; tests
/// drive grid construction with closures via the blanket impl below.
pub trait ElevationSource {
    /// Look up the elevation at a coordinate.
    ///
    /// # Arguments
    /// * `lat` - Latitude in decimal degrees (positive = north)
    /// * `lon` - Longitude in decimal degrees (negative = west)
    fn lookup(&self, lat: f64, lon: f64) -> LookupOutcome;
}

impl<F> ElevationSource for F
where
    F: Fn(f64, f64) -> LookupOutcome,
{
    fn lookup(&self, lat: f64, lon: f64) -> LookupOutcome {
        self(lat, lon)
    }
}
