use serde::{Deserialize, Serialize};

/// Grid-cell position a forecast was computed for.
///
/// The API snaps the requested point to its model grid, so these values can
/// differ slightly from the coordinates that were requested.
///
/// # Examples
///
/// ```
/// use openmeteo_frames::Coordinate;
///
/// let kitsilano = Coordinate::new(49.25, -123.16, 79.0);
/// assert_eq!(kitsilano.latitude, 49.25);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
    /// Metres above sea level.
    pub elevation: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64, elevation: f64) -> Self {
        Self {
            latitude,
            longitude,
            elevation,
        }
    }
}

/// Time zone the response timestamps were shifted into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimezoneInfo {
    /// IANA name, e.g. `America/Los_Angeles`.
    pub name: String,
    /// Abbreviation, e.g. `PDT`.
    pub abbreviation: String,
    /// Seconds added to every decoded timestamp.
    pub utc_offset_seconds: i64,
}
