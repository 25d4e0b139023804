//! Defines the measurement cadences carried by a forecast response.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One measurement cadence within a forecast response.
///
/// A response carries at most one block per granularity. [`Granularity::Current`]
/// is a single instant, the other three are evenly spaced series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Granularity {
    /// A single reading at the time of the request.
    Current,
    /// A series sampled every 15 minutes.
    #[serde(rename = "minutely_15")]
    Minutely15,
    /// A series sampled every hour.
    Hourly,
    /// A series with one sample per local day.
    Daily,
}

impl Granularity {
    /// The three series granularities, in the order they appear in a response.
    pub const SERIES: [Granularity; 3] = [
        Granularity::Minutely15,
        Granularity::Hourly,
        Granularity::Daily,
    ];

    /// The name used for this granularity in API requests and response payloads.
    pub fn api_name(&self) -> &'static str {
        match self {
            Granularity::Current => "current",
            Granularity::Minutely15 => "minutely_15",
            Granularity::Hourly => "hourly",
            Granularity::Daily => "daily",
        }
    }

    pub fn is_series(&self) -> bool {
        !matches!(self, Granularity::Current)
    }
}

/// Formats a `Granularity` using its API name.
///
/// # Examples
///
/// ```
/// use openmeteo_frames::Granularity;
///
/// assert_eq!(format!("{}", Granularity::Minutely15), "minutely_15");
/// assert_eq!(Granularity::Daily.to_string(), "daily");
/// ```
impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.api_name())
    }
}
