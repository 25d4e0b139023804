//! The variable lists a forecast was requested with.

use crate::types::granularity::Granularity;
use crate::types::variable::VariableSpec;
use bon::bon;
use serde::{Deserialize, Serialize};

/// Ordered [`VariableSpec`] lists for every granularity of a request.
///
/// Responses are decoded by position, so each list must match the order and
/// length of the variables that were put into the request. An empty list means
/// the granularity was not requested and no block is expected for it.
///
/// # Examples
///
/// ```
/// use openmeteo_frames::{Granularity, RequestSchema, VariableSpec};
///
/// let schema = RequestSchema::builder()
///     .current(vec![VariableSpec::float("temperature_2m")])
///     .daily(vec![
///         VariableSpec::float("temperature_2m_max"),
///         VariableSpec::int64("sunrise"),
///     ])
///     .build();
///
/// assert!(schema.is_requested(Granularity::Daily));
/// assert!(!schema.is_requested(Granularity::Hourly));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestSchema {
    current: Vec<VariableSpec>,
    minutely_15: Vec<VariableSpec>,
    hourly: Vec<VariableSpec>,
    daily: Vec<VariableSpec>,
}

#[bon]
impl RequestSchema {
    #[builder]
    pub fn new(
        current: Option<Vec<VariableSpec>>,
        minutely_15: Option<Vec<VariableSpec>>,
        hourly: Option<Vec<VariableSpec>>,
        daily: Option<Vec<VariableSpec>>,
    ) -> Self {
        Self {
            current: current.unwrap_or_default(),
            minutely_15: minutely_15.unwrap_or_default(),
            hourly: hourly.unwrap_or_default(),
            daily: daily.unwrap_or_default(),
        }
    }

    /// Specs requested for `granularity`, in request order.
    pub fn specs(&self, granularity: Granularity) -> &[VariableSpec] {
        match granularity {
            Granularity::Current => &self.current,
            Granularity::Minutely15 => &self.minutely_15,
            Granularity::Hourly => &self.hourly,
            Granularity::Daily => &self.daily,
        }
    }

    pub fn is_requested(&self, granularity: Granularity) -> bool {
        !self.specs(granularity).is_empty()
    }
}
