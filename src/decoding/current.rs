use crate::decoding::block::check_slot_count;
use crate::decoding::error::DecodeError;
use crate::envelope::{RawInstantBlock, RawVariable};
use crate::types::granularity::Granularity;
use crate::types::variable::{DType, ScalarValue, VariableSpec};
use crate::types::weather_code::WeatherCode;
use chrono::{DateTime, Utc};

/// The current-conditions reading of a response.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentReading {
    time: i64,
    values: Vec<(String, ScalarValue)>,
}

impl CurrentReading {
    /// Reading time in epoch seconds with the UTC offset already applied.
    pub fn time(&self) -> i64 {
        self.time
    }

    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.time, 0)
    }

    /// `(name, value)` pairs in request order.
    pub fn values(&self) -> &[(String, ScalarValue)] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<ScalarValue> {
        self.values
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, value)| *value)
    }

    /// The `is_day` flag, if it was requested.
    pub fn is_day(&self) -> Option<bool> {
        self.get("is_day").map(|v| v.as_f64() != 0.0)
    }

    /// The decoded `weather_code`, if it was requested and is a known WMO code.
    pub fn weather_code(&self) -> Option<WeatherCode> {
        match self.get("weather_code")? {
            ScalarValue::Float(v) => WeatherCode::from_f32(v),
            ScalarValue::Int64(v) => WeatherCode::from_i64(v),
        }
    }
}

fn decode_scalar(slot: &RawVariable, spec: &VariableSpec) -> Result<ScalarValue, DecodeError> {
    let value = match spec.dtype {
        DType::Float => slot.value.map(ScalarValue::Float),
        DType::Int64 => slot.value_int64.map(ScalarValue::Int64),
    };
    value.ok_or_else(|| DecodeError::UnknownDType {
        dtype: spec.dtype.to_string(),
        variable: Some(spec.name.clone()),
    })
}

/// Decodes the instant block into a [`CurrentReading`], one pair per spec in spec order.
///
/// # Errors
///
/// * [`DecodeError::VariableCountMismatch`] if the slot count differs from `specs.len()`.
/// * [`DecodeError::UnknownDType`] if a slot has no scalar of the requested type.
/// * [`DecodeError::TimestampOverflow`] if `time + utc_offset` does not fit in an `i64`.
pub fn decode_current(
    block: &RawInstantBlock,
    specs: &[VariableSpec],
    utc_offset: i64,
) -> Result<CurrentReading, DecodeError> {
    check_slot_count(Granularity::Current, block.variables.len(), specs)?;

    let time = block
        .time
        .checked_add(utc_offset)
        .ok_or(DecodeError::TimestampOverflow {
            start: block.time,
            end: block.time,
            interval: 0,
            utc_offset,
        })?;

    let values = block
        .variables
        .iter()
        .zip(specs)
        .map(|(slot, spec)| decode_scalar(slot, spec).map(|value| (spec.name.clone(), value)))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CurrentReading { time, values })
}
