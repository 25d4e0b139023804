//! The already-fetched response envelope this crate decodes.
//!
//! These types mirror the Open-Meteo response layout one to one and carry no
//! meaning of their own: variable slots are identified only by position, and
//! what a slot holds is decided by the [`crate::RequestSchema`] it is decoded with.

use crate::error::MeteoError;
use crate::types::granularity::Granularity;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// One positional variable slot.
///
/// Instant blocks fill `value` or `value_int64`, series blocks fill `values`
/// or `values_int64`. A slot may carry more than one representation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawVariable {
    pub value: Option<f32>,
    pub value_int64: Option<i64>,
    pub values: Option<Vec<f32>>,
    pub values_int64: Option<Vec<i64>>,
}

impl RawVariable {
    pub fn scalar(value: f32) -> Self {
        Self {
            value: Some(value),
            ..Self::default()
        }
    }

    pub fn scalar_int64(value: i64) -> Self {
        Self {
            value_int64: Some(value),
            ..Self::default()
        }
    }

    pub fn floats(values: Vec<f32>) -> Self {
        Self {
            values: Some(values),
            ..Self::default()
        }
    }

    pub fn int64s(values: Vec<i64>) -> Self {
        Self {
            values_int64: Some(values),
            ..Self::default()
        }
    }
}

/// The single-instant `current` block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawInstantBlock {
    /// Epoch seconds, UTC.
    pub time: i64,
    #[serde(default)]
    pub variables: Vec<RawVariable>,
}

/// A `minutely_15`, `hourly` or `daily` block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSeriesBlock {
    /// Epoch seconds of the first sample, UTC.
    pub time: i64,
    /// Exclusive end, epoch seconds, UTC.
    pub time_end: i64,
    /// Seconds between samples.
    pub interval: i64,
    #[serde(default)]
    pub variables: Vec<RawVariable>,
}

/// One location/model response as handed over by the fetching layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawEnvelope {
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,
    pub timezone: String,
    pub timezone_abbreviation: String,
    pub utc_offset_seconds: i64,
    #[serde(default)]
    pub current: Option<RawInstantBlock>,
    #[serde(default)]
    pub minutely_15: Option<RawSeriesBlock>,
    #[serde(default)]
    pub hourly: Option<RawSeriesBlock>,
    #[serde(default)]
    pub daily: Option<RawSeriesBlock>,
}

impl RawEnvelope {
    /// Series block for `granularity`. Always `None` for [`Granularity::Current`].
    pub fn series_block(&self, granularity: Granularity) -> Option<&RawSeriesBlock> {
        match granularity {
            Granularity::Current => None,
            Granularity::Minutely15 => self.minutely_15.as_ref(),
            Granularity::Hourly => self.hourly.as_ref(),
            Granularity::Daily => self.daily.as_ref(),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, MeteoError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses a JSON array holding one envelope per location or model.
    pub fn many_from_json_str(json: &str) -> Result<Vec<Self>, MeteoError> {
        let envelopes: Vec<Self> = serde_json::from_str(json)?;
        debug!("Parsed {} forecast envelopes", envelopes.len());
        Ok(envelopes)
    }

    pub fn from_reader(reader: impl Read) -> Result<Self, MeteoError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Reads a single JSON envelope from a file.
    pub fn from_path(path: &Path) -> Result<Self, MeteoError> {
        let file =
            File::open(path).map_err(|e| MeteoError::EnvelopeRead(path.to_path_buf(), e))?;
        debug!("Reading forecast envelope from {}", path.display());
        Self::from_reader(BufReader::new(file))
    }
}
