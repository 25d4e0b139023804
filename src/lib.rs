//! Decode Open-Meteo forecast responses into typed, time-indexed tables.
//!
//! A response envelope carries a current-conditions block plus 15-minute,
//! hourly and daily series. Variables inside each block are identified only by
//! position, so decoding is driven by a [`RequestSchema`] listing the variables
//! in the order they were requested. Fetching, caching and rendering are left
//! to the caller.

mod decoder;
mod decoding;
mod envelope;
mod error;
mod types;

pub use decoder::ResponseDecoder;
pub use error::MeteoError;

pub use envelope::{RawEnvelope, RawInstantBlock, RawSeriesBlock, RawVariable};

pub use decoding::block::{decode_series, decode_series_block};
pub use decoding::current::{decode_current, CurrentReading};
pub use decoding::error::DecodeError;
pub use decoding::response::{decode_response, ForecastResponse};
pub use decoding::table::{Table, DATE_COLUMN};
pub use decoding::time_index::TimeIndex;

pub use types::granularity::Granularity;
pub use types::location::{Coordinate, TimezoneInfo};
pub use types::schema::RequestSchema;
pub use types::variable::{ColumnValues, DType, ScalarValue, VariableColumn, VariableSpec};
pub use types::weather_code::WeatherCode;
