//! Decoding of a whole response envelope.

use crate::decoding::block::decode_series;
use crate::decoding::current::{decode_current, CurrentReading};
use crate::decoding::error::DecodeError;
use crate::decoding::table::Table;
use crate::envelope::RawEnvelope;
use crate::types::granularity::Granularity;
use crate::types::location::{Coordinate, TimezoneInfo};
use crate::types::schema::RequestSchema;
use log::debug;

/// Everything decoded from one response envelope.
///
/// A granularity that was not requested in the [`RequestSchema`] is `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastResponse {
    pub coordinate: Coordinate,
    pub timezone: TimezoneInfo,
    pub current: Option<CurrentReading>,
    pub minutely_15: Option<Table>,
    pub hourly: Option<Table>,
    pub daily: Option<Table>,
}

impl ForecastResponse {
    /// Table for a series granularity. Always `None` for [`Granularity::Current`].
    pub fn table(&self, granularity: Granularity) -> Option<&Table> {
        match granularity {
            Granularity::Current => None,
            Granularity::Minutely15 => self.minutely_15.as_ref(),
            Granularity::Hourly => self.hourly.as_ref(),
            Granularity::Daily => self.daily.as_ref(),
        }
    }
}

fn decode_table(
    envelope: &RawEnvelope,
    schema: &RequestSchema,
    granularity: Granularity,
) -> Result<Option<Table>, DecodeError> {
    let block = envelope.series_block(granularity);
    if !schema.is_requested(granularity) {
        if block.is_some() {
            debug!("Ignoring {} block, no {} variables requested", granularity, granularity);
        }
        return Ok(None);
    }
    let block = block.ok_or(DecodeError::MissingGranularityBlock(granularity))?;
    decode_series(
        granularity,
        block,
        schema.specs(granularity),
        envelope.utc_offset_seconds,
    )
    .map(Some)
}

/// Decodes one envelope with the variable lists it was requested with.
///
/// Decoding is all-or-nothing: the first error from any block aborts the whole
/// response and is returned as is.
///
/// # Errors
///
/// * [`DecodeError::MissingGranularityBlock`] if a requested granularity has no block.
/// * Any error raised while decoding the current block or a series block.
///
/// # Examples
///
/// ```
/// use openmeteo_frames::{decode_response, RawEnvelope, RequestSchema, VariableSpec};
///
/// let envelope = RawEnvelope::from_json_str(r#"{
///     "latitude": 49.25, "longitude": -123.16, "elevation": 79.0,
///     "timezone": "America/Los_Angeles", "timezone_abbreviation": "PDT",
///     "utc_offset_seconds": -25200,
///     "hourly": {"time": 0, "time_end": 7200, "interval": 3600,
///                "variables": [{"values": [0.0, 0.4]}]}
/// }"#)?;
/// let schema = RequestSchema::builder()
///     .hourly(vec![VariableSpec::float("precipitation")])
///     .build();
///
/// let response = decode_response(&envelope, &schema)?;
/// let hourly = response.hourly.expect("hourly was requested");
/// assert_eq!(hourly.dates().collect::<Vec<_>>(), vec![-25200, -21600]);
/// # Ok::<(), openmeteo_frames::MeteoError>(())
/// ```
pub fn decode_response(
    envelope: &RawEnvelope,
    schema: &RequestSchema,
) -> Result<ForecastResponse, DecodeError> {
    let coordinate = Coordinate::new(envelope.latitude, envelope.longitude, envelope.elevation);
    let timezone = TimezoneInfo {
        name: envelope.timezone.clone(),
        abbreviation: envelope.timezone_abbreviation.clone(),
        utc_offset_seconds: envelope.utc_offset_seconds,
    };

    let current = if schema.is_requested(Granularity::Current) {
        let block = envelope
            .current
            .as_ref()
            .ok_or(DecodeError::MissingGranularityBlock(Granularity::Current))?;
        Some(decode_current(
            block,
            schema.specs(Granularity::Current),
            envelope.utc_offset_seconds,
        )?)
    } else {
        None
    };

    Ok(ForecastResponse {
        coordinate,
        timezone,
        current,
        minutely_15: decode_table(envelope, schema, Granularity::Minutely15)?,
        hourly: decode_table(envelope, schema, Granularity::Hourly)?,
        daily: decode_table(envelope, schema, Granularity::Daily)?,
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::types::variable::{ScalarValue, VariableSpec};

    pub(crate) const SAMPLE: &str = include_str!("../../data/forecast_sample.json");

    /// The variable lists the sample envelope was requested with.
    pub(crate) fn sample_schema() -> RequestSchema {
        RequestSchema::builder()
            .current(vec![
                VariableSpec::float("temperature_2m"),
                VariableSpec::float("is_day"),
            ])
            .minutely_15(vec![
                VariableSpec::float("is_day"),
                VariableSpec::float("apparent_temperature"),
                VariableSpec::float("temperature_2m"),
                VariableSpec::float("precipitation"),
            ])
            .hourly(vec![
                VariableSpec::float("temperature_2m"),
                VariableSpec::float("apparent_temperature"),
                VariableSpec::float("precipitation"),
            ])
            .daily(vec![
                VariableSpec::float("temperature_2m_max"),
                VariableSpec::float("temperature_2m_min"),
                VariableSpec::int64("sunrise"),
                VariableSpec::int64("sunset"),
                VariableSpec::float("daylight_duration"),
                VariableSpec::float("sunshine_duration"),
                VariableSpec::float("apparent_temperature_max"),
                VariableSpec::float("apparent_temperature_min"),
            ])
            .build()
    }

    fn sample_envelope() -> RawEnvelope {
        RawEnvelope::from_json_str(SAMPLE).expect("sample envelope parses")
    }

    #[test]
    fn decodes_sample_response() -> Result<(), DecodeError> {
        let response = decode_response(&sample_envelope(), &sample_schema())?;

        assert_eq!(response.coordinate, Coordinate::new(49.25, -123.16, 79.0));
        assert_eq!(response.timezone.name, "America/Los_Angeles");
        assert_eq!(response.timezone.abbreviation, "PDT");
        assert_eq!(response.timezone.utc_offset_seconds, -25_200);

        let current = response.current.as_ref().expect("current requested");
        assert_eq!(current.time(), 1_760_900_400 - 25_200);
        assert_eq!(current.len(), 2);
        assert_eq!(current.values()[0].0, "temperature_2m");
        assert_eq!(current.get("temperature_2m"), Some(ScalarValue::Float(11.4)));
        assert_eq!(current.is_day(), Some(true));

        let minutely = response.table(Granularity::Minutely15).expect("minutely requested");
        assert_eq!(minutely.height(), 96);
        assert_eq!(minutely.dates().next(), Some(1_760_857_200 - 25_200));
        assert_eq!(minutely.time_index().interval(), 900);

        let hourly = response.table(Granularity::Hourly).expect("hourly requested");
        assert_eq!(hourly.height(), 24);
        assert_eq!(
            hourly.column_names(),
            vec!["date", "temperature_2m", "apparent_temperature", "precipitation"]
        );

        let daily = response.table(Granularity::Daily).expect("daily requested");
        assert_eq!(daily.height(), 1);
        assert_eq!(daily.i64_values("sunrise"), Some(&[1_760_885_400][..]));
        assert_eq!(daily.i64_values("sunset"), Some(&[1_760_923_500][..]));
        assert!(daily.f32_values("sunrise").is_none());
        assert_eq!(daily.f32_values("temperature_2m_max"), Some(&[13.2][..]));
        Ok(())
    }

    #[test]
    fn every_table_column_matches_its_date_column() -> Result<(), DecodeError> {
        let response = decode_response(&sample_envelope(), &sample_schema())?;
        for granularity in Granularity::SERIES {
            let table = response.table(granularity).expect("requested");
            let dates = table.dates().count();
            assert!(table.columns().iter().all(|c| c.len() == dates));
        }
        Ok(())
    }

    #[test]
    fn decoding_twice_gives_identical_output() -> Result<(), DecodeError> {
        let envelope = sample_envelope();
        let schema = sample_schema();
        assert_eq!(
            decode_response(&envelope, &schema)?,
            decode_response(&envelope, &schema)?
        );
        Ok(())
    }

    #[test]
    fn extra_daily_spec_fails_the_whole_response() {
        let envelope = sample_envelope();
        let mut daily = sample_schema().specs(Granularity::Daily).to_vec();
        daily.push(VariableSpec::float("precipitation_sum"));
        let schema = RequestSchema::builder()
            .current(sample_schema().specs(Granularity::Current).to_vec())
            .daily(daily)
            .build();

        assert_eq!(
            decode_response(&envelope, &schema),
            Err(DecodeError::VariableCountMismatch {
                granularity: Granularity::Daily,
                expected: 9,
                found: 8,
            })
        );
    }

    #[test]
    fn requested_but_absent_block_is_missing() {
        let mut envelope = sample_envelope();
        envelope.hourly = None;
        assert_eq!(
            decode_response(&envelope, &sample_schema()),
            Err(DecodeError::MissingGranularityBlock(Granularity::Hourly))
        );

        let mut envelope = sample_envelope();
        envelope.current = None;
        assert_eq!(
            decode_response(&envelope, &sample_schema()),
            Err(DecodeError::MissingGranularityBlock(Granularity::Current))
        );
    }

    #[test]
    fn unrequested_blocks_are_skipped() -> Result<(), DecodeError> {
        let schema = RequestSchema::builder()
            .hourly(sample_schema().specs(Granularity::Hourly).to_vec())
            .build();
        let response = decode_response(&sample_envelope(), &schema)?;
        assert!(response.current.is_none());
        assert!(response.minutely_15.is_none());
        assert!(response.daily.is_none());
        assert_eq!(response.hourly.map(|t| t.height()), Some(24));
        Ok(())
    }

    #[test]
    fn offset_shifts_every_table_uniformly() -> Result<(), DecodeError> {
        let shifted = decode_response(&sample_envelope(), &sample_schema())?;
        let mut utc = sample_envelope();
        utc.utc_offset_seconds = 0;
        let unshifted = decode_response(&utc, &sample_schema())?;

        for granularity in Granularity::SERIES {
            let a: Vec<i64> = shifted.table(granularity).expect("requested").dates().collect();
            let b: Vec<i64> = unshifted
                .table(granularity)
                .expect("requested")
                .dates()
                .map(|t| t - 25_200)
                .collect();
            assert_eq!(a, b, "{granularity}");
        }
        Ok(())
    }
}
