//! This module provides the main entry point for decoding forecast responses.
//! A [`ResponseDecoder`] binds the variable lists a request was made with and
//! decodes any number of envelopes against them.

use crate::decoding::error::DecodeError;
use crate::decoding::response::{decode_response, ForecastResponse};
use crate::envelope::RawEnvelope;
use crate::error::MeteoError;
use crate::types::schema::RequestSchema;
use log::{info, warn};
use std::path::Path;
use std::sync::Arc;
use tokio::task;

/// Decodes forecast envelopes with a fixed [`RequestSchema`].
///
/// The decoder holds no state besides the schema, so a single instance can be
/// shared freely and decoding the same envelope twice gives the same result.
///
/// # Examples
///
/// ```rust
/// # use openmeteo_frames::{MeteoError, RequestSchema, ResponseDecoder, VariableSpec};
/// # fn run() -> Result<(), MeteoError> {
/// let schema = RequestSchema::builder()
///     .current(vec![VariableSpec::float("temperature_2m"), VariableSpec::float("is_day")])
///     .build();
/// let decoder = ResponseDecoder::new(schema);
///
/// let response = decoder.decode_json(r#"{
///     "latitude": 49.25, "longitude": -123.16, "elevation": 79.0,
///     "timezone": "GMT", "timezone_abbreviation": "GMT", "utc_offset_seconds": 0,
///     "current": {"time": 1760900400, "variables": [{"value": 11.4}, {"value": 1.0}]}
/// }"#)?;
///
/// let current = response.current.expect("current was requested");
/// assert_eq!(current.is_day(), Some(true));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ResponseDecoder {
    schema: Arc<RequestSchema>,
}

impl ResponseDecoder {
    pub fn new(schema: RequestSchema) -> Self {
        Self {
            schema: Arc::new(schema),
        }
    }

    pub fn schema(&self) -> &RequestSchema {
        &self.schema
    }

    /// Decodes one envelope. See [`decode_response`] for the rules applied.
    pub fn decode(&self, envelope: &RawEnvelope) -> Result<ForecastResponse, DecodeError> {
        let response = decode_response(envelope, &self.schema)?;
        info!(
            "Decoded forecast for {:.4},{:.4} ({})",
            response.coordinate.latitude, response.coordinate.longitude, response.timezone.name
        );
        Ok(response)
    }

    /// Parses a JSON envelope and decodes it.
    pub fn decode_json(&self, json: &str) -> Result<ForecastResponse, MeteoError> {
        let envelope = RawEnvelope::from_json_str(json)?;
        Ok(self.decode(&envelope)?)
    }

    /// Reads a JSON envelope from `path` and decodes it.
    pub fn decode_path(&self, path: &Path) -> Result<ForecastResponse, MeteoError> {
        let envelope = RawEnvelope::from_path(path)?;
        Ok(self.decode(&envelope)?)
    }

    /// Decodes several envelopes concurrently, one blocking task per envelope.
    ///
    /// Each envelope gets its own result, in input order, so one malformed
    /// response does not prevent its siblings from being decoded.
    ///
    /// # Errors
    ///
    /// Returns [`MeteoError::TaskJoin`] only if a decode task panicked or was
    /// cancelled. Decode failures are reported per envelope.
    pub async fn decode_batch(
        &self,
        envelopes: Vec<RawEnvelope>,
    ) -> Result<Vec<Result<ForecastResponse, DecodeError>>, MeteoError> {
        let handles: Vec<_> = envelopes
            .into_iter()
            .map(|envelope| {
                let schema = Arc::clone(&self.schema);
                task::spawn_blocking(move || decode_response(&envelope, &schema))
            })
            .collect();

        let mut results = Vec::with_capacity(handles.len());
        for (i, handle) in handles.into_iter().enumerate() {
            let result = handle.await?;
            if let Err(e) = &result {
                warn!("Envelope {} in batch failed to decode: {}", i, e);
            }
            results.push(result);
        }

        info!(
            "Decoded {} of {} envelopes in batch",
            results.iter().filter(|r| r.is_ok()).count(),
            results.len()
        );
        Ok(results)
    }
}
