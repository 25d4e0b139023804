use crate::types::granularity::Granularity;
use thiserror::Error;

/// Reasons a single forecast response cannot be decoded.
///
/// Every variant aborts the decode of the response that raised it. Nothing is
/// retried and no partially decoded response is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("{granularity} block has {found} variable slots but {expected} variables were requested")]
    VariableCountMismatch {
        granularity: Granularity,
        expected: usize,
        found: usize,
    },

    #[error("{granularity} column '{column}' has {found} values but the time index has {expected} rows")]
    LengthMismatch {
        granularity: Granularity,
        column: String,
        expected: usize,
        found: usize,
    },

    #[error("Cannot decode {} as dtype '{dtype}'", describe_variable(.variable))]
    UnknownDType {
        dtype: String,
        variable: Option<String>,
    },

    #[error("Response has no {0} block although {0} variables were requested")]
    MissingGranularityBlock(Granularity),

    #[error("Block interval must be positive, got {0}s")]
    NonPositiveInterval(i64),

    #[error("Block ends at {end} before it starts at {start}")]
    EndBeforeStart { start: i64, end: i64 },

    #[error("Timestamp out of range for start {start}, end {end}, interval {interval}s and UTC offset {utc_offset}s")]
    TimestampOverflow {
        start: i64,
        end: i64,
        interval: i64,
        utc_offset: i64,
    },

    #[error("{granularity} table already has a column named '{column}'")]
    DuplicateColumn {
        granularity: Granularity,
        column: String,
    },
}

fn describe_variable(variable: &Option<String>) -> String {
    match variable {
        Some(name) => format!("variable '{name}'"),
        None => "value".to_string(),
    }
}
