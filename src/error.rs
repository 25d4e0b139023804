use crate::decoding::error::DecodeError;
use polars::error::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MeteoError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("Failed to parse forecast envelope JSON")]
    EnvelopeParse(#[from] serde_json::Error),

    #[error("Failed to read forecast envelope file '{0}'")]
    EnvelopeRead(PathBuf, #[source] std::io::Error),

    #[error("Failed building DataFrame: {0}")]
    DataFrame(#[from] PolarsError),

    #[error("Background decode task failed to complete")]
    TaskJoin(#[from] tokio::task::JoinError),
}
