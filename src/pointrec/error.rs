use crate::geolocation::GeolocationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecorderError {
    #[error("Point not found: #{0}")]
    PointNotFound(u64),

    #[error("No point with sequence number {0}")]
    SequenceNotFound(usize),

    #[error("No path at position {index} ({len} recorded)")]
    PathIndexOutOfRange { index: usize, len: usize },

    #[error("Node label cannot be empty")]
    EmptyLabel,

    #[error("{0}")]
    Geolocation(#[from] GeolocationError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, RecorderError>;
