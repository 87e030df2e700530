use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PargrepError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid pattern: {0}")]
    InvalidPattern(String),

    #[error("could not determine available parallelism: {0}")]
    ResourceUnavailable(String),

    #[error("partition {index} [{start}..{end}) could not be scanned: {reason}")]
    PartitionFault {
        index: usize,
        start: usize,
        end: usize,
        reason: String,
    },

    #[error("setup error: {0}")]
    Setup(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PargrepError>;
