use thiserror::Error;

/// Error type for the fallible edges around the schedule engine: loading asset
/// records, reading configuration and parsing user input.
#[derive(Debug, Error)]
pub enum DepreciationError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

pub type Result<T> = std::result::Result<T, DepreciationError>;
