use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Invalid hex color")]
    InvalidFormat,

    #[error("Invalid RGB components. Each must be an integer between 0 and 255")]
    InvalidRgb,

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

pub type Result<T> = std::result::Result<T, ConvertError>;
