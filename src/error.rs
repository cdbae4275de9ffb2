//! Error types for Vaer.

use thiserror::Error;

/// Library-level error type for Vaer operations.
#[derive(Error, Debug)]
pub enum VaerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Weather API error: {0}")]
    Weather(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Model API error: {0}")]
    Llm(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Agent error: {0}")]
    Agent(String),
}

/// Result type alias for Vaer operations.
pub type Result<T> = std::result::Result<T, VaerError>;
