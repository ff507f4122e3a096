use thiserror::Error;

/// Top-level error type for AquaAssist.
///
/// Covers the failures that can happen outside of request dispatch:
/// reading configuration, loading the consumption dataset, and
/// (de)serializing platform payloads. Dispatch failures live in
/// `aquassist-skill` and never escape as faults.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AquaError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Dataset error: {0}")]
    Dataset(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Server error: {0}")]
    Server(String),
}

impl From<toml::de::Error> for AquaError {
    fn from(err: toml::de::Error) -> Self {
        AquaError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for AquaError {
    fn from(err: toml::ser::Error) -> Self {
        AquaError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for AquaError {
    fn from(err: serde_json::Error) -> Self {
        AquaError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for AquaAssist operations.
pub type Result<T> = std::result::Result<T, AquaError>;
