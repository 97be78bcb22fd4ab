use thiserror::Error;

/// Top-level error type for the cockpit workspace.
///
/// Subsystem crates define their own error types and implement
/// `From<SubsystemError> for CockpitError` so that the `?` operator works
/// across crate boundaries.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CockpitError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<toml::de::Error> for CockpitError {
    fn from(err: toml::de::Error) -> Self {
        CockpitError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for CockpitError {
    fn from(err: toml::ser::Error) -> Self {
        CockpitError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for CockpitError {
    fn from(err: serde_json::Error) -> Self {
        CockpitError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for cockpit operations.
pub type Result<T> = std::result::Result<T, CockpitError>;
