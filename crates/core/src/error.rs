//! Error types for moodlight

use thiserror::Error;

use crate::config::ConfigError;

/// Main error type for moodlight operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: String,
    },

    /// A computed color broke an invariant of its profile. This points at a
    /// defect in profile construction, not at the caller's input.
    #[error("Invariant violated: {0}")]
    Invariant(String),

    #[error("Invalid color profile configuration: {0}")]
    Config(#[from] ConfigError),
}

impl Error {
    pub(crate) fn invalid(name: &'static str, value: impl ToString, reason: impl Into<String>) -> Self {
        Error::InvalidParameter {
            name,
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for moodlight operations
pub type Result<T> = std::result::Result<T, Error>;
