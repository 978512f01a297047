//! Error types and handling for the `tripgen` application

use thiserror::Error;

/// Main error type for the `tripgen` application
#[derive(Error, Debug)]
pub enum TripGenError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// General application errors
    #[error("Application error: {message}")]
    General { message: String },
}

impl TripGenError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new general error
    pub fn general<S: Into<String>>(message: S) -> Self {
        Self::General {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            TripGenError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            TripGenError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
            TripGenError::General { message } => message.clone(),
        }
    }
}

/// A form field that was missing or could not be coerced.
///
/// Gaps never reject a submission; they are reported and the field falls back
/// to an empty value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationGap {
    #[error("field '{field}' is missing")]
    Missing { field: &'static str },

    #[error("field '{field}' has an unusable value '{value}'")]
    Malformed { field: &'static str, value: String },

    #[error("style '{0}' is not in the destination catalog")]
    UnknownStyle(String),
}

impl ValidationGap {
    /// Name of the form field the gap refers to
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            ValidationGap::Missing { field } | ValidationGap::Malformed { field, .. } => field,
            ValidationGap::UnknownStyle(_) => "style",
        }
    }
}
