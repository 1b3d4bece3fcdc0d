//! Error taxonomy for the portfolio.
//!
//! Validation and submission failures are shown to the user through the same
//! toast surface as successes; the remaining variants only reach the log.

use std::path::PathBuf;

use crate::core::contact::Field;

/// A required contact-form field was left blank.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{} is required", .0.label())]
    EmptyField(Field),
}

/// Delivery of a contact-form submission failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    /// A submission is already in flight.
    #[error("a message is already being sent")]
    AlreadySubmitting,

    /// The message could not be handed to the transport.
    #[error("message delivery failed: {0}")]
    Transport(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("failed to access theme preference at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid theme preference: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to encode theme preference: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum FolioError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Submission(#[from] SubmissionError),

    #[error(transparent)]
    Theme(#[from] ThemeError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl FolioError {
    /// Whether the error is meant for the user rather than the log.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, FolioError::Validation(_) | FolioError::Submission(_))
    }
}
