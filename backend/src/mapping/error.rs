//! Errors raised while mapping request bodies onto typed shapes.

use thiserror::Error;

/// A payload field failed to deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid value at '{path}': {message}")]
pub struct PayloadError {
    /// Dotted path of the offending field inside the payload (`.` when the
    /// payload itself is malformed).
    pub path: String,
    pub message: String,
}

/// Shape validation failure.
///
/// Every variant except [`MapError::MissingDeviceIdentification`] is reported
/// to the client as "Invalid JSON request"; the detailed text is only logged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    #[error("missing required field '{0}'")]
    MissingField(String),

    #[error("field '{field}' must be {expected}")]
    WrongType {
        field: String,
        expected: &'static str,
    },

    #[error("no variant registered for {discriminator} with direction {direction}")]
    UnknownVariant {
        discriminator: String,
        direction: i64,
    },

    #[error("payload '{key}' is missing or not an object")]
    MissingPayload { key: String },

    #[error(transparent)]
    Payload(#[from] PayloadError),

    #[error("device identification requires displayedName, hwType or serial")]
    MissingDeviceIdentification,

    #[error("declared {declared} items but {actual} were supplied")]
    CountMismatch { declared: i64, actual: usize },

    #[error("channel URI '{0}' has no settings mapping")]
    UnknownChannelUri(String),

    #[error("duplicate variant {discriminator} with direction {direction}")]
    DuplicateVariant {
        discriminator: String,
        direction: i64,
    },

    #[error("duplicate payload key '{0}'")]
    DuplicateKey(String),

    #[error("channel URI '{uri}' maps to unknown settings key '{key}'")]
    UnknownSettingsKey { uri: String, key: String },

    #[error("invalid key path '{0}'")]
    InvalidKeyPath(String),
}

impl MapError {
    pub fn missing(field: impl Into<String>) -> Self {
        MapError::MissingField(field.into())
    }

    pub fn wrong_type(field: impl Into<String>, expected: &'static str) -> Self {
        MapError::WrongType {
            field: field.into(),
            expected,
        }
    }
}
