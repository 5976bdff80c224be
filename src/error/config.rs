//! Configuration errors.

use thiserror::Error;

/// A setting was missing or could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("missing required setting {0}")]
    Missing(&'static str),

    #[error("invalid value {value:?} for {key}")]
    InvalidValue { key: String, value: String },

    #[error("unknown argument {0}")]
    UnknownArgument(String),

    #[error("argument {0} needs a value")]
    MissingArgumentValue(String),
}
