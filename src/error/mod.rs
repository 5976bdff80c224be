//! Error handling for the admin console.
//!
//! - **Error Categories**: [`ErrorCategory`] drives status wording and retry hints
//! - **Domain errors**: [`ApiError`] for the REST client, [`ConfigError`] for settings
//! - **Unified error**: [`ConsoleError`] wraps both plus local I/O
//!
//! Failures of the create call itself never surface as `ConsoleError`: they are
//! normalized into [`crate::models::ServerError`] and routed onto the dialog fields.

mod api;
mod category;
mod config;

pub use api::ApiError;
pub use category::ErrorCategory;
pub use config::ConfigError;

use thiserror::Error;

/// Unified error type for console startup and background requests.
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConsoleError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ConsoleError::Api(err) => err.category(),
            ConsoleError::Config(_) => ErrorCategory::Configuration,
            ConsoleError::Io(_) => ErrorCategory::System,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ConsoleError::Api(err) => err.error_code(),
            ConsoleError::Config(_) => "CONFIG",
            ConsoleError::Io(_) => "IO",
        }
    }

    /// One-line message for the status bar, with the category's hint appended.
    pub fn user_message(&self) -> String {
        format!("{}. {}", self, self.category().recovery_hint())
    }

    pub fn is_retryable(&self) -> bool {
        self.category().is_retryable()
    }
}

/// Result alias used across the crate.
pub type ConsoleResult<T> = Result<T, ConsoleError>;
