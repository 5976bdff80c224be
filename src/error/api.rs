//! Errors raised while talking to the users API.

use thiserror::Error;

use super::category::ErrorCategory;
use crate::traits::HttpError;

/// Failure of a request against the server REST API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("transport error: {0}")]
    Transport(#[from] HttpError),

    /// The server answered with a non-2xx status.
    #[error("server returned {status}: {message}")]
    Status {
        status: u16,
        message: String,
        /// Server-side error id, e.g. `app.user.save.email_exists.app_error`.
        id: Option<String>,
    },

    /// The response body was not the JSON we expected.
    #[error("could not decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A URL could not be built from the configured base.
    #[error("invalid url: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ApiError::Transport(_) => ErrorCategory::Network,
            ApiError::Status { status, .. } => match *status {
                401 | 403 => ErrorCategory::Auth,
                400..=499 => ErrorCategory::User,
                _ => ErrorCategory::Server,
            },
            ApiError::Decode(_) => ErrorCategory::Server,
            ApiError::InvalidUrl(_) => ErrorCategory::Configuration,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Transport(_) => "API_TRANSPORT",
            ApiError::Status { .. } => "API_STATUS",
            ApiError::Decode(_) => "API_DECODE",
            ApiError::InvalidUrl(_) => "API_INVALID_URL",
        }
    }

    /// HTTP status if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_categories() {
        let forbidden = ApiError::Status {
            status: 403,
            message: "nope".to_string(),
            id: None,
        };
        assert_eq!(forbidden.category(), ErrorCategory::Auth);

        let bad_request = ApiError::Status {
            status: 400,
            message: "bad".to_string(),
            id: None,
        };
        assert_eq!(bad_request.category(), ErrorCategory::User);

        let unavailable = ApiError::Status {
            status: 503,
            message: "down".to_string(),
            id: None,
        };
        assert_eq!(unavailable.category(), ErrorCategory::Server);
        assert_eq!(unavailable.status(), Some(503));
    }

    #[test]
    fn test_transport_is_network() {
        let err: ApiError = HttpError::Timeout("30s".to_string()).into();
        assert_eq!(err.category(), ErrorCategory::Network);
        assert_eq!(err.error_code(), "API_TRANSPORT");
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_display() {
        let err = ApiError::Status {
            status: 500,
            message: "boom".to_string(),
            id: None,
        };
        assert_eq!(err.to_string(), "server returned 500: boom");
    }
}
