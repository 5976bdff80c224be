use serde::{Deserialize, Serialize};
use std::fmt;

/// Message used when the server could not be reached or answered garbage.
pub const INVALID_RESPONSE_MESSAGE: &str = "Received invalid response from the server.";

/// Error returned by the create call, in the shape the dialog routes on.
///
/// `message` is the human-readable text the server produced; routing in legacy
/// mode looks only at this. `server_error_id` is the stable error id used by
/// structured routing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerError {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_error_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl ServerError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.server_error_id = Some(id.into());
        self
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status_code = Some(status);
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Error for a request that produced no usable response.
    pub fn invalid_response(url: impl Into<String>) -> Self {
        Self::new(INVALID_RESPONSE_MESSAGE).with_url(url)
    }
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status_code {
            Some(status) => write!(f, "{} ({})", self.message, status),
            None => f.write_str(&self.message),
        }
    }
}

impl std::error::Error for ServerError {}
