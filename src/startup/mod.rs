//! Startup: configuration and server preflight.
//!
//! - [`config`] - environment and CLI settings
//! - [`preflight`] - password policy and signed-in user lookup

pub mod config;
pub mod preflight;

pub use config::{ConsoleConfig, DEFAULT_LOG_FILTER};
pub use preflight::{load_dialog_context, DialogContext};
