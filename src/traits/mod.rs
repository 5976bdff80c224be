//! Trait abstractions for dependency injection and testability.
//!
//! - [`HttpClient`] - HTTP client operations (GET, POST)
//! - [`UserCreator`] - the remote create-user operation the dialog submits to

pub mod http;
pub mod user_creator;

pub use http::{Headers, HttpClient, HttpError, Response};
pub use user_creator::{CreateUserResult, UserCreator};
