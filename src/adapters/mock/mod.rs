//! Mock implementations for testing.
//!
//! - [`MockHttpClient`] - HTTP client with configurable responses
//! - [`MockUserCreator`] - create-user operation with scripted results

pub mod http;
pub mod user_creator;

pub use http::{MockHttpClient, MockResponse, RecordedRequest};
pub use user_creator::{CreateUserCall, MockUserCreator};
