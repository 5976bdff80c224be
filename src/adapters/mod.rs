//! Concrete implementations of the traits in `crate::traits`.
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//!
//! The [`mock`] submodule provides the test doubles.

pub mod mock;
pub mod reqwest_http;

pub use mock::{MockHttpClient, MockUserCreator};
pub use reqwest_http::ReqwestHttpClient;
