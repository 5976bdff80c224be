//! REST client for the chat server.

pub mod users;

pub use users::{to_server_error, UsersApi};
