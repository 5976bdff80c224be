//! admin-console: a terminal admin console built around a Create User dialog.
//!
//! The dialog core lives in [`dialog`] and has no rendering or network
//! dependencies; [`api`], [`app`] and [`ui`] wire it to a chat server and a
//! ratatui terminal. This library exposes modules for use in integration tests.

pub mod adapters;
pub mod api;
pub mod app;
pub mod cli;
pub mod dialog;
pub mod error;
pub mod logging;
pub mod models;
pub mod startup;
pub mod terminal;
pub mod traits;
pub mod ui;
pub mod validation;
