//! File logging for the TUI.
//!
//! The terminal belongs to ratatui, so events go to
//! `<data dir>/admin-console/admin-console.log` instead of stderr.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::ConsoleResult;

const LOG_DIR: &str = "admin-console";
const LOG_FILE: &str = "admin-console.log";

/// Where the log file goes: the platform data dir, else the temp dir.
pub fn default_log_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(LOG_DIR)
        .join(LOG_FILE)
}

/// Parse a filter directive, falling back to `info` when it does not parse.
pub fn build_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("info"))
}

fn open_log_file(path: &Path) -> ConsoleResult<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(OpenOptions::new().create(true).append(true).open(path)?)
}

/// Install the global subscriber writing to `path`.
///
/// A second call in the same process leaves the first subscriber in place.
pub fn init_file_logging(path: &Path, directive: &str) -> ConsoleResult<()> {
    let file = open_log_file(path)?;

    let layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true);

    let _ = tracing_subscriber::registry()
        .with(build_filter(directive))
        .with(layer)
        .try_init();
    Ok(())
}
