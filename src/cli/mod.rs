//! Command-line interface: argument parsing, `--version` and `--help`.
//!
//! ```ignore
//! use admin_console::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args())?;
//! if let Some(overrides) = run_cli_command(command) {
//!     // continue to the TUI
//! }
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand, CliOverrides};
pub use version::{handle_help_command, handle_version_command, VERSION};

/// Run a CLI-only command, or hand back the overrides for the TUI.
///
/// `Version` and `Help` never return.
pub fn run_cli_command(command: CliCommand) -> Option<CliOverrides> {
    match command {
        CliCommand::Version => handle_version_command(),
        CliCommand::Help => handle_help_command(),
        CliCommand::RunTui(overrides) => Some(overrides),
    }
}
