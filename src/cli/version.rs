//! Version and usage output.

/// Crate version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const USAGE: &str = "\
Usage: admin-console [OPTIONS]

Open the Create User dialog against a chat server.

Options:
  --url <URL>            Server base URL (env ADMIN_CONSOLE_URL)
  --token <TOKEN>        Bearer token (env ADMIN_CONSOLE_TOKEN)
  --structured-errors    Route server errors by error id (env ADMIN_CONSOLE_ROUTING=structured)
  -V, --version          Print version
  -h, --help             Print this help

Logging is controlled by ADMIN_CONSOLE_LOG (default: info).";

pub fn version_line() -> String {
    format!("admin-console {}", VERSION)
}

/// Print the version string and exit.
pub fn handle_version_command() -> ! {
    println!("{}", version_line());
    std::process::exit(0)
}

/// Print usage and exit.
pub fn handle_help_command() -> ! {
    println!("{}\n\n{}", version_line(), USAGE);
    std::process::exit(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_format() {
        let parts: Vec<&str> = VERSION.split('.').collect();
        assert!(parts.len() >= 2, "Version should have at least major.minor");
        assert!(version_line().starts_with("admin-console "));
    }

    #[test]
    fn test_usage_lists_every_flag() {
        for flag in ["--url", "--token", "--structured-errors", "--version", "--help"] {
            assert!(USAGE.contains(flag), "missing {}", flag);
        }
    }
}
