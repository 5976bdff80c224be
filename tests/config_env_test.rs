//! Environment-driven configuration tests.
//!
//! These mutate process environment variables, so every test is `#[serial]`.

use admin_console::cli::{parse_args, CliCommand};
use admin_console::dialog::ErrorRouting;
use admin_console::error::ConfigError;
use admin_console::startup::{ConsoleConfig, DEFAULT_LOG_FILTER};
use serial_test::serial;

const VARS: [&str; 4] = [
    "ADMIN_CONSOLE_URL",
    "ADMIN_CONSOLE_TOKEN",
    "ADMIN_CONSOLE_ROUTING",
    "ADMIN_CONSOLE_LOG",
];

fn clear_env() {
    for var in VARS {
        std::env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_from_env_defaults() {
    clear_env();

    let config = ConsoleConfig::from_env().unwrap();

    assert_eq!(config.server_url, None);
    assert_eq!(config.token, None);
    assert_eq!(config.routing, ErrorRouting::Legacy);
    assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    assert_eq!(
        config.validate(),
        Err(ConfigError::Missing("ADMIN_CONSOLE_URL"))
    );
}

#[test]
#[serial]
fn test_from_env_reads_all_vars() {
    clear_env();
    std::env::set_var("ADMIN_CONSOLE_URL", "https://chat.example.com/");
    std::env::set_var("ADMIN_CONSOLE_TOKEN", "secret");
    std::env::set_var("ADMIN_CONSOLE_ROUTING", "structured");
    std::env::set_var("ADMIN_CONSOLE_LOG", "admin_console=debug");

    let config = ConsoleConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.token.as_deref(), Some("secret"));
    assert_eq!(config.routing, ErrorRouting::Structured);
    assert_eq!(config.log_filter, "admin_console=debug");
    assert_eq!(config.validate().unwrap(), "https://chat.example.com");
}

#[test]
#[serial]
fn test_from_env_rejects_unknown_routing() {
    clear_env();
    std::env::set_var("ADMIN_CONSOLE_ROUTING", "fuzzy");

    let result = ConsoleConfig::from_env();
    clear_env();

    assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
}

#[test]
#[serial]
fn test_empty_env_values_count_as_unset() {
    clear_env();
    std::env::set_var("ADMIN_CONSOLE_URL", "");
    std::env::set_var("ADMIN_CONSOLE_TOKEN", "  ");

    let config = ConsoleConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.server_url, None);
    assert_eq!(config.token, None);
}

#[test]
#[serial]
fn test_cli_flags_override_env() {
    clear_env();
    std::env::set_var("ADMIN_CONSOLE_URL", "https://env.example.com");
    std::env::set_var("ADMIN_CONSOLE_TOKEN", "env-token");

    let command = parse_args(
        [
            "admin-console",
            "--url=http://localhost:8065",
            "--structured-errors",
        ]
        .iter()
        .map(|s| s.to_string()),
    )
    .unwrap();
    let CliCommand::RunTui(overrides) = command else {
        panic!("expected RunTui, got {:?}", command);
    };

    let config = ConsoleConfig::from_env().unwrap().with_overrides(&overrides);
    clear_env();

    assert_eq!(config.validate().unwrap(), "http://localhost:8065");
    assert_eq!(config.token.as_deref(), Some("env-token"));
    assert_eq!(config.routing, ErrorRouting::Structured);
}
