//! Command-line argument parsing.

use crate::error::ConfigError;

/// Settings given on the command line. Each one overrides its environment variable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    /// `--url <URL>`
    pub url: Option<String>,
    /// `--token <TOKEN>`
    pub token: Option<String>,
    /// `--structured-errors`
    pub structured_errors: bool,
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the TUI (default)
    RunTui(CliOverrides),
}

/// Parse command-line arguments, skipping the program name.
///
/// `--version` and `--help` win as soon as they are seen.
///
/// ```
/// use admin_console::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["admin-console".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), Ok(CliCommand::Version));
/// ```
pub fn parse_args<I>(args: I) -> Result<CliCommand, ConfigError>
where
    I: Iterator<Item = String>,
{
    let mut overrides = CliOverrides::default();
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--structured-errors" => overrides.structured_errors = true,
            "--url" => {
                let value = args
                    .next()
                    .ok_or_else(|| ConfigError::MissingArgumentValue(arg.clone()))?;
                overrides.url = Some(value);
            }
            "--token" => {
                let value = args
                    .next()
                    .ok_or_else(|| ConfigError::MissingArgumentValue(arg.clone()))?;
                overrides.token = Some(value);
            }
            _ => {
                if let Some(value) = arg.strip_prefix("--url=") {
                    overrides.url = Some(value.to_string());
                } else if let Some(value) = arg.strip_prefix("--token=") {
                    overrides.token = Some(value.to_string());
                } else {
                    return Err(ConfigError::UnknownArgument(arg.clone()));
                }
            }
        }
    }

    Ok(CliCommand::RunTui(overrides))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliCommand, ConfigError> {
        let mut all = vec!["admin-console".to_string()];
        all.extend(args.iter().map(|s| s.to_string()));
        parse_args(all.into_iter())
    }

    #[test]
    fn test_parse_version_flag() {
        assert_eq!(parse(&["--version"]), Ok(CliCommand::Version));
        assert_eq!(parse(&["-V"]), Ok(CliCommand::Version));
    }

    #[test]
    fn test_parse_help_flag() {
        assert_eq!(parse(&["-h"]), Ok(CliCommand::Help));
    }

    #[test]
    fn test_parse_no_args() {
        assert_eq!(parse(&[]), Ok(CliCommand::RunTui(CliOverrides::default())));
    }

    #[test]
    fn test_parse_overrides() {
        let command = parse(&[
            "--url",
            "https://chat.example.com",
            "--token=abc",
            "--structured-errors",
        ]);
        assert_eq!(
            command,
            Ok(CliCommand::RunTui(CliOverrides {
                url: Some("https://chat.example.com".to_string()),
                token: Some("abc".to_string()),
                structured_errors: true,
            }))
        );
    }

    #[test]
    fn test_parse_missing_value() {
        assert_eq!(
            parse(&["--url"]),
            Err(ConfigError::MissingArgumentValue("--url".to_string()))
        );
    }

    #[test]
    fn test_parse_unknown_flag() {
        assert_eq!(
            parse(&["--sync"]),
            Err(ConfigError::UnknownArgument("--sync".to_string()))
        );
    }
}
