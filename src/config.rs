//! Command-line configuration for the demo host.

use crate::streak::StreakSize;
use std::path::PathBuf;
use thiserror::Error;

pub const USAGE: &str = "\
Profile Badges - terminal profile page

Usage: profile-badges [PROFILE.json] [options]

Options:
  --editable       Start with the tag selector in edit mode
  --size <SIZE>    Streak badge size: sm, md or lg (default md)
  --version, -v    Show version information
  --help, -h       Show this help message";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown option: {0}")]
    UnknownFlag(String),
    #[error("invalid size '{0}', expected sm, md or lg")]
    InvalidSize(String),
    #[error("missing value for {0}")]
    MissingValue(&'static str),
    #[error("unexpected argument: {0}")]
    UnexpectedArgument(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Explicit fixture path. `None` falls back to the default location.
    pub profile_path: Option<PathBuf>,
    pub editable: bool,
    pub size: StreakSize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run(AppConfig),
    Version,
    Help,
}

/// Parse arguments, excluding the program name.
pub fn parse_args<I>(args: I) -> Result<Command, ConfigError>
where
    I: IntoIterator<Item = String>,
{
    let mut config = AppConfig::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-v" => return Ok(Command::Version),
            "--help" | "-h" => return Ok(Command::Help),
            "--editable" => config.editable = true,
            "--size" => {
                let value = args.next().ok_or(ConfigError::MissingValue("--size"))?;
                config.size =
                    StreakSize::parse(&value).ok_or(ConfigError::InvalidSize(value))?;
            }
            flag if flag.starts_with('-') => {
                return Err(ConfigError::UnknownFlag(flag.to_string()));
            }
            path => {
                if config.profile_path.is_some() {
                    return Err(ConfigError::UnexpectedArgument(path.to_string()));
                }
                config.profile_path = Some(PathBuf::from(path));
            }
        }
    }

    Ok(Command::Run(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Command, ConfigError> {
        parse_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_no_args_runs_with_defaults() {
        assert_eq!(parse(&[]), Ok(Command::Run(AppConfig::default())));
    }

    #[test]
    fn test_full_run_config() {
        let cmd = parse(&["me.json", "--editable", "--size", "lg"]).unwrap();
        assert_eq!(
            cmd,
            Command::Run(AppConfig {
                profile_path: Some(PathBuf::from("me.json")),
                editable: true,
                size: StreakSize::Lg,
            })
        );
    }

    #[test]
    fn test_version_and_help() {
        assert_eq!(parse(&["-v"]), Ok(Command::Version));
        assert_eq!(parse(&["--help", "--bogus"]), Ok(Command::Help));
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            parse(&["--bogus"]),
            Err(ConfigError::UnknownFlag("--bogus".to_string()))
        );
        assert_eq!(parse(&["--size"]), Err(ConfigError::MissingValue("--size")));
        assert_eq!(
            parse(&["--size", "xl"]),
            Err(ConfigError::InvalidSize("xl".to_string()))
        );
        assert_eq!(
            parse(&["a.json", "b.json"]),
            Err(ConfigError::UnexpectedArgument("b.json".to_string()))
        );
    }
}
