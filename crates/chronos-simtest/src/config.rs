//! Harness configuration: command-line flags and the profile to measure.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use chronos_logic::{validate_profile, Profile, ProfileError};
use thiserror::Error;

/// Bundled profile used when `--profile` is not given.
const SAMPLE_PROFILE_JSON: &str = include_str!("../../../data/sample_profile.json");

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed profile JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid profile: {}", join_errors(.0))]
    Invalid(Vec<ProfileError>),
    #[error("{flag} expects a value")]
    MissingValue { flag: &'static str },
    #[error("{flag} expects a whole number, got {value:?}")]
    BadNumber { flag: &'static str, value: String },
}

fn join_errors(errors: &[ProfileError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Parsed command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HarnessArgs {
    pub verbose: bool,
    pub profile_path: Option<PathBuf>,
    pub watch_seconds: u32,
}

impl HarnessArgs {
    /// Parse flags from an argument list (without the program name).
    pub fn parse<I, S>(args: I) -> Result<Self, LoadError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut parsed = Self::default();
        let mut args = args.into_iter().map(Into::into);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--verbose" => parsed.verbose = true,
                "--profile" => {
                    let path = args
                        .next()
                        .ok_or(LoadError::MissingValue { flag: "--profile" })?;
                    parsed.profile_path = Some(PathBuf::from(path));
                }
                "--watch" => {
                    let value = args
                        .next()
                        .ok_or(LoadError::MissingValue { flag: "--watch" })?;
                    parsed.watch_seconds = value.parse().map_err(|_| LoadError::BadNumber {
                        flag: "--watch",
                        value: value.clone(),
                    })?;
                }
                other => log::warn!("ignoring unknown argument {other:?}"),
            }
        }

        Ok(parsed)
    }
}

/// Parse and validate a profile from JSON text.
pub fn parse_profile(json: &str, today: NaiveDate) -> Result<Profile, LoadError> {
    let profile: Profile = serde_json::from_str(json)?;
    let errors = validate_profile(&profile, today);
    if !errors.is_empty() {
        return Err(LoadError::Invalid(errors));
    }
    Ok(profile)
}

/// Load the profile at `path`, or the bundled sample when `path` is `None`.
pub fn load_profile(path: Option<&Path>, today: NaiveDate) -> Result<Profile, LoadError> {
    match path {
        Some(path) => {
            log::info!("loading profile from {}", path.display());
            let json = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            parse_profile(&json, today)
        }
        None => {
            log::info!("no --profile given, using bundled sample");
            parse_profile(SAMPLE_PROFILE_JSON, today)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn parses_all_flags() {
        let args = HarnessArgs::parse(["--verbose", "--profile", "me.json", "--watch", "5"]).unwrap();
        assert_eq!(
            args,
            HarnessArgs {
                verbose: true,
                profile_path: Some(PathBuf::from("me.json")),
                watch_seconds: 5,
            }
        );
    }

    #[test]
    fn defaults_without_flags() {
        let args = HarnessArgs::parse(Vec::<String>::new()).unwrap();
        assert_eq!(args, HarnessArgs::default());
    }

    #[test]
    fn missing_and_bad_values() {
        assert!(matches!(
            HarnessArgs::parse(["--profile"]),
            Err(LoadError::MissingValue { flag: "--profile" })
        ));
        assert!(matches!(
            HarnessArgs::parse(["--watch", "soon"]),
            Err(LoadError::BadNumber { flag: "--watch", .. })
        ));
    }

    #[test]
    fn bundled_sample_is_valid() {
        let profile = load_profile(None, today()).unwrap();
        assert_eq!(profile.name, "Ada Lovelace");
        assert_eq!(profile.expected_age, 80);
    }

    #[test]
    fn invalid_profile_lists_problems() {
        let json = r#"{"name":"","birthday":"1990-01-01","expectedAge":150}"#;
        let err = parse_profile(json, today()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid profile: name must not be empty; expected age 150 is above the maximum of 120"
        );
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let err = parse_profile(r#"{"name":"Ada","birthday":"not a date"}"#, today()).unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_profile(Some(Path::new("/nonexistent/profile.json")), today()).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
