//! User profile — the single record every computation reads from.
//!
//! The host collects name, birthday and expected age from a setup form,
//! validates them here, and then hands the profile to the engine read-only.
//! The serialized shape matches the stored record of the browser app:
//!
//! ```
//! use chronos_logic::profile::{validate_profile, Profile};
//! use chrono::NaiveDate;
//!
//! let profile: Profile = serde_json::from_str(
//!     r#"{"name":"Ada","birthday":"1990-06-15","expectedAge":80}"#,
//! ).unwrap();
//! let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! assert!(validate_profile(&profile, today).is_empty());
//! ```

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::profile_bounds::{
    DEFAULT_EXPECTED_AGE, MAX_EXPECTED_AGE, MIN_EXPECTED_AGE,
};

/// Name, birthday and horizon of the person whose life is being measured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Display name. Only used for presentation.
    pub name: String,
    /// Calendar date of birth.
    pub birthday: NaiveDate,
    /// Assumed lifespan in whole years. Records saved without one load
    /// with [`DEFAULT_EXPECTED_AGE`].
    #[serde(default = "default_expected_age")]
    pub expected_age: u32,
}

fn default_expected_age() -> u32 {
    DEFAULT_EXPECTED_AGE
}

impl Profile {
    pub fn new(name: impl Into<String>, birthday: NaiveDate, expected_age: u32) -> Self {
        Self {
            name: name.into(),
            birthday,
            expected_age,
        }
    }

    /// The instant of birth: midnight UTC on the birthday.
    pub fn birth_instant(&self) -> DateTime<Utc> {
        self.birthday.and_time(NaiveTime::MIN).and_utc()
    }
}

/// Profile validation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    #[error("name must not be empty")]
    EmptyName,
    #[error("expected age {0} is below the minimum of {min}", min = MIN_EXPECTED_AGE)]
    ExpectedAgeTooLow(u32),
    #[error("expected age {0} is above the maximum of {max}", max = MAX_EXPECTED_AGE)]
    ExpectedAgeTooHigh(u32),
    #[error("birthday {0} is in the future")]
    BirthdayInFuture(NaiveDate),
}

/// Validate a profile against `today`, returning all errors found.
pub fn validate_profile(profile: &Profile, today: NaiveDate) -> Vec<ProfileError> {
    let mut errors = Vec::new();

    if profile.name.trim().is_empty() {
        errors.push(ProfileError::EmptyName);
    }
    if profile.expected_age < MIN_EXPECTED_AGE {
        errors.push(ProfileError::ExpectedAgeTooLow(profile.expected_age));
    }
    if profile.expected_age > MAX_EXPECTED_AGE {
        errors.push(ProfileError::ExpectedAgeTooHigh(profile.expected_age));
    }
    if profile.birthday > today {
        errors.push(ProfileError::BirthdayInFuture(profile.birthday));
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn today() -> NaiveDate {
        date(2024, 3, 1)
    }

    #[test]
    fn valid_profile_has_no_errors() {
        let profile = Profile::new("Ada", date(1990, 6, 15), 80);
        assert!(validate_profile(&profile, today()).is_empty());
    }

    #[test]
    fn blank_name_rejected() {
        let profile = Profile::new("   ", date(1990, 6, 15), 80);
        assert_eq!(
            validate_profile(&profile, today()),
            vec![ProfileError::EmptyName]
        );
    }

    #[test]
    fn expected_age_bounds_are_inclusive() {
        for age in [30, 120] {
            let profile = Profile::new("Ada", date(1990, 6, 15), age);
            assert!(validate_profile(&profile, today()).is_empty(), "age {age}");
        }
        let low = Profile::new("Ada", date(1990, 6, 15), 29);
        assert!(validate_profile(&low, today()).contains(&ProfileError::ExpectedAgeTooLow(29)));
        let high = Profile::new("Ada", date(1990, 6, 15), 121);
        assert!(validate_profile(&high, today()).contains(&ProfileError::ExpectedAgeTooHigh(121)));
    }

    #[test]
    fn born_today_is_allowed() {
        let profile = Profile::new("Newborn", today(), 80);
        assert!(validate_profile(&profile, today()).is_empty());
    }

    #[test]
    fn future_birthday_rejected() {
        let profile = Profile::new("Ada", date(2030, 1, 1), 80);
        assert_eq!(
            validate_profile(&profile, today()),
            vec![ProfileError::BirthdayInFuture(date(2030, 1, 1))]
        );
    }

    #[test]
    fn collects_every_error() {
        let profile = Profile::new("", date(2030, 1, 1), 10);
        assert_eq!(validate_profile(&profile, today()).len(), 3);
    }

    #[test]
    fn error_messages_are_readable() {
        assert_eq!(
            ProfileError::ExpectedAgeTooLow(12).to_string(),
            "expected age 12 is below the minimum of 30"
        );
        assert_eq!(
            ProfileError::BirthdayInFuture(date(2030, 1, 1)).to_string(),
            "birthday 2030-01-01 is in the future"
        );
    }

    #[test]
    fn birth_instant_is_utc_midnight() {
        let profile = Profile::new("Ada", date(1990, 6, 15), 80);
        let born = profile.birth_instant();
        assert_eq!(born.date_naive(), date(1990, 6, 15));
        assert_eq!(born.hour(), 0);
        assert_eq!(born.minute(), 0);
        assert_eq!(born.second(), 0);
    }

    #[test]
    fn serde_uses_camel_case_and_iso_dates() {
        let profile = Profile::new("Ada", date(1990, 6, 15), 80);
        let json = serde_json::to_string(&profile).unwrap();
        assert_eq!(
            json,
            r#"{"name":"Ada","birthday":"1990-06-15","expectedAge":80}"#
        );
        let back: Profile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, profile);
    }

    #[test]
    fn missing_expected_age_loads_default() {
        let profile: Profile =
            serde_json::from_str(r#"{"name":"Ada","birthday":"1990-06-15"}"#).unwrap();
        assert_eq!(profile.expected_age, DEFAULT_EXPECTED_AGE);
        assert_eq!(profile.expected_age, 80);
        assert!(validate_profile(&profile, today()).is_empty());
    }
}
