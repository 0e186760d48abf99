//! Age in whole years, as fed to the phase classifier.

use chrono::{Datelike, NaiveDate};

use crate::phase::AgePhase;
use crate::profile::Profile;

/// Whole years completed between `birthday` and `today`.
///
/// Birthday-aware: the count only increments once the month/day of the
/// birthday has been reached. A Feb 29 birthday ticks over on Mar 1 in
/// non-leap years. Negative when `birthday` is after `today`, truncated
/// toward zero.
pub fn completed_years(birthday: NaiveDate, today: NaiveDate) -> i64 {
    if birthday > today {
        return -completed_years(today, birthday);
    }
    let years = (today.year() - birthday.year()) as i64;
    let reached = (today.month(), today.day()) >= (birthday.month(), birthday.day());
    if reached {
        years
    } else {
        years - 1
    }
}

/// Difference of calendar year numbers, ignoring month and day.
///
/// Cruder than [`completed_years`]; overstates age by one until the
/// birthday in the current year.
pub fn calendar_year_difference(birthday: NaiveDate, today: NaiveDate) -> i64 {
    (today.year() - birthday.year()) as i64
}

/// Life phase of `profile` on `today`.
pub fn phase_for(profile: &Profile, today: NaiveDate) -> AgePhase {
    AgePhase::classify(completed_years(profile.birthday, today))
}
