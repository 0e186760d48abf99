//! Life statistics — elapsed and remaining time for a profile at an instant.
//!
//! The horizon is `expected_age × 52` weeks. Elapsed time is measured in
//! fixed 604 800-second weeks from midnight UTC on the birthday, floored,
//! and clamped into the horizon. Every remaining quantity is derived from
//! the remaining *whole* weeks with integer arithmetic, so the countdown
//! fields always agree with each other exactly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::units::{
    DAYS_PER_WEEK, HOURS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_WEEK, WEEKS_PER_YEAR,
};
use crate::constants::{SLEEP_FRACTION, WORK_FRACTION};
use crate::profile::Profile;

/// Snapshot of a life at one instant. Recomputed wholesale, never patched.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LifeStats {
    pub weeks_passed: u64,
    pub weeks_remaining: u64,
    /// Share of the horizon already lived, in [0, 100].
    pub percentage_passed: f64,
    pub days_remaining: u64,
    pub hours_remaining: u64,
    pub seconds_remaining: u64,
    pub sleep_remaining_years: f64,
    pub work_remaining_years: f64,
}

impl LifeStats {
    /// Size of the week horizon this snapshot was computed against.
    pub fn total_weeks(&self) -> u64 {
        self.weeks_passed + self.weeks_remaining
    }

    /// Remaining weeks expressed as 52-week years.
    pub fn remaining_years(&self) -> f64 {
        self.weeks_remaining as f64 / WEEKS_PER_YEAR as f64
    }

    /// Whether the horizon has been reached.
    pub fn is_exhausted(&self) -> bool {
        self.weeks_remaining == 0
    }
}

/// Total weeks in the horizon for an expected age.
pub fn horizon_weeks(expected_age: u32) -> u64 {
    expected_age as u64 * WEEKS_PER_YEAR
}

/// Whole weeks between `born` and `now`, zero if `now` precedes `born`.
pub fn whole_weeks_between(born: DateTime<Utc>, now: DateTime<Utc>) -> u64 {
    let elapsed = now.signed_duration_since(born).num_seconds();
    if elapsed <= 0 {
        return 0;
    }
    elapsed as u64 / SECONDS_PER_WEEK
}

/// Compute the full statistics snapshot for `profile` as of `now`.
///
/// Never fails: a birthday after `now` counts as zero weeks lived, a
/// horizon already passed leaves zero remaining, and a zero-length horizon
/// reports 100% passed.
pub fn compute_life_stats(profile: &Profile, now: DateTime<Utc>) -> LifeStats {
    let total_weeks = horizon_weeks(profile.expected_age);

    let weeks_passed = whole_weeks_between(profile.birth_instant(), now).min(total_weeks);
    let weeks_remaining = total_weeks.saturating_sub(weeks_passed);

    let percentage_passed = if total_weeks == 0 {
        100.0
    } else {
        100.0 * weeks_passed as f64 / total_weeks as f64
    };

    let days_remaining = weeks_remaining * DAYS_PER_WEEK;
    let hours_remaining = days_remaining * HOURS_PER_DAY;
    let seconds_remaining = hours_remaining * SECONDS_PER_HOUR;

    let remaining_years = weeks_remaining as f64 / WEEKS_PER_YEAR as f64;

    LifeStats {
        weeks_passed,
        weeks_remaining,
        percentage_passed,
        days_remaining,
        hours_remaining,
        seconds_remaining,
        sleep_remaining_years: remaining_years * SLEEP_FRACTION,
        work_remaining_years: remaining_years * WORK_FRACTION,
    }
}
