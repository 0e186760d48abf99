//! Engine constants — time units, horizon shape, and profile bounds.
//!
//! Everything here is calendar-naive on purpose: a "year" on the grid is
//! exactly 52 weeks and a week is exactly 7 × 24 × 3600 seconds.

pub mod units {
    pub const WEEKS_PER_YEAR: u64 = 52;
    pub const DAYS_PER_WEEK: u64 = 7;
    pub const HOURS_PER_DAY: u64 = 24;
    pub const SECONDS_PER_HOUR: u64 = 3600;
    pub const SECONDS_PER_DAY: u64 = HOURS_PER_DAY * SECONDS_PER_HOUR;
    pub const SECONDS_PER_WEEK: u64 = DAYS_PER_WEEK * SECONDS_PER_DAY;
}

pub mod profile_bounds {
    /// Shortest horizon a user may pick.
    pub const MIN_EXPECTED_AGE: u32 = 30;
    /// Longest horizon a user may pick.
    pub const MAX_EXPECTED_AGE: u32 = 120;
    /// Horizon offered when no profile exists yet.
    pub const DEFAULT_EXPECTED_AGE: u32 = 80;
}

pub mod phase_bounds {
    //! Inclusive lower bounds (in whole years) of each life phase.

    pub const EDUCATION_FROM: i64 = 18;
    pub const PRIME_FROM: i64 = 25;
    pub const WISDOM_FROM: i64 = 45;
    pub const RETIREMENT_FROM: i64 = 65;
}

/// Share of remaining years assumed spent asleep.
pub const SLEEP_FRACTION: f64 = 1.0 / 3.0;

/// Share of remaining years assumed spent in paid work.
///
/// Fixed at one third of *all* remaining years, applied uniformly whatever
/// the current age. Not derived from retirement age or working hours.
pub const WORK_FRACTION: f64 = 1.0 / 3.0;

#[cfg(test)]
mod tests {
    use super::units::*;

    #[test]
    fn week_is_calendar_naive() {
        assert_eq!(SECONDS_PER_WEEK, 604_800);
        assert_eq!(SECONDS_PER_DAY, 86_400);
    }

    #[test]
    fn fractions_leave_free_time() {
        assert!(super::SLEEP_FRACTION + super::WORK_FRACTION < 1.0);
    }
}
