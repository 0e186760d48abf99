//! Fixed-cadence snapshot stream.
//!
//! Hosts refresh the countdown once per second. `Ticker` models that cadence
//! without owning a clock: it starts from an injected instant and advances by
//! a fixed period, recomputing a fresh [`LifeStats`] at every step.

use chrono::{DateTime, Duration, Utc};

use crate::profile::Profile;
use crate::stats::{compute_life_stats, LifeStats};

/// Default refresh period, in seconds.
pub const DEFAULT_PERIOD_SECS: i64 = 1;

/// Iterator of `(instant, snapshot)` pairs. Use `take` to bound it.
///
/// Only ends once the last representable instant has been yielded.
#[derive(Debug, Clone)]
pub struct Ticker<'a> {
    profile: &'a Profile,
    next: Option<DateTime<Utc>>,
    period: Duration,
}

impl<'a> Ticker<'a> {
    /// Ticker starting at `start` and stepping by `period`.
    ///
    /// A non-positive period would never advance, so it falls back to
    /// [`DEFAULT_PERIOD_SECS`].
    pub fn new(profile: &'a Profile, start: DateTime<Utc>, period: Duration) -> Self {
        let period = if period > Duration::zero() {
            period
        } else {
            Duration::seconds(DEFAULT_PERIOD_SECS)
        };
        Self {
            profile,
            next: Some(start),
            period,
        }
    }

    pub fn every_second(profile: &'a Profile, start: DateTime<Utc>) -> Self {
        Self::new(profile, start, Duration::seconds(DEFAULT_PERIOD_SECS))
    }

    pub fn period(&self) -> Duration {
        self.period
    }
}

impl Iterator for Ticker<'_> {
    type Item = (DateTime<Utc>, LifeStats);

    fn next(&mut self) -> Option<Self::Item> {
        let at = self.next?;
        self.next = at.checked_add_signed(self.period);
        Some((at, compute_life_stats(self.profile, at)))
    }
}
