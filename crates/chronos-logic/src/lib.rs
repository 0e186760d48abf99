//! Pure life-statistics logic for Chronos Mirror.
//!
//! This crate turns a birthday and an expected lifespan into the numbers a
//! "life in weeks" display needs. Nothing here reads a clock, touches
//! storage, or renders anything: the current instant is always passed in,
//! so every function is deterministic and unit-testable.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`age`] | Whole-year age from a birthday, phase of a profile |
//! | [`constants`] | Time units, horizon shape, profile bounds, sleep/work fractions |
//! | [`grid`] | One-cell-per-week grid: lived, current, remaining |
//! | [`phase`] | Five life phases classified from age in years |
//! | [`profile`] | Profile record and its validation |
//! | [`stats`] | Weeks passed/remaining, countdown units, percentage lived |
//! | [`summary`] | Pre-formatted poster and share figures |
//! | [`ticker`] | Fixed-cadence snapshot stream for live countdowns |
//!
//! ```
//! use chrono::NaiveDate;
//! use chronos_logic::{classify_age_phase, compute_life_stats, AgePhase, Profile};
//!
//! let profile = Profile::new("Ada", NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(), 80);
//! let stats = compute_life_stats(&profile, profile.birth_instant());
//! assert_eq!(stats.weeks_remaining, 4160);
//! assert_eq!(classify_age_phase(30), AgePhase::Prime);
//! ```

pub mod age;
pub mod constants;
pub mod grid;
pub mod phase;
pub mod profile;
pub mod stats;
pub mod summary;
pub mod ticker;

pub use phase::{classify_age_phase, AgePhase};
pub use profile::{validate_profile, Profile, ProfileError};
pub use stats::{compute_life_stats, LifeStats};
