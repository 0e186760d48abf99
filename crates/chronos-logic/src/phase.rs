//! Life phases — coarse age buckets used to pick a warning message.
//!
//! Classification is numeric only. Turning a phase into a sentence (and in
//! which language) is left to the host.

use serde::{Deserialize, Serialize};

use crate::constants::phase_bounds::{EDUCATION_FROM, PRIME_FROM, RETIREMENT_FROM, WISDOM_FROM};

/// One of five life phases, by whole years of age.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AgePhase {
    /// Under 18.
    Childhood,
    /// 18..=24.
    Education,
    /// 25..=44.
    #[serde(rename = "Prime Years")]
    Prime,
    /// 45..=64.
    #[serde(rename = "Wisdom Years")]
    Wisdom,
    /// 65 and over.
    Retirement,
}

impl AgePhase {
    pub const ALL: [AgePhase; 5] = [
        Self::Childhood,
        Self::Education,
        Self::Prime,
        Self::Wisdom,
        Self::Retirement,
    ];

    /// Classify an age in whole years. Total: negative ages are Childhood,
    /// anything past the last bound is Retirement.
    pub fn classify(age_years: i64) -> Self {
        if age_years < EDUCATION_FROM {
            Self::Childhood
        } else if age_years < PRIME_FROM {
            Self::Education
        } else if age_years < WISDOM_FROM {
            Self::Prime
        } else if age_years < RETIREMENT_FROM {
            Self::Wisdom
        } else {
            Self::Retirement
        }
    }

    /// Stable identifier, also used as the serialized form.
    pub fn name(self) -> &'static str {
        match self {
            Self::Childhood => "Childhood",
            Self::Education => "Education",
            Self::Prime => "Prime Years",
            Self::Wisdom => "Wisdom Years",
            Self::Retirement => "Retirement",
        }
    }

    /// First age (inclusive) of this phase, `None` for the open-ended first one.
    pub fn starts_at(self) -> Option<i64> {
        match self {
            Self::Childhood => None,
            Self::Education => Some(EDUCATION_FROM),
            Self::Prime => Some(PRIME_FROM),
            Self::Wisdom => Some(WISDOM_FROM),
            Self::Retirement => Some(RETIREMENT_FROM),
        }
    }
}

impl std::fmt::Display for AgePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Free-function form of [`AgePhase::classify`].
pub fn classify_age_phase(age_years: i64) -> AgePhase {
    AgePhase::classify(age_years)
}
