//! Share summary — the figures a poster or share message prints.
//!
//! Drawing the poster is the host's job. This module only settles the
//! numbers and identifiers that go on it, so every host formats them alike.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::age::phase_for;
use crate::phase::AgePhase;
use crate::profile::Profile;
use crate::stats::LifeStats;

/// Prefix of the exported poster file name.
const FILE_STEM_PREFIX: &str = "memento-mori-";

/// Stem used when the name yields nothing printable.
const FALLBACK_STEM: &str = "life";

/// Pre-formatted poster figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareSummary {
    /// Name in upper case, as printed across the poster.
    pub display_name: String,
    /// Percentage lived with four decimals, e.g. `"50.1683"`.
    pub percentage_precise: String,
    /// Percentage lived with two decimals, for share text.
    pub percentage_short: String,
    /// Remaining weeks with thousands separators, e.g. `"2,073"`.
    pub weeks_remaining: String,
    /// Phase used to pick the warning line.
    ///
    /// Classified from completed years, not from the difference of calendar
    /// year numbers. Until this year's birthday the two differ by one, so a
    /// poster built from [`calendar_year_difference`] may show the next
    /// phase early.
    ///
    /// [`calendar_year_difference`]: crate::age::calendar_year_difference
    pub phase: AgePhase,
    /// File name without extension.
    pub file_stem: String,
}

impl ShareSummary {
    pub fn new(profile: &Profile, stats: &LifeStats, today: NaiveDate) -> Self {
        Self {
            display_name: profile.name.to_uppercase(),
            percentage_precise: format!("{:.4}", stats.percentage_passed),
            percentage_short: format!("{:.2}", stats.percentage_passed),
            weeks_remaining: group_thousands(stats.weeks_remaining),
            phase: phase_for(profile, today),
            file_stem: file_stem(&profile.name),
        }
    }
}

/// Format an integer with `,` between groups of three digits.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `memento-mori-<slug>`: lower-cased name with each whitespace run as `-`.
pub fn file_stem(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut in_space = false;
    for ch in name.chars() {
        if ch.is_whitespace() {
            if !in_space {
                slug.push('-');
            }
            in_space = true;
        } else {
            slug.extend(ch.to_lowercase());
            in_space = false;
        }
    }
    if slug.is_empty() {
        slug.push_str(FALLBACK_STEM);
    }
    format!("{FILE_STEM_PREFIX}{slug}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::compute_life_stats;
    use chrono::{Duration, NaiveDate};

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(4160), "4,160");
        assert_eq!(group_thousands(2_515_968_000), "2,515,968,000");
    }

    #[test]
    fn test_file_stem() {
        assert_eq!(file_stem("Ada Lovelace"), "memento-mori-ada-lovelace");
        assert_eq!(file_stem("Ada \t  Byron"), "memento-mori-ada-byron");
        assert_eq!(file_stem(""), "memento-mori-life");
        assert_eq!(file_stem(" Ada"), "memento-mori--ada");
    }

    #[test]
    fn test_summary_fields() {
        let birthday = NaiveDate::from_ymd_opt(1984, 5, 5).unwrap();
        let profile = Profile::new("Ada Lovelace", birthday, 80);
        let stats = compute_life_stats(&profile, profile.birth_instant() + Duration::weeks(2080));
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();

        let summary = ShareSummary::new(&profile, &stats, today);
        assert_eq!(summary.display_name, "ADA LOVELACE");
        assert_eq!(summary.percentage_precise, "50.0000");
        assert_eq!(summary.percentage_short, "50.00");
        assert_eq!(summary.weeks_remaining, "2,080");
        assert_eq!(summary.phase, AgePhase::Prime);
        assert_eq!(summary.file_stem, "memento-mori-ada-lovelace");
    }

    #[test]
    fn test_phase_waits_for_birthday() {
        // Turns 45 on Dec 31; calendar years already say 45 in June.
        let birthday = NaiveDate::from_ymd_opt(1979, 12, 31).unwrap();
        let profile = Profile::new("Ada", birthday, 80);
        let stats = compute_life_stats(&profile, profile.birth_instant());
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();

        assert_eq!(crate::age::calendar_year_difference(birthday, today), 45);
        let summary = ShareSummary::new(&profile, &stats, today);
        assert_eq!(summary.phase, AgePhase::Prime);

        let after = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        assert_eq!(ShareSummary::new(&profile, &stats, after).phase, AgePhase::Wisdom);
    }
}
