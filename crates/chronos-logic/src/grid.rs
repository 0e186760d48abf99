//! Life grid — one cell per week of the horizon.
//!
//! Cells before the current week are lived, the current week is highlighted,
//! and everything after is still ahead. Rows are 52-week grid years, so row
//! `n` is the person's `n`th year of the horizon.

use serde::{Deserialize, Serialize};

use crate::constants::units::WEEKS_PER_YEAR;
use crate::stats::LifeStats;

/// State of a single week on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeekCell {
    Lived,
    Current,
    Remaining,
}

impl WeekCell {
    /// Classify week `index` (0-based) given how many whole weeks have passed.
    pub fn for_index(index: u64, weeks_passed: u64) -> Self {
        use std::cmp::Ordering;
        match index.cmp(&weeks_passed) {
            Ordering::Less => Self::Lived,
            Ordering::Equal => Self::Current,
            Ordering::Greater => Self::Remaining,
        }
    }

    /// Single-character glyph for terminal output.
    pub fn glyph(self) -> char {
        match self {
            Self::Lived => '■',
            Self::Current => '◆',
            Self::Remaining => '□',
        }
    }
}

/// Week grid derived from one stats snapshot.
#[derive(Debug, Clone, Copy)]
pub struct LifeGrid {
    total_weeks: u64,
    weeks_passed: u64,
}

impl LifeGrid {
    pub fn new(stats: &LifeStats) -> Self {
        Self {
            total_weeks: stats.total_weeks(),
            weeks_passed: stats.weeks_passed,
        }
    }

    /// Number of cells.
    pub fn len(&self) -> u64 {
        self.total_weeks
    }

    pub fn is_empty(&self) -> bool {
        self.total_weeks == 0
    }

    /// Index of the highlighted week, `None` once the horizon is exhausted.
    pub fn current_week(&self) -> Option<u64> {
        (self.weeks_passed < self.total_weeks).then_some(self.weeks_passed)
    }

    pub fn cell(&self, index: u64) -> Option<WeekCell> {
        (index < self.total_weeks).then(|| WeekCell::for_index(index, self.weeks_passed))
    }

    pub fn cells(&self) -> impl Iterator<Item = WeekCell> + '_ {
        (0..self.total_weeks).map(move |i| WeekCell::for_index(i, self.weeks_passed))
    }

    /// Cells grouped into 52-week rows. The last row may be short only if
    /// the horizon is not a whole number of grid years.
    pub fn rows(&self) -> Vec<Vec<WeekCell>> {
        let cells: Vec<WeekCell> = self.cells().collect();
        cells
            .chunks(WEEKS_PER_YEAR as usize)
            .map(|row| row.to_vec())
            .collect()
    }

    /// Render the grid as text, one line per grid year.
    pub fn render_ascii(&self) -> String {
        self.rows()
            .iter()
            .map(|row| row.iter().map(|c| c.glyph()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::Profile;
    use crate::stats::compute_life_stats;
    use chrono::{Duration, NaiveDate};

    fn stats_after(weeks: i64, expected_age: u32) -> LifeStats {
        let profile = Profile::new(
            "Grid",
            NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
            expected_age,
        );
        compute_life_stats(&profile, profile.birth_instant() + Duration::weeks(weeks))
    }

    #[test]
    fn test_cell_classification() {
        assert_eq!(WeekCell::for_index(0, 3), WeekCell::Lived);
        assert_eq!(WeekCell::for_index(2, 3), WeekCell::Lived);
        assert_eq!(WeekCell::for_index(3, 3), WeekCell::Current);
        assert_eq!(WeekCell::for_index(4, 3), WeekCell::Remaining);
        assert_eq!(WeekCell::for_index(0, 0), WeekCell::Current);
    }

    #[test]
    fn test_grid_counts() {
        let grid = LifeGrid::new(&stats_after(100, 80));
        assert_eq!(grid.len(), 4160);
        let lived = grid.cells().filter(|c| *c == WeekCell::Lived).count();
        let current = grid.cells().filter(|c| *c == WeekCell::Current).count();
        let remaining = grid.cells().filter(|c| *c == WeekCell::Remaining).count();
        assert_eq!(lived, 100);
        assert_eq!(current, 1);
        assert_eq!(remaining, 4160 - 101);
        assert_eq!(grid.current_week(), Some(100));
    }

    #[test]
    fn test_rows_are_grid_years() {
        let grid = LifeGrid::new(&stats_after(60, 30));
        let rows = grid.rows();
        assert_eq!(rows.len(), 30);
        assert!(rows.iter().all(|r| r.len() == 52));
        assert_eq!(rows[1][8], WeekCell::Current);
        assert_eq!(rows[1][7], WeekCell::Lived);
    }

    #[test]
    fn test_exhausted_grid_has_no_current_week() {
        let grid = LifeGrid::new(&stats_after(52 * 40, 30));
        assert_eq!(grid.current_week(), None);
        assert!(grid.cells().all(|c| c == WeekCell::Lived));
    }

    #[test]
    fn test_cell_out_of_range() {
        let grid = LifeGrid::new(&stats_after(0, 30));
        assert_eq!(grid.cell(0), Some(WeekCell::Current));
        assert_eq!(grid.cell(1559), Some(WeekCell::Remaining));
        assert_eq!(grid.cell(1560), None);
    }

    #[test]
    fn test_render_ascii_shape() {
        let grid = LifeGrid::new(&stats_after(1, 30));
        let text = grid.render_ascii();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 30);
        assert!(lines[0].starts_with("■◆□"));
        assert_eq!(lines[0].chars().count(), 52);
    }

    #[test]
    fn test_empty_grid() {
        let grid = LifeGrid::new(&stats_after(10, 0));
        assert!(grid.is_empty());
        assert_eq!(grid.render_ascii(), "");
    }
}
