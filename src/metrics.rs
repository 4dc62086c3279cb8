//! Countdown metric calculation over a date range.
//!
//! MIT License
//!
//! Copyright (c) 2026 66f94eae
//!
//! Permission is hereby granted, free of charge, to any person obtaining a copy
//! of this software and associated documentation files (the "Software"), to deal
//! in the Software without restriction, including without limitation the rights
//! to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
//! copies of the Software, and to permit persons to whom the Software is
//! furnished to do so, subject to the following conditions:
//!
//! The above copyright notice and this permission notice shall be included in all
//! copies or substantial portions of the Software.
//!
//! THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
//! IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
//! FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
//! AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
//! LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
//! OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
//! SOFTWARE.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::holiday::{self, HolidaySet};
use crate::vacation::{self, Vacation};

/// Hours counted per working day
const WORKING_HOURS_PER_DAY: i64 = 8;
/// Hours per calendar day
const HOURS_PER_DAY: i64 = 24;
/// Seconds per hour
const SECONDS_PER_HOUR: i64 = 3600;
/// Calendar days per week
const DAYS_PER_WEEK: i64 = 7;
/// Working days per week
const WORKING_DAYS_PER_WEEK: i64 = 5;

/// Full set of derived countdown metrics for one (start, end, vacations)
/// input
///
/// Always a pure function of its inputs; it carries no lifecycle of its own
/// and is recomputed whenever start, end, or the vacation list change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSnapshot {
    /// Days in range that are working days and not vacation days
    pub working_days: i64,
    /// Inclusive day count of the range
    pub total_days: i64,
    /// `working_days` * 8
    pub working_hours: i64,
    /// `total_days` * 24
    pub total_hours: i64,
    /// `total_hours` * 3600
    pub total_seconds: i64,
    /// `total_days` / 7, floored
    pub weeks_left: i64,
    /// `working_days` / 5, floored
    pub working_weeks: i64,
}

/// Computes the countdown metrics for a date range
///
/// # Arguments
/// * `start` / `end` - Inclusive range bounds; either may be absent
/// * `vacations` - Vacation list; malformed entries are skipped
///
/// # Returns
/// * All-zero snapshot when start or end is absent or the range is
///   inverted (end before start)
/// * Fully derived snapshot otherwise
///
/// One holiday set is precomputed per distinct year the range touches, so
/// classifying each day is a set lookup rather than a rebuild.
pub fn compute_metrics(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    vacations: &[Vacation],
) -> MetricsSnapshot {
    let (Some(start), Some(end)) = (start, end) else {
        return MetricsSnapshot::default();
    };
    if end < start {
        return MetricsSnapshot::default();
    }

    let total_days = (end - start).num_days() + 1;

    let holidays_by_year: HashMap<i32, HolidaySet> = (start.year()..=end.year())
        .map(|year| (year, holiday::holidays_for_year(year)))
        .collect();

    let working_days = start
        .iter_days()
        .take_while(|day| *day <= end)
        .filter(|day| {
            holidays_by_year
                .get(&day.year())
                .is_some_and(|set| holiday::is_working_day(*day, set))
        })
        .filter(|day| !vacation::is_vacation_day(*day, vacations))
        .count() as i64;

    let total_hours = total_days * HOURS_PER_DAY;
    MetricsSnapshot {
        working_days,
        total_days,
        working_hours: working_days * WORKING_HOURS_PER_DAY,
        total_hours,
        total_seconds: total_hours * SECONDS_PER_HOUR,
        weeks_left: total_days / DAYS_PER_WEEK,
        working_weeks: working_days / WORKING_DAYS_PER_WEEK,
    }
}

/// Selectable headline metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Metric {
    WorkingDays,
    TotalDays,
    WorkingHours,
    TotalHours,
    TotalSeconds,
    WeeksLeft,
    WorkingWeeks,
}

impl Metric {
    /// All metrics in display order
    pub const ALL: [Metric; 7] = [
        Metric::WorkingDays,
        Metric::TotalDays,
        Metric::WorkingHours,
        Metric::TotalHours,
        Metric::TotalSeconds,
        Metric::WeeksLeft,
        Metric::WorkingWeeks,
    ];

    /// Returns the display label for this metric
    pub fn label(self) -> &'static str {
        match self {
            Metric::WorkingDays => "Working Days",
            Metric::TotalDays => "Total Days",
            Metric::WorkingHours => "Working Hours",
            Metric::TotalHours => "Total Hours",
            Metric::TotalSeconds => "Total Seconds",
            Metric::WeeksLeft => "Weeks",
            Metric::WorkingWeeks => "Working Weeks",
        }
    }

    /// Extracts this metric's value from a snapshot
    pub fn value(self, snapshot: &MetricsSnapshot) -> i64 {
        match self {
            Metric::WorkingDays => snapshot.working_days,
            Metric::TotalDays => snapshot.total_days,
            Metric::WorkingHours => snapshot.working_hours,
            Metric::TotalHours => snapshot.total_hours,
            Metric::TotalSeconds => snapshot.total_seconds,
            Metric::WeeksLeft => snapshot.weeks_left,
            Metric::WorkingWeeks => snapshot.working_weeks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    #[test]
    fn absent_bounds_yield_zero() {
        assert_eq!(
            compute_metrics(None, date(2025, 6, 10), &[]),
            MetricsSnapshot::default()
        );
        assert_eq!(
            compute_metrics(date(2025, 6, 10), None, &[]),
            MetricsSnapshot::default()
        );
        assert_eq!(compute_metrics(None, None, &[]), MetricsSnapshot::default());
    }

    #[test]
    fn inverted_range_yields_zero() {
        let snapshot = compute_metrics(date(2025, 6, 10), date(2025, 6, 1), &[]);
        assert_eq!(snapshot, MetricsSnapshot::default());
    }

    #[test]
    fn single_working_day() {
        // June 10, 2025 is a Tuesday.
        let snapshot = compute_metrics(date(2025, 6, 10), date(2025, 6, 10), &[]);
        assert_eq!(snapshot.total_days, 1);
        assert_eq!(snapshot.working_days, 1);
        assert_eq!(snapshot.working_hours, 8);
        assert_eq!(snapshot.weeks_left, 0);
        assert_eq!(snapshot.working_weeks, 0);
    }

    #[test]
    fn single_holiday_day() {
        // Jan 1, 2025 is a Wednesday and New Year's Day.
        let snapshot = compute_metrics(date(2025, 1, 1), date(2025, 1, 1), &[]);
        assert_eq!(snapshot.total_days, 1);
        assert_eq!(snapshot.working_days, 0);
    }

    #[test]
    fn full_week_without_exclusions() {
        // Mon Jun 2 through Sun Jun 8, 2025: no holidays inside.
        let snapshot = compute_metrics(date(2025, 6, 2), date(2025, 6, 8), &[]);
        assert_eq!(snapshot.total_days, 7);
        assert_eq!(snapshot.working_days, 5);
        assert_eq!(snapshot.working_hours, 40);
        assert_eq!(snapshot.total_hours, 168);
        assert_eq!(snapshot.total_seconds, 604_800);
        assert_eq!(snapshot.weeks_left, 1);
        assert_eq!(snapshot.working_weeks, 1);
    }

    #[test]
    fn vacation_day_is_excluded() {
        let vacation = Vacation::new(date(2025, 6, 3), date(2025, 6, 3));
        let snapshot = compute_metrics(date(2025, 6, 2), date(2025, 6, 8), &[vacation]);
        assert_eq!(snapshot.working_days, 4);
        assert_eq!(snapshot.working_hours, 32);
        assert_eq!(snapshot.total_days, 7);
    }

    #[test]
    fn malformed_vacations_are_skipped() {
        let vacations = [
            Vacation::new(date(2025, 6, 3), None),
            Vacation::new(None, date(2025, 6, 4)),
        ];
        let snapshot = compute_metrics(date(2025, 6, 2), date(2025, 6, 8), &vacations);
        assert_eq!(snapshot.working_days, 5);
    }

    #[test]
    fn multi_year_range_uses_each_years_holidays() {
        // Wed Dec 24, 2025 through Fri Jan 2, 2026. Ten calendar days, of
        // which Dec 25 (Thu, Christmas) and Jan 1 (Thu, New Year's Day) are
        // holidays and Dec 27/28 are a weekend: Dec 24, 26, 29, 30, 31 and
        // Jan 2 remain.
        let snapshot = compute_metrics(date(2025, 12, 24), date(2026, 1, 2), &[]);
        assert_eq!(snapshot.total_days, 10);
        assert_eq!(snapshot.working_days, 6);
    }

    #[test]
    fn idempotent_for_identical_inputs() {
        let vacation = Vacation::new(date(2025, 6, 3), date(2025, 6, 5));
        let first = compute_metrics(date(2025, 6, 1), date(2025, 8, 31), &[vacation]);
        let second = compute_metrics(date(2025, 6, 1), date(2025, 8, 31), &[vacation]);
        assert_eq!(first, second);
    }

    #[test]
    fn metric_selection_reads_the_right_field() {
        let snapshot = compute_metrics(date(2025, 6, 2), date(2025, 6, 8), &[]);
        assert_eq!(Metric::WorkingDays.value(&snapshot), 5);
        assert_eq!(Metric::TotalSeconds.value(&snapshot), 604_800);
        assert_eq!(Metric::WeeksLeft.label(), "Weeks");
    }
}
