//! Vacation ranges and their exclusion from working-day counts.
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

use chrono::{Days, NaiveDate};

/// A user-defined inclusive date interval excluded from working-day counts
///
/// Either end may be absent; only entries with both ends count for
/// calculations. List order is insertion order and only matters for
/// position-addressed add/remove.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Vacation {
    /// First day of the range, inclusive
    pub start: Option<NaiveDate>,
    /// Last day of the range, inclusive
    pub end: Option<NaiveDate>,
}

impl Vacation {
    /// Creates a vacation from its two optional ends
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Vacation { start, end }
    }

    /// Checks whether a date falls inside this range
    ///
    /// Partially filled entries never contain anything, and an inverted
    /// range (end before start) matches no date either.
    pub fn contains(&self, date: NaiveDate) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) => start <= date && date <= end,
            _ => false,
        }
    }
}

/// Decides whether a date falls inside any vacation range
///
/// Malformed entries are silently skipped; they are never an error.
pub fn is_vacation_day(date: NaiveDate, vacations: &[Vacation]) -> bool {
    vacations.iter().any(|vacation| vacation.contains(date))
}

/// Returns a corrected copy of a vacation list
///
/// An entry with a start but a missing end, or an end before its start,
/// comes back with the end snapped to the day after the start. The input
/// list is left untouched; callers that want the correction swap in the
/// returned copy.
pub fn normalize_vacations(vacations: &[Vacation]) -> Vec<Vacation> {
    vacations
        .iter()
        .map(|vacation| {
            let Some(start) = vacation.start else {
                return *vacation;
            };
            match vacation.end {
                Some(end) if end >= start => *vacation,
                _ => Vacation {
                    start: Some(start),
                    end: start.checked_add_days(Days::new(1)).or(Some(start)),
                },
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn inclusive_containment() {
        let vacation = Vacation::new(Some(date(2025, 6, 3)), Some(date(2025, 6, 5)));
        assert!(vacation.contains(date(2025, 6, 3)));
        assert!(vacation.contains(date(2025, 6, 4)));
        assert!(vacation.contains(date(2025, 6, 5)));
        assert!(!vacation.contains(date(2025, 6, 2)));
        assert!(!vacation.contains(date(2025, 6, 6)));
    }

    #[test]
    fn partial_entries_match_nothing() {
        let missing_end = Vacation::new(Some(date(2025, 6, 3)), None);
        let missing_start = Vacation::new(None, Some(date(2025, 6, 3)));
        assert!(!missing_end.contains(date(2025, 6, 3)));
        assert!(!missing_start.contains(date(2025, 6, 3)));
        assert!(!is_vacation_day(
            date(2025, 6, 3),
            &[missing_end, missing_start, Vacation::default()]
        ));
    }

    #[test]
    fn inverted_range_matches_nothing() {
        let inverted = Vacation::new(Some(date(2025, 6, 5)), Some(date(2025, 6, 3)));
        assert!(!inverted.contains(date(2025, 6, 4)));
    }

    #[test]
    fn any_entry_counts() {
        let vacations = [
            Vacation::new(Some(date(2025, 6, 3)), Some(date(2025, 6, 3))),
            Vacation::new(Some(date(2025, 7, 1)), Some(date(2025, 7, 10))),
        ];
        assert!(is_vacation_day(date(2025, 6, 3), &vacations));
        assert!(is_vacation_day(date(2025, 7, 5), &vacations));
        assert!(!is_vacation_day(date(2025, 6, 4), &vacations));
    }

    #[test]
    fn normalize_snaps_missing_end_forward() {
        let input = vec![Vacation::new(Some(date(2025, 6, 3)), None)];
        let corrected = normalize_vacations(&input);
        assert_eq!(corrected[0].end, Some(date(2025, 6, 4)));
        // Input is untouched.
        assert_eq!(input[0].end, None);
    }

    #[test]
    fn normalize_snaps_inverted_end_forward() {
        let input = vec![Vacation::new(Some(date(2025, 6, 10)), Some(date(2025, 6, 1)))];
        let corrected = normalize_vacations(&input);
        assert_eq!(corrected[0].start, Some(date(2025, 6, 10)));
        assert_eq!(corrected[0].end, Some(date(2025, 6, 11)));
    }

    #[test]
    fn normalize_keeps_valid_and_startless_entries() {
        let input = vec![
            Vacation::new(Some(date(2025, 6, 3)), Some(date(2025, 6, 3))),
            Vacation::new(None, Some(date(2025, 6, 3))),
            Vacation::default(),
        ];
        assert_eq!(normalize_vacations(&input), input);
    }
}
