//! Countdown state and explicit recompute-on-update.
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

use chrono::NaiveDate;

use crate::error::{Error, Result};
use crate::metrics::{self, MetricsSnapshot};
use crate::vacation::{self, Vacation};

/// The (start, end, vacations) triple driving all metric computation
///
/// Single-writer state: every mutator returns the freshly recomputed
/// [`MetricsSnapshot`] so callers never read a stale value. There is no
/// hidden recompute trigger anywhere else.
#[derive(Debug, Clone, Default)]
pub struct Countdown {
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    vacations: Vec<Vacation>,
}

impl Countdown {
    /// Creates an empty countdown (no dates, no vacations)
    pub fn new() -> Self {
        Countdown::default()
    }

    /// Creates a countdown from restored or ad-hoc parts
    pub fn with_parts(
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        vacations: Vec<Vacation>,
    ) -> Self {
        Countdown {
            start,
            end,
            vacations,
        }
    }

    /// Returns the start date
    pub fn start(&self) -> Option<NaiveDate> {
        self.start
    }

    /// Returns the end date
    pub fn end(&self) -> Option<NaiveDate> {
        self.end
    }

    /// Returns the vacation list in insertion order
    pub fn vacations(&self) -> &[Vacation] {
        &self.vacations
    }

    /// Sets the start date and returns the recomputed snapshot
    pub fn set_start(&mut self, date: Option<NaiveDate>) -> MetricsSnapshot {
        self.start = date;
        self.metrics()
    }

    /// Sets the end date and returns the recomputed snapshot
    pub fn set_end(&mut self, date: Option<NaiveDate>) -> MetricsSnapshot {
        self.end = date;
        self.metrics()
    }

    /// Appends a vacation and returns the recomputed snapshot
    ///
    /// The whole list is run through the pure end-date correction, so an
    /// entry arriving with a missing or inverted end comes out usable.
    pub fn add_vacation(&mut self, vacation: Vacation) -> MetricsSnapshot {
        self.vacations.push(vacation);
        self.vacations = vacation::normalize_vacations(&self.vacations);
        self.metrics()
    }

    /// Replaces the vacation at a list position
    ///
    /// # Returns
    /// * `Ok(MetricsSnapshot)` after correction and recompute
    /// * `Err(Error::VacationIndex)` when the position does not exist
    pub fn set_vacation(&mut self, index: usize, vacation: Vacation) -> Result<MetricsSnapshot> {
        let slot = self
            .vacations
            .get_mut(index)
            .ok_or(Error::VacationIndex(index))?;
        *slot = vacation;
        self.vacations = vacation::normalize_vacations(&self.vacations);
        Ok(self.metrics())
    }

    /// Removes the vacation at a list position
    ///
    /// # Returns
    /// * `Ok(MetricsSnapshot)` after recompute
    /// * `Err(Error::VacationIndex)` when the position does not exist
    pub fn remove_vacation(&mut self, index: usize) -> Result<MetricsSnapshot> {
        if index >= self.vacations.len() {
            return Err(Error::VacationIndex(index));
        }
        self.vacations.remove(index);
        Ok(self.metrics())
    }

    /// Recomputes the full metric snapshot from the current triple
    pub fn metrics(&self) -> MetricsSnapshot {
        metrics::compute_metrics(self.start, self.end, &self.vacations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    #[test]
    fn mutators_return_fresh_snapshots() {
        let mut countdown = Countdown::new();
        assert_eq!(countdown.metrics(), MetricsSnapshot::default());

        let snapshot = countdown.set_start(date(2025, 6, 2));
        assert_eq!(snapshot, MetricsSnapshot::default()); // no end yet

        let snapshot = countdown.set_end(date(2025, 6, 8));
        assert_eq!(snapshot.total_days, 7);
        assert_eq!(snapshot.working_days, 5);
    }

    #[test]
    fn added_vacation_is_corrected_and_counted() {
        let mut countdown = Countdown::with_parts(date(2025, 6, 2), date(2025, 6, 8), Vec::new());
        // Missing end snaps to the day after the start (Tue -> Wed), so
        // both Tuesday and Wednesday drop out of the count.
        let snapshot = countdown.add_vacation(Vacation::new(date(2025, 6, 3), None));
        assert_eq!(countdown.vacations()[0].end, date(2025, 6, 4));
        assert_eq!(snapshot.working_days, 3);
    }

    #[test]
    fn set_and_remove_vacation_by_position() {
        let mut countdown = Countdown::with_parts(date(2025, 6, 2), date(2025, 6, 8), Vec::new());
        countdown.add_vacation(Vacation::new(date(2025, 6, 3), date(2025, 6, 3)));

        let snapshot = countdown
            .set_vacation(0, Vacation::new(date(2025, 6, 4), date(2025, 6, 5)))
            .unwrap();
        assert_eq!(snapshot.working_days, 3);

        let snapshot = countdown.remove_vacation(0).unwrap();
        assert_eq!(snapshot.working_days, 5);
        assert!(countdown.vacations().is_empty());
    }

    #[test]
    fn out_of_range_positions_are_errors_not_panics() {
        let mut countdown = Countdown::new();
        assert!(matches!(
            countdown.remove_vacation(0),
            Err(Error::VacationIndex(0))
        ));
        assert!(matches!(
            countdown.set_vacation(3, Vacation::default()),
            Err(Error::VacationIndex(3))
        ));
    }
}
