//! Observed U.S. federal holiday calendar and working-day classification.
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

use std::collections::HashSet;

use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Observed holiday dates for exactly one calendar year
///
/// Computed on demand per year and cached by the caller for the duration of
/// one calculation batch; never persisted.
pub type HolidaySet = HashSet<NaiveDate>;

/// Computes the observed U.S. federal holidays for a year
///
/// # Arguments
/// * `year` - Calendar year to compute
///
/// # Returns
/// * `HolidaySet` containing the 11 observed dates, all within `year`
///
/// # Rules
/// Fixed dates: New Year's Day (Jan 1), Juneteenth (Jun 19), Independence
/// Day (Jul 4), Veterans Day (Nov 11), Christmas (Dec 25). Computed dates:
/// MLK Day (3rd Mon of Jan), Presidents Day (3rd Mon of Feb), Memorial Day
/// (last Mon of May), Labor Day (1st Mon of Sep), Columbus Day (2nd Mon of
/// Oct), Thanksgiving (4th Thu of Nov). Each nominal date is then
/// weekend-shifted: Saturday observes on the preceding Friday, Sunday on
/// the following Monday. A shift that would leave the requested year is
/// suppressed and the nominal date kept, so the set never contains a date
/// from another year (Jan 1 on a Saturday stays Jan 1).
pub fn holidays_for_year(year: i32) -> HolidaySet {
    let nominal = [
        NaiveDate::from_ymd_opt(year, 1, 1),             // New Year's Day
        nth_weekday_of_month(year, 1, Weekday::Mon, 3),  // MLK Day
        nth_weekday_of_month(year, 2, Weekday::Mon, 3),  // Presidents Day
        last_weekday_of_month(year, 5, Weekday::Mon),    // Memorial Day
        NaiveDate::from_ymd_opt(year, 6, 19),            // Juneteenth
        NaiveDate::from_ymd_opt(year, 7, 4),             // Independence Day
        nth_weekday_of_month(year, 9, Weekday::Mon, 1),  // Labor Day
        nth_weekday_of_month(year, 10, Weekday::Mon, 2), // Columbus Day
        NaiveDate::from_ymd_opt(year, 11, 11),           // Veterans Day
        nth_weekday_of_month(year, 11, Weekday::Thu, 4), // Thanksgiving
        NaiveDate::from_ymd_opt(year, 12, 25),           // Christmas
    ];

    nominal.into_iter().flatten().map(observed).collect()
}

/// Applies the weekend-shift rule to a nominal holiday date
///
/// Saturday moves to the preceding Friday, Sunday to the following Monday.
/// A shift that crosses a year boundary keeps the nominal date instead.
fn observed(date: NaiveDate) -> NaiveDate {
    let shifted = match date.weekday() {
        Weekday::Sat => date.checked_sub_days(Days::new(1)),
        Weekday::Sun => date.checked_add_days(Days::new(1)),
        _ => return date,
    };

    match shifted {
        Some(shifted) if shifted.year() == date.year() => shifted,
        _ => date,
    }
}

/// Finds the nth occurrence of a weekday within a month
///
/// # Arguments
/// * `year` / `month` - Month to search
/// * `weekday` - Target weekday
/// * `nth` - Occurrence number, 1-based
///
/// # Returns
/// * `Some(NaiveDate)` for the first matching weekday on/after the 1st of
///   the month plus 7 * (nth - 1) days
/// * `None` when the computed day falls past the end of the month; the
///   result is never wrapped into the following month
pub fn nth_weekday_of_month(
    year: i32,
    month: u32,
    weekday: Weekday,
    nth: u32,
) -> Option<NaiveDate> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let offset =
        (weekday.num_days_from_monday() + 7 - first.weekday().num_days_from_monday()) % 7;
    let day = 1 + offset + 7 * (nth - 1);
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Finds the last occurrence of a weekday within a month
///
/// Starts from the month's last day and steps backward to the most recent
/// matching weekday.
pub fn last_weekday_of_month(year: i32, month: u32, weekday: Weekday) -> Option<NaiveDate> {
    let last = match month {
        12 => NaiveDate::from_ymd_opt(year, 12, 31),
        _ => NaiveDate::from_ymd_opt(year, month + 1, 1)?.pred_opt(),
    }?;
    let back = (last.weekday().num_days_from_monday() + 7 - weekday.num_days_from_monday()) % 7;
    last.checked_sub_days(Days::new(u64::from(back)))
}

/// Decides whether a date is a working day
///
/// # Arguments
/// * `date` - Date to classify
/// * `holidays` - Observed holiday set for the date's own year; ranges that
///   span several years need one set per distinct year touched
///
/// # Returns
/// * `false` on Saturday, Sunday, or an observed holiday
/// * `true` otherwise
pub fn is_working_day(date: NaiveDate, holidays: &HolidaySet) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun) && !holidays.contains(&date)
}
