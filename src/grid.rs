//! Month calendar grid generation and navigation.
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

use chrono::{Datelike, Days, NaiveDate};

/// Column headers, Sunday-first
pub const DAY_HEADERS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// One calendar cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    /// The cell's date
    pub date: NaiveDate,
    /// Whether the date belongs to an adjacent month used as padding
    pub other_month: bool,
    /// Today marker (never set on padding cells)
    pub is_today: bool,
    /// Countdown start marker (never set on padding cells)
    pub is_start: bool,
    /// Countdown end marker (never set on padding cells)
    pub is_end: bool,
}

/// A Sunday-first month grid; the cell count is always a multiple of 7
#[derive(Debug, Clone)]
pub struct MonthGrid {
    /// First day of the rendered month
    pub first: NaiveDate,
    /// Cells in visual order: leading padding, month days, trailing padding
    pub cells: Vec<DayCell>,
}

/// Builds the grid for the month containing `anchor`
///
/// # Arguments
/// * `anchor` - Any date within the month to render
/// * `today` - Current date, for the today marker
/// * `start` / `end` - Countdown bounds, for their markers
///
/// Leading cells fill back to the previous Sunday, trailing cells pad the
/// final week with days from the following month.
pub fn month_grid(
    anchor: NaiveDate,
    today: NaiveDate,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> MonthGrid {
    let first = anchor - Days::new(u64::from(anchor.day0()));
    let month = first.month();
    let mut cells = Vec::new();

    let leading = u64::from(first.weekday().num_days_from_sunday());
    for offset in (1..=leading).rev() {
        cells.push(padding_cell(first - Days::new(offset)));
    }

    for day in first.iter_days() {
        if day.month() != month {
            let trailing = (7 - cells.len() % 7) % 7;
            for offset in 0..trailing as u64 {
                cells.push(padding_cell(day + Days::new(offset)));
            }
            break;
        }
        cells.push(DayCell {
            date: day,
            other_month: false,
            is_today: day == today,
            is_start: start == Some(day),
            is_end: end == Some(day),
        });
    }

    MonthGrid { first, cells }
}

fn padding_cell(date: NaiveDate) -> DayCell {
    DayCell {
        date,
        other_month: true,
        is_today: false,
        is_start: false,
        is_end: false,
    }
}

/// Steps an anchor date to the first day of the previous month
pub fn prev_month(anchor: NaiveDate) -> NaiveDate {
    let first = anchor - Days::new(u64::from(anchor.day0()));
    first - Days::new(1) - Days::new(u64::from((first - Days::new(1)).day0()))
}

/// Steps an anchor date to the first day of the following month
pub fn next_month(anchor: NaiveDate) -> NaiveDate {
    let first = anchor - Days::new(u64::from(anchor.day0()));
    let month = first.month();
    let mut day = first;
    while day.month() == month {
        day = day + Days::new(1);
    }
    day
}

/// Decides whether separate start and end calendars are needed
///
/// True only when both bounds are present and lie in different months or
/// years; a range inside one month renders a single calendar.
pub fn spans_months(start: Option<NaiveDate>, end: Option<NaiveDate>) -> bool {
    match (start, end) {
        (Some(start), Some(end)) => {
            start.month() != end.month() || start.year() != end.year()
        }
        _ => false,
    }
}

/// Renders a grid as fixed-width text with marker glyphs
///
/// Month days print as ` dd `; the start date as `[dd]`, the end date as
/// `<dd>`, today as `*dd `. Padding cells print blank.
pub fn render(grid: &MonthGrid) -> String {
    let mut out = String::new();
    out.push_str(&format!("{:^28}\n", grid.first.format("%B %Y").to_string()));
    for header in DAY_HEADERS {
        out.push_str(&format!("{header:>4}"));
    }
    out.push('\n');

    for (i, cell) in grid.cells.iter().enumerate() {
        if cell.other_month {
            out.push_str("    ");
        } else if cell.is_start {
            out.push_str(&format!("[{:>2}]", cell.date.day()));
        } else if cell.is_end {
            out.push_str(&format!("<{:>2}>", cell.date.day()));
        } else if cell.is_today {
            out.push_str(&format!("*{:>2} ", cell.date.day()));
        } else {
            out.push_str(&format!(" {:>2} ", cell.date.day()));
        }
        if (i + 1) % 7 == 0 {
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn june_2025_shape() {
        // June 1, 2025 is a Sunday; 30 days -> 0 leading + 5 trailing.
        let grid = month_grid(date(2025, 6, 15), date(2025, 6, 15), None, None);
        assert_eq!(grid.first, date(2025, 6, 1));
        assert_eq!(grid.cells.len(), 35);
        assert!(!grid.cells[0].other_month);
        assert_eq!(grid.cells[0].date, date(2025, 6, 1));
        assert!(grid.cells[30].other_month);
        assert_eq!(grid.cells[30].date, date(2025, 7, 1));
    }

    #[test]
    fn leading_cells_come_from_previous_month() {
        // August 1, 2025 is a Friday -> 5 leading padding cells.
        let grid = month_grid(date(2025, 8, 1), date(2025, 8, 1), None, None);
        assert_eq!(grid.cells.len() % 7, 0);
        assert!(grid.cells[..5].iter().all(|c| c.other_month));
        assert_eq!(grid.cells[0].date, date(2025, 7, 27));
        assert_eq!(grid.cells[5].date, date(2025, 8, 1));
    }

    #[test]
    fn markers_only_on_month_days() {
        let grid = month_grid(
            date(2025, 6, 1),
            date(2025, 6, 15),
            Some(date(2025, 6, 2)),
            Some(date(2025, 7, 1)), // trailing padding day: no marker
        );
        let start_cell = grid.cells.iter().find(|c| c.is_start).unwrap();
        assert_eq!(start_cell.date, date(2025, 6, 2));
        assert!(grid.cells.iter().any(|c| c.is_today));
        assert!(grid.cells.iter().all(|c| !c.is_end));
    }

    #[test]
    fn month_navigation() {
        assert_eq!(prev_month(date(2025, 3, 15)), date(2025, 2, 1));
        assert_eq!(prev_month(date(2025, 1, 31)), date(2024, 12, 1));
        assert_eq!(next_month(date(2025, 12, 3)), date(2026, 1, 1));
        assert_eq!(next_month(date(2025, 1, 1)), date(2025, 2, 1));
    }

    #[test]
    fn end_calendar_shown_only_across_months() {
        assert!(!spans_months(Some(date(2025, 6, 2)), Some(date(2025, 6, 30))));
        assert!(spans_months(Some(date(2025, 6, 2)), Some(date(2025, 7, 1))));
        assert!(spans_months(Some(date(2025, 6, 2)), Some(date(2026, 6, 2))));
        assert!(!spans_months(Some(date(2025, 6, 2)), None));
        assert!(!spans_months(None, None));
    }

    #[test]
    fn render_marks_the_dates() {
        let grid = month_grid(
            date(2025, 6, 1),
            date(2025, 6, 15),
            Some(date(2025, 6, 2)),
            Some(date(2025, 6, 27)),
        );
        let text = render(&grid);
        assert!(text.contains("June 2025"));
        assert!(text.contains("[ 2]"));
        assert!(text.contains("<27>"));
        assert!(text.contains("*15"));
    }
}
