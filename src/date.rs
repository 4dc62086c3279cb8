//! Strict `YYYY-MM-DD` date parsing and formatting.
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

/// Canonical date format string (YYYY-MM-DD)
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a strict `YYYY-MM-DD` date string
///
/// # Arguments
/// * `text` - Candidate date text
///
/// # Returns
/// * `Ok(NaiveDate)` for a well-formed date that actually exists
/// * `Err(Error::InvalidDate)` otherwise
///
/// # Strictness
/// The layout must be exactly 4 digits, `-`, 2 digits, `-`, 2 digits, and
/// the day must exist in its month. A date like `2024-02-30` is rejected
/// outright; it is never rolled over into March. Downstream holiday and
/// metric math relies on dates never silently crossing a month boundary.
pub fn parse_date(text: &str) -> Result<NaiveDate> {
    let bytes = text.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !well_formed {
        return Err(Error::InvalidDate(text.to_string()));
    }

    // The slices are all-digit at this point, so the integer parses cannot
    // fail; from_ymd_opt still rejects month 00/13 and nonexistent days.
    let year: i32 = text[..4]
        .parse()
        .map_err(|_| Error::InvalidDate(text.to_string()))?;
    let month: u32 = text[5..7]
        .parse()
        .map_err(|_| Error::InvalidDate(text.to_string()))?;
    let day: u32 = text[8..]
        .parse()
        .map_err(|_| Error::InvalidDate(text.to_string()))?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| Error::InvalidDate(text.to_string()))
}

/// Formats a date into its canonical zero-padded `YYYY-MM-DD` form
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_dates() {
        assert_eq!(
            parse_date("2025-06-02").unwrap(),
            NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
        );
        assert_eq!(
            parse_date("2024-02-29").unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
    }

    #[test]
    fn rejects_nonexistent_days_without_rollover() {
        assert!(parse_date("2024-02-30").is_err());
        assert!(parse_date("2025-02-29").is_err());
        assert!(parse_date("2025-04-31").is_err());
    }

    #[test]
    fn rejects_malformed_layout() {
        assert!(parse_date("").is_err());
        assert!(parse_date("2025-6-2").is_err());
        assert!(parse_date("25-06-02").is_err());
        assert!(parse_date("2025/06/02").is_err());
        assert!(parse_date("2025-13-01").is_err());
        assert!(parse_date("2025-00-10").is_err());
        assert!(parse_date("2025-01-00").is_err());
        assert!(parse_date("2025-01-32").is_err());
        assert!(parse_date("2025-01-015").is_err());
        assert!(parse_date(" 2025-01-01").is_err());
    }

    #[test]
    fn format_zero_pads() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
        assert_eq!(format_date(date), "2025-01-05");
    }

    #[test]
    fn round_trips() {
        for text in ["2025-01-01", "2024-02-29", "1999-12-31", "2026-07-04"] {
            let date = parse_date(text).unwrap();
            assert_eq!(parse_date(&format_date(date)).unwrap(), date);
        }
    }
}
