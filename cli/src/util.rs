// SPDX-FileCopyrightText: 2025-2026 Rentcal Developers
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::{Date, DateTime, date};
use unicode_width::UnicodeWidthStr;
use uuid::Uuid;

const SHORT_ID_LEN: usize = 8;

/// The output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

/// Parses `YYYY-MM-DD HH:MM` or `YYYY-MM-DD`, the latter at midnight.
pub fn parse_datetime(dt: &str) -> Result<DateTime, String> {
    let dt = dt.trim();
    if let Ok(a) = DateTime::strptime("%Y-%m-%d %H:%M", dt) {
        Ok(a)
    } else if let Ok(a) = dt.parse::<Date>() {
        Ok(a.at(0, 0, 0, 0))
    } else {
        Err(format!(
            "Invalid date `{dt}`. Expected format: YYYY-MM-DD or YYYY-MM-DD HH:MM"
        ))
    }
}

/// Parses `YYYY-MM` into the first day of that month.
pub fn parse_month(month: &str) -> Result<Date, String> {
    let invalid = || format!("Invalid month `{month}`. Expected format: YYYY-MM");
    let (year, month_of_year) = month.trim().split_once('-').ok_or_else(invalid)?;
    let year: i16 = year.parse().map_err(|_| invalid())?;
    let month_of_year: i8 = month_of_year.parse().map_err(|_| invalid())?;
    if !(1..=12).contains(&month_of_year) || !(1..=9999).contains(&year) {
        return Err(invalid());
    }
    Ok(date(year, month_of_year, 1))
}

pub fn format_datetime(dt: DateTime) -> String {
    if dt.time() == jiff::civil::Time::midnight() {
        dt.date().to_string()
    } else {
        dt.strftime("%Y-%m-%d %H:%M").to_string()
    }
}

/// The leading characters of an id, enough to tell records apart in a listing.
pub fn short_id(id: Uuid) -> String {
    let mut s = id.to_string();
    s.truncate(SHORT_ID_LEN);
    s
}

/// Pads `s` with spaces on the right up to `width` display columns.
pub fn pad_to_width(s: &str, width: usize) -> String {
    let w = s.width();
    if w >= width {
        s.to_string()
    } else {
        format!("{s}{}", " ".repeat(width - w))
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::datetime;

    use super::*;

    #[test]
    fn test_parse_datetime_date_only() {
        let dt = parse_datetime("2024-06-10").unwrap();
        assert_eq!(dt, datetime(2024, 6, 10, 0, 0, 0, 0));
    }

    #[test]
    fn test_parse_datetime_date_time() {
        let dt = parse_datetime("2024-06-10 15:30").unwrap();
        assert_eq!(dt, datetime(2024, 6, 10, 15, 30, 0, 0));
    }

    #[test]
    fn test_parse_datetime_invalid() {
        assert!(parse_datetime("10.06.2024").is_err());
        assert!(parse_datetime("").is_err());
    }

    #[test]
    fn test_parse_month() {
        assert_eq!(parse_month("2024-06").unwrap(), date(2024, 6, 1));
        assert_eq!(parse_month("2024-6").unwrap(), date(2024, 6, 1));
        assert!(parse_month("2024-13").is_err());
        assert!(parse_month("June").is_err());
    }

    #[test]
    fn test_format_datetime_hides_midnight() {
        assert_eq!(format_datetime(datetime(2024, 6, 10, 0, 0, 0, 0)), "2024-06-10");
        assert_eq!(
            format_datetime(datetime(2024, 6, 10, 15, 0, 0, 0)),
            "2024-06-10 15:00"
        );
    }

    #[test]
    fn test_short_id() {
        let id: Uuid = "4f2a9c1e-0000-4000-8000-000000000000".parse().unwrap();
        assert_eq!(short_id(id), "4f2a9c1e");
    }

    #[test]
    fn test_pad_to_width_counts_display_columns() {
        assert_eq!(pad_to_width("10↓", 5), "10↓  ");
        assert_eq!(pad_to_width("Grüße", 3), "Grüße");
    }
}
