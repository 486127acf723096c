//! Business-day calendar: weekends, holidays and month-end anchors

mod holidays;
pub mod loader;

pub use holidays::{fallback_holidays_2026, Holiday, HolidayCalendar, FALLBACK_HOLIDAYS_2026};
pub use loader::{load_holidays, load_holidays_from_reader};

use crate::error::{ProjectionError, Result};
use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Classification of a calendar day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayType {
    Business,
    Weekend,
    Holiday,
}

impl DayType {
    /// Classify a date. A holiday falling on Saturday or Sunday is reported as a weekend.
    pub fn classify(date: NaiveDate, holidays: &HolidayCalendar) -> Self {
        if is_weekend(date) {
            DayType::Weekend
        } else if holidays.contains(date) {
            DayType::Holiday
        } else {
            DayType::Business
        }
    }

    pub fn is_business(self) -> bool {
        self == DayType::Business
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DayType::Business => "Business",
            DayType::Weekend => "Weekend",
            DayType::Holiday => "Holiday",
        }
    }
}

/// Saturday or Sunday
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Parse a plain `YYYY-MM-DD` calendar date
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| ProjectionError::MalformedDate {
        input: input.to_string(),
    })
}

/// Last calendar day of `month` (1-12) in `year`
pub fn month_end(year: i32, month: u32) -> Result<NaiveDate> {
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .ok_or(ProjectionError::InvalidYear { year })
}

/// Last business day of `month` (1-12) in `year`.
///
/// Scans backward from the calendar month-end and never leaves the month, so a
/// month made entirely of weekends and holidays is reported as an error.
pub fn last_business_day(year: i32, month: u32, holidays: &HolidayCalendar) -> Result<NaiveDate> {
    let mut day = month_end(year, month)?;

    while day.month() == month {
        if DayType::classify(day, holidays).is_business() {
            return Ok(day);
        }
        day = match day.pred_opt() {
            Some(prev) => prev,
            None => break,
        };
    }

    Err(ProjectionError::NoBusinessDay { year, month })
}
