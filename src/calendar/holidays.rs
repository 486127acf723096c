//! Holiday membership set and the built-in fallback table

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A named non-business date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    pub date: NaiveDate,
    pub name: String,
}

/// US public holidays for 2026, used when no holiday source is supplied.
/// Independence Day falls on a Saturday and is observed on Friday July 3rd.
pub const FALLBACK_HOLIDAYS_2026: [(u32, u32, &str); 13] = [
    (1, 1, "New Year's Day"),
    (1, 19, "Martin Luther King, Jr. Day"),
    (2, 16, "Washington's Birthday"),
    (4, 3, "Good Friday"),
    (5, 25, "Memorial Day"),
    (6, 19, "Juneteenth National Independence Day"),
    (7, 4, "Independence Day"),
    (7, 3, "Independence Day (Observed)"),
    (9, 7, "Labor Day"),
    (10, 12, "Columbus Day"),
    (11, 11, "Veterans Day"),
    (11, 26, "Thanksgiving Day"),
    (12, 25, "Christmas Day"),
];

/// Set of non-business dates beyond ordinary weekends.
///
/// The engine only asks whether a date is a member; where the dates came
/// from (a file, a remote lookup, the fallback table) does not matter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidayCalendar {
    dates: HashSet<NaiveDate>,
}

impl HolidayCalendar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from bare dates
    pub fn from_dates<I: IntoIterator<Item = NaiveDate>>(dates: I) -> Self {
        Self {
            dates: dates.into_iter().collect(),
        }
    }

    /// Build from named holiday records
    pub fn from_holidays(holidays: &[Holiday]) -> Self {
        Self::from_dates(holidays.iter().map(|h| h.date))
    }

    /// Built-in 2026 US holiday table
    pub fn fallback_us_2026() -> Self {
        Self::from_holidays(&fallback_holidays_2026())
    }

    pub fn add(&mut self, date: NaiveDate) -> bool {
        self.dates.insert(date)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Holiday dates in ascending order
    pub fn dates(&self) -> Vec<NaiveDate> {
        let mut dates: Vec<_> = self.dates.iter().copied().collect();
        dates.sort();
        dates
    }
}

impl FromIterator<NaiveDate> for HolidayCalendar {
    fn from_iter<I: IntoIterator<Item = NaiveDate>>(iter: I) -> Self {
        Self::from_dates(iter)
    }
}

/// Named records for the fallback table
pub fn fallback_holidays_2026() -> Vec<Holiday> {
    FALLBACK_HOLIDAYS_2026
        .iter()
        .filter_map(|&(month, day, name)| {
            NaiveDate::from_ymd_opt(2026, month, day).map(|date| Holiday {
                date,
                name: name.to_string(),
            })
        })
        .collect()
}
