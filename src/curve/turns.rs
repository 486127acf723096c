//! Turn premiums: bucket selection and month-end anchors

use crate::calendar::{last_business_day, DayType, HolidayCalendar};
use crate::error::Result;
use crate::scenario::TurnPremiums;
use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Which premium applies at a month boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnBucket {
    MonthEnd,
    QuarterEnd,
    YearEnd,
}

impl TurnBucket {
    /// Bucket for a calendar month (1-12). December is a year-end even though it
    /// also closes a quarter and a month.
    pub fn for_month(month: u32) -> Self {
        match month {
            12 => TurnBucket::YearEnd,
            3 | 6 | 9 => TurnBucket::QuarterEnd,
            _ => TurnBucket::MonthEnd,
        }
    }

    /// Premium for this bucket, in basis points
    pub fn premium_bps(self, turns: &TurnPremiums) -> f64 {
        match self {
            TurnBucket::MonthEnd => turns.month_end_bps,
            TurnBucket::QuarterEnd => turns.quarter_end_bps,
            TurnBucket::YearEnd => turns.year_end_bps,
        }
    }

    /// Premium for this bucket, in percentage points
    pub fn premium(self, turns: &TurnPremiums) -> f64 {
        self.premium_bps(turns) / 100.0
    }
}

/// Last business day of each month of one year
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnAnchors {
    year: i32,
    anchors: Vec<NaiveDate>,
}

impl TurnAnchors {
    /// Scan all twelve months; fails if any month has no business day
    pub fn compute(year: i32, holidays: &HolidayCalendar) -> Result<Self> {
        let anchors = (1..=12)
            .map(|month| last_business_day(year, month, holidays))
            .collect::<Result<Vec<_>>>()?;

        log::debug!("Turn anchors for {}: {:?}", year, anchors);
        Ok(Self { year, anchors })
    }

    /// Anchor for a calendar month (1-12)
    pub fn anchor(&self, month: u32) -> NaiveDate {
        self.anchors[(month - 1) as usize]
    }

    pub fn is_anchor(&self, day: NaiveDate) -> bool {
        day.year() == self.year && self.anchor(day.month()) == day
    }

    /// Turn premium (percentage points) that `day` earns on its own account.
    ///
    /// The anchor itself always earns its month's bucket. A weekend day earns it
    /// when the day before, or for a Sunday the day two back, is the anchor of
    /// the same month. Holidays never carry; they fall back to the flat carry of
    /// the last business rate instead.
    pub fn premium_on(&self, day: NaiveDate, day_type: DayType, turns: &TurnPremiums) -> Option<f64> {
        if day.year() != self.year {
            return None;
        }

        let anchor = self.anchor(day.month());
        let carries = day == anchor
            || (day_type == DayType::Weekend
                && (day - Duration::days(1) == anchor
                    || (day.weekday() == Weekday::Sun && day - Duration::days(2) == anchor)));

        if carries {
            Some(TurnBucket::for_month(day.month()).premium(turns))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, m, d).unwrap()
    }

    #[test]
    fn test_bucket_mapping() {
        let buckets: Vec<_> = (1..=12).map(TurnBucket::for_month).collect();
        assert_eq!(buckets[0], TurnBucket::MonthEnd);
        assert_eq!(buckets[2], TurnBucket::QuarterEnd);
        assert_eq!(buckets[5], TurnBucket::QuarterEnd);
        assert_eq!(buckets[8], TurnBucket::QuarterEnd);
        assert_eq!(buckets[10], TurnBucket::MonthEnd);
        assert_eq!(buckets[11], TurnBucket::YearEnd);
        assert_eq!(buckets.iter().filter(|b| **b == TurnBucket::MonthEnd).count(), 8);
    }

    #[test]
    fn test_bucket_premium_units() {
        let turns = TurnPremiums::new(5.0, 10.0, 25.0);
        assert_eq!(TurnBucket::YearEnd.premium_bps(&turns), 25.0);
        assert!((TurnBucket::QuarterEnd.premium(&turns) - 0.10).abs() < 1e-12);
    }

    #[test]
    fn test_anchor_table() {
        let anchors = TurnAnchors::compute(2026, &HolidayCalendar::default()).unwrap();
        assert_eq!(anchors.anchor(1), date(1, 30));
        assert_eq!(anchors.anchor(7), date(7, 31));
        assert_eq!(anchors.anchor(10), date(10, 30));
        assert_eq!(anchors.anchor(12), date(12, 31));
        assert!(anchors.is_anchor(date(2, 27)));
        assert!(!anchors.is_anchor(date(2, 28)));
    }

    #[test]
    fn test_weekend_carry_within_month() {
        let turns = TurnPremiums::new(5.0, 10.0, 25.0);
        let anchors = TurnAnchors::compute(2026, &HolidayCalendar::default()).unwrap();

        // Friday Jan 30 anchor, Saturday Jan 31 still in January
        assert!(anchors.premium_on(date(1, 30), DayType::Business, &turns).is_some());
        assert!(anchors.premium_on(date(1, 31), DayType::Weekend, &turns).is_some());
        // Sunday Feb 1 belongs to February, whose anchor is Feb 27
        assert!(anchors.premium_on(date(2, 1), DayType::Weekend, &turns).is_none());
        assert!(anchors.premium_on(date(2, 2), DayType::Business, &turns).is_none());
    }

    #[test]
    fn test_sunday_two_days_after_anchor() {
        let turns = TurnPremiums::new(5.0, 10.0, 25.0);
        let anchors = TurnAnchors::compute(2026, &HolidayCalendar::default()).unwrap();

        // Friday May 29 anchor, Saturday 30 and Sunday 31 still in May
        assert_eq!(anchors.anchor(5), date(5, 29));
        assert!(anchors.premium_on(date(5, 30), DayType::Weekend, &turns).is_some());
        assert!(anchors.premium_on(date(5, 31), DayType::Weekend, &turns).is_some());
    }

    #[test]
    fn test_holiday_after_anchor_breaks_carry() {
        let turns = TurnPremiums::new(5.0, 10.0, 25.0);
        // Make Friday May 29 a holiday so the May anchor is Thursday May 28
        let holidays = HolidayCalendar::from_dates([date(5, 29)]);
        let anchors = TurnAnchors::compute(2026, &holidays).unwrap();
        assert_eq!(anchors.anchor(5), date(5, 28));

        assert!(anchors.premium_on(date(5, 29), DayType::Holiday, &turns).is_none());
        assert!(anchors.premium_on(date(5, 30), DayType::Weekend, &turns).is_none());
        assert!(anchors.premium_on(date(5, 31), DayType::Weekend, &turns).is_none());
    }

    #[test]
    fn test_december_uses_year_end_bucket() {
        let turns = TurnPremiums::new(5.0, 10.0, 25.0);
        let anchors = TurnAnchors::compute(2026, &HolidayCalendar::default()).unwrap();
        let premium = anchors.premium_on(date(12, 31), DayType::Business, &turns).unwrap();
        assert!((premium - 0.25).abs() < 1e-12);
    }
}
