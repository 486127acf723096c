//! Daily curve builder: one rate per calendar day of the projection year

use super::daily::DailyRate;
use super::turns::TurnAnchors;
use crate::calendar::{DayType, HolidayCalendar};
use crate::error::{ProjectionError, Result};
use crate::scenario::Scenario;
use chrono::{Datelike, NaiveDate};

/// Default projection year
pub const DEFAULT_PROJECTION_YEAR: i32 = 2026;

/// Premiums at or below this size (percentage points) are treated as zero
pub const DEFAULT_TURN_TOLERANCE: f64 = 1e-5;

/// Configuration for a projection run
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionConfig {
    /// Calendar year to project, January 1 through December 31
    pub year: i32,

    /// Threshold on |turn premium| for flagging a turn day
    pub turn_tolerance: f64,
}

impl ProjectionConfig {
    pub fn for_year(year: i32) -> Self {
        Self {
            year,
            ..Self::default()
        }
    }
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            year: DEFAULT_PROJECTION_YEAR,
            turn_tolerance: DEFAULT_TURN_TOLERANCE,
        }
    }
}

/// Builds the daily rate path for a scenario
#[derive(Debug, Clone, Default)]
pub struct DailyCurveBuilder {
    config: ProjectionConfig,
}

impl DailyCurveBuilder {
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Produce one `DailyRate` per day of the year, in date order.
    ///
    /// Fails before producing anything if a month has no business day.
    pub fn build(&self, scenario: &Scenario, holidays: &HolidayCalendar) -> Result<Vec<DailyRate>> {
        let year = self.config.year;
        let start = NaiveDate::from_ymd_opt(year, 1, 1).ok_or(ProjectionError::InvalidYear { year })?;
        let anchors = TurnAnchors::compute(year, holidays)?;

        for event in scenario.events.iter().filter(|e| e.date.year() != year) {
            log::warn!(
                "Event dated {} lies outside projection year {}; it only shifts the starting level",
                event.date,
                year
            );
        }

        // Last business day's final rate, carried flat over plain weekends/holidays
        let mut last_business_rate = scenario.effective_start_rate();

        let rates: Vec<DailyRate> = start
            .iter_days()
            .take_while(|day| day.year() == year)
            .map(|day| {
                let row = self.price_day(day, scenario, holidays, &anchors, last_business_rate);
                if row.is_business_day() {
                    last_business_rate = row.final_rate;
                }
                row
            })
            .collect();

        log::debug!(
            "Built {} daily rates for '{}' ({} turn days)",
            rates.len(),
            scenario.name,
            rates.iter().filter(|r| r.is_turn_day).count()
        );

        Ok(rates)
    }

    fn price_day(
        &self,
        day: NaiveDate,
        scenario: &Scenario,
        holidays: &HolidayCalendar,
        anchors: &TurnAnchors,
        last_business_rate: f64,
    ) -> DailyRate {
        let day_type = DayType::classify(day, holidays);
        let base_rate = scenario.base_rate_on(day);
        let premium = anchors.premium_on(day, day_type, &scenario.turns);

        let (final_rate, turn_premium) = match (day_type, premium) {
            (DayType::Business, premium) => {
                let premium = premium.unwrap_or(0.0);
                (base_rate + premium, premium)
            }
            (_, Some(premium)) => (base_rate + premium, premium),
            (_, None) => (last_business_rate, last_business_rate - base_rate),
        };

        DailyRate {
            date: day,
            day_type,
            base_rate,
            turn_premium,
            final_rate,
            is_meeting_date: scenario.is_meeting_date(day),
            is_turn_day: turn_premium.abs() > self.config.turn_tolerance,
        }
    }
}

/// Build the daily path for `year` with default settings
pub fn generate_daily_rates(scenario: &Scenario, holidays: &HolidayCalendar, year: i32) -> Result<Vec<DailyRate>> {
    DailyCurveBuilder::new(ProjectionConfig::for_year(year)).build(scenario, holidays)
}
