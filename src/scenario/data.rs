//! Scenario data structures

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A discrete, date-anchored shift in the overnight rate.
///
/// The change takes effect on the day *after* `date`; the date itself still
/// prices at the old level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateChangeEvent {
    pub date: NaiveDate,
    /// Signed change in basis points
    pub change_bps: i32,
}

impl RateChangeEvent {
    pub fn new(date: NaiveDate, change_bps: i32) -> Self {
        Self { date, change_bps }
    }

    /// Whether this event has already moved the rate on `day`
    pub fn is_effective_on(&self, day: NaiveDate) -> bool {
        self.date < day
    }
}

/// Turn premiums in basis points, one bucket per boundary type
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TurnPremiums {
    pub month_end_bps: f64,
    pub quarter_end_bps: f64,
    pub year_end_bps: f64,
}

impl TurnPremiums {
    pub fn new(month_end_bps: f64, quarter_end_bps: f64, year_end_bps: f64) -> Self {
        Self {
            month_end_bps,
            quarter_end_bps,
            year_end_bps,
        }
    }

    pub fn zero() -> Self {
        Self::default()
    }
}

/// One projection assumption set. The engine only ever borrows it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,

    /// Starting SOFR, in percent (e.g. 4.30)
    pub base_sofr: f64,

    /// Starting EFFR, in percent. None means use SOFR.
    pub base_effr: Option<f64>,

    /// Rate-change events, in schedule order
    pub events: Vec<RateChangeEvent>,

    pub turns: TurnPremiums,
}

impl Scenario {
    pub fn new(name: impl Into<String>, base_sofr: f64) -> Self {
        Self {
            name: name.into(),
            base_sofr,
            base_effr: None,
            events: Vec::new(),
            turns: TurnPremiums::zero(),
        }
    }

    pub fn with_effr(mut self, base_effr: f64) -> Self {
        self.base_effr = Some(base_effr);
        self
    }

    pub fn with_event(mut self, date: NaiveDate, change_bps: i32) -> Self {
        self.events.push(RateChangeEvent::new(date, change_bps));
        self
    }

    pub fn with_turns(mut self, turns: TurnPremiums) -> Self {
        self.turns = turns;
        self
    }

    /// Rate before any events: EFFR if present, else SOFR
    pub fn effective_start_rate(&self) -> f64 {
        self.base_effr.unwrap_or(self.base_sofr)
    }

    /// Sum of every event dated strictly before `day`, in basis points
    pub fn cumulative_change_bps(&self, day: NaiveDate) -> i32 {
        self.events
            .iter()
            .filter(|e| e.is_effective_on(day))
            .map(|e| e.change_bps)
            .sum()
    }

    /// Base rate on `day`, in percent
    pub fn base_rate_on(&self, day: NaiveDate) -> f64 {
        self.effective_start_rate() + self.cumulative_change_bps(day) as f64 / 100.0
    }

    /// Whether some event is dated exactly `day`, whatever its size
    pub fn is_meeting_date(&self, day: NaiveDate) -> bool {
        self.events.iter().any(|e| e.date == day)
    }
}
