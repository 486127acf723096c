//! Per-day output of the curve builder

use crate::calendar::DayType;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One calendar day of the projected rate path.
///
/// `final_rate == base_rate + turn_premium` on every day. On non-business days
/// that carry the last business rate flat, `turn_premium` is back-derived from
/// that identity and may be non-zero or negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRate {
    pub date: NaiveDate,
    pub day_type: DayType,

    /// Starting rate plus events effective on this day, in percent
    pub base_rate: f64,

    /// Turn premium in percentage points
    pub turn_premium: f64,

    /// Rate used for averaging, in percent
    pub final_rate: f64,

    /// An event is dated exactly this day
    pub is_meeting_date: bool,

    /// Turn premium is distinguishable from zero
    pub is_turn_day: bool,
}

impl DailyRate {
    /// Turn premium in basis points
    pub fn turn_premium_bps(&self) -> f64 {
        self.turn_premium * 100.0
    }

    pub fn is_business_day(&self) -> bool {
        self.day_type.is_business()
    }
}
