//! Built-in scenarios

use super::data::{RateChangeEvent, Scenario, TurnPremiums};
use chrono::NaiveDate;

/// 2026 FOMC decision dates (month, day)
pub const FOMC_MEETINGS_2026: [(u32, u32); 8] = [
    (1, 28),
    (3, 18),
    (4, 29),
    (6, 17),
    (7, 29),
    (9, 16),
    (10, 28),
    (12, 9),
];

/// The 2026 FOMC decision dates as zero-size events
pub fn fomc_meetings_2026() -> Vec<RateChangeEvent> {
    FOMC_MEETINGS_2026
        .iter()
        .filter_map(|&(month, day)| NaiveDate::from_ymd_opt(2026, month, day))
        .map(|date| RateChangeEvent::new(date, 0))
        .collect()
}

impl Scenario {
    /// Constant rate, no events, no turns
    pub fn flat(rate: f64) -> Self {
        Self::new("Flat", rate)
    }

    /// SOFR and EFFR at 4.30, every 2026 meeting on hold, 5/10/25 bp turns
    pub fn base_case_2026() -> Self {
        Self {
            name: "Base Case 2026".to_string(),
            base_sofr: 4.30,
            base_effr: Some(4.30),
            events: fomc_meetings_2026(),
            turns: TurnPremiums::new(5.0, 10.0, 25.0),
        }
    }
}
