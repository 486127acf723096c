//! Output structures for a full projection run

use crate::contracts::MonthlyContract;
use crate::curve::DailyRate;
use serde::{Deserialize, Serialize};

/// Daily path and monthly strip for one scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Scenario name
    pub scenario_name: String,

    /// One row per calendar day
    pub daily: Vec<DailyRate>,

    /// One contract per month
    pub contracts: Vec<MonthlyContract>,
}

impl ProjectionResult {
    /// Contract for a month index (0 = January)
    pub fn contract(&self, month: u32) -> Option<&MonthlyContract> {
        self.contracts.iter().find(|c| c.month == month)
    }

    /// Get summary statistics
    pub fn summary(&self) -> ProjectionSummary {
        let total_days = self.daily.len() as u32;
        let sum_rate: f64 = self.daily.iter().map(|r| r.final_rate).sum();
        let average_rate = if total_days > 0 {
            sum_rate / total_days as f64
        } else {
            0.0
        };

        let min_rate = self.daily.iter().map(|r| r.final_rate).fold(f64::INFINITY, f64::min);
        let max_rate = self.daily.iter().map(|r| r.final_rate).fold(f64::NEG_INFINITY, f64::max);

        ProjectionSummary {
            total_days,
            business_days: self.daily.iter().filter(|r| r.is_business_day()).count() as u32,
            turn_days: self.daily.iter().filter(|r| r.is_turn_day).count() as u32,
            meeting_days: self.daily.iter().filter(|r| r.is_meeting_date).count() as u32,
            average_rate,
            min_rate: if total_days > 0 { min_rate } else { 0.0 },
            max_rate: if total_days > 0 { max_rate } else { 0.0 },
            final_rate: self.daily.last().map(|r| r.final_rate).unwrap_or(0.0),
        }
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub total_days: u32,
    pub business_days: u32,
    pub turn_days: u32,
    pub meeting_days: u32,
    /// Calendar-day average of final rates over the year
    pub average_rate: f64,
    pub min_rate: f64,
    pub max_rate: f64,
    /// Final rate on December 31
    pub final_rate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_summary() {
        let result = ProjectionResult {
            scenario_name: "empty".to_string(),
            daily: Vec::new(),
            contracts: Vec::new(),
        };
        let summary = result.summary();
        assert_eq!(summary.total_days, 0);
        assert_eq!(summary.average_rate, 0.0);
        assert_eq!(summary.min_rate, 0.0);
        assert!(result.contract(0).is_none());
    }
}
