//! Scenario runner for batch projections
//!
//! Holds the holiday calendar and configuration once, then runs any number of
//! scenarios against them. Runs share nothing, so batches go through rayon.

use crate::calendar::HolidayCalendar;
use crate::contracts::{calculate_contracts, compare_contracts, ContractComparison};
use crate::curve::{DailyCurveBuilder, ProjectionConfig};
use crate::error::Result;
use crate::projection::ProjectionResult;
use crate::scenario::Scenario;
use rayon::prelude::*;

/// Pre-configured scenario runner
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new(HolidayCalendar::fallback_us_2026());
///
/// for hike in [-25, 0, 25] {
///     let scenario = Scenario::base_case_2026().with_event(date, hike);
///     let result = runner.run(&scenario)?;
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    holidays: HolidayCalendar,
    builder: DailyCurveBuilder,
}

impl ScenarioRunner {
    /// Create runner with default config
    pub fn new(holidays: HolidayCalendar) -> Self {
        Self::with_config(holidays, ProjectionConfig::default())
    }

    /// Create runner with the built-in 2026 holiday table
    pub fn with_fallback_holidays() -> Self {
        Self::new(HolidayCalendar::fallback_us_2026())
    }

    pub fn with_config(holidays: HolidayCalendar, config: ProjectionConfig) -> Self {
        Self {
            holidays,
            builder: DailyCurveBuilder::new(config),
        }
    }

    /// Build the daily path and monthly strip for one scenario
    pub fn run(&self, scenario: &Scenario) -> Result<ProjectionResult> {
        let daily = self.builder.build(scenario, &self.holidays)?;
        let contracts = calculate_contracts(&daily);

        log::info!(
            "Projected '{}' for {}: {} days, {} contracts",
            scenario.name,
            self.builder.config().year,
            daily.len(),
            contracts.len()
        );

        Ok(ProjectionResult {
            scenario_name: scenario.name.clone(),
            daily,
            contracts,
        })
    }

    /// Run many scenarios in parallel; results keep input order
    pub fn run_scenarios(&self, scenarios: &[Scenario]) -> Vec<Result<ProjectionResult>> {
        scenarios.par_iter().map(|scenario| self.run(scenario)).collect()
    }

    /// Project both scenarios and compare their contract strips
    pub fn compare(&self, a: &Scenario, b: &Scenario) -> Result<Vec<ContractComparison>> {
        let result_a = self.run(a)?;
        let result_b = self.run(b)?;
        Ok(compare_contracts(&result_a.contracts, &result_b.contracts))
    }

    pub fn holidays(&self) -> &HolidayCalendar {
        &self.holidays
    }

    pub fn config(&self) -> &ProjectionConfig {
        self.builder.config()
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::with_fallback_holidays()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProjectionError;
    use chrono::{Datelike, NaiveDate};

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, m, d).unwrap()
    }

    #[test]
    fn test_run_base_case() {
        let runner = ScenarioRunner::default();
        let result = runner.run(&Scenario::base_case_2026()).unwrap();

        assert_eq!(result.scenario_name, "Base Case 2026");
        assert_eq!(result.daily.len(), 365);
        assert_eq!(result.contracts.len(), 12);

        let summary = result.summary();
        assert_eq!(summary.meeting_days, 8);
        assert!(summary.turn_days >= 12);
        assert!(summary.max_rate > summary.min_rate);
        assert!((summary.min_rate - 4.30).abs() < 1e-10);
    }

    #[test]
    fn test_scenario_runner_batch() {
        let runner = ScenarioRunner::default();

        let scenarios: Vec<_> = [-25, 0, 25]
            .iter()
            .map(|&bps| Scenario::base_case_2026().with_event(date(3, 18), bps))
            .collect();

        let results: Vec<_> = runner
            .run_scenarios(&scenarios)
            .into_iter()
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(results.len(), 3);

        // Higher path should give lower December outright
        let dec = |r: &ProjectionResult| r.contract(11).unwrap().outright;
        assert!(dec(&results[0]) > dec(&results[1]));
        assert!(dec(&results[1]) > dec(&results[2]));
    }

    #[test]
    fn test_batch_keeps_failures_per_scenario() {
        let march = date(3, 1).iter_days().take_while(|d| d.month() == 3);
        let runner = ScenarioRunner::new(HolidayCalendar::from_dates(march));

        let results = runner.run_scenarios(&[Scenario::flat(4.30), Scenario::flat(4.55)]);
        assert_eq!(results.len(), 2);
        assert!(results
            .iter()
            .all(|r| matches!(r, Err(ProjectionError::NoBusinessDay { month: 3, .. }))));
    }

    #[test]
    fn test_compare() {
        let runner = ScenarioRunner::new(HolidayCalendar::new());
        let rows = runner
            .compare(&Scenario::flat(4.55), &Scenario::flat(4.30))
            .unwrap();
        assert_eq!(rows.len(), 12);
        assert!(rows.iter().all(|r| (r.outright_delta + 0.25).abs() < 1e-10));
    }

    #[test]
    fn test_custom_year() {
        let runner = ScenarioRunner::with_config(HolidayCalendar::new(), ProjectionConfig::for_year(2028));
        let result = runner.run(&Scenario::flat(4.30)).unwrap();
        assert_eq!(result.daily.len(), 366);
        assert!(result.contracts.iter().all(|c| c.year == 2028));
        assert_eq!(runner.config().year, 2028);
    }
}
