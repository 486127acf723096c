//! SOFR Projection - daily overnight-rate path and monthly futures strip
//!
//! This library provides:
//! - Daily rate path construction from a starting rate, rate-change events and turn premiums
//! - Business-day, weekend and holiday handling with month-end turn anchors
//! - Monthly contract aggregation (average rate, outright, 1M spread and fly)
//! - Multi-scenario runs and side-by-side comparison

pub mod error;
pub mod calendar;
pub mod scenario;
pub mod curve;
pub mod contracts;
pub mod projection;
pub mod runner;

// Re-export commonly used types
pub use error::{ProjectionError, Result};
pub use calendar::{DayType, Holiday, HolidayCalendar};
pub use scenario::{RateChangeEvent, Scenario, TurnPremiums};
pub use curve::{generate_daily_rates, DailyCurveBuilder, DailyRate, ProjectionConfig};
pub use contracts::{calculate_contracts, compare_contracts, ContractComparison, MonthlyContract};
pub use projection::{ProjectionResult, ProjectionSummary};
pub use runner::ScenarioRunner;
