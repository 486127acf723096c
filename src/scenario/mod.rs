//! Scenario inputs: starting rates, rate-change events and turn premiums

mod data;
mod presets;
pub mod loader;

pub use data::{RateChangeEvent, Scenario, TurnPremiums};
pub use presets::{fomc_meetings_2026, FOMC_MEETINGS_2026};
pub use loader::{load_scenario, load_scenario_from_reader, parse_scenario};
