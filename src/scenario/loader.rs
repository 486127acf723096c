//! Load scenarios from JSON
//!
//! ```json
//! {
//!   "name": "Base Case 2026",
//!   "baseSofr": 4.30,
//!   "baseEffr": null,
//!   "meetings": [{ "date": "2026-03-18", "hikeBps": -25 }],
//!   "turns": { "monthEnd": 5, "quarterEnd": 10, "yearEnd": 25 }
//! }
//! ```

use super::data::{RateChangeEvent, Scenario, TurnPremiums};
use crate::calendar::parse_date;
use crate::error::Result;
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Raw JSON document; dates stay as strings until validated
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ScenarioFile {
    #[serde(default = "default_name")]
    name: String,
    base_sofr: f64,
    #[serde(default)]
    base_effr: Option<f64>,
    #[serde(default, alias = "events")]
    meetings: Vec<EventRow>,
    #[serde(default)]
    turns: TurnRow,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EventRow {
    date: String,
    #[serde(alias = "changeBps")]
    hike_bps: i32,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TurnRow {
    #[serde(default)]
    month_end: f64,
    #[serde(default)]
    quarter_end: f64,
    #[serde(default)]
    year_end: f64,
}

fn default_name() -> String {
    "Unnamed".to_string()
}

impl ScenarioFile {
    fn into_scenario(self) -> Result<Scenario> {
        let events = self
            .meetings
            .into_iter()
            .map(|row| Ok(RateChangeEvent::new(parse_date(&row.date)?, row.hike_bps)))
            .collect::<Result<Vec<_>>>()?;

        Ok(Scenario {
            name: self.name,
            base_sofr: self.base_sofr,
            base_effr: self.base_effr,
            events,
            turns: TurnPremiums::new(self.turns.month_end, self.turns.quarter_end, self.turns.year_end),
        })
    }
}

/// Load a scenario from a JSON file
pub fn load_scenario<P: AsRef<Path>>(path: P) -> Result<Scenario> {
    let file = File::open(path)?;
    load_scenario_from_reader(BufReader::new(file))
}

/// Load a scenario from any reader
pub fn load_scenario_from_reader<R: std::io::Read>(reader: R) -> Result<Scenario> {
    let raw: ScenarioFile = serde_json::from_reader(reader)?;
    raw.into_scenario()
}

/// Load a scenario from a JSON string
pub fn parse_scenario(json: &str) -> Result<Scenario> {
    let raw: ScenarioFile = serde_json::from_str(json)?;
    raw.into_scenario()
}
