//! Monthly contract aggregation
//!
//! Rolls the daily path into one futures-style record per month:
//! - average rate over every calendar day (weekends and holidays included)
//! - outright price `100 - average`
//! - 1M spread and 1M fly as first and second differences of the outrights

use crate::curve::DailyRate;
use chrono::Datelike;
use serde::{Deserialize, Serialize};

pub const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// One contract month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyContract {
    /// Month index, 0 = January
    pub month: u32,
    pub month_name: String,
    pub year: i32,

    /// Simple average of daily final rates, in percent
    pub avg_rate: f64,

    /// 100 - avg_rate
    pub outright: f64,

    /// outright(this) - outright(next); None for the last month
    pub spread_1m: Option<f64>,

    /// spread(this) - spread(next); None for the last two months
    pub fly_1m: Option<f64>,
}

/// Running sum for one month
#[derive(Debug, Clone, Copy)]
struct MonthAccumulator {
    year: i32,
    sum_rate: f64,
    count: u32,
}

/// Aggregate daily rates into monthly contracts, in month order.
///
/// Only months with at least one day present produce a contract; spreads and
/// flies difference adjacent contracts in the result. An empty input gives an
/// empty result.
pub fn calculate_contracts(daily: &[DailyRate]) -> Vec<MonthlyContract> {
    let mut months: [Option<MonthAccumulator>; 12] = [None; 12];

    for rate in daily {
        let slot = &mut months[rate.date.month0() as usize];
        let acc = slot.get_or_insert(MonthAccumulator {
            year: rate.date.year(),
            sum_rate: 0.0,
            count: 0,
        });
        acc.sum_rate += rate.final_rate;
        acc.count += 1;
    }

    let mut contracts: Vec<MonthlyContract> = months
        .iter()
        .enumerate()
        .filter_map(|(m, acc)| {
            acc.map(|acc| {
                let avg_rate = acc.sum_rate / acc.count as f64;
                MonthlyContract {
                    month: m as u32,
                    month_name: MONTH_NAMES[m].to_string(),
                    year: acc.year,
                    avg_rate,
                    outright: 100.0 - avg_rate,
                    spread_1m: None,
                    fly_1m: None,
                }
            })
        })
        .collect();

    // Spreads need every outright; flies need every spread
    let spreads: Vec<f64> = contracts
        .windows(2)
        .map(|pair| pair[0].outright - pair[1].outright)
        .collect();
    for (contract, spread) in contracts.iter_mut().zip(&spreads) {
        contract.spread_1m = Some(*spread);
    }

    let flies: Vec<f64> = spreads.windows(2).map(|pair| pair[0] - pair[1]).collect();
    for (contract, fly) in contracts.iter_mut().zip(&flies) {
        contract.fly_1m = Some(*fly);
    }

    contracts
}
