//! Side-by-side comparison of two contract strips

use super::monthly::MonthlyContract;
use serde::{Deserialize, Serialize};

/// One month of scenario A against scenario B
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractComparison {
    pub month: u32,
    pub month_name: String,
    pub outright_a: f64,
    pub outright_b: f64,
    /// outright_a - outright_b
    pub outright_delta: f64,
    pub spread_a: Option<f64>,
    pub spread_b: Option<f64>,
    /// spread_a - spread_b, only when both spreads exist
    pub spread_delta: Option<f64>,
}

/// Pair contracts by month index. Months present in only one strip are skipped.
pub fn compare_contracts(a: &[MonthlyContract], b: &[MonthlyContract]) -> Vec<ContractComparison> {
    a.iter()
        .filter_map(|ca| {
            b.iter().find(|cb| cb.month == ca.month).map(|cb| ContractComparison {
                month: ca.month,
                month_name: ca.month_name.clone(),
                outright_a: ca.outright,
                outright_b: cb.outright,
                outright_delta: ca.outright - cb.outright,
                spread_a: ca.spread_1m,
                spread_b: cb.spread_1m,
                spread_delta: ca.spread_1m.zip(cb.spread_1m).map(|(sa, sb)| sa - sb),
            })
        })
        .collect()
}
