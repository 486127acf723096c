//! Monthly contract-equivalent values and scenario comparison

mod comparison;
mod monthly;

pub use comparison::{compare_contracts, ContractComparison};
pub use monthly::{calculate_contracts, MonthlyContract, MONTH_NAMES};
