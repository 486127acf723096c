//! Projection run output

mod result;

pub use result::{ProjectionResult, ProjectionSummary};
