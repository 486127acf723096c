//! Daily curve construction

mod builder;
mod daily;
mod turns;

pub use builder::{
    generate_daily_rates, DailyCurveBuilder, ProjectionConfig, DEFAULT_PROJECTION_YEAR, DEFAULT_TURN_TOLERANCE,
};
pub use daily::DailyRate;
pub use turns::{TurnAnchors, TurnBucket};
