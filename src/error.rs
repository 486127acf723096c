//! Error types for the projection engine

use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, ProjectionError>;

/// Errors raised while loading inputs or building a projection
#[derive(Error, Debug)]
pub enum ProjectionError {
    /// Every calendar day of the month is a weekend or holiday
    #[error("no business day in {year}-{month:02}: every day is a weekend or holiday")]
    NoBusinessDay { year: i32, month: u32 },

    /// Date string is not a valid YYYY-MM-DD calendar date
    #[error("malformed date '{input}': expected YYYY-MM-DD")]
    MalformedDate { input: String },

    /// Projection year chrono cannot represent
    #[error("invalid projection year {year}")]
    InvalidYear { year: i32 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
