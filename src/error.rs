//! Error types for expiry calculation

use chrono::NaiveDate;
use thiserror::Error;

/// Result type alias for expiry operations.
pub type Result<T> = std::result::Result<T, ExpiryError>;

/// Errors that can occur while computing an expiry date.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpiryError {
    /// Payment input that the calculator refuses to interpret.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Month addition left chrono's representable date range.
    #[error("Date out of range: {date} plus {months} months")]
    DateOutOfRange { date: NaiveDate, months: u32 },

    /// Plan rules that cannot drive the duration mapping.
    #[error("Invalid plan rules: {0}")]
    InvalidConfig(String),
}
