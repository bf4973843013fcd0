//! Subscription Expiry - renewal date calculation from payment records
//!
//! This library provides:
//! - Payment record values and CSV ledger loading
//! - Expiry date calculation with first-billing-day anchoring
//! - Configurable plan rules (monthly unit, annual plan)
//! - Parallel batch processing of ledgers
//! - A standalone password strength meter

pub mod error;
pub mod payment;
pub mod expiry;
pub mod batch;
pub mod password;

// Re-export commonly used types
pub use error::{ExpiryError, Result};
pub use payment::{PaymentRecord, LedgerEntry};
pub use expiry::{ExpiryCalculator, PlanRules};
pub use batch::{BatchRunner, ExpiryRow, BatchSummary};
pub use password::{PasswordStrength, PasswordStrengthMeter};
