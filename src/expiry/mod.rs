//! Expiry date calculation from payment records

pub mod calendar;
mod calculator;
mod rules;

pub use calculator::ExpiryCalculator;
pub use rules::PlanRules;
