//! Expiry date calculator
//!
//! Adds the months bought by a payment to its billing date. When the
//! subscriber's first billing date is known, the result is moved back onto
//! that day-of-month, clamped to the length of the target month. This undoes
//! drift from earlier month-end clamps (Jan 31 -> Feb 29 -> Mar 31, not Mar 29).

use chrono::{Datelike, NaiveDate};

use super::calendar;
use super::rules::PlanRules;
use crate::error::{ExpiryError, Result};
use crate::payment::PaymentRecord;

/// Stateless calculator; safe to share across threads
#[derive(Debug, Clone, Default)]
pub struct ExpiryCalculator {
    rules: PlanRules,
}

impl ExpiryCalculator {
    /// Create a calculator with the standard plan rules
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a calculator with custom plan rules
    pub fn with_rules(rules: PlanRules) -> Result<Self> {
        rules.validate()?;
        Ok(Self { rules })
    }

    pub fn rules(&self) -> &PlanRules {
        &self.rules
    }

    /// Months bought by a payment amount
    pub fn added_months(&self, pay_amount: i64) -> u32 {
        self.rules.added_months(pay_amount)
    }

    /// Date on which the subscription lapses unless renewed
    pub fn calculate_expiry_date(&self, record: &PaymentRecord) -> Result<NaiveDate> {
        if record.pay_amount <= 0 {
            return Err(ExpiryError::InvalidArgument(format!(
                "pay amount must be positive, got {}",
                record.pay_amount
            )));
        }

        let added_months = self.added_months(record.pay_amount);
        if added_months == 0 {
            // Nothing bought: the anchor day must not pull expiry before billing
            return Ok(record.billing_date);
        }

        let candidate = calendar::add_months(record.billing_date, added_months).ok_or(
            ExpiryError::DateOutOfRange {
                date: record.billing_date,
                months: added_months,
            },
        )?;

        match record.anchor_day() {
            Some(anchor_day) => Ok(adjust_to_anchor_day(candidate, anchor_day)),
            None => Ok(candidate),
        }
    }
}

/// Move the candidate onto the anchor day, keeping its year and month
fn adjust_to_anchor_day(candidate: NaiveDate, anchor_day: u32) -> NaiveDate {
    if candidate.day() == anchor_day {
        return candidate;
    }

    let adjusted = calendar::with_day_clamped(candidate, anchor_day);
    log::debug!(
        "Adjusted expiry {} -> {} for anchor day {}",
        candidate, adjusted, anchor_day
    );
    adjusted
}
