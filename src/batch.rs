//! Batch runner for ledgers of payments
//!
//! Shares one calculator across all rayon workers. Individual failures are
//! recorded on their row and never abort the batch.

use chrono::NaiveDate;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::expiry::{ExpiryCalculator, PlanRules};
use crate::payment::LedgerEntry;

/// One row of batch output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpiryRow {
    pub payment_id: u32,
    pub billing_date: NaiveDate,
    pub first_billing_date: Option<NaiveDate>,
    pub pay_amount: i64,
    pub added_months: u32,
    pub expiry_date: Option<NaiveDate>,
    pub error: Option<String>,
}

/// Counts over a finished batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub anchored: usize,
}

/// Pre-configured runner for computing many expiry dates
///
/// # Example
/// ```ignore
/// let entries = load_payments("payments.csv")?;
/// let runner = BatchRunner::new();
/// let rows = runner.run(&entries);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BatchRunner {
    calculator: ExpiryCalculator,
}

impl BatchRunner {
    /// Create runner with the standard plan rules
    pub fn new() -> Self {
        Self::default()
    }

    /// Create runner with custom plan rules
    pub fn with_rules(rules: PlanRules) -> Result<Self> {
        Ok(Self {
            calculator: ExpiryCalculator::with_rules(rules)?,
        })
    }

    pub fn calculator(&self) -> &ExpiryCalculator {
        &self.calculator
    }

    /// Compute a single entry
    pub fn run_one(&self, entry: &LedgerEntry) -> ExpiryRow {
        let record = &entry.record;
        let (expiry_date, error) = match self.calculator.calculate_expiry_date(record) {
            Ok(date) => (Some(date), None),
            Err(e) => {
                log::warn!("Payment {}: {}", entry.payment_id, e);
                (None, Some(e.to_string()))
            }
        };

        ExpiryRow {
            payment_id: entry.payment_id,
            billing_date: record.billing_date,
            first_billing_date: record.first_billing_date,
            pay_amount: record.pay_amount,
            added_months: self.calculator.added_months(record.pay_amount),
            expiry_date,
            error,
        }
    }

    /// Compute all entries in parallel; output order matches input order
    pub fn run(&self, entries: &[LedgerEntry]) -> Vec<ExpiryRow> {
        let rows: Vec<ExpiryRow> = entries.par_iter().map(|entry| self.run_one(entry)).collect();
        log::info!("Computed {} expiry dates", rows.len());
        rows
    }

    /// Compute all entries sequentially
    pub fn run_sequential(&self, entries: &[LedgerEntry]) -> Vec<ExpiryRow> {
        entries.iter().map(|entry| self.run_one(entry)).collect()
    }
}

/// Summarize a batch of rows
pub fn summarize(rows: &[ExpiryRow]) -> BatchSummary {
    rows.iter().fold(BatchSummary::default(), |mut summary, row| {
        summary.total += 1;
        if row.expiry_date.is_some() {
            summary.succeeded += 1;
        } else {
            summary.failed += 1;
        }
        if row.first_billing_date.is_some() {
            summary.anchored += 1;
        }
        summary
    })
}
