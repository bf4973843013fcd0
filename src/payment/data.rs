//! Payment record value type

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A single payment charged against a subscription
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PaymentRecord {
    /// Date this payment was charged
    pub billing_date: NaiveDate,

    /// Date of the subscriber's very first payment, if known.
    /// Only its day-of-month is ever read.
    #[serde(default)]
    pub first_billing_date: Option<NaiveDate>,

    /// Amount in minor currency units
    pub pay_amount: i64,
}

impl PaymentRecord {
    /// Create a record with no first billing date
    pub fn new(billing_date: NaiveDate, pay_amount: i64) -> Self {
        Self {
            billing_date,
            first_billing_date: None,
            pay_amount,
        }
    }

    /// Create a record anchored to the subscriber's first billing date
    pub fn with_first_billing_date(
        billing_date: NaiveDate,
        first_billing_date: NaiveDate,
        pay_amount: i64,
    ) -> Self {
        Self {
            billing_date,
            first_billing_date: Some(first_billing_date),
            pay_amount,
        }
    }

    /// Day-of-month renewals should land on, when the first billing date is known
    pub fn anchor_day(&self) -> Option<u32> {
        self.first_billing_date.map(|d| d.day())
    }

    pub fn is_anchored(&self) -> bool {
        self.first_billing_date.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_anchor_day() {
        let unanchored = PaymentRecord::new(date(2024, 3, 15), 10_000);
        assert_eq!(unanchored.anchor_day(), None);
        assert!(!unanchored.is_anchored());

        let anchored = PaymentRecord::with_first_billing_date(date(2024, 2, 29), date(2024, 1, 31), 10_000);
        assert_eq!(anchored.anchor_day(), Some(31));
        assert!(anchored.is_anchored());
    }

    #[test]
    fn test_json_shape() {
        let record: PaymentRecord = serde_json::from_str(
            r#"{"billing_date":"2024-01-31","pay_amount":10000}"#,
        ).unwrap();
        assert_eq!(record, PaymentRecord::new(date(2024, 1, 31), 10_000));
    }
}
