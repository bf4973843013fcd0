//! Load payment ledgers from CSV

use super::PaymentRecord;
use crate::error::ExpiryError;
use chrono::NaiveDate;
use csv::Reader;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::path::Path;

/// Default ledger location used by the batch binary
pub const DEFAULT_LEDGER_PATH: &str = "payments.csv";

/// A payment record together with its ledger identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub payment_id: u32,
    pub record: PaymentRecord,
}

/// Raw CSV row matching the ledger columns
#[derive(Debug, Deserialize)]
struct CsvRow {
    payment_id: u32,
    billing_date: Option<NaiveDate>,
    first_billing_date: Option<NaiveDate>,
    pay_amount: i64,
}

impl CsvRow {
    fn to_entry(self) -> Result<LedgerEntry, Box<dyn Error>> {
        let billing_date = self.billing_date.ok_or_else(|| {
            ExpiryError::InvalidArgument(format!(
                "payment {} has no billing date",
                self.payment_id
            ))
        })?;

        Ok(LedgerEntry {
            payment_id: self.payment_id,
            record: PaymentRecord {
                billing_date,
                first_billing_date: self.first_billing_date,
                pay_amount: self.pay_amount,
            },
        })
    }
}

/// Load all payments from a CSV file
pub fn load_payments<P: AsRef<Path>>(path: P) -> Result<Vec<LedgerEntry>, Box<dyn Error>> {
    let reader = Reader::from_path(path)?;
    collect_entries(reader)
}

/// Load payments from any reader (e.g., string buffer, stdin)
pub fn load_payments_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<LedgerEntry>, Box<dyn Error>> {
    collect_entries(Reader::from_reader(reader))
}

/// Load payments from the default ledger location
pub fn load_default_ledger() -> Result<Vec<LedgerEntry>, Box<dyn Error>> {
    load_payments(DEFAULT_LEDGER_PATH)
}

fn collect_entries<R: std::io::Read>(mut reader: Reader<R>) -> Result<Vec<LedgerEntry>, Box<dyn Error>> {
    let mut entries = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        entries.push(row.to_entry()?);
    }

    log::debug!("Loaded {} ledger entries", entries.len());
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEDGER: &str = "\
payment_id,billing_date,first_billing_date,pay_amount
1,2024-03-15,,20000
2,2024-01-31,2024-01-31,10000
3,2024-02-29,2024-01-31,10000
";

    #[test]
    fn test_load_payments_from_reader() {
        let entries = load_payments_from_reader(LEDGER.as_bytes()).expect("Failed to load ledger");
        assert_eq!(entries.len(), 3);

        let first = &entries[0];
        assert_eq!(first.payment_id, 1);
        assert_eq!(first.record.first_billing_date, None);
        assert_eq!(first.record.pay_amount, 20_000);

        let third = &entries[2];
        assert_eq!(third.payment_id, 3);
        assert_eq!(third.record.billing_date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert_eq!(third.record.anchor_day(), Some(31));
    }

    #[test]
    fn test_missing_billing_date_is_rejected() {
        let ledger = "payment_id,billing_date,first_billing_date,pay_amount\n7,,,10000\n";
        let err = load_payments_from_reader(ledger.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("payment 7 has no billing date"));
    }

    #[test]
    fn test_malformed_date_is_rejected() {
        let ledger = "payment_id,billing_date,first_billing_date,pay_amount\n1,2023-02-30,,10000\n";
        assert!(load_payments_from_reader(ledger.as_bytes()).is_err());
    }
}
