//! Payment records and ledger loading

mod data;
pub mod loader;

pub use data::PaymentRecord;
pub use loader::{load_payments, load_payments_from_reader, load_default_ledger, LedgerEntry};
