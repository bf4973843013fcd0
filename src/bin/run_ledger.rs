//! Run expiry calculation for an entire payment ledger
//!
//! Reads payments.csv (or the path given as the first argument) and writes
//! expiry_report.csv

use anyhow::anyhow;
use subscription_expiry::{
    batch::summarize,
    payment::{load_default_ledger, load_payments, loader::DEFAULT_LEDGER_PATH},
    BatchRunner,
};
use std::time::Instant;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let input = std::env::args().nth(1);

    let start = Instant::now();
    println!("Loading payments from {}...", input.as_deref().unwrap_or(DEFAULT_LEDGER_PATH));

    let entries = match &input {
        Some(path) => load_payments(path),
        None => load_default_ledger(),
    }
    .map_err(|e| anyhow!("Failed to load payments: {}", e))?;
    println!("Loaded {} payments in {:?}", entries.len(), start.elapsed());

    println!("Computing expiry dates...");
    let calc_start = Instant::now();
    let runner = BatchRunner::new();
    let rows = runner.run(&entries);
    println!("Computation complete in {:?}", calc_start.elapsed());

    let output_path = "expiry_report.csv";
    let mut writer = csv::Writer::from_path(output_path)?;
    for row in &rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    println!("Output written to {}", output_path);

    let summary = summarize(&rows);
    println!("\nLedger Summary:");
    println!("  Payments:  {}", summary.total);
    println!("  Succeeded: {}", summary.succeeded);
    println!("  Failed:    {}", summary.failed);
    println!("  Anchored:  {}", summary.anchored);

    for row in rows.iter().filter(|r| r.error.is_some()).take(10) {
        println!(
            "  Payment {:>6}: {}",
            row.payment_id,
            row.error.as_deref().unwrap_or_default()
        );
    }

    println!("\nTotal time: {:?}", start.elapsed());
    Ok(())
}
