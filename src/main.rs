//! Subscription Expiry CLI
//!
//! Command-line interface for computing expiry dates

use anyhow::{anyhow, Context};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use subscription_expiry::{
    batch::summarize,
    payment::load_payments,
    BatchRunner, ExpiryCalculator, ExpiryRow, PasswordStrengthMeter, PaymentRecord, PlanRules,
};

#[derive(Debug, Parser)]
#[command(name = "subscription-expiry", version, about = "Subscription expiry date calculator")]
struct Cli {
    /// JSON file overriding the plan rules
    #[arg(long, global = true)]
    rules: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compute the expiry date of a single payment
    Expiry {
        /// Date the payment was charged (YYYY-MM-DD)
        #[arg(long)]
        billing_date: NaiveDate,

        /// Amount paid, in minor currency units
        #[arg(long, allow_negative_numbers = true)]
        pay_amount: i64,

        /// Date of the subscriber's first payment (YYYY-MM-DD)
        #[arg(long)]
        first_billing_date: Option<NaiveDate>,
    },
    /// Compute expiry dates for every payment in a CSV ledger
    Ledger {
        /// Ledger with columns payment_id,billing_date,first_billing_date,pay_amount
        input: PathBuf,

        /// Output file (stdout if omitted)
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Write JSON instead of CSV
        #[arg(long)]
        json: bool,
    },
    /// Classify the strength of a password
    Password {
        password: String,
    },
}

fn load_rules(path: Option<&Path>) -> anyhow::Result<PlanRules> {
    match path {
        Some(path) => PlanRules::from_json_path(path)
            .map_err(|e| anyhow!("{}", e))
            .with_context(|| format!("Failed to load plan rules from {}", path.display())),
        None => Ok(PlanRules::default()),
    }
}

fn write_rows<W: Write>(writer: W, rows: &[ExpiryRow], json: bool) -> anyhow::Result<()> {
    if json {
        serde_json::to_writer_pretty(writer, rows)?;
    } else {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for row in rows {
            csv_writer.serialize(row)?;
        }
        csv_writer.flush()?;
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let rules = load_rules(cli.rules.as_deref())?;

    match cli.command {
        Command::Expiry { billing_date, pay_amount, first_billing_date } => {
            let record = PaymentRecord {
                billing_date,
                first_billing_date,
                pay_amount,
            };
            let calculator = ExpiryCalculator::with_rules(rules)?;
            let expiry = calculator.calculate_expiry_date(&record)?;
            println!("{}", expiry);
        }
        Command::Ledger { input, output, json } => {
            let entries = load_payments(&input)
                .map_err(|e| anyhow!("{}", e))
                .with_context(|| format!("Failed to load ledger {}", input.display()))?;

            let runner = BatchRunner::with_rules(rules)?;
            let rows = runner.run(&entries);

            match output {
                Some(path) => {
                    let file = File::create(&path)
                        .with_context(|| format!("Failed to create {}", path.display()))?;
                    write_rows(file, &rows, json)?;
                }
                None => write_rows(io::stdout().lock(), &rows, json)?,
            }

            let summary = summarize(&rows);
            eprintln!(
                "{} payments: {} ok, {} failed ({} anchored)",
                summary.total, summary.succeeded, summary.failed, summary.anchored
            );
        }
        Command::Password { password } => {
            let strength = PasswordStrengthMeter::new().meter(Some(&password));
            println!("{}", strength);
        }
    }

    Ok(())
}
