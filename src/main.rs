mod actors;
mod cli;
mod engine;
mod models;
mod storage;
mod types;

use std::io::{stderr, stdout, BufWriter};
use std::process::exit;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use tracing::{debug, info};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt;

use crate::cli::{CliOptions, USAGE};
use crate::engine::ReconciliationEngine;
use crate::models::ClassificationMode;
use crate::storage::LedgerStorage;

#[tokio::main]
async fn main() -> Result<()> {
    let Some(options) = CliOptions::from_args(std::env::args().skip(1)) else {
        eprintln!("{USAGE}");
        exit(1);
    };

    init_stderr_logging(options.log_level);

    let storage = Arc::new(LedgerStorage::new());
    let engine = ReconciliationEngine::new(storage.clone());

    let started = Instant::now();
    engine.run(&options.charges_path, &options.payments_path).await?;
    info!("Reconciled payments in: {:?}", started.elapsed());

    write_results_to_stdout(&storage, options.mode)?;

    Ok(())
}

/// stdout carries the ledger, so diagnostics go to stderr.
fn init_stderr_logging(level: LevelFilter) {
    fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(stderr)
        .init();
}

fn write_results_to_stdout(storage: &LedgerStorage, mode: ClassificationMode) -> Result<()> {
    let mut output = csv::Writer::from_writer(BufWriter::new(stdout().lock()));

    output.write_record(["record", "customer", "guest", "booking", "issued", "day", "nights", "total", "paid", "outstanding", "status"])?;

    for ledger in storage.snapshot() {
        let balance = ledger.summary();

        info!(
            "Customer [{}]: charged [{}], paid [{}], outstanding [{}] over {} open record(s)",
            balance.customer, balance.total_charged, balance.total_paid, balance.outstanding, balance.open_records
        );

        for entry in ledger.history() {
            debug!(
                "Payment [{}] applied [{}] to record [{}] ({})",
                entry.payment_id, entry.portion, entry.record_id, entry.note.as_deref().unwrap_or("no note")
            );
        }

        for (record, status) in ledger.classify(mode) {
            output.write_record([
                record.record_id.clone(),
                record.customer.to_string(),
                record.customer_name.clone(),
                record.booking_id.clone().unwrap_or_default(),
                record.issued.to_string(),
                record.day_of_stay.to_string(),
                record.total_nights.to_string(),
                format!("{:.2}", record.total),
                format!("{:.2}", record.paid),
                format!("{:.2}", record.outstanding()),
                status.to_string()
            ])?;
        }
    }

    output.flush()?;

    Ok(())
}
