use std::collections::HashMap;
use std::path::Path;
use std::process::Command;

use anyhow::{anyhow, Result};

fn run_cli(extra_args: &[&str]) -> Result<HashMap<String, csv::StringRecord>> {
    let binary_path = env!("CARGO_BIN_EXE_stay-ledger");
    let samples = Path::new("samples");

    let output = Command::new(binary_path)
        .arg(samples.join("charges.csv"))
        .arg(samples.join("payments.csv"))
        .args(extra_args)
        .output()?;

    assert!(output.status.success());

    let mut reader = csv::Reader::from_reader(output.stdout.as_slice());
    let headers = reader.headers()?.clone();

    assert_eq!(
        headers.iter().collect::<Vec<_>>(),
        vec!["record", "customer", "guest", "booking", "issued", "day", "nights", "total", "paid", "outstanding", "status"]
    );

    let mut rows = HashMap::new();

    for record in reader.records() {
        let record = record?;
        rows.insert(record[0].to_string(), record);
    }

    Ok(rows)
}

#[test]
fn test_cli_prints_usage_without_arguments() -> Result<()> {
    let binary_path = env!("CARGO_BIN_EXE_stay-ledger");
    let output = Command::new(binary_path).output()?;

    assert!(!output.status.success());
    assert!(String::from_utf8(output.stderr)?.contains("Usage"));

    Ok(())
}

#[test]
fn test_cli_outputs_reconciled_ledger() -> Result<()> {
    let rows = run_cli(&[])?;

    assert_eq!(rows.len(), 5);

    let s1 = rows.get("s1").ok_or_else(|| anyhow!("s1 missing from output"))?;
    assert_eq!(&s1[1], "jane doe");
    assert_eq!(&s1[2], "Jane Doe");
    assert_eq!(&s1[8], "100.00");
    assert_eq!(&s1[9], "0.00");
    assert_eq!(&s1[10], "fully-paid");

    let s2 = rows.get("s2").ok_or_else(|| anyhow!("s2 missing from output"))?;
    assert_eq!(&s2[8], "50.00");
    assert_eq!(&s2[9], "50.00");
    assert_eq!(&s2[10], "unpaid");

    let s4 = rows.get("s4").ok_or_else(|| anyhow!("s4 missing from output"))?;
    assert_eq!(&s4[8], "80.00");
    assert_eq!(&s4[9], "0.00");
    assert_eq!(&s4[10], "fully-paid");

    let s5 = rows.get("s5").ok_or_else(|| anyhow!("s5 missing from output"))?;
    assert_eq!(&s5[1], "lee, ana");
    assert_eq!(&s5[2], "Lee, Ana");
    assert_eq!(&s5[8], "120.00");
    assert_eq!(&s5[10], "fully-paid");

    Ok(())
}

#[test]
fn test_cli_booking_classification_marks_partial_night() -> Result<()> {
    let rows = run_cli(&["error", "booking"])?;

    let statuses: Vec<_> = ["s1", "s2", "s3"].iter()
        .map(|id| rows.get(*id).map(|row| row[10].to_string()))
        .collect::<Option<_>>()
        .ok_or_else(|| anyhow!("booking rows missing from output"))?;

    assert_eq!(statuses, vec!["fully-paid", "partially-paid", "unpaid"]);

    Ok(())
}

#[test]
fn test_cli_unknown_log_level_still_reconciles() -> Result<()> {
    let rows = run_cli(&["chatty", "row"])?;

    let s4 = rows.get("s4").ok_or_else(|| anyhow!("s4 missing from output"))?;
    assert_eq!(&s4[10], "fully-paid");

    Ok(())
}
