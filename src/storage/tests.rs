use super::{LedgerStorage, Storage};
use crate::models::{CustomerLedger, LedgerError, StayDayCharge};
use crate::types::CustomerKey;
use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;

fn create_charge(record_id: &str, customer: &str, total: i64) -> Result<StayDayCharge> {
    Ok(StayDayCharge {
        record_id: record_id.to_string(),
        booking_id: None,
        customer_name: customer.to_string(),
        customer: CustomerKey::normalize(customer),
        total: Decimal::from(total),
        paid: Decimal::ZERO,
        day_of_stay: 1,
        total_nights: 1,
        issued: NaiveDate::from_ymd_opt(2024, 5, 1).ok_or_else(|| anyhow!("invalid test date"))?
    })
}

#[test]
fn test_storage_basic_load_and_save_operations() -> Result<()> {
    let storage = LedgerStorage::new();
    let customer = CustomerKey::normalize("Jane");

    assert!(storage.load(&customer).is_none());

    let mut ledger = CustomerLedger::new(customer.clone());
    ledger.insert_charge(create_charge("r1", "Jane", 100)?)?;
    storage.save(customer.clone(), ledger);

    let retrieved_ledger = storage.load(&customer).ok_or_else(|| anyhow!("Ledger not found in storage"))?;

    assert_eq!(retrieved_ledger.customer, customer);
    assert_eq!(retrieved_ledger.total_outstanding(), Decimal::from(100));
    assert!(storage.load(&customer).is_none());

    Ok(())
}

#[test]
fn test_storage_groups_charges_by_normalized_customer() -> Result<()> {
    let storage = LedgerStorage::new();
    storage.insert_charge(create_charge("r1", "Jane Doe", 100)?)?;
    storage.insert_charge(create_charge("r2", "  JANE   doe", 50)?)?;
    storage.insert_charge(create_charge("r3", "John", 70)?)?;

    assert_eq!(storage.iter().count(), 2);

    let ledger = storage.load(&CustomerKey::normalize("jane doe")).ok_or_else(|| anyhow!("Ledger missing"))?;

    assert_eq!(ledger.records().len(), 2);
    assert_eq!(ledger.total_outstanding(), Decimal::from(150));

    Ok(())
}

#[test]
fn test_storage_rejects_duplicate_charge_records() -> Result<()> {
    let storage = LedgerStorage::new();
    storage.insert_charge(create_charge("r1", "Jane", 100)?)?;

    let result = storage.insert_charge(create_charge("r1", "Jane", 100)?);

    assert!(matches!(result, Err(LedgerError::DuplicateRecord { .. })));

    Ok(())
}

#[test]
fn test_storage_snapshot_is_ordered_by_customer() -> Result<()> {
    let storage = LedgerStorage::new();
    storage.insert_charge(create_charge("r1", "Zoe", 10)?)?;
    storage.insert_charge(create_charge("r2", "Adam", 10)?)?;
    storage.insert_charge(create_charge("r3", "mia", 10)?)?;

    let customers: Vec<_> = storage.snapshot().into_iter().map(|ledger| ledger.customer.to_string()).collect();

    assert_eq!(customers, vec!["adam", "mia", "zoe"]);
    assert_eq!(storage.iter().count(), 3);

    Ok(())
}
