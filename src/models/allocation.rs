use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::errors::LedgerError;
use crate::models::StayDayCharge;
use crate::types::CustomerKey;

/// Outcome of a payment, in the shape the booking front-end formats.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkPaymentResult {
    /// Number of records that received a portion of the payment.
    pub processed_payments: usize,
    /// Amount absorbed by outstanding debt.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,
    /// Surplus that exceeded the outstanding debt; never negative.
    #[serde(with = "rust_decimal::serde::float")]
    pub remaining_amount: Decimal
}

/// A record after allocation together with the portion it received.
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerUpdate {
    pub record: StayDayCharge,
    pub portion: Decimal
}

#[derive(Debug, Clone, PartialEq)]
pub struct BulkAllocation {
    pub result: BulkPaymentResult,
    pub updates: Vec<LedgerUpdate>
}

/// Distributes `amount` over the customer's open records, oldest issue date
/// first (ties broken by record id).
///
/// Any surplus is reported in `remaining_amount` rather than rejected. The
/// input records are left untouched; the caller persists `updates`.
///
/// # Errors
/// `InvalidAmount` if `amount <= 0`, `NoOutstandingBalance` if the customer
/// has no open record in `records`.
pub fn allocate_bulk_payment(records: &[StayDayCharge], customer: &CustomerKey, amount: Decimal) -> Result<BulkAllocation, LedgerError> {
    let mut open: Vec<&StayDayCharge> = records.iter()
        .filter(|record| &record.customer == customer && !record.is_fully_paid())
        .collect();

    if amount <= Decimal::ZERO {
        let outstanding = open.iter().fold(Decimal::ZERO, |sum, record| sum.saturating_add(record.outstanding()));
        return Err(LedgerError::invalid_bulk_amount(customer, amount, outstanding));
    }

    if open.is_empty() {
        return Err(LedgerError::no_outstanding_balance(customer));
    }

    open.sort_by(|a, b| a.issued.cmp(&b.issued).then_with(|| a.record_id.cmp(&b.record_id)));

    let mut remaining = amount;
    let mut updates = Vec::new();

    for record in open {
        if remaining.is_zero() {
            break;
        }

        let portion = remaining.min(record.outstanding());
        let updated = record.apply_payment(portion)?;
        remaining -= portion;

        updates.push(LedgerUpdate { record: updated, portion });
    }

    Ok(BulkAllocation {
        result: BulkPaymentResult {
            processed_payments: updates.len(),
            total_amount: amount - remaining,
            remaining_amount: remaining
        },
        updates
    })
}
