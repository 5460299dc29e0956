use crate::models::errors::LedgerError;
use crate::models::{
    allocate_bulk_payment, classify_all, BulkPaymentResult, ClassificationMode, LedgerUpdate, PaymentEntry, PaymentKind,
    PaymentRequest, PaymentStatus, StayDayCharge
};
use crate::types::{CustomerKey, PaymentId};
use rust_decimal::Decimal;

/// Balance summary of one customer across all their bookings.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerBalance {
    pub customer: CustomerKey,
    pub total_charged: Decimal,
    pub total_paid: Decimal,
    pub outstanding: Decimal,
    pub open_records: usize
}

/// Represents every charge row of a single normalized customer.
///
/// This struct owns the rows payments are applied to and keeps the history
/// of applied portions, which is what gets persisted after a payment.
#[derive(Debug, Clone)]
pub struct CustomerLedger {
    /// The normalized guest key all rows share.
    pub customer: CustomerKey,
    /// Charge rows, kept in issue order.
    records: Vec<StayDayCharge>,
    /// Every portion applied through this ledger, in application order.
    history: Vec<PaymentEntry>
}

impl CustomerLedger {
    /// Creates a new, empty ledger for the given customer.
    pub fn new(customer: CustomerKey) -> Self {
        Self {
            customer,
            records: Vec::new(),
            history: Vec::new()
        }
    }

    /// Adds a charge row issued by the booking system.
    ///
    /// # Errors
    /// `DuplicateRecord` if a row with the same id is already present.
    pub fn insert_charge(&mut self, charge: StayDayCharge) -> Result<(), LedgerError> {
        if self.records.iter().any(|record| record.record_id == charge.record_id) {
            return Err(LedgerError::duplicate_record(&self.customer, &charge.record_id))
        }

        let position = self.records.partition_point(|record| {
            (record.issued, &record.record_id) <= (charge.issued, &charge.record_id)
        });

        self.records.insert(position, charge);

        Ok(())
    }

    /// Applies a single payment action to the ledger.
    ///
    /// Either every update of the payment is written or, on error, none is.
    ///
    /// # Errors
    /// Returns `LedgerError` if:
    /// - The amount is not positive or exceeds what the target record owes.
    /// - A single payment has no record id, or references an unknown record.
    /// - A bulk payment targets a customer with nothing outstanding.
    pub fn apply(&mut self, payment: &PaymentRequest) -> Result<BulkPaymentResult, LedgerError> {
        match payment.kind {
            PaymentKind::Single => self.pay_record(payment),
            PaymentKind::Bulk => self.pay_bulk(payment)
        }
    }

    /// Sum of the outstanding balance over all rows.
    pub fn total_outstanding(&self) -> Decimal {
        self.records.iter()
            .fold(Decimal::ZERO, |sum, record| sum.saturating_add(record.outstanding()))
    }

    pub fn summary(&self) -> CustomerBalance {
        CustomerBalance {
            customer: self.customer.clone(),
            total_charged: self.records.iter().fold(Decimal::ZERO, |sum, record| sum.saturating_add(record.total)),
            total_paid: self.records.iter().fold(Decimal::ZERO, |sum, record| sum.saturating_add(record.paid)),
            outstanding: self.total_outstanding(),
            open_records: self.records.iter().filter(|record| !record.is_fully_paid()).count()
        }
    }

    /// Rows in issue order with their per-night payment status.
    pub fn classify(&self, mode: ClassificationMode) -> Vec<(&StayDayCharge, PaymentStatus)> {
        classify_all(&self.records, mode)
    }

    pub fn records(&self) -> &[StayDayCharge] {
        &self.records
    }

    pub fn history(&self) -> &[PaymentEntry] {
        &self.history
    }

    fn pay_record(&mut self, payment: &PaymentRequest) -> Result<BulkPaymentResult, LedgerError> {
        let Some(record_id) = payment.record_id.as_deref() else {
            return Err(LedgerError::record_required(&self.customer, &payment.payment_id))
        };

        let record = self.records.iter()
            .find(|record| record.record_id == record_id)
            .ok_or_else(|| LedgerError::record_not_found(&self.customer, record_id))?;

        let updated = record.apply_payment(payment.amount)?;

        self.commit(payment, vec![LedgerUpdate { record: updated, portion: payment.amount }]);

        Ok(BulkPaymentResult {
            processed_payments: 1,
            total_amount: payment.amount,
            remaining_amount: Decimal::ZERO
        })
    }

    fn pay_bulk(&mut self, payment: &PaymentRequest) -> Result<BulkPaymentResult, LedgerError> {
        let allocation = allocate_bulk_payment(&self.records, &self.customer, payment.amount)?;

        self.commit(payment, allocation.updates);

        Ok(allocation.result)
    }

    fn commit(&mut self, payment: &PaymentRequest, updates: Vec<LedgerUpdate>) {
        for update in updates {
            self.history.push(entry(&payment.payment_id, &update, payment.note.clone()));

            if let Some(record) = self.records.iter_mut().find(|record| record.record_id == update.record.record_id) {
                *record = update.record;
            }
        }
    }
}

fn entry(payment_id: &PaymentId, update: &LedgerUpdate, note: Option<String>) -> PaymentEntry {
    PaymentEntry {
        payment_id: payment_id.clone(),
        record_id: update.record.record_id.clone(),
        portion: update.portion,
        note
    }
}
