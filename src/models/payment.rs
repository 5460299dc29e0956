use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::PaymentKind;
use crate::types::{lenient_amount, CustomerKey, PaymentId, RecordId};

/// Represents a single row from the payments CSV file.
///
/// `record_id` is only meaningful for single-record payments; bulk payments
/// are spread over every open record of the customer.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentRequest {
    /// Whether this pays one record or the customer's whole balance.
    pub kind: PaymentKind,
    /// Unique payment reference from the gateway or cashier.
    #[serde(rename = "payment")]
    pub payment_id: PaymentId,
    /// Normalized guest key the payment is routed by.
    pub customer: CustomerKey,
    /// Target record of a single payment.
    #[serde(rename = "record", default)]
    pub record_id: Option<RecordId>,
    /// The amount tendered.
    #[serde(default, deserialize_with = "lenient_amount")]
    pub amount: Decimal,
    /// Free-form cashier note.
    #[serde(default)]
    pub note: Option<String>
}

/// One portion of a payment applied to one record.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentEntry {
    pub payment_id: PaymentId,
    pub record_id: RecordId,
    pub portion: Decimal,
    pub note: Option<String>
}
