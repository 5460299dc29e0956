use rust_decimal::Decimal;
use thiserror::Error;

use crate::types::{CustomerKey, PaymentId, RecordId};

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Invalid amount [{amount}] for [{target}], outstanding is [{outstanding}]")]
    InvalidAmount {
        target: String,
        amount: Decimal,
        outstanding: Decimal
    },
    #[error("No outstanding balance for customer [{customer}]")]
    NoOutstandingBalance {
        customer: CustomerKey
    },
    #[error("Record [{record_id}] was not found for customer [{customer}]")]
    RecordNotFound {
        customer: CustomerKey,
        record_id: RecordId
    },
    #[error("Payment [{payment_id}] for customer [{customer}] does not reference a record")]
    RecordRequired {
        customer: CustomerKey,
        payment_id: PaymentId
    },
    #[error("Duplicate record [{record_id}] for customer [{customer}]")]
    DuplicateRecord {
        customer: CustomerKey,
        record_id: RecordId
    },
    #[error("Duplicate payment [{payment_id}] for customer [{customer}]")]
    DuplicatePayment {
        customer: CustomerKey,
        payment_id: PaymentId
    },
    #[error("Record [{record_id}] is night [{day_of_stay}] of a [{total_nights}] night stay")]
    InvalidStayDay {
        record_id: RecordId,
        day_of_stay: u32,
        total_nights: u32
    },
    #[error("Numeric overflow occurred for [{target}]")]
    Overflow {
        target: String
    }
}

impl LedgerError {
    pub fn invalid_record_amount(record_id: &str, amount: Decimal, outstanding: Decimal) -> Self {
        Self::InvalidAmount {
            target: format!("record {record_id}"),
            amount,
            outstanding
        }
    }

    pub fn invalid_bulk_amount(customer: &CustomerKey, amount: Decimal, outstanding: Decimal) -> Self {
        Self::InvalidAmount {
            target: format!("customer {customer}"),
            amount,
            outstanding
        }
    }

    pub fn no_outstanding_balance(customer: &CustomerKey) -> Self {
        Self::NoOutstandingBalance { customer: customer.clone() }
    }

    pub fn record_not_found(customer: &CustomerKey, record_id: &str) -> Self {
        Self::RecordNotFound {
            customer: customer.clone(),
            record_id: record_id.to_string()
        }
    }

    pub fn record_required(customer: &CustomerKey, payment_id: &str) -> Self {
        Self::RecordRequired {
            customer: customer.clone(),
            payment_id: payment_id.to_string()
        }
    }

    pub fn duplicate_record(customer: &CustomerKey, record_id: &str) -> Self {
        Self::DuplicateRecord {
            customer: customer.clone(),
            record_id: record_id.to_string()
        }
    }

    pub fn duplicate_payment(customer: &CustomerKey, payment_id: &str) -> Self {
        Self::DuplicatePayment {
            customer: customer.clone(),
            payment_id: payment_id.to_string()
        }
    }

    pub fn invalid_stay_day(record_id: &str, day_of_stay: u32, total_nights: u32) -> Self {
        Self::InvalidStayDay {
            record_id: record_id.to_string(),
            day_of_stay,
            total_nights
        }
    }

    pub fn overflow(target: impl Into<String>) -> Self {
        Self::Overflow { target: target.into() }
    }
}
