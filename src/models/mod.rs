mod allocation;
mod charge;
mod classify;
mod errors;
mod ledger;
mod payment;

use std::fmt;
use std::fmt::{Display, Formatter};

use serde::Deserialize;

pub use allocation::{allocate_bulk_payment, BulkPaymentResult, LedgerUpdate};
pub use charge::StayDayCharge;
pub use classify::classify_all;
pub use errors::LedgerError;
pub use ledger::CustomerLedger;
pub use payment::{PaymentEntry, PaymentRequest};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentKind {
    Single,
    Bulk
}

/// Display breakdown of which nights of a stay are covered by payments.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum PaymentStatus {
    FullyPaid,
    PartiallyPaid,
    Unpaid
}

impl Display for PaymentStatus {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        let label = match self {
            PaymentStatus::FullyPaid => "fully-paid",
            PaymentStatus::PartiallyPaid => "partially-paid",
            PaymentStatus::Unpaid => "unpaid"
        };

        formatter.write_str(label)
    }
}

/// Where the cumulative paid amount of a night's booking is read from.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub enum ClassificationMode {
    /// Each row carries the booking's cumulative paid amount.
    #[default]
    RowCumulative,
    /// Each row carries only its own payments; sum them per booking.
    BookingSum
}
