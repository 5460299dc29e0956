use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::errors::LedgerError;
use crate::types::{lenient_amount, BookingId, CustomerKey, RecordId};

/// One billed night of a booking, as exported by the booking system.
///
/// `paid` only ever grows, and only through [`StayDayCharge::apply_payment`].
/// The outstanding balance is always derived, never stored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "ChargeRow")]
pub struct StayDayCharge {
    /// Opaque identifier of the persisted sale record.
    pub record_id: RecordId,
    /// Booking this night belongs to, when the export carries it.
    pub booking_id: Option<BookingId>,
    /// Guest name as displayed.
    pub customer_name: String,
    /// Canonical grouping key derived from `customer_name`.
    pub customer: CustomerKey,
    /// The charge for this night; fixed once issued.
    pub total: Decimal,
    /// Cumulative amount applied so far.
    pub paid: Decimal,
    /// 1-based night index within the booking.
    pub day_of_stay: u32,
    /// Length of the booking in nights.
    pub total_nights: u32,
    /// Calendar date the charge was issued.
    pub issued: NaiveDate
}

impl StayDayCharge {
    pub fn outstanding(&self) -> Decimal {
        (self.total - self.paid).max(Decimal::ZERO)
    }

    pub fn is_fully_paid(&self) -> bool {
        self.outstanding().is_zero()
    }

    /// Returns a copy of this record with `amount` applied.
    ///
    /// # Errors
    /// `InvalidAmount` unless `0 < amount <= outstanding`, `Overflow` if the
    /// paid total cannot be represented. `self` is never modified.
    pub fn apply_payment(&self, amount: Decimal) -> Result<StayDayCharge, LedgerError> {
        let outstanding = self.outstanding();

        if amount <= Decimal::ZERO || amount > outstanding {
            return Err(LedgerError::invalid_record_amount(&self.record_id, amount, outstanding));
        }

        let paid = self.paid.checked_add(amount)
            .ok_or_else(|| LedgerError::overflow(format!("record {}", self.record_id)))?;

        Ok(StayDayCharge {
            paid,
            ..self.clone()
        })
    }
}

/// Raw charges CSV row.
#[derive(Debug, Deserialize)]
struct ChargeRow {
    #[serde(rename = "record")]
    record_id: RecordId,
    #[serde(rename = "booking", default)]
    booking_id: Option<BookingId>,
    customer: String,
    #[serde(default, deserialize_with = "lenient_amount")]
    total: Decimal,
    #[serde(default, deserialize_with = "lenient_amount")]
    paid: Decimal,
    #[serde(rename = "day")]
    day_of_stay: u32,
    #[serde(rename = "nights")]
    total_nights: u32,
    issued: NaiveDate
}

impl TryFrom<ChargeRow> for StayDayCharge {
    type Error = LedgerError;

    /// Nights are numbered from 1 and never past the end of the stay.
    fn try_from(row: ChargeRow) -> Result<Self, Self::Error> {
        if row.day_of_stay == 0 || row.total_nights == 0 || row.day_of_stay > row.total_nights {
            return Err(LedgerError::invalid_stay_day(&row.record_id, row.day_of_stay, row.total_nights));
        }

        Ok(StayDayCharge {
            customer: CustomerKey::normalize(&row.customer),
            customer_name: row.customer.trim().to_string(),
            record_id: row.record_id,
            booking_id: row.booking_id.filter(|booking| !booking.trim().is_empty()),
            total: row.total,
            paid: row.paid,
            day_of_stay: row.day_of_stay,
            total_nights: row.total_nights,
            issued: row.issued
        })
    }
}
