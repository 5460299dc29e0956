use rust_decimal::Decimal;

use crate::models::{ClassificationMode, PaymentStatus, StayDayCharge};

/// Classifies one night using the paid amount recorded on its own row.
pub fn classify(record: &StayDayCharge) -> PaymentStatus {
    classify_against(record, record.paid)
}

/// Classifies one night of a stay against the cumulative amount paid for
/// the booking, covering nights oldest first.
///
/// A night is fully paid if the payment covers it entirely, partially paid if
/// it is the first night the payment only reaches part of, unpaid otherwise.
pub fn classify_against(record: &StayDayCharge, paid_for_booking: Decimal) -> PaymentStatus {
    let daily = record.total;

    if daily <= Decimal::ZERO || record.day_of_stay == 0 {
        return PaymentStatus::Unpaid;
    }

    let owed_through = |days: u32| daily.checked_mul(Decimal::from(days));

    // A total that does not fit in a Decimal is more than any payment covers
    if owed_through(record.day_of_stay).is_some_and(|owed| owed <= paid_for_booking) {
        PaymentStatus::FullyPaid
    } else if owed_through(record.day_of_stay - 1).is_some_and(|owed| owed < paid_for_booking) {
        PaymentStatus::PartiallyPaid
    } else {
        PaymentStatus::Unpaid
    }
}

/// Classifies every record of a set under the given mode.
///
/// With [`ClassificationMode::BookingSum`] the paid amount of each booking is
/// summed across its rows first; rows without a booking id stand alone.
pub fn classify_all<'a>(records: &'a [StayDayCharge], mode: ClassificationMode) -> Vec<(&'a StayDayCharge, PaymentStatus)> {
    records.iter().map(|record| {
        let status = match (mode, &record.booking_id) {
            (ClassificationMode::BookingSum, Some(booking_id)) => {
                let paid = records.iter()
                    .filter(|other| other.booking_id.as_ref() == Some(booking_id))
                    .fold(Decimal::ZERO, |sum, other| sum.saturating_add(other.paid));

                classify_against(record, paid)
            },
            _ => classify(record)
        };

        (record, status)
    }).collect()
}
