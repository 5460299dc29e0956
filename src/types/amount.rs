use crate::types::AmountError;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use std::str::FromStr;
use tracing::warn;

/// Parses a monetary amount exported by the booking system.
///
/// Amounts arrive as strings and may carry a currency-style `+` sign or
/// surrounding whitespace. Negative values and `NaN` are rejected.
pub fn parse_amount(value: &str) -> Result<Decimal, AmountError> {
    let value = value.trim();

    if value.is_empty() {
        return Err(AmountError::Empty);
    }

    if value.eq_ignore_ascii_case("nan") {
        return Err(AmountError::NotANumber(value.to_string()));
    }

    let unsigned = value.strip_prefix('+').unwrap_or(value);
    let amount = Decimal::from_str(unsigned)?;

    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(AmountError::Negative(value.to_string()));
    }

    Ok(amount)
}

/// Parses an amount, normalizing anything malformed to zero.
///
/// This is the only place a bad amount is tolerated; everything past the
/// deserialization boundary works with clean, non-negative decimals.
pub fn parse_amount_lenient(value: &str) -> Decimal {
    match parse_amount(value) {
        Ok(amount) => amount,
        Err(AmountError::Empty) => Decimal::ZERO,
        Err(error) => {
            warn!("{error}, treating as 0");
            Decimal::ZERO
        }
    }
}

/// Serde adapter for [`parse_amount_lenient`].
pub fn lenient_amount<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.as_deref().map(parse_amount_lenient).unwrap_or(Decimal::ZERO))
}
