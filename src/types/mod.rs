mod amount;
mod errors;
#[cfg(test)]
mod tests;

use std::fmt;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Deserializer};

pub use amount::lenient_amount;
pub use errors::AmountError;

pub type RecordId = String;
pub type BookingId = String;
pub type PaymentId = String;

/// Canonical guest key used to group charge rows across bookings.
///
/// Built from a display name by trimming, lowercasing and collapsing runs of
/// whitespace, so `"  Jane   DOE "` and `"jane doe"` address the same ledger.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct CustomerKey(String);

impl CustomerKey {
    pub fn normalize(name: &str) -> Self {
        let normalized = name
            .split_whitespace()
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join(" ");

        CustomerKey(normalized)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for CustomerKey {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CustomerKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(CustomerKey::normalize(&value))
    }
}
