mod ledger_storage;
#[cfg(test)]
mod tests;

use crate::models::CustomerLedger;
use crate::types::CustomerKey;

pub use ledger_storage::LedgerStorage;

/// Hands a customer's ledger out to exactly one writer at a time.
///
/// `load` moves the ledger out of the store; it is absent until `save` puts
/// it back.
pub trait Storage: Send + Sync + 'static {
    fn load(&self, customer: &CustomerKey) -> Option<CustomerLedger>;
    fn save(&self, customer: CustomerKey, ledger: CustomerLedger);
}
