use crate::models::{CustomerLedger, LedgerError, StayDayCharge};
use crate::storage::Storage;
use crate::types::CustomerKey;
use dashmap::iter::Iter;
use dashmap::DashMap;
use std::sync::Arc;

pub struct LedgerStorage {
    cache: Arc<DashMap<CustomerKey, CustomerLedger>>
}

impl LedgerStorage {
    pub fn new() -> Self {
        Self {
            cache: Arc::new(DashMap::new())
        }
    }

    pub fn iter(&self) -> Iter<'_, CustomerKey, CustomerLedger> {
        self.cache.iter()
    }

    /// Files a charge row under the ledger of its normalized customer.
    pub fn insert_charge(&self, charge: StayDayCharge) -> Result<(), LedgerError> {
        self.cache.entry(charge.customer.clone())
            .or_insert_with(|| CustomerLedger::new(charge.customer.clone()))
            .insert_charge(charge)
    }

    /// Ledgers ordered by customer key.
    pub fn snapshot(&self) -> Vec<CustomerLedger> {
        let mut ledgers: Vec<_> = self.iter().map(|item| item.value().clone()).collect();
        ledgers.sort_by(|a, b| a.customer.cmp(&b.customer));
        ledgers
    }
}

impl Default for LedgerStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl Storage for LedgerStorage {
    fn load(&self, customer: &CustomerKey) -> Option<CustomerLedger> {
        self.cache.remove(customer).map(|(_, ledger)| ledger)
    }

    fn save(&self, customer: CustomerKey, ledger: CustomerLedger) {
        self.cache.insert(customer, ledger);
    }
}
