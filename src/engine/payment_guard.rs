use moka::future::Cache;

use crate::engine::EngineConfig;
use crate::types::PaymentId;

/// Remembers recently seen payment ids so a resubmitted payment is not
/// applied twice.
pub struct PaymentGuard {
    seen: Cache<PaymentId, ()>
}

impl PaymentGuard {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            seen: Cache::builder()
                .max_capacity(config.duplicate_capacity)
                .time_to_live(config.duplicate_window)
                .build()
        }
    }

    /// Returns `true` the first time an id is seen inside the window.
    pub async fn admit(&self, payment_id: &PaymentId) -> bool {
        self.seen.entry_by_ref(payment_id).or_insert(()).await.is_fresh()
    }
}
