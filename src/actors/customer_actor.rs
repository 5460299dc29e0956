use std::sync::Arc;

use tokio::spawn;
use tokio::sync::mpsc;
use tokio::task::{JoinError, JoinHandle};
use tracing::{debug, warn};

use crate::models::{CustomerLedger, PaymentRequest};
use crate::storage::Storage;
use crate::types::CustomerKey;

/// Applies the payments of one customer strictly in arrival order.
///
/// The actor owns the customer's ledger for its whole lifetime, so two
/// payments for the same guest can never observe the same outstanding balance.
pub struct CustomerActor {
    sender: mpsc::UnboundedSender<PaymentRequest>,
    handle: JoinHandle<()>
}

impl CustomerActor {
    /// Spawns a new actor, hydrating its ledger from storage.
    pub fn new<S: Storage>(customer: CustomerKey, storage: Arc<S>) -> Self {
        let (sender, mut receiver) = mpsc::unbounded_channel::<PaymentRequest>();

        let handle = spawn(async move {
            let mut ledger = storage.load(&customer)
                .unwrap_or_else(|| CustomerLedger::new(customer.clone()));

            while let Some(payment) = receiver.recv().await {
                match ledger.apply(&payment) {
                    Ok(result) => {
                        debug!(
                            "Payment [{}]:[{:?}] for customer [{}] applied to {} record(s), absorbed [{}], surplus [{}]",
                            payment.payment_id, payment.kind, customer,
                            result.processed_payments, result.total_amount, result.remaining_amount
                        );

                        if !result.remaining_amount.is_zero() {
                            warn!("Payment [{}] for customer [{}] left an unapplied surplus of [{}]", payment.payment_id, customer, result.remaining_amount);
                        }
                    },
                    Err(error) => {
                        warn!("Payment [{}] rejected: {error}", payment.payment_id);
                    }
                }
            }

            storage.save(customer, ledger);
        });

        Self { sender, handle }
    }

    /// Queues a payment; `false` if the actor is no longer running.
    pub fn accept(&self, payment: &PaymentRequest) -> bool {
        self.sender.send(payment.clone()).is_ok()
    }

    /// Closes the queue, waits for it to drain and the ledger to be saved.
    pub async fn despawn(self) -> Result<(), JoinError> {
        drop(self.sender);
        self.handle.await
    }
}
