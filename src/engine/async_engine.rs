use crate::actors::CustomerActor;
use crate::engine::{EngineConfig, PaymentGuard};
use crate::models::{LedgerError, PaymentRequest, StayDayCharge};
use crate::storage::LedgerStorage;
use crate::types::CustomerKey;
use csv::{ReaderBuilder, Trim};
use futures::future::join_all;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::{spawn_blocking, JoinHandle};
use tracing::{error, info, warn};

/// Async reconciliation engine: files charges into per-customer ledgers and
/// applies a stream of payments to them, one actor per customer.
pub struct ReconciliationEngine {
    storage: Arc<LedgerStorage>,
    config: EngineConfig,
    guard: PaymentGuard
}

impl ReconciliationEngine {
    /// Creates a new engine instance with the provided storage.
    pub fn new(storage: Arc<LedgerStorage>) -> Self {
        Self::with_config(storage, EngineConfig::default())
    }

    pub fn with_config(storage: Arc<LedgerStorage>, config: EngineConfig) -> Self {
        let guard = PaymentGuard::new(&config);

        Self { storage, config, guard }
    }

    /// Loads the charges snapshot, then applies the payments file to it.
    pub async fn run(&self, charges_path: &str, payments_path: &str) -> anyhow::Result<()> {
        self.load_charges(charges_path).await?;
        self.reconcile(payments_path).await
    }

    /// Files every row of a charges CSV under its customer's ledger.
    pub async fn load_charges(&self, path: &str) -> anyhow::Result<()> {
        let (sender, mut receiver) = mpsc::channel::<StayDayCharge>(self.config.backpressure);
        let csv_handle = spawn_csv_reader(path.to_string(), sender);
        let mut loaded = 0usize;

        while let Some(charge) = receiver.recv().await {
            match self.storage.insert_charge(charge) {
                Ok(()) => loaded += 1,
                Err(error) => warn!("Charge skipped: {error}")
            }
        }

        if let Err(error) = csv_handle.await {
            error!("Charge ingestion failed: {error}");
        }

        info!("Loaded {loaded} charge record(s) from {path}");

        Ok(())
    }

    /// Orchestrates the payment pipeline for a CSV file.
    pub async fn reconcile(&self, path: &str) -> anyhow::Result<()> {
        let (sender, receiver) = mpsc::channel::<PaymentRequest>(self.config.backpressure);
        let csv_handle = spawn_csv_reader(path.to_string(), sender);
        let processing_result = self.process_payments(receiver).await;

        if let Err(error) = csv_handle.await {
            error!("Payment ingestion failed: {error}");
        }

        processing_result
    }

    async fn process_payments(&self, mut receiver: mpsc::Receiver<PaymentRequest>) -> anyhow::Result<()> {
        let mut actors = HashMap::<CustomerKey, CustomerActor>::new();

        while let Some(payment) = receiver.recv().await {
            if !self.guard.admit(&payment.payment_id).await {
                warn!("{}", LedgerError::duplicate_payment(&payment.customer, &payment.payment_id));
                continue;
            }

            let actor = actors.entry(payment.customer.clone()).or_insert_with(|| {
                CustomerActor::new(payment.customer.clone(), self.storage.clone())
            });

            if !actor.accept(&payment) {
                error!("Customer actor for [{}] could not accept payment [{}]", payment.customer, payment.payment_id);
            }
        }

        //NOTE: Every actor drains its queue and saves its ledger before the run completes
        let despawns = actors.into_values().map(|actor| actor.despawn());

        for result in join_all(despawns).await {
            if let Err(error) = result {
                error!("A customer actor did not despawn gracefully: {error:?}");
            }
        }

        Ok(())
    }
}

fn spawn_csv_reader<T>(path: String, sender: mpsc::Sender<T>) -> JoinHandle<()>
where
    T: DeserializeOwned + Send + 'static,
{
    spawn_blocking(move || {
        let file = match File::open(&path) {
            Ok(file) => file,
            Err(error) => {
                error!("Error opening CSV at path: {path} | {error}");
                return;
            }
        };

        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(BufReader::new(file));

        for result in reader.deserialize::<T>() {
            match result {
                Ok(row) => {
                    if sender.blocking_send(row).is_err() {
                        break;
                    }
                }
                Err(error) => {
                    error!("CSV deserialization error in {path}: {error}");
                }
            }
        }
    })
}
