mod async_engine;
mod config;
mod payment_guard;

pub use async_engine::ReconciliationEngine;
pub use config::EngineConfig;
pub use payment_guard::PaymentGuard;
