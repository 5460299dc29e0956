use std::time::Duration;

/// Tunables of a reconciliation run.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Capacity of the channel between the CSV reader and the dispatcher.
    pub backpressure: usize,
    /// How many payment ids the duplicate guard remembers.
    pub duplicate_capacity: u64,
    /// How long a payment id is remembered by the duplicate guard.
    pub duplicate_window: Duration
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            backpressure: 256,
            duplicate_capacity: 10_000,
            duplicate_window: Duration::from_secs(24 * 60 * 60)
        }
    }
}

impl EngineConfig {
    pub fn with_backpressure(mut self, backpressure: usize) -> Self {
        self.backpressure = backpressure.max(1);
        self
    }

    pub fn with_duplicate_capacity(mut self, capacity: u64) -> Self {
        self.duplicate_capacity = capacity;
        self
    }

    pub fn with_duplicate_window(mut self, window: Duration) -> Self {
        self.duplicate_window = window;
        self
    }
}
