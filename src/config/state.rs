// Application state module
// Shared by every connection: configuration, ledger and the chaincode

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;

use super::types::Config;
use crate::chaincode::Chaincode;
use crate::ledger::Ledger;

/// Application state
pub struct AppState {
    pub config: Config,
    pub ledger: Ledger,
    pub chaincode: Arc<dyn Chaincode>,
    pub shutdown_signal: Arc<Notify>,

    // Cached flags for fast access without locks
    pub cached_access_log: Arc<AtomicBool>,
    pub ready: Arc<AtomicBool>,
}

impl AppState {
    pub fn new(config: &Config, chaincode: Arc<dyn Chaincode>) -> Self {
        Self {
            config: config.clone(),
            ledger: Ledger::new(config.chaincode.channel.clone()),
            chaincode,
            shutdown_signal: Arc::new(Notify::new()),
            cached_access_log: Arc::new(AtomicBool::new(config.logging.access_log)),
            ready: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Mark the chaincode as initialized (or not) for the readiness probe
    pub fn set_ready(&self, ready: bool) {
        self.ready.store(ready, Ordering::Relaxed);
    }

    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Relaxed)
    }

    pub fn access_log_enabled(&self) -> bool {
        self.cached_access_log.load(Ordering::Relaxed)
    }
}
