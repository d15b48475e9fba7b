//! Ledger module
//!
//! Minimal in-process host for a chaincode:
//! - `WorldState`: committed key/value state
//! - `TransactionStub`: per-transaction view handed to the chaincode
//! - `Ledger`: runs submits (commit on success) and evaluations (never commit)

mod stub;
mod world;

use stub::TransactionStub;
use world::WorldState;

use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

use crate::chaincode::{Chaincode, ChaincodeStub, Response};

/// How an invocation's writes are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvokeMode {
    /// Commit the write set when the chaincode succeeds
    Submit,
    /// Discard the write set
    Evaluate,
}

impl InvokeMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Submit => "submit",
            Self::Evaluate => "evaluate",
        }
    }
}

/// Outcome of one chaincode call
#[derive(Debug, Clone)]
pub struct Invocation {
    pub tx_id: String,
    pub response: Response,
    /// Number of keys committed (always 0 for evaluations and failures)
    pub writes: usize,
}

/// World state plus transaction bookkeeping
pub struct Ledger {
    channel: String,
    world: RwLock<WorldState>,
    tx_counter: AtomicU64,
}

impl Ledger {
    pub fn new(channel: impl Into<String>) -> Self {
        Self::with_state(channel, WorldState::default())
    }

    pub fn with_state(channel: impl Into<String>, world: WorldState) -> Self {
        Self {
            channel: channel.into(),
            world: RwLock::new(world),
            tx_counter: AtomicU64::new(0),
        }
    }

    pub fn channel(&self) -> &str {
        &self.channel
    }

    /// Run the chaincode's `init` and commit its writes on success
    pub async fn init(&self, chaincode: &dyn Chaincode) -> Invocation {
        let mut world = self.world.write().await;
        let mut stub = TransactionStub::new(&world, self.next_tx_id(), "init", Vec::new());
        let response = chaincode.init(&mut stub);
        let tx_id = stub.tx_id().to_string();
        let write_set = stub.into_write_set();

        let writes = if response.is_success() {
            world.apply(write_set)
        } else {
            0
        };

        Invocation {
            tx_id,
            response,
            writes,
        }
    }

    /// Run `function(args)` and commit its writes on success
    pub async fn submit(
        &self,
        chaincode: &dyn Chaincode,
        function: &str,
        args: Vec<String>,
    ) -> Invocation {
        // Submits hold the write lock for the whole call, so they are serialized
        let mut world = self.world.write().await;
        let mut stub = TransactionStub::new(&world, self.next_tx_id(), function, args);
        let response = chaincode.invoke(&mut stub);
        let tx_id = stub.tx_id().to_string();
        let write_set = stub.into_write_set();

        let writes = if response.is_success() {
            world.apply(write_set)
        } else {
            0
        };

        Invocation {
            tx_id,
            response,
            writes,
        }
    }

    /// Run `function(args)` against committed state and discard its writes
    pub async fn evaluate(
        &self,
        chaincode: &dyn Chaincode,
        function: &str,
        args: Vec<String>,
    ) -> Invocation {
        let world = self.world.read().await;
        let mut stub = TransactionStub::new(&world, self.next_tx_id(), function, args);
        let response = chaincode.invoke(&mut stub);

        Invocation {
            tx_id: stub.tx_id().to_string(),
            response,
            writes: 0,
        }
    }

    pub async fn invoke(
        &self,
        mode: InvokeMode,
        chaincode: &dyn Chaincode,
        function: &str,
        args: Vec<String>,
    ) -> Invocation {
        match mode {
            InvokeMode::Submit => self.submit(chaincode, function, args).await,
            InvokeMode::Evaluate => self.evaluate(chaincode, function, args).await,
        }
    }

    /// Number of keys currently committed
    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.world.read().await.len()
    }

    /// Unique id: microsecond timestamp followed by a process-wide sequence number
    fn next_tx_id(&self) -> String {
        let seq = self.tx_counter.fetch_add(1, Ordering::Relaxed);
        let micros = chrono::Utc::now().timestamp_micros();
        format!("{micros:016x}{seq:08x}")
    }
}
