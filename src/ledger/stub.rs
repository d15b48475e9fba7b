// Transaction stub: the chaincode's view of the ledger for one invocation

use super::world::{WorldState, WriteSet};
use crate::chaincode::{ChaincodeStub, StateError};

/// Reads from committed state, buffers writes until the host decides to commit.
pub struct TransactionStub<'a> {
    committed: &'a WorldState,
    tx_id: String,
    function: String,
    args: Vec<String>,
    writes: WriteSet,
}

impl<'a> TransactionStub<'a> {
    pub fn new(
        committed: &'a WorldState,
        tx_id: String,
        function: impl Into<String>,
        args: Vec<String>,
    ) -> Self {
        Self {
            committed,
            tx_id,
            function: function.into(),
            args,
            writes: WriteSet::new(),
        }
    }

    /// Consume the stub, returning the buffered writes
    pub fn into_write_set(self) -> WriteSet {
        self.writes
    }
}

impl ChaincodeStub for TransactionStub<'_> {
    fn function_and_parameters(&self) -> (String, Vec<String>) {
        (self.function.clone(), self.args.clone())
    }

    fn put_state(&mut self, key: &str, value: &[u8]) -> Result<(), StateError> {
        if key.is_empty() {
            return Err(StateError::EmptyKey);
        }
        self.writes.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn get_state(&self, key: &str) -> Result<Vec<u8>, StateError> {
        Ok(self
            .committed
            .get(key)
            .map(<[u8]>::to_vec)
            .unwrap_or_default())
    }

    fn tx_id(&self) -> &str {
        &self.tx_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_are_buffered() {
        let world: WorldState = [("k".to_string(), b"old".to_vec())].into_iter().collect();
        let mut stub = TransactionStub::new(&world, "tx1".to_string(), "f", Vec::new());

        stub.put_state("k", b"new").unwrap();
        assert_eq!(stub.get_state("k").unwrap(), b"old");

        let ws = stub.into_write_set();
        assert_eq!(ws.get("k").map(Vec::as_slice), Some(&b"new"[..]));
        assert_eq!(world.get("k"), Some(&b"old"[..]));
    }

    #[test]
    fn test_empty_key_rejected() {
        let world = WorldState::default();
        let mut stub = TransactionStub::new(&world, "tx1".to_string(), "f", Vec::new());
        assert_eq!(stub.put_state("", b"v"), Err(StateError::EmptyKey));
        assert!(stub.into_write_set().is_empty());
    }

    #[test]
    fn test_function_and_parameters() {
        let world = WorldState::default();
        let stub = TransactionStub::new(
            &world,
            "tx9".to_string(),
            "getRecord",
            vec!["p1".to_string()],
        );
        assert_eq!(
            stub.function_and_parameters(),
            ("getRecord".to_string(), vec!["p1".to_string()])
        );
        assert_eq!(stub.tx_id(), "tx9");
        assert!(stub.get_state("absent").unwrap().is_empty());
    }
}
