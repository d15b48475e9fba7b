// Stub interface consumed from the host runtime

use super::error::StateError;

/// Per-invocation access to the host's state store.
///
/// One stub is created for each transaction. Reads return committed state;
/// writes are buffered by the host and applied when the transaction commits.
pub trait ChaincodeStub {
    /// Function name and string arguments of the current invocation.
    fn function_and_parameters(&self) -> (String, Vec<String>);

    /// Record `value` under `key` in the transaction's write set.
    fn put_state(&mut self, key: &str, value: &[u8]) -> Result<(), StateError>;

    /// Value stored under `key`, or an empty vector when the key is absent.
    fn get_state(&self, key: &str) -> Result<Vec<u8>, StateError>;

    /// Identifier of the current transaction.
    fn tx_id(&self) -> &str;
}
