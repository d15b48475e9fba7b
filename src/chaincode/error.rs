// Chaincode error types

use std::fmt;

/// Failure reported by the host state store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    #[error("key must not be an empty string")]
    EmptyKey,
}

/// Which store operation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOp {
    Set,
    Get,
}

impl fmt::Display for StoreOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Set => f.write_str("set"),
            Self::Get => f.write_str("get"),
        }
    }
}

/// Errors returned by contract functions.
///
/// The `Display` text is what the caller sees in the error response.
#[derive(Debug, thiserror::Error)]
pub enum ChaincodeError {
    #[error("Incorrect number of arguments. Expecting {expected}")]
    ArgumentCount { expected: usize },

    #[error("Failed to {op} record for {key}")]
    Store {
        op: StoreOp,
        key: String,
        #[source]
        source: StateError,
    },

    #[error("Invalid function name")]
    UnknownFunction(String),
}

impl ChaincodeError {
    pub const fn argument_count(expected: usize) -> Self {
        Self::ArgumentCount { expected }
    }

    pub fn store(op: StoreOp, key: &str, source: StateError) -> Self {
        Self::Store {
            op,
            key: key.to_string(),
            source,
        }
    }
}
