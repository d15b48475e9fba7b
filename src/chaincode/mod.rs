//! Chaincode module
//!
//! The smart contract itself and the interfaces it shares with the host:
//! - `ChaincodeStub`: state access handed to the contract for one invocation
//! - `Chaincode`: entry points the host calls (`init`, `invoke`)
//! - `Response`: the result returned to the host

mod error;
mod health_records;
pub mod response;
mod stub;

pub use error::StateError;
pub use health_records::HealthRecords;
pub use response::Response;
pub use stub::ChaincodeStub;

/// Contract entry points called by the host runtime.
///
/// Implementations must not keep mutable state between calls; everything
/// they need arrives through the stub.
pub trait Chaincode: Send + Sync {
    /// Called once when the contract is instantiated on a channel.
    fn init(&self, stub: &mut dyn ChaincodeStub) -> Response;

    /// Called for every transaction proposal.
    fn invoke(&self, stub: &mut dyn ChaincodeStub) -> Response;
}
