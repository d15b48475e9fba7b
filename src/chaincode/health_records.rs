//! Health records contract
//!
//! Stores an opaque value under a key and reads it back. No schema or
//! access rules are applied; the host's state store holds the data.

use super::error::{ChaincodeError, StoreOp};
use super::response::Response;
use super::stub::ChaincodeStub;
use super::Chaincode;

const SET_RECORD: &str = "setRecord";
const GET_RECORD: &str = "getRecord";

/// Key/value record contract with two functions: `setRecord` and `getRecord`
#[derive(Debug, Default, Clone, Copy)]
pub struct HealthRecords;

impl HealthRecords {
    pub const fn new() -> Self {
        Self
    }
}

impl Chaincode for HealthRecords {
    fn init(&self, _stub: &mut dyn ChaincodeStub) -> Response {
        Response::success(Vec::new())
    }

    fn invoke(&self, stub: &mut dyn ChaincodeStub) -> Response {
        let (function, args) = stub.function_and_parameters();

        let result = match function.as_str() {
            SET_RECORD => set_record(stub, &args),
            GET_RECORD => get_record(stub, &args),
            _ => Err(ChaincodeError::UnknownFunction(function.clone())),
        };

        Response::from(result)
    }
}

/// `setRecord(key, value)`: write the UTF-8 bytes of `value` under `key`
fn set_record(stub: &mut dyn ChaincodeStub, args: &[String]) -> Result<Vec<u8>, ChaincodeError> {
    let [key, value] = args else {
        return Err(ChaincodeError::argument_count(2));
    };

    stub.put_state(key, value.as_bytes())
        .map_err(|e| ChaincodeError::store(StoreOp::Set, key, e))?;

    Ok(Vec::new())
}

/// `getRecord(key)`: return the bytes stored under `key` (empty when absent)
fn get_record(stub: &dyn ChaincodeStub, args: &[String]) -> Result<Vec<u8>, ChaincodeError> {
    let [key] = args else {
        return Err(ChaincodeError::argument_count(1));
    };

    stub.get_state(key)
        .map_err(|e| ChaincodeError::store(StoreOp::Get, key, e))
}
