// Chaincode response returned to the host runtime

use serde::Serialize;

use super::error::ChaincodeError;

/// Status of a successful invocation
pub const OK: i32 = 200;
/// Status of a failed invocation
pub const ERROR: i32 = 500;
/// Any status at or above this value is a failure
pub const ERROR_THRESHOLD: i32 = 400;

/// Result of `init` or `invoke`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Response {
    pub status: i32,
    pub message: String,
    pub payload: Vec<u8>,
}

impl Response {
    /// Successful response carrying `payload`
    pub const fn success(payload: Vec<u8>) -> Self {
        Self {
            status: OK,
            message: String::new(),
            payload,
        }
    }

    /// Error response carrying a human-readable message
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ERROR,
            message: message.into(),
            payload: Vec::new(),
        }
    }

    pub const fn is_success(&self) -> bool {
        self.status < ERROR_THRESHOLD
    }
}

impl From<Result<Vec<u8>, ChaincodeError>> for Response {
    fn from(result: Result<Vec<u8>, ChaincodeError>) -> Self {
        match result {
            Ok(payload) => Self::success(payload),
            Err(e) => Self::error(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success() {
        let resp = Response::success(b"abc".to_vec());
        assert_eq!(resp.status, OK);
        assert!(resp.is_success());
        assert!(resp.message.is_empty());
        assert_eq!(resp.payload, b"abc");
    }

    #[test]
    fn test_error() {
        let resp = Response::error("boom");
        assert_eq!(resp.status, ERROR);
        assert!(!resp.is_success());
        assert_eq!(resp.message, "boom");
        assert!(resp.payload.is_empty());
    }

    #[test]
    fn test_threshold() {
        let resp = Response {
            status: 399,
            message: String::new(),
            payload: Vec::new(),
        };
        assert!(resp.is_success());

        let resp = Response {
            status: ERROR_THRESHOLD,
            ..resp
        };
        assert!(!resp.is_success());
    }

    #[test]
    fn test_from_result() {
        let resp = Response::from(Err(ChaincodeError::argument_count(1)));
        assert_eq!(resp.status, ERROR);
        assert_eq!(resp.message, "Incorrect number of arguments. Expecting 1");

        let resp = Response::from(Ok(b"v".to_vec()));
        assert_eq!(resp, Response::success(b"v".to_vec()));
    }
}
