// Invocation API request/response types

use serde::{Deserialize, Serialize};

use crate::ledger::Invocation;

/// Body of `POST /v1/invoke` and `POST /v1/query`
#[derive(Debug, Deserialize)]
pub struct InvokeRequest {
    /// Chaincode function name
    #[serde(alias = "function")]
    pub fcn: String,
    /// String arguments, passed through unchanged
    #[serde(default)]
    pub args: Vec<String>,
    /// Target channel; must match the served channel when given
    #[serde(default)]
    pub channel: Option<String>,
    /// Target contract; must match the served chaincode name when given
    #[serde(default, rename = "contractName")]
    pub contract_name: Option<String>,
}

impl InvokeRequest {
    /// Check the optional gateway addressing fields against what this server hosts
    pub fn check_target(&self, channel: &str, contract: &str) -> Result<(), String> {
        if let Some(c) = self.channel.as_deref().filter(|c| *c != channel) {
            return Err(format!("Unknown channel: {c}"));
        }
        if let Some(n) = self.contract_name.as_deref().filter(|n| *n != contract) {
            return Err(format!("Unknown contract: {n}"));
        }
        Ok(())
    }
}

/// Result of an invocation as seen by the client
#[derive(Debug, Serialize)]
pub struct InvokeResult {
    pub success: bool,
    pub tx_id: String,
    pub status: i32,
    /// Payload decoded as UTF-8 (lossy), present on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Chaincode error message, present on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<&Invocation> for InvokeResult {
    fn from(invocation: &Invocation) -> Self {
        let response = &invocation.response;
        let success = response.is_success();

        Self {
            success,
            tx_id: invocation.tx_id.clone(),
            status: response.status,
            message: success.then(|| String::from_utf8_lossy(&response.payload).into_owned()),
            error: (!success).then(|| response.message.clone()),
        }
    }
}
