// Invocation handlers module

use http_body_util::{BodyExt, Full, LengthLimitError, Limited};
use hyper::body::{Body, Bytes};
use hyper::{Request, Response, StatusCode};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use super::response::{bad_request, json_response, unknown_target};
use super::types::{InvokeRequest, InvokeResult};
use crate::config::AppState;
use crate::http;
use crate::ledger::InvokeMode;
use crate::logger::{self, InvocationLogEntry};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Read an invocation request, run it against the ledger and report the result
///
/// Status codes:
/// - 200: chaincode returned success
/// - 500: chaincode returned an error (message in `error`)
/// - 400: body unreadable or not an `InvokeRequest`
/// - 404: `channel` or `contractName` names something this server does not host
/// - 413: body larger than `http.max_body_size`
pub async fn handle_invoke<B>(
    req: Request<B>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
    mode: InvokeMode,
) -> Response<Full<Bytes>>
where
    B: Body<Data = Bytes>,
    B::Error: Into<BoxError>,
{
    let started = Instant::now();
    let path = req.uri().path().to_string();
    let max_body = usize::try_from(state.config.http.max_body_size).unwrap_or(usize::MAX);

    let body = match Limited::new(req.into_body(), max_body).collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(e) if e.downcast_ref::<LengthLimitError>().is_some() => {
            logger::log_warning(&format!(
                "Request body too large on {path} (max: {max_body} bytes)"
            ));
            logger::log_api_request("POST", &path, 413);
            return http::build_413_response();
        }
        Err(e) => {
            logger::log_api_request("POST", &path, 400);
            return bad_request(&format!("Failed to read request body: {e}"));
        }
    };

    let request: InvokeRequest = match serde_json::from_slice(&body) {
        Ok(r) => r,
        Err(e) => {
            logger::log_api_request("POST", &path, 400);
            return bad_request(&format!("Invalid JSON: {e}"));
        }
    };

    if let Err(msg) = request.check_target(state.ledger.channel(), &state.config.chaincode.name) {
        logger::log_api_request("POST", &path, 404);
        return unknown_target(&msg);
    }

    let mut entry = InvocationLogEntry::new(
        peer_addr.to_string(),
        mode.as_str(),
        request.fcn.clone(),
        request.args.len(),
    );

    logger::log_debug(&format!(
        "{} {} with {} args",
        mode.as_str(),
        request.fcn,
        request.args.len()
    ));

    let invocation = state
        .ledger
        .invoke(mode, state.chaincode.as_ref(), &request.fcn, request.args)
        .await;

    let status = if invocation.response.is_success() {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };

    if state.access_log_enabled() {
        entry.tx_id.clone_from(&invocation.tx_id);
        entry.status = invocation.response.status;
        entry.message.clone_from(&invocation.response.message);
        entry.payload_bytes = invocation.response.payload.len();
        entry.writes = invocation.writes;
        entry.duration_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        logger::log_invocation(&entry, &state.config.logging.log_format);
    }

    json_response(status, &InvokeResult::from(&invocation))
}
