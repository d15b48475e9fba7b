// API module entry
// Gateway-style invocation API: submit and evaluate chaincode transactions

mod handlers;
mod response;
mod types;

use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::header::{HeaderValue, SERVER};
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

use crate::config::AppState;
use crate::http;
use crate::ledger::InvokeMode;
use crate::logger;

/// Submit a transaction (writes are committed on success)
pub const INVOKE_PATH: &str = "/v1/invoke";
/// Evaluate a transaction (writes are discarded)
pub const QUERY_PATH: &str = "/v1/query";

/// Main entry point for HTTP request handling
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible>
where
    B: Body<Data = Bytes>,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    let server_name = HeaderValue::from_str(&state.config.http.server_name).ok();

    let mut response = route_request(req, state, peer_addr).await;

    if let Some(name) = server_name {
        response.headers_mut().insert(SERVER, name);
    }
    Ok(response)
}

/// Dispatch on method and path
async fn route_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Response<Full<Bytes>>
where
    B: Body<Data = Bytes>,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    if method == Method::OPTIONS {
        return http::build_options_response(state.config.http.enable_cors);
    }

    // Health check endpoints
    let health = &state.config.http.health;
    if health.enabled && (path == health.liveness_path || path == health.readiness_path) {
        if method != Method::GET {
            logger::log_api_request(method.as_str(), &path, 405);
            return http::build_405_response("GET, OPTIONS");
        }
        let healthy = path == health.liveness_path || state.is_ready();
        return http::build_health_response(healthy);
    }

    match (method, path.as_str()) {
        (Method::POST, INVOKE_PATH) => {
            handlers::handle_invoke(req, state, peer_addr, InvokeMode::Submit).await
        }
        (Method::POST, QUERY_PATH) => {
            handlers::handle_invoke(req, state, peer_addr, InvokeMode::Evaluate).await
        }
        (method, INVOKE_PATH | QUERY_PATH) => {
            logger::log_api_request(method.as_str(), &path, 405);
            http::build_405_response("POST, OPTIONS")
        }
        (method, _) => {
            logger::log_api_request(method.as_str(), &path, 404);
            http::build_404_response()
        }
    }
}
