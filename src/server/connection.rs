// Connection handling module
// Accepts a single TCP connection and serves invocation requests on it

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::api;
use crate::config;
use crate::logger;

/// Accept and process a connection, checking limits and logging.
///
/// # Arguments
///
/// * `stream` - The TCP stream to handle
/// * `peer_addr` - The peer's socket address
/// * `state` - Shared application state
/// * `conn_counter` - Active connection counter
pub fn accept_connection(
    stream: tokio::net::TcpStream,
    peer_addr: std::net::SocketAddr,
    state: &Arc<config::AppState>,
    conn_counter: &Arc<AtomicUsize>,
) {
    // Increment counter first, then check limit
    let prev_count = conn_counter.fetch_add(1, Ordering::SeqCst);

    if let Some(max_conn) = state.config.performance.max_connections {
        if prev_count >= usize::try_from(max_conn).unwrap_or(usize::MAX) {
            conn_counter.fetch_sub(1, Ordering::SeqCst);
            logger::log_warning(&format!(
                "Max connections reached: {prev_count}/{max_conn}. Connection from {peer_addr} rejected."
            ));
            drop(stream);
            return;
        }
    }

    if state.access_log_enabled() {
        logger::log_connection_accepted(&peer_addr);
    }

    handle_connection(stream, peer_addr, Arc::clone(state), Arc::clone(conn_counter));
}

/// Serve a single connection in a local task.
///
/// The connection is bounded by the larger of the read and write timeouts.
/// The counter is decremented when the connection ends, whatever the outcome.
fn handle_connection(
    stream: tokio::net::TcpStream,
    peer_addr: std::net::SocketAddr,
    state: Arc<config::AppState>,
    conn_counter: Arc<AtomicUsize>,
) {
    tokio::task::spawn_local(async move {
        let io = TokioIo::new(stream);

        let keep_alive_timeout = state.config.performance.keep_alive_timeout;
        let timeout_duration = std::time::Duration::from_secs(std::cmp::max(
            state.config.performance.read_timeout,
            state.config.performance.write_timeout,
        ));

        let mut builder = http1::Builder::new();
        builder.keep_alive(keep_alive_timeout > 0);

        let conn = builder.serve_connection(
            io,
            service_fn(move |req| api::handle_request(req, Arc::clone(&state), peer_addr)),
        );

        match tokio::time::timeout(timeout_duration, conn).await {
            Ok(Ok(())) => {}
            Ok(Err(err)) => logger::log_connection_error(&err),
            Err(_) => {
                logger::log_warning(&format!(
                    "Connection from {peer_addr} timed out after {} seconds",
                    timeout_duration.as_secs()
                ));
            }
        }

        conn_counter.fetch_sub(1, Ordering::SeqCst);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chaincode::HealthRecords;
    use std::net::SocketAddr;
    use std::time::Duration;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};
    use tokio::task::LocalSet;

    const HEALTH_REQUEST: &[u8] =
        b"GET /healthz HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n";

    fn test_state(max_connections: Option<u64>) -> Arc<config::AppState> {
        let mut cfg = config::Config::load_from("does-not-exist/config").unwrap();
        cfg.performance.max_connections = max_connections;
        cfg.logging.access_log = false;
        Arc::new(config::AppState::new(&cfg, Arc::new(HealthRecords::new())))
    }

    /// Client side, server side and the peer address the server saw
    async fn connected_pair() -> (TcpStream, TcpStream, SocketAddr) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let client = TcpStream::connect(listener.local_addr().unwrap())
            .await
            .unwrap();
        let (server, peer_addr) = listener.accept().await.unwrap();
        (client, server, peer_addr)
    }

    #[tokio::test]
    async fn test_connection_over_limit_is_rejected() {
        let state = test_state(Some(1));
        let counter = Arc::new(AtomicUsize::new(1));
        let (mut client, server, peer_addr) = connected_pair().await;

        LocalSet::new()
            .run_until(async {
                accept_connection(server, peer_addr, &state, &counter);
                tokio::task::yield_now().await;
            })
            .await;

        assert_eq!(counter.load(Ordering::SeqCst), 1);

        // Closed without a response
        let mut buf = [0u8; 16];
        assert_eq!(client.read(&mut buf).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_connection_served_then_released() {
        let state = test_state(Some(1));
        let counter = Arc::new(AtomicUsize::new(0));
        let (mut client, server, peer_addr) = connected_pair().await;

        LocalSet::new()
            .run_until(async {
                accept_connection(server, peer_addr, &state, &counter);
                assert_eq!(counter.load(Ordering::SeqCst), 1);

                client.write_all(HEALTH_REQUEST).await.unwrap();
                let mut response = Vec::new();
                client.read_to_end(&mut response).await.unwrap();
                assert!(response.starts_with(b"HTTP/1.1 200"));

                for _ in 0..200 {
                    if counter.load(Ordering::SeqCst) == 0 {
                        break;
                    }
                    tokio::time::sleep(Duration::from_millis(10)).await;
                }
            })
            .await;

        assert_eq!(counter.load(Ordering::SeqCst), 0);
    }
}
