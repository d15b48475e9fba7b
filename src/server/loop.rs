// Server loop module
// Accepts connections until shutdown is signalled, then drains in-flight connections

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

use super::connection::accept_connection;
use crate::config;
use crate::logger;

/// How often the drain loop re-checks the connection counter
const DRAIN_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Accept connections until `state.shutdown_signal` fires.
///
/// After the signal the listener is closed and the loop waits up to
/// `performance.shutdown_grace` seconds for active connections to finish.
#[allow(clippy::ignored_unit_patterns)]
pub async fn start_server_loop(
    listener: TcpListener,
    state: Arc<config::AppState>,
    active_connections: Arc<AtomicUsize>,
) -> Result<(), Box<dyn std::error::Error>> {
    let shutdown = Arc::clone(&state.shutdown_signal);

    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        accept_connection(stream, peer_addr, &state, &active_connections);
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            _ = shutdown.notified() => {
                break;
            }
        }
    }

    drop(listener);
    logger::log_shutdown_started(active_connections.load(Ordering::SeqCst));

    let grace = Duration::from_secs(state.config.performance.shutdown_grace);
    let remaining = drain_connections(&active_connections, grace).await;
    logger::log_shutdown_complete(remaining);

    Ok(())
}

/// Wait until the counter reaches zero or `grace` elapses; returns the final count.
async fn drain_connections(active_connections: &AtomicUsize, grace: Duration) -> usize {
    let deadline = tokio::time::Instant::now() + grace;

    loop {
        let active = active_connections.load(Ordering::SeqCst);
        if active == 0 || tokio::time::Instant::now() >= deadline {
            return active;
        }
        tokio::time::sleep(DRAIN_POLL_INTERVAL).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_drain_returns_immediately_when_idle() {
        let counter = AtomicUsize::new(0);
        let remaining = drain_connections(&counter, Duration::from_secs(10)).await;
        assert_eq!(remaining, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drain_gives_up_after_grace() {
        let counter = AtomicUsize::new(2);
        let remaining = drain_connections(&counter, Duration::from_millis(200)).await;
        assert_eq!(remaining, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drain_sees_connections_finish() {
        let counter = Arc::new(AtomicUsize::new(1));
        let finisher = Arc::clone(&counter);
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(120)).await;
            finisher.store(0, Ordering::SeqCst);
        });

        let remaining = drain_connections(&counter, Duration::from_secs(5)).await;
        assert_eq!(remaining, 0);
    }
}
