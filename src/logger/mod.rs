//! Logger module
//!
//! Provides logging utilities for the chaincode server including:
//! - Server lifecycle logging
//! - Invocation logging with multiple formats
//! - Error, warning and debug logging
//! - File-based logging support

mod format;
pub mod writer;

pub use format::InvocationLogEntry;

use crate::chaincode::Response;
use crate::config::Config;
use std::net::SocketAddr;

/// Initialize the logger with configuration
///
/// Should be called once at application startup.
pub fn init(config: &Config) -> std::io::Result<()> {
    writer::init(
        config.logging.access_log_file.as_deref(),
        config.logging.error_log_file.as_deref(),
        config.logging.is_debug(),
    )
}

/// Write to info/access log
fn write_info(message: &str) {
    match writer::get() {
        Some(w) => w.write_info(message),
        None => println!("{message}"),
    }
}

/// Write to error log
fn write_error(message: &str) {
    match writer::get() {
        Some(w) => w.write_error(message),
        None => eprintln!("{message}"),
    }
}

/// Write to access log specifically
fn write_access(message: &str) {
    match writer::get() {
        Some(w) => w.write_access(message),
        None => println!("{message}"),
    }
}

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    write_info("======================================");
    write_info("Chaincode server started successfully");
    write_info(&format!("Chaincode: {}", config.chaincode.name));
    write_info(&format!("Channel: {}", config.chaincode.channel));
    write_info(&format!("Listening on: http://{addr}"));
    write_info(&format!("  - POST http://{addr}/v1/invoke  (submit transaction)"));
    write_info(&format!("  - POST http://{addr}/v1/query   (evaluate transaction)"));
    write_info(&format!("Log level: {}", config.logging.level));
    if let Some(workers) = config.server.workers {
        write_info(&format!("Worker threads: {workers}"));
    }
    if let Some(ref path) = config.logging.access_log_file {
        write_info(&format!("Access log: {path}"));
    }
    if let Some(ref path) = config.logging.error_log_file {
        write_info(&format!("Error log: {path}"));
    }
    write_info("======================================\n");
}

pub fn log_chaincode_init(name: &str, channel: &str, tx_id: &str, response: &Response) {
    if response.is_success() {
        write_info(&format!("[Chaincode] {name} initialized on {channel} (tx {tx_id})"));
    } else {
        log_error(&format!(
            "[Chaincode] {name} init failed on {channel} (tx {tx_id}): {} {}",
            response.status, response.message
        ));
    }
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    write_info(&format!("[Connection] Accepted from: {peer_addr}"));
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(&format!("[ERROR] Failed to serve connection: {err:?}"));
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write_error(&format!("[WARN] {message}"));
}

pub fn log_debug(message: &str) {
    if let Some(w) = writer::get() {
        w.write_debug(&format!("[DEBUG] {message}"));
    }
}

/// Log formatted invocation entry
pub fn log_invocation(entry: &InvocationLogEntry, format: &str) {
    write_access(&entry.format(format));
}

pub fn log_api_request(method: &str, path: &str, status: u16) {
    write_info(&format!("[API] {method} {path} - {status}"));
}

pub fn log_signal_received(name: &str) {
    write_info(&format!("\n[SIGNAL] {name} received, initiating graceful shutdown..."));
}

pub fn log_shutdown_started(active: usize) {
    write_info(&format!(
        "\n[Shutdown] Stopped accepting connections, {active} still active"
    ));
}

pub fn log_shutdown_complete(remaining: usize) {
    if remaining == 0 {
        write_info("[Shutdown] All connections closed");
    } else {
        log_warning(&format!(
            "[Shutdown] Grace period elapsed with {remaining} connections still open"
        ));
    }
}
