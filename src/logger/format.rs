//! Invocation log format module
//!
//! One entry per chaincode invocation, rendered as:
//! - `text` (single human-readable line)
//! - `json` (JSON structured logging)
//! - Custom patterns with `$variable` placeholders

use chrono::Local;

/// Invocation log entry
#[derive(Debug, Clone)]
pub struct InvocationLogEntry {
    /// Client address
    pub remote_addr: String,
    /// Time the invocation was received
    pub time: chrono::DateTime<Local>,
    /// `submit` or `evaluate`
    pub mode: &'static str,
    /// Chaincode function name
    pub function: String,
    /// Number of arguments passed
    pub arg_count: usize,
    /// Transaction id assigned by the ledger
    pub tx_id: String,
    /// Chaincode response status
    pub status: i32,
    /// Error message (empty on success)
    pub message: String,
    /// Payload size in bytes
    pub payload_bytes: usize,
    /// Keys committed
    pub writes: usize,
    /// Processing time in microseconds
    pub duration_us: u64,
}

impl InvocationLogEntry {
    /// Create a new entry with the current timestamp
    pub fn new(
        remote_addr: String,
        mode: &'static str,
        function: String,
        arg_count: usize,
    ) -> Self {
        Self {
            remote_addr,
            time: Local::now(),
            mode,
            function,
            arg_count,
            tx_id: String::new(),
            status: 0,
            message: String::new(),
            payload_bytes: 0,
            writes: 0,
            duration_us: 0,
        }
    }

    /// Format the log entry according to the specified format
    pub fn format(&self, format: &str) -> String {
        match format {
            "text" => self.format_text(),
            "json" => self.format_json(),
            custom => self.format_custom(custom),
        }
    }

    /// `$remote_addr [$time] $mode $function/$arg_count tx=$tx_id $status $payload_bytes "$message" $duration_us`
    fn format_text(&self) -> String {
        format!(
            "{} [{}] {} {}/{} tx={} {} {}B writes={} \"{}\" {}us",
            self.remote_addr,
            self.time.format("%d/%b/%Y:%H:%M:%S %z"),
            self.mode,
            self.function,
            self.arg_count,
            self.tx_id,
            self.status,
            self.payload_bytes,
            self.writes,
            self.message,
            self.duration_us,
        )
    }

    /// JSON structured log format
    fn format_json(&self) -> String {
        serde_json::json!({
            "remote_addr": self.remote_addr,
            "time": self.time.to_rfc3339(),
            "mode": self.mode,
            "function": self.function,
            "arg_count": self.arg_count,
            "tx_id": self.tx_id,
            "status": self.status,
            "message": self.message,
            "payload_bytes": self.payload_bytes,
            "writes": self.writes,
            "duration_us": self.duration_us,
        })
        .to_string()
    }

    /// Custom format with variable substitution
    fn format_custom(&self, pattern: &str) -> String {
        pattern
            .replace("$remote_addr", &self.remote_addr)
            .replace("$payload_bytes", &self.payload_bytes.to_string())
            .replace("$duration_us", &self.duration_us.to_string())
            .replace("$arg_count", &self.arg_count.to_string())
            .replace("$function", &self.function)
            .replace("$message", &self.message)
            .replace("$writes", &self.writes.to_string())
            .replace("$status", &self.status.to_string())
            .replace("$tx_id", &self.tx_id)
            .replace("$mode", self.mode)
            .replace("$time", &self.time.format("%Y-%m-%dT%H:%M:%S%z").to_string())
    }
}
