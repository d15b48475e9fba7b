// Configuration module entry point
// Manages application configuration and runtime state

mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use state::AppState;
pub use types::Config;

/// Default config file name (without extension)
pub const DEFAULT_CONFIG_PATH: &str = "config";

impl Config {
    /// Load configuration from specified file path (without extension)
    /// Default config file is "config.toml" when no path specified
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix("CHAINCODE")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 9999)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("logging.log_format", "text")?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .set_default("performance.shutdown_grace", 5)?
            .set_default("http.server_name", "health-records-chaincode/0.1")?
            .set_default("http.enable_cors", false)?
            .set_default("http.max_body_size", 1_048_576)? // 1MB
            .set_default("chaincode.name", "health-records")?
            .set_default("chaincode.channel", "mychannel")?
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }

    /// Effective configuration rendered as TOML
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> Config {
        Config::load_from("does-not-exist/config").unwrap()
    }

    #[test]
    fn test_defaults_without_file() {
        let cfg = defaults();
        assert_eq!(cfg.server.port, 9999);
        assert_eq!(cfg.logging.log_format, "text");
        assert_eq!(cfg.http.max_body_size, 1_048_576);
        assert_eq!(cfg.http.health.liveness_path, "/healthz");
        assert_eq!(cfg.chaincode.name, "health-records");
        assert_eq!(cfg.chaincode.channel, "mychannel");
        assert!(cfg.performance.max_connections.is_none());
    }

    #[test]
    fn test_socket_addr() {
        let mut cfg = defaults();
        cfg.server.host = "0.0.0.0".to_string();
        cfg.server.port = 7052;
        assert_eq!(cfg.get_socket_addr().unwrap().to_string(), "0.0.0.0:7052");

        cfg.server.host = "not a host".to_string();
        assert!(cfg.get_socket_addr().is_err());
    }

    #[test]
    fn test_to_toml_round_trip() {
        let cfg = defaults();
        let rendered = cfg.to_toml().unwrap();
        assert!(rendered.contains("[chaincode]"));

        let parsed: Config = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed.server.port, cfg.server.port);
        assert_eq!(parsed.chaincode.channel, cfg.chaincode.channel);
    }

    #[test]
    fn test_debug_level() {
        let mut cfg = defaults();
        assert!(!cfg.logging.is_debug());
        cfg.logging.level = "DEBUG".to_string();
        assert!(cfg.logging.is_debug());
    }
}
