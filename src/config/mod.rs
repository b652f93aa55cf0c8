// Configuration module entry point
// Manages application configuration and shared runtime state

mod types;

use std::net::SocketAddr;

use crate::intercept::InterceptRule;

// Re-export public types
pub use types::{Config, InterceptConfig, LoggingConfig, PerformanceConfig, ServerConfig};

impl Config {
    /// Load configuration from "config.toml" plus environment overrides
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from specified file path (without extension)
    ///
    /// The file is optional; every key has a default, so a missing file
    /// yields the stock `/robots.txt` interception behavior.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("EDGE"))
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", "combined")?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .set_default("intercept.sentinel_path", "/robots.txt")?
            .set_default("intercept.not_found_content_type", "text/plain")?
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

/// Shared application state: loaded config plus the rule built from it
pub struct AppState {
    pub config: Config,
    pub rule: InterceptRule,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.clone(),
            rule: InterceptRule::from(&config.intercept),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_config_file() {
        let cfg = Config::load_from("does-not-exist").unwrap();
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.intercept.sentinel_path, "/robots.txt");
        assert_eq!(cfg.intercept.not_found_content_type, "text/plain");
        assert_eq!(cfg.logging.access_log_format, "combined");
    }

    #[test]
    fn test_rule_built_from_config() {
        let cfg = Config::load_from("does-not-exist").unwrap();
        let state = AppState::new(&cfg);
        assert_eq!(state.rule.sentinel_path, "/robots.txt");
        assert_eq!(state.rule.not_found_content_type, "text/plain");
    }

    #[test]
    fn test_intercept_config_default() {
        let cfg = InterceptConfig::default();
        assert_eq!(cfg.sentinel_path, "/robots.txt");
        assert_eq!(cfg.not_found_content_type, "text/plain");
    }
}
