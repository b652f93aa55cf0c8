// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
    pub intercept: InterceptConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub access_log: bool,
    /// Access log format (combined, common, or json)
    #[serde(default = "default_access_log_format")]
    pub access_log_format: String,
}

#[allow(clippy::missing_const_for_fn)]
fn default_access_log_format() -> String {
    "combined".to_string()
}

/// Performance configuration
#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    pub keep_alive_timeout: u64,
    pub read_timeout: u64,
    pub write_timeout: u64,
    pub max_connections: Option<u64>,
}

/// Interception rule configuration.
///
/// Exactly one recognized rule; defaults match the production edge
/// behavior (plain-text 404 for `/robots.txt`).
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct InterceptConfig {
    #[serde(default = "default_sentinel_path")]
    pub sentinel_path: String,
    #[serde(default = "default_not_found_content_type")]
    pub not_found_content_type: String,
}

#[allow(clippy::missing_const_for_fn)]
fn default_sentinel_path() -> String {
    "/robots.txt".to_string()
}

#[allow(clippy::missing_const_for_fn)]
fn default_not_found_content_type() -> String {
    "text/plain".to_string()
}

impl Default for InterceptConfig {
    fn default() -> Self {
        Self {
            sentinel_path: default_sentinel_path(),
            not_found_content_type: default_not_found_content_type(),
        }
    }
}
