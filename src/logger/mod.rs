//! Logger module
//!
//! Logging utilities for the interception harness:
//! - Server lifecycle logging
//! - Access logging with multiple formats
//! - Error and warning logging
//!
//! The decision rule itself never logs; only the hosting layer does.

mod format;

pub use format::AccessLogEntry;

use crate::config::Config;
use std::net::SocketAddr;

fn write_info(message: &str) {
    println!("{message}");
}

fn write_error(message: &str) {
    eprintln!("{message}");
}

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    write_info("======================================");
    write_info("Edge interception harness started");
    write_info(&format!("Listening on: http://{addr}"));
    write_info(&format!(
        "Intercepting: {} -> 404 ({})",
        config.intercept.sentinel_path, config.intercept.not_found_content_type
    ));
    write_info(&format!("Log level: {}", config.logging.level));
    if let Some(workers) = config.server.workers {
        write_info(&format!("Worker threads: {workers}"));
    }
    write_info("======================================\n");
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

/// Log formatted access log entry
pub fn log_access(entry: &AccessLogEntry, format: &str) {
    write_info(&entry.format(format));
}
