//! Logger module
//!
//! Provides logging utilities for the stub server including:
//! - Server lifecycle logging
//! - Per-request routing decisions
//! - Access logging with multiple formats
//! - Error and warning logging

mod format;
pub mod writer;

pub use format::AccessLogEntry;

use crate::catalog::codes::NAMED_CODES;
use crate::config::Config;
use crate::routing::CategoryRouter;
use std::net::SocketAddr;

/// Initialize the logger with configuration
///
/// Should be called once at application startup.
pub fn init(config: &Config) -> std::io::Result<()> {
    writer::init(
        config.logging.access_log_file.as_deref(),
        config.logging.error_log_file.as_deref(),
    )
}

/// Write to info/access log
fn write_info(message: &str) {
    match writer::get() {
        Some(w) => w.write_access(message),
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

fn server_running_line(addr: &SocketAddr) -> String {
    format!("Server running at http://{addr}")
}

fn decision_line(path: &str, response: &str) -> String {
    format!("Request: {path} -> Response: {response}")
}

const SHUTDOWN_NOTICE: &str = "\nShutting down server...";

pub fn log_server_start(addr: &SocketAddr, config: &Config, router: &CategoryRouter) {
    write_info(&server_running_line(addr));
    if let Some(workers) = config.server.workers {
        write_info(&format!("[CONFIG] Worker threads: {workers}"));
    }
    if let Some(max) = config.performance.max_connections {
        write_info(&format!("[CONFIG] Max connections: {max}"));
    }
    if let Some(ref path) = config.logging.access_log_file {
        write_info(&format!("[CONFIG] Access log: {path}"));
    }
    if let Some(ref path) = config.logging.error_log_file {
        write_info(&format!("[CONFIG] Error log: {path}"));
    }

    let codes: Vec<String> = NAMED_CODES
        .iter()
        .map(|(name, code)| format!("{name}={code}"))
        .collect();
    write_info(&format!("[CATALOG] Category codes: {}", codes.join(", ")));
    write_info(&format!("[CATALOG] {} routes:", router.route_count()));
    for (path, prepared) in router.routes() {
        let categories: Vec<String> = prepared
            .payload
            .categories
            .iter()
            .map(ToString::to_string)
            .collect();
        write_info(&format!("  - {path} -> [{}]", categories.join(", ")));
    }
}

/// The per-request line: chosen payload for a request target
pub fn log_decision(path: &str, response: &str) {
    write_info(&decision_line(path, response));
}

/// Log formatted access log entry
pub fn log_access(entry: &AccessLogEntry, format: &str) {
    write_info(&entry.format(format));
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

pub fn log_shutdown_requested() {
    write_info(SHUTDOWN_NOTICE);
}

pub fn log_draining(active: usize) {
    if active > 0 {
        write_info(&format!(
            "[SHUTDOWN] Waiting for {active} in-flight connection(s)"
        ));
    }
}

pub fn log_shutdown_complete() {
    write_info("[SHUTDOWN] Server stopped");
}
