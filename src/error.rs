//! Startup errors
//!
//! The request path cannot fail; everything that can go wrong happens
//! before the first connection is accepted.

use std::io;
use std::net::SocketAddr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("failed to load configuration: {0}")]
    Config(#[from] config::ConfigError),

    #[error("invalid listen address '{host}:{port}': {reason}")]
    InvalidAddress {
        host: String,
        port: u16,
        reason: String,
    },

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    #[error("failed to open log files: {0}")]
    Logger(#[source] io::Error),

    #[error("failed to render response payloads: {0}")]
    Payload(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_message() {
        let err = StartupError::Bind {
            addr: "127.0.0.1:8080".parse().unwrap(),
            source: io::Error::new(io::ErrorKind::AddrInUse, "address in use"),
        };
        assert_eq!(err.to_string(), "failed to bind 127.0.0.1:8080: address in use");
    }

    #[test]
    fn test_invalid_address_message() {
        let err = StartupError::InvalidAddress {
            host: "nowhere".to_string(),
            port: 1,
            reason: "lookup failed".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid listen address 'nowhere:1': lookup failed"
        );
    }
}
