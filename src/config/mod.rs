// Configuration module entry point
// Layers built-in defaults, environment variables and command-line flags

mod cli;
mod state;
mod types;

use std::collections::HashMap;
use std::net::{SocketAddr, ToSocketAddrs};

// Re-export public types
pub use cli::Cli;
pub use state::AppState;
pub use types::Config;

use crate::error::StartupError;

/// Prefix for environment overrides, e.g. `CATEGORY_STUB_SERVER__PORT=9000`
pub const ENV_PREFIX: &str = "CATEGORY_STUB";

impl Config {
    /// Load configuration: defaults < environment < command-line flags
    pub fn load(cli: &Cli) -> Result<Self, config::ConfigError> {
        Self::load_with_env(cli, None)
    }

    /// Same as [`Config::load`], reading variables from `env` instead of the
    /// process environment when given
    pub fn load_with_env(
        cli: &Cli,
        env: Option<HashMap<String, String>>,
    ) -> Result<Self, config::ConfigError> {
        let defaults = Self::default();

        let settings = config::Config::builder()
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(env),
            )
            .set_default("server.host", defaults.server.host.as_str())?
            .set_default("server.port", i64::from(defaults.server.port))?
            .set_default("logging.access_log", defaults.logging.access_log)?
            .set_default(
                "logging.access_log_format",
                defaults.logging.access_log_format.as_str(),
            )?
            .set_default(
                "performance.keep_alive_timeout",
                defaults.performance.keep_alive_timeout,
            )?
            .set_default("performance.read_timeout", defaults.performance.read_timeout)?
            .set_default(
                "performance.shutdown_timeout",
                defaults.performance.shutdown_timeout,
            )?
            .set_override_option("server.host", cli.host.clone())?
            .set_override_option("server.port", cli.port.map(i64::from))?
            .set_override_option(
                "server.workers",
                cli.workers.and_then(|w| i64::try_from(w).ok()),
            )?
            .set_override_option("logging.access_log", cli.access_log.then_some(true))?
            .build()?;

        let cfg: Self = settings.try_deserialize()?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject values the runtime would refuse at startup
    fn validate(&self) -> Result<(), config::ConfigError> {
        if self.server.workers == Some(0) {
            return Err(config::ConfigError::Message(
                "server.workers must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Resolve the configured host and port to a bindable address
    pub fn socket_addr(&self) -> Result<SocketAddr, StartupError> {
        let host = self.server.host.as_str();
        let port = self.server.port;
        let invalid = |reason: String| StartupError::InvalidAddress {
            host: host.to_string(),
            port,
            reason,
        };

        (host, port)
            .to_socket_addrs()
            .map_err(|e| invalid(e.to_string()))?
            .next()
            .ok_or_else(|| invalid("host resolved to no addresses".to_string()))
    }
}
