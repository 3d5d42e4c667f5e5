// Application state module
// Holds the loaded configuration and the request router shared by all connections

use crate::routing::CategoryRouter;

use super::types::Config;

/// Application state, read-only once serving starts
#[derive(Debug)]
pub struct AppState {
    pub config: Config,
    pub router: CategoryRouter,
}

impl AppState {
    pub const fn new(config: Config, router: CategoryRouter) -> Self {
        Self { config, router }
    }
}
