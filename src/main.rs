use clap::Parser;
use std::process::ExitCode;
use std::sync::Arc;

mod catalog;
mod config;
mod error;
mod handler;
mod http;
mod logger;
mod routing;
mod server;

use crate::catalog::CategoryResponse;
use crate::config::{AppState, Cli, Config};
use crate::error::StartupError;
use crate::routing::CategoryRouter;
use crate::server::SignalHandler;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            logger::log_error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), StartupError> {
    let cfg = Config::load(cli)?;
    logger::init(&cfg).map_err(StartupError::Logger)?;

    // Build the Tokio runtime, sized by the workers setting when present
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: Config) -> Result<(), StartupError> {
    let addr = cfg.socket_addr()?;
    let router = CategoryRouter::new(catalog::standard_table(), CategoryResponse::empty())?;

    let listener =
        server::create_listener(addr).map_err(|source| StartupError::Bind { addr, source })?;
    let local_addr = listener.local_addr()?;

    let state = Arc::new(AppState::new(cfg, router));
    logger::log_server_start(&local_addr, &state.config, &state.router);

    let signals = Arc::new(SignalHandler::new());
    server::start_signal_handler(Arc::clone(&signals));

    server::serve(listener, state, Arc::clone(&signals.shutdown)).await?;

    if signals.is_shutdown_requested() {
        logger::log_shutdown_complete();
    }
    Ok(())
}
