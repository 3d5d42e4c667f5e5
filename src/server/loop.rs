// Server loop module
// Accepts connections until shutdown is requested, then drains in-flight ones

use hyper_util::server::graceful::GracefulShutdown;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::Notify;

use super::connection::accept_connection;
use crate::config::AppState;
use crate::logger;

/// Serve connections from `listener` until `shutdown` is notified.
///
/// After shutdown the listener is closed at once. In-flight connections are
/// asked to finish and given up to `performance.shutdown_timeout` seconds;
/// anything still open after that is abandoned.
#[allow(clippy::ignored_unit_patterns)]
pub async fn serve(
    listener: TcpListener,
    state: Arc<AppState>,
    shutdown: Arc<Notify>,
) -> std::io::Result<()> {
    let active_connections = Arc::new(AtomicUsize::new(0));
    let graceful = GracefulShutdown::new();

    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        accept_connection(
                            stream,
                            peer_addr,
                            &state,
                            &active_connections,
                            &graceful,
                        );
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            _ = shutdown.notified() => break,
        }
    }

    drop(listener);
    logger::log_draining(active_connections.load(Ordering::SeqCst));

    let grace = Duration::from_secs(state.config.performance.shutdown_timeout);
    tokio::select! {
        _ = graceful.shutdown() => {}
        _ = tokio::time::sleep(grace) => {
            logger::log_warning(&format!(
                "Shutdown grace period of {}s elapsed with {} connection(s) still open",
                grace.as_secs(),
                active_connections.load(Ordering::SeqCst)
            ));
        }
    }

    Ok(())
}
