//! Signal handling for graceful shutdown.

use tokio::sync::broadcast;

/// Resolve when either Ctrl+C arrives or a programmatic shutdown is
/// triggered, whichever comes first.
pub async fn wait_for_shutdown(mut shutdown: broadcast::Receiver<()>) {
    tokio::select! {
        result = tokio::signal::ctrl_c() => {
            if let Err(error) = result {
                tracing::error!(%error, "Failed to install Ctrl+C handler");
            }
            tracing::info!("Ctrl+C received");
        }
        _ = shutdown.recv() => {
            tracing::info!("Shutdown signal received");
        }
    }
}
