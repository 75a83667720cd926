use std::future::Future;

/// Resolve once `signal` fires
///
/// If the signal handler cannot be installed the error is logged and this
/// never resolves, so the server keeps running instead of stopping at once.
pub async fn wait_for_shutdown<F>(signal: F)
where
    F: Future<Output = std::io::Result<()>>,
{
    match signal.await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => {
            tracing::error!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
