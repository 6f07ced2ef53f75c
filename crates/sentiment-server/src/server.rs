//! Server lifecycle: bind, announce readiness, serve until Ctrl-C.

use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::error::ServerError;
use crate::router::build_router;

/// Binds the configured address and serves until shutdown.
///
/// # Errors
///
/// Returns [`ServerError::Bind`] if the address is unavailable and
/// [`ServerError::Serve`] if the server fails while running.
pub async fn run(config: ServerConfig) -> Result<(), ServerError> {
    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.to_string(),
            source,
        })?;

    serve(listener, &config).await
}

/// Serves the API on an already bound listener until Ctrl-C.
pub async fn serve(listener: TcpListener, config: &ServerConfig) -> Result<(), ServerError> {
    let local_addr = listener.local_addr().map_err(ServerError::Serve)?;
    tracing::info!(addr = %local_addr, "sentiment up on :{}", local_addr.port());

    axum::serve(listener, build_router(config))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)?;

    tracing::info!("sentiment server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("received Ctrl-C, shutting down"),
        Err(err) => {
            // Without a signal handler the server runs until the process is killed.
            tracing::error!("failed to listen for Ctrl-C signal: {}", err);
            std::future::pending::<()>().await;
        }
    }
}
