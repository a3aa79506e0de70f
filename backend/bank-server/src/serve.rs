use crate::error::{Result as ServerErrorResult, ServerError};

use axum::Router;
use log::{error, info};
use tokio::net::TcpListener;

/// Bind `bind_addr` and serve `app` until Ctrl+C.
pub async fn serve(app: Router, bind_addr: &str) -> ServerErrorResult<()> {
    let listener = TcpListener::bind(bind_addr)
        .await
        .map_err(|e| ServerError::Io {
            message: format!("Failed to bind {}", bind_addr),
            source: e,
        })?;

    // Actual address matters when port is 0 / auto-assigned
    let actual_addr = listener.local_addr().map_err(|e| ServerError::Io {
        message: "Failed to read bound address".to_string(),
        source: e,
    })?;
    info!("Server listening on {}", actual_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::Io {
            message: "Server error".to_string(),
            source: e,
        })?;

    info!("Graceful shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => {
            // Without a signal handler, run until killed
            error!("Failed to listen for SIGINT: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
