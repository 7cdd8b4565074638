pub mod modules;
pub mod router;
pub mod shared;
pub mod state;

pub use router::create_router;
pub use shared::AppConfig;
pub use state::AppState;

use shared::errors::{AppError, AppResult};
use shared::utils::init_logger;

/// Load configuration, wire the service and serve until Ctrl-C / SIGTERM
pub async fn run() -> AppResult<()> {
    // Load environment variables
    dotenvy::dotenv().ok();
    init_logger();

    let config = AppConfig::from_env()?;
    let bind_address = config.bind_address;
    log::info!(
        "Upstreams: content={} metadata={} anizone={}",
        config.content_api_url,
        config.metadata_api_url,
        config.anizone_api_url
    );

    let state = AppState::from_config(config)?;
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(bind_address)
        .await
        .map_err(|e| AppError::ConfigError(format!("Failed to bind {}: {}", bind_address, e)))?;
    log::info!("Listening on {}", bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::InternalError(format!("Server error: {}", e)))?;

    log::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                log::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    log::info!("Shutdown signal received");
}
