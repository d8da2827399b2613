use anyhow::{Context, Result};
use site_server::config::ServerConfig;
use site_server::state::AppState;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let path = ServerConfig::path_from_env();
    let mut config = ServerConfig::load_or_default(&path)
        .with_context(|| format!("Failed to load config from {}", path.display()))?;
    config
        .apply_overrides(|key| std::env::var(key).ok())
        .context("Invalid environment override")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .or_else(|_| tracing_subscriber::EnvFilter::try_new(&config.log_filter))
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!(config = %path.display(), exists = path.exists(), "site-server starting");

    let addr = config.socket_addr()?;
    let router = site_server::build_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!(%addr, "Listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("site-server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
