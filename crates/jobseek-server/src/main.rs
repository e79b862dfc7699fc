//! # Jobseek Server
//!
//! Serves the chat and notification API of the Jobseek marketplace.

use anyhow::Context;
use jobseek_config::{AppConfig, ConfigLoader};
use jobseek_repository::{create_pool, DatabasePoolInterface};
use jobseek_server::{
    app::{build_app, Stores},
    startup,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let config = match ConfigLoader::from_default_location() {
        Ok(loader) => loader.get().await,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    startup::init_logging(&config.observability);
    startup::print_banner();
    info!(
        version = env!("CARGO_PKG_VERSION"),
        environment = %config.app.environment,
        "Starting Jobseek server..."
    );

    if let Err(e) = run(config).await {
        error!("Application error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(config: AppConfig) -> anyhow::Result<()> {
    let pool = create_pool(&config.database).await?;
    if config.database.run_migrations {
        pool.run_migrations().await?;
    }
    let pool: Arc<dyn DatabasePoolInterface> = pool;

    let metrics = startup::install_metrics(&config.observability)?;
    let router = build_app(&config, Stores::mysql(&pool), Some(pool.clone()), metrics);

    let addr = config.server.addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    startup::print_startup_info(&config);

    axum::serve(listener, router)
        .with_graceful_shutdown(startup::shutdown_signal())
        .await
        .context("HTTP server error")?;

    pool.close().await;
    info!("Server shutdown complete");
    Ok(())
}
