mod api_doc;
mod app;
mod catalog;
mod config;
mod error;
mod handlers;
mod models;
mod routes;
mod seed;
mod state;
mod store;
mod views;

use anyhow::Context;
use tokio::{net::TcpListener, signal};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::{Config, StoreBackend};
use state::AppState;
use store::{DynamoDbStore, InMemoryStore, StoreClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("capture-moments starting");

    let config = Config::from_env()?;
    config.log_startup();

    let store = match config.store_backend {
        StoreBackend::DynamoDb => StoreClient::new(DynamoDbStore::from_config(&config).await?),
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store; data is lost on shutdown");
            StoreClient::new(InMemoryStore::new())
        }
    };

    let report = seed::populate_tables(&store).await;
    tracing::info!(
        "Seeding finished: photographers {:?}, gallery_images {:?}",
        report.photographers,
        report.gallery_images
    );

    let app = app::build_router(AppState { store });

    let addr = format!("{}:{}", config.service_host, config.service_port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down...");
        }
    }
}
