//! One Click Video - Rust Implementation
//!
//! A video processing platform: REST API for video jobs plus the web UI.

use one_click_video::{api, config, jobs, ui};

use anyhow::Result;
use axum::routing::get;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::signal;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// How long the stubbed pipeline holds a job in Processing.
const PROCESSING_TIME: Duration = Duration::from_secs(5);

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "one_click_video=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        "Starting One Click Video (Rust) v{}",
        env!("CARGO_PKG_VERSION")
    );

    // Load configuration
    let config = config::load_config()?;
    tracing::info!("Configuration loaded, port: {}, env: {}", config.port, config.env);

    // Initialize job store
    let data_dir = config::get_data_dir();
    let store = jobs::JobStore::new(data_dir);
    tracing::info!("Job store initialized");

    // Start processing worker
    let queue = jobs::JobQueue::spawn(store.clone(), PROCESSING_TIME);
    tracing::info!("Processing worker started");

    // Build application state
    let state = api::AppState::new(store, queue, config.env.clone());

    // Build routes: JSON API plus server-rendered UI pages
    let app = api::router(state)
        .route("/", get(ui::home_page))
        .route("/library", get(ui::library_page))
        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http());

    // Start server with graceful shutdown
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutdown complete");

    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down..."),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down..."),
    }
}
