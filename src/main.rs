use anyhow::Result;
use std::sync::Arc;

use building_estimator::{app, config, logging, services::VisionClient};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Load configuration
    let settings = config::Settings::from_env()?;

    // Initialize logging
    logging::init_logging(&settings.env);

    tracing::info!(
        env = ?settings.env,
        server_addr = %settings.server_addr,
        "Starting building estimator"
    );

    // Create vision service client
    let vision = VisionClient::new(&settings.vision)?;

    if vision.is_configured() {
        // Optionally check vision service health (non-blocking)
        tokio::spawn({
            let vision = vision.clone();
            async move {
                match vision.health_check().await {
                    Ok(()) => tracing::info!("Vision service is healthy"),
                    Err(e) => tracing::warn!(
                        error = %e,
                        "Vision service health check failed - will retry on first request"
                    ),
                }
            }
        });
    } else {
        tracing::warn!("VISION_API_KEY not set - photo analysis will report errors");
    }

    // Create application state
    let state = app::AppState::new(settings.clone(), Arc::new(vision));

    // Build application
    let app = app::create_app(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&settings.server_addr).await?;
    tracing::info!("Listening on {}", settings.server_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    tracing::info!("Shutting down");
}
