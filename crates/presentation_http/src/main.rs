//! Seedcast HTTP Server
//!
//! Main entry point for the sowing advisor.

use std::sync::Arc;

use application::AdvisoryService;
use infrastructure::{AppConfig, ForecastAdapter, GeocodeAdapter};
use presentation_http::{routes, state::AppState};
use tokio::{net::TcpListener, signal};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "seedcast_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Seedcast v{} starting...", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = AppConfig::load().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config, using defaults: {}", e);
        AppConfig::default()
    });

    info!(
        host = %config.server.host,
        port = %config.server.port,
        forecast_days = %config.forecast.forecast_days,
        "Configuration loaded"
    );

    // Initialize adapters
    let geocoder = GeocodeAdapter::with_config(config.geocoder.to_geocode_config())
        .map_err(|e| anyhow::anyhow!("Failed to initialize geocoder: {e}"))?;
    let forecast = ForecastAdapter::with_config(config.forecast.to_weather_config())
        .map_err(|e| anyhow::anyhow!("Failed to initialize forecast client: {e}"))?;

    // Initialize the advisory service
    let advisory_service = AdvisoryService::new(Arc::new(geocoder), Arc::new(forecast))
        .with_forecast_days(config.forecast.forecast_days);

    // Create app state
    let state = AppState {
        advisory_service: Arc::new(advisory_service),
        config: Arc::new(config.clone()),
    };

    // Build router
    let app = routes::create_router(state);

    // Add middleware (order matters: first added = outermost)
    let app = if config.server.cors_enabled {
        let cors_layer = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        app.layer(TraceLayer::new_for_http()).layer(cors_layer)
    } else {
        app.layer(TraceLayer::new_for_http())
    };

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");

    Ok(())
}

/// Wait for shutdown signals (SIGINT, SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        // Log error but continue waiting - this is a best-effort signal handler
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
