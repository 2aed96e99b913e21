//! Calorie Coach Backend
//!
//! The server side of a diet and exercise tracker: a deterministic
//! scoring engine over in-memory catalogs, meal/exercise logging with
//! daily statistics, and LLM-enriched advice with a built-in fallback.
//!
//! ## Architecture
//!
//! The backend follows a layered architecture:
//! - Routes: HTTP request handling and routing
//! - Services: scoring, recommendations, tracking, advice
//! - Catalog/Store: in-memory datasets and per-user logs

use anyhow::Result;
use calorie_coach_backend::{config, routes, state::AppState};
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    init_tracing();

    // Load configuration
    let config = config::AppConfig::load()?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        env = if config::AppConfig::is_production() { "production" } else { "development" },
        "Starting Calorie Coach Backend"
    );

    if config.ai.enabled && config.ai.api_key.is_empty() {
        warn!("AI is enabled but no API key is configured; advice will use the knowledge base");
    }

    // Parse catalogs and build application state
    let state = AppState::new(config.clone())?;
    info!(
        foods = state.catalog().food_count(),
        exercises = state.catalog().exercise_count(),
        "Catalogs loaded"
    );

    // Build application
    let app = routes::create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    info!(address = %addr, "Server listening");

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    // Serve with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Initialize tracing/logging
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if config::AppConfig::is_production() {
            "calorie_coach_backend=info,tower_http=info".into()
        } else {
            "calorie_coach_backend=debug,tower_http=debug".into()
        }
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if config::AppConfig::is_production() {
        // JSON logging for production (better for log aggregation)
        subscriber
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        // Pretty logging for development
        subscriber
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        }
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
