//! LabTrack Server - Laboratory Equipment Lifecycle Backend
//!
//! REST API server over the equipment lifecycle ledger.

use axum::{
    routing::{get, post, put},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use labtrack_server::{api, config::AppConfig, services::Services, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("labtrack_server={},tower_http=debug", config.logging.level).into()
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting LabTrack Server v{}", env!("CARGO_PKG_VERSION"));

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create services over a fresh in-memory ledger
    let services = Services::new();

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(server_host.parse().expect("Invalid host address"), server_port);

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes
fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        .route("/ready", get(api::health::readiness_check))
        // Equipment registry
        .route("/equipment", get(api::equipment::list_equipment))
        .route("/equipment", post(api::equipment::register_equipment))
        .route("/equipment/overdue", get(api::equipment::list_overdue))
        .route("/equipment/due-soon", get(api::equipment::list_due_soon))
        .route("/equipment/:id", get(api::equipment::get_equipment))
        .route("/equipment/:id/override", put(api::equipment::set_override))
        .route(
            "/equipment/:id/deactivate",
            post(api::equipment::deactivate_equipment),
        )
        // Usage logs
        .route(
            "/equipment/:id/usage-logs",
            get(api::equipment::list_usage_logs),
        )
        .route(
            "/equipment/:id/usage-logs",
            post(api::equipment::create_usage_log),
        )
        // Maintenance logs
        .route(
            "/equipment/:id/maintenance-logs",
            get(api::equipment::list_maintenance_logs),
        )
        .route(
            "/equipment/:id/maintenance-logs",
            post(api::equipment::create_maintenance_log),
        )
        // Calibration logs
        .route(
            "/equipment/:id/calibration-logs",
            get(api::equipment::list_calibration_logs),
        )
        .route(
            "/equipment/:id/calibration-logs",
            post(api::equipment::create_calibration_log),
        )
        // Documents
        .route(
            "/equipment/:id/documents",
            get(api::equipment::list_documents),
        )
        .route(
            "/equipment/:id/documents",
            post(api::equipment::attach_document),
        )
        // Statistics
        .route("/stats", get(api::stats::get_stats))
        .with_state(state);

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
