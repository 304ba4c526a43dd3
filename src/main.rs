//! fjord-booking server entry point.
//!
//! Starts the Axum HTTP server for the tour catalog and booking API.

use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use fjord_booking::api;
use fjord_booking::app_state::AppState;
use fjord_booking::config::AppConfig;
use fjord_booking::notify::{ConfirmationMailer, LogMailer, SmtpMailer};
use fjord_booking::persistence::SqliteStore;
use fjord_booking::service::BookingService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = AppConfig::from_env()?;
    tracing::info!(addr = %config.listen_addr, "starting fjord-booking");

    // Open the database, apply schema, seed the catalog once
    let store = SqliteStore::connect(&config.database_url, config.database_max_connections).await?;
    store.init_schema().await?;
    store.seed_tours().await?;

    // Pick the mailer: SMTP when credentials are configured, log-only otherwise
    let mailer: Arc<dyn ConfirmationMailer> = if config.smtp_user.is_empty() {
        tracing::warn!("SMTP_USER not set, confirmation emails will only be logged");
        Arc::new(LogMailer)
    } else {
        Arc::new(SmtpMailer::new(&config))
    };

    // Build service layer and application state
    let booking_service = Arc::new(BookingService::new(store.clone(), mailer));
    let app_state = AppState { booking_service };

    // Build router
    let app = Router::new()
        .merge(api::build_router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    #[cfg(feature = "swagger-ui")]
    let app = {
        use utoipa::OpenApi;
        app.merge(
            utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", api::ApiDoc::openapi()),
        )
    };

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Release the database before exiting
    store.close().await;
    tracing::info!("database connection closed, exiting");

    Ok(())
}

/// Resolves when the process receives SIGINT (Ctrl+C) or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("received Ctrl+C, shutting down"),
        () = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}
