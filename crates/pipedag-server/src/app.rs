//! Router assembly and the serve loop.

use crate::config::ServerConfig;
use crate::error::Result;
use crate::routes;
use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

/// Build the CORS policy described by `config`.
///
/// Methods and request headers are mirrored back, which admits any of them
/// while staying valid alongside credentials.
pub fn cors_layer(config: &ServerConfig) -> Result<CorsLayer> {
    config.validate()?;

    let allow_origin = if config.allows_any_origin() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(config.origin_header_values()?)
    };

    Ok(CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(config.allow_credentials))
}

/// Request-body limit layer; `0` in the config lifts axum's default cap.
fn body_limit_layer(config: &ServerConfig) -> DefaultBodyLimit {
    match config.body_limit() {
        Some(limit) => DefaultBodyLimit::max(limit),
        None => DefaultBodyLimit::disable(),
    }
}

/// Build the application router.
pub fn router(config: &ServerConfig) -> Result<Router> {
    Ok(Router::new()
        .route("/", get(routes::ping))
        .route("/pipelines/parse", post(routes::parse_pipeline))
        .layer(body_limit_layer(config))
        .layer(cors_layer(config)?)
        .layer(TraceLayer::new_for_http()))
}

/// Bind and serve until Ctrl-C.
pub async fn serve(config: ServerConfig) -> Result<()> {
    let app = router(&config)?;

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    tracing::info!(
        address = %listener.local_addr()?,
        origins = ?config.allowed_origins,
        credentials = config.allow_credentials,
        max_body_bytes = ?config.body_limit(),
        "Listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
