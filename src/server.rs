// ABOUTME: HTTP server assembly: router, middleware stack and graceful shutdown
// ABOUTME: Serves the REST API, health check and static front-end on one listener
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Server Contributors

//! # HTTP Server
//!
//! [`build_router`] wires the domain routes onto shared resources and wraps
//! them in request-id, tracing and CORS layers. Paths that match no API route
//! fall through to the static asset directory. [`run`] binds the configured
//! address and serves until Ctrl+C or SIGTERM.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{body::Body, Router};
use http::HeaderName;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    services::ServeDir,
    trace::{DefaultOnResponse, TraceLayer},
};
use tracing::{error, info, Level};

use crate::{
    config::ServerConfig,
    constants::REQUEST_ID_HEADER,
    middleware::{create_request_span, setup_cors},
    resources::ServerResources,
    routes::{HealthRoutes, IngredientRoutes, SuggestionRoutes},
};

/// Build the complete application router
#[must_use]
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    let request_id_header = HeaderName::from_static(REQUEST_ID_HEADER);
    let static_files = ServeDir::new(&resources.config.static_dir);
    let cors = setup_cors(&resources.config);

    Router::new()
        .merge(HealthRoutes::routes(Arc::clone(&resources)))
        .merge(IngredientRoutes::routes(Arc::clone(&resources)))
        .merge(SuggestionRoutes::routes(resources))
        .fallback_service(static_files)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(
                    request_id_header.clone(),
                    MakeRequestUuid,
                ))
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(create_request_span::<Body>)
                        .on_response(DefaultOnResponse::new().level(Level::INFO)),
                )
                .layer(PropagateRequestIdLayer::new(request_id_header))
                .layer(cors),
        )
}

/// Serve the application on an already-bound listener until shutdown
///
/// # Errors
///
/// Returns an error if the AI client cannot be built or the server fails
pub async fn serve(listener: TcpListener, config: ServerConfig) -> Result<()> {
    let resources = Arc::new(ServerResources::from_config(config)?);
    let app = build_router(resources);

    let local_addr = listener
        .local_addr()
        .context("Failed to read listener address")?;
    info!("Pantry server listening on http://{local_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("Server shut down");
    Ok(())
}

/// Bind the configured address and serve until shutdown
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails
pub async fn run(config: ServerConfig) -> Result<()> {
    let bind_address = config.bind_address();
    let listener = TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {bind_address}"))?;

    serve(listener, config).await
}

/// Resolve on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
