// ABOUTME: Health check route handler for service monitoring
// ABOUTME: Reports liveness, ingredient count and whether AI suggestions are configured
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Server Contributors

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::{errors::AppError, resources::ServerResources};

/// Body of GET /health
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always `healthy` when the handler runs
    pub status: &'static str,
    /// RFC 3339 timestamp
    pub timestamp: String,
    /// Number of stored ingredients
    pub ingredients: usize,
    /// Whether an AI credential is configured
    pub ai_configured: bool,
}

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create the health check route
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/health", get(Self::handle_health))
            .with_state(resources)
    }

    async fn handle_health(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let response = HealthResponse {
            status: "healthy",
            timestamp: chrono::Utc::now().to_rfc3339(),
            ingredients: resources.store.count().await?,
            ai_configured: resources.suggester.is_configured(),
        };

        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
