// ABOUTME: Route handler for AI recipe suggestions
// ABOUTME: Accepts ingredient names and returns the structured or raw-text suggestion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Server Contributors

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::{errors::AppError, resources::ServerResources, suggestions::SuggestionResult};

/// Request body for POST /api/ai/suggest
#[derive(Debug, Default, Deserialize)]
pub struct SuggestRequest {
    /// Names of the selected ingredients
    #[serde(rename = "ingredientNames", default)]
    pub ingredient_names: Option<Vec<String>>,
}

/// Successful suggestion response
#[derive(Debug, Serialize)]
pub struct SuggestResponse {
    /// Always `true`
    pub ok: bool,
    /// Structured recipes or `{text}`
    pub result: SuggestionResult,
}

/// Suggestion routes handler
pub struct SuggestionRoutes;

impl SuggestionRoutes {
    /// Create the suggestion route
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/ai/suggest", post(Self::handle_suggest))
            .with_state(resources)
    }

    /// Handle POST /api/ai/suggest - Ask the model for recipes
    async fn handle_suggest(
        State(resources): State<Arc<ServerResources>>,
        payload: Result<Json<SuggestRequest>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let Json(request) = payload?;
        let names = request
            .ingredient_names
            .ok_or_else(|| AppError::missing_field("ingredientNames"))?;

        let result = resources.suggester.suggest(&names).await?;

        Ok((StatusCode::OK, Json(SuggestResponse { ok: true, result })).into_response())
    }
}
