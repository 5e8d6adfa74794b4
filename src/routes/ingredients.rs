// ABOUTME: Route handlers for the ingredient CRUD API
// ABOUTME: Maps REST verbs on /api/ingredients onto the injected ingredient store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Server Contributors

//! Ingredient routes
//!
//! List, fetch, create, update and delete ingredient records. Extractor
//! rejections (malformed JSON, non-numeric ids) are turned into the shared
//! error body instead of axum's plain-text defaults.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tracing::info;

use crate::{
    errors::AppError,
    models::{IngredientId, IngredientPatch, NewIngredient},
    resources::ServerResources,
};

/// Query parameters for the list endpoint
#[derive(Debug, Default, Deserialize)]
pub struct ListIngredientsQuery {
    /// Case-insensitive search over name and tags
    pub q: Option<String>,
}

/// Ingredient routes handler
pub struct IngredientRoutes;

impl IngredientRoutes {
    /// Create all ingredient routes
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/ingredients",
                get(Self::handle_list).post(Self::handle_create),
            )
            .route(
                "/api/ingredients/:id",
                get(Self::handle_get)
                    .put(Self::handle_update)
                    .delete(Self::handle_delete),
            )
            .with_state(resources)
    }

    /// Handle GET /api/ingredients - List ingredients, optionally filtered by `q`
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        query: Result<Query<ListIngredientsQuery>, QueryRejection>,
    ) -> Result<Response, AppError> {
        let Query(query) = query?;
        let ingredients = resources.store.list(query.q.as_deref()).await?;

        Ok((StatusCode::OK, Json(ingredients)).into_response())
    }

    /// Handle GET /api/ingredients/:id - Get one ingredient
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        id: Result<Path<IngredientId>, PathRejection>,
    ) -> Result<Response, AppError> {
        let Path(id) = id?;
        let ingredient = resources.store.get(id).await?;

        Ok((StatusCode::OK, Json(ingredient)).into_response())
    }

    /// Handle POST /api/ingredients - Create an ingredient
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        payload: Result<Json<NewIngredient>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let Json(payload) = payload?;
        let ingredient = resources.store.create(payload).await?;

        info!(id = ingredient.id, "Created ingredient");
        Ok((StatusCode::CREATED, Json(ingredient)).into_response())
    }

    /// Handle PUT /api/ingredients/:id - Partially update an ingredient
    async fn handle_update(
        State(resources): State<Arc<ServerResources>>,
        id: Result<Path<IngredientId>, PathRejection>,
        patch: Result<Json<IngredientPatch>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let Path(id) = id?;
        let Json(patch) = patch?;
        let ingredient = resources.store.update(id, patch).await?;

        Ok((StatusCode::OK, Json(ingredient)).into_response())
    }

    /// Handle DELETE /api/ingredients/:id - Delete an ingredient
    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        id: Result<Path<IngredientId>, PathRejection>,
    ) -> Result<Response, AppError> {
        let Path(id) = id?;
        resources.store.delete(id).await?;

        Ok(StatusCode::NO_CONTENT.into_response())
    }
}
