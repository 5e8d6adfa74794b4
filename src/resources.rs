// ABOUTME: Shared server resources handed to every route as axum state
// ABOUTME: Bundles the ingredient store, suggestion service and configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Server Contributors

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::errors::AppResult;
use crate::store::{InMemoryIngredientStore, IngredientStore};
use crate::suggestions::RecipeSuggester;

/// Dependencies shared by all handlers
pub struct ServerResources {
    /// Ingredient storage backend
    pub store: Arc<dyn IngredientStore>,
    /// Recipe suggestion service
    pub suggester: Arc<RecipeSuggester>,
    /// Effective configuration
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Assemble resources from explicit parts
    #[must_use]
    pub fn new(
        store: Arc<dyn IngredientStore>,
        suggester: Arc<RecipeSuggester>,
        config: Arc<ServerConfig>,
    ) -> Self {
        Self {
            store,
            suggester,
            config,
        }
    }

    /// Production wiring: seeded in-memory store and Groq-backed suggestions
    ///
    /// # Errors
    ///
    /// Returns an error if the AI HTTP client cannot be built
    pub fn from_config(config: ServerConfig) -> AppResult<Self> {
        let suggester = RecipeSuggester::from_config(&config.ai)?;

        Ok(Self::new(
            Arc::new(InMemoryIngredientStore::seeded()),
            Arc::new(suggester),
            Arc::new(config),
        ))
    }
}
