// ABOUTME: Ingredient store abstraction injected into the HTTP handlers
// ABOUTME: Lets handlers stay unchanged when the backing storage is swapped
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Server Contributors

//! # Ingredient Store
//!
//! [`IngredientStore`] is the contract the routes depend on. The only backend
//! shipped is [`InMemoryIngredientStore`], which keeps records in process memory
//! and starts from the two seed records on every launch.

mod memory;

pub use memory::{seed_ingredients, InMemoryIngredientStore};

use async_trait::async_trait;

use crate::errors::AppResult;
use crate::models::{Ingredient, IngredientId, IngredientPatch, NewIngredient};

/// Core ingredient storage trait
///
/// All implementations must keep ids unique for the lifetime of the store.
#[async_trait]
pub trait IngredientStore: Send + Sync {
    /// List records in insertion order, optionally filtered by a search query
    ///
    /// An absent or blank query returns everything.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read
    async fn list(&self, query: Option<&str>) -> AppResult<Vec<Ingredient>>;

    /// Get one record by id
    ///
    /// # Errors
    ///
    /// Returns a not-found error for an unknown id
    async fn get(&self, id: IngredientId) -> AppResult<Ingredient>;

    /// Validate and append a new record, assigning its id
    ///
    /// # Errors
    ///
    /// Returns a validation error if the name is missing or blank
    async fn create(&self, payload: NewIngredient) -> AppResult<Ingredient>;

    /// Replace the non-empty fields of an existing record
    ///
    /// # Errors
    ///
    /// Returns a not-found error for an unknown id
    async fn update(&self, id: IngredientId, patch: IngredientPatch) -> AppResult<Ingredient>;

    /// Remove a record; removing an unknown id is not an error
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written
    async fn delete(&self, id: IngredientId) -> AppResult<()>;

    /// Number of stored records
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read
    async fn count(&self) -> AppResult<usize>;
}
