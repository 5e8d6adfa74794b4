// ABOUTME: In-memory ingredient store guarded by a single async RwLock
// ABOUTME: Assigns ids from a monotonic counter and starts from two seed records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Server Contributors

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

use super::IngredientStore;
use crate::errors::{AppError, AppResult};
use crate::models::{Ingredient, IngredientId, IngredientPatch, NewIngredient};

/// Records present on every fresh start
#[must_use]
pub fn seed_ingredients() -> Vec<Ingredient> {
    vec![
        Ingredient {
            id: 1,
            name: "Tomate".to_owned(),
            amount: "3 unidades".to_owned(),
            tags: vec!["vegetal".to_owned()],
        },
        Ingredient {
            id: 2,
            name: "Queijo Mussarela".to_owned(),
            amount: "200g".to_owned(),
            tags: vec!["laticínio".to_owned()],
        },
    ]
}

/// Records and id counter share one lock so creation cannot race
struct Inner {
    records: Vec<Ingredient>,
    next_id: IngredientId,
}

/// Process-local store; contents are lost on restart
pub struct InMemoryIngredientStore {
    inner: RwLock<Inner>,
}

impl InMemoryIngredientStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    /// Create a store holding the seed records
    #[must_use]
    pub fn seeded() -> Self {
        Self::with_records(seed_ingredients())
    }

    /// Create a store from existing records
    ///
    /// Later duplicates of an id are dropped so the uniqueness invariant holds.
    #[must_use]
    pub fn with_records(records: Vec<Ingredient>) -> Self {
        let mut unique: Vec<Ingredient> = Vec::with_capacity(records.len());
        for record in records {
            if unique.iter().all(|existing| existing.id != record.id) {
                unique.push(record);
            }
        }

        let next_id = unique.iter().map(|i| i.id).max().map_or(1, |max| max + 1);

        Self {
            inner: RwLock::new(Inner {
                records: unique,
                next_id,
            }),
        }
    }
}

impl Default for InMemoryIngredientStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IngredientStore for InMemoryIngredientStore {
    async fn list(&self, query: Option<&str>) -> AppResult<Vec<Ingredient>> {
        let inner = self.inner.read().await;

        let needle = query.map(str::trim).filter(|q| !q.is_empty());
        let Some(needle) = needle.map(str::to_lowercase) else {
            return Ok(inner.records.clone());
        };

        Ok(inner
            .records
            .iter()
            .filter(|ingredient| ingredient.matches(&needle))
            .cloned()
            .collect())
    }

    async fn get(&self, id: IngredientId) -> AppResult<Ingredient> {
        self.inner
            .read()
            .await
            .records
            .iter()
            .find(|i| i.id == id)
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("Ingredient {id}")))
    }

    #[instrument(skip(self, payload))]
    async fn create(&self, payload: NewIngredient) -> AppResult<Ingredient> {
        let mut inner = self.inner.write().await;

        let ingredient = payload.into_ingredient(inner.next_id)?;
        inner.next_id += 1;
        inner.records.push(ingredient.clone());

        debug!(id = ingredient.id, name = %ingredient.name, "Ingredient created");
        Ok(ingredient)
    }

    #[instrument(skip(self, patch))]
    async fn update(&self, id: IngredientId, patch: IngredientPatch) -> AppResult<Ingredient> {
        let mut inner = self.inner.write().await;

        let ingredient = inner
            .records
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| AppError::not_found(format!("Ingredient {id}")))?;

        ingredient.apply(patch);

        debug!(id, "Ingredient updated");
        Ok(ingredient.clone())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: IngredientId) -> AppResult<()> {
        let mut inner = self.inner.write().await;

        let before = inner.records.len();
        inner.records.retain(|i| i.id != id);

        debug!(id, removed = before != inner.records.len(), "Ingredient delete");
        Ok(())
    }

    async fn count(&self) -> AppResult<usize> {
        Ok(self.inner.read().await.records.len())
    }
}
