// ABOUTME: Core data models for ingredient records and their create/update payloads
// ABOUTME: Encodes the presence rules for required and partially-updated fields
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Server Contributors

//! # Ingredient Models
//!
//! [`Ingredient`] is the stored record. [`NewIngredient`] and [`IngredientPatch`]
//! are the request payloads for creation and partial update. Every payload field
//! is optional on the wire so presence rules are enforced here rather than by
//! the JSON extractor.

use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

/// Identifier assigned by the store
pub type IngredientId = u64;

/// A named item with optional quantity and descriptive tags
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Unique identifier
    pub id: IngredientId,
    /// Display name, never empty
    pub name: String,
    /// Free-form quantity such as `200g`
    #[serde(default)]
    pub amount: String,
    /// Ordered descriptive tags
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Ingredient {
    /// Whether this record matches an already-lowercased search needle
    ///
    /// Name and tags are both compared case-insensitively by substring.
    #[must_use]
    pub fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(needle))
    }

    /// Apply a partial update; empty values keep the current field
    pub fn apply(&mut self, patch: IngredientPatch) {
        if let Some(name) = patch.name.filter(|n| !n.trim().is_empty()) {
            self.name = name;
        }
        if let Some(amount) = patch.amount.filter(|a| !a.is_empty()) {
            self.amount = amount;
        }
        if let Some(tags) = patch.tags.filter(|t| !t.is_empty()) {
            self.tags = tags;
        }
    }
}

/// Payload for creating an ingredient
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewIngredient {
    /// Required, must not be blank
    #[serde(default)]
    pub name: Option<String>,
    /// Defaults to empty
    #[serde(default)]
    pub amount: Option<String>,
    /// Defaults to empty
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

impl NewIngredient {
    /// Convenience constructor with only a name
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Set the amount
    #[must_use]
    pub fn with_amount(mut self, amount: impl Into<String>) -> Self {
        self.amount = Some(amount.into());
        self
    }

    /// Set the tags
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    /// Validate presence rules and build the record for the given id
    ///
    /// # Errors
    ///
    /// Returns a validation error if `name` is missing or blank
    pub fn into_ingredient(self, id: IngredientId) -> AppResult<Ingredient> {
        let name = self
            .name
            .filter(|n| !n.trim().is_empty())
            .ok_or_else(|| AppError::missing_field("name"))?;

        Ok(Ingredient {
            id,
            name,
            amount: self.amount.unwrap_or_default(),
            tags: self.tags.unwrap_or_default(),
        })
    }
}

/// Payload for a partial update
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IngredientPatch {
    /// Replaces the name when non-blank
    #[serde(default)]
    pub name: Option<String>,
    /// Replaces the amount when non-empty
    #[serde(default)]
    pub amount: Option<String>,
    /// Replaces the tags when non-empty
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}
