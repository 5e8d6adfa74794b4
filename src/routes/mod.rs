// ABOUTME: Route module organization for the pantry server HTTP endpoints
// ABOUTME: Groups route definitions by domain with thin handlers over the services
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Server Contributors

//! Route module for the pantry server
//!
//! Each domain module exposes a `*Routes` type whose `routes` function builds
//! an axum `Router` bound to the shared [`ServerResources`](crate::resources::ServerResources).

/// Health check route
pub mod health;
/// Ingredient CRUD routes
pub mod ingredients;
/// AI recipe suggestion route
pub mod suggestions;

/// Health check route handlers
pub use health::HealthRoutes;
/// Ingredient route handlers
pub use ingredients::IngredientRoutes;
/// Suggestion route handlers
pub use suggestions::SuggestionRoutes;
