// ABOUTME: Main library entry point for the pantry server
// ABOUTME: Ingredient CRUD over an in-memory store plus AI recipe suggestions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Server Contributors

#![deny(unsafe_code)]

//! # Pantry Server
//!
//! A small recipe and ingredient manager. A browser front-end lists, filters,
//! creates, edits and deletes ingredient records through a REST API, and asks
//! an OpenAI-compatible chat-completion service (Groq) for recipe ideas built
//! from the selected ingredients.
//!
//! ## Architecture
//!
//! - **Store**: [`store::IngredientStore`] trait with an in-memory backend
//! - **LLM**: [`llm::LlmProvider`] trait with the Groq implementation
//! - **Suggestions**: prompt construction and reply parsing
//! - **Routes**: axum handlers grouped by domain
//! - **Server**: router assembly, middleware and graceful shutdown
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use pantry_server::config::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     pantry_server::server::run(config).await
//! }
//! ```

/// Configuration management
pub mod config;

/// Application constants and defaults
pub mod constants;

/// Unified error handling
pub mod errors;

/// LLM provider abstraction and Groq implementation
pub mod llm;

/// Structured logging setup
pub mod logging;

/// HTTP middleware
pub mod middleware;

/// Ingredient data models
pub mod models;

/// Shared handler state
pub mod resources;

/// HTTP route handlers
pub mod routes;

/// Router assembly and server lifecycle
pub mod server;

/// Ingredient storage
pub mod store;

/// Recipe suggestion service
pub mod suggestions;
