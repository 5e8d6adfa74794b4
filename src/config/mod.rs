// ABOUTME: Configuration module root
// ABOUTME: Re-exports the environment-driven server configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Server Contributors

/// Environment-based configuration
pub mod environment;

pub use environment::{
    load_dotenv, log_dotenv_outcome, AiConfig, CorsConfig, Environment, ServerConfig,
};
