// ABOUTME: Application constants grouped by domain (environment keys, defaults, upstream API)
// ABOUTME: Single place for names and values shared by config, providers and routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Server Contributors

//! Constants module

/// Service identity used in logs and health responses
pub mod service_names {
    /// Name of the HTTP server binary
    pub const PANTRY_SERVER: &str = "pantry-server";
}

/// Environment variable names
pub mod env_keys {
    /// Listening port
    pub const PORT: &str = "PORT";
    /// Bind address
    pub const HOST: &str = "HOST";
    /// Groq API credential
    pub const GROQ_API_KEY: &str = "GROQ_API_KEY";
    /// Override for the Groq API base URL
    pub const GROQ_API_BASE_URL: &str = "GROQ_API_BASE_URL";
    /// Model used for suggestions
    pub const GROQ_MODEL: &str = "GROQ_MODEL";
    /// Completion token cap
    pub const GROQ_MAX_TOKENS: &str = "GROQ_MAX_TOKENS";
    /// Upstream request timeout in seconds
    pub const AI_REQUEST_TIMEOUT_SECS: &str = "AI_REQUEST_TIMEOUT_SECS";
    /// Directory holding the front-end bundle
    pub const STATIC_DIR: &str = "STATIC_DIR";
    /// Comma-separated CORS origins, or `*`
    pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
}

/// Default configuration values
pub mod defaults {
    /// Default listening port
    pub const HTTP_PORT: u16 = 3000;
    /// Default bind address
    pub const HOST: &str = "0.0.0.0";
    /// Default static asset directory
    pub const STATIC_DIR: &str = "public";
    /// Default CORS policy
    pub const CORS_ALLOWED_ORIGINS: &str = "*";
}

/// Groq chat-completion API
pub mod groq {
    /// Base URL for the Groq API (OpenAI-compatible)
    pub const API_BASE_URL: &str = "https://api.groq.com/openai/v1";
    /// Default model for recipe suggestions
    pub const DEFAULT_MODEL: &str = "groq/compound";
    /// Default completion token cap
    pub const DEFAULT_MAX_TOKENS: u32 = 800;
    /// Upstream request timeout
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;
    /// Connection timeout
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;
    /// Console URL shown in configuration errors
    pub const KEYS_URL: &str = "https://console.groq.com/keys";
}

/// Request header carrying the request id
pub const REQUEST_ID_HEADER: &str = "x-request-id";
