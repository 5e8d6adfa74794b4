// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses environment variables into a typed ServerConfig with documented defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Server Contributors

//! Environment-based configuration management

use crate::constants::{defaults, env_keys, groq};
use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};

/// Environment type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Upstream AI provider settings
#[derive(Clone, Serialize, Deserialize)]
pub struct AiConfig {
    /// Bearer credential; `None` disables suggestions without stopping the server
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    /// Base URL of the OpenAI-compatible API
    pub base_url: String,
    /// Model identifier
    pub model: String,
    /// Completion token cap
    pub max_tokens: u32,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl AiConfig {
    /// Request timeout as a `Duration`
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Whether a credential is present
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: groq::API_BASE_URL.to_owned(),
            model: groq::DEFAULT_MODEL.to_owned(),
            max_tokens: groq::DEFAULT_MAX_TOKENS,
            timeout_secs: groq::REQUEST_TIMEOUT_SECS,
        }
    }
}

// Manual impl keeps the credential out of debug output
impl std::fmt::Debug for AiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AiConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// CORS settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Allowed origins; `["*"]` allows any
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["*".to_owned()],
        }
    }
}

/// Top-level server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// HTTP port
    pub http_port: u16,
    /// Deployment environment
    pub environment: Environment,
    /// Directory served as the front-end bundle
    pub static_dir: PathBuf,
    /// CORS settings
    pub cors: CorsConfig,
    /// AI provider settings
    pub ai: AiConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: defaults::HOST.to_owned(),
            http_port: defaults::HTTP_PORT,
            environment: Environment::default(),
            static_dir: PathBuf::from(defaults::STATIC_DIR),
            cors: CorsConfig::default(),
            ai: AiConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// Reads a `.env` file first when one is present.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but cannot be parsed
    pub fn from_env() -> Result<Self> {
        let dotenv = load_dotenv();
        info!("Loading configuration from environment variables");
        log_dotenv_outcome(&dotenv);

        Self::from_current_env()
    }

    /// Build configuration from the process environment without touching `.env`
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but cannot be parsed, or
    /// if the AI request timeout is zero
    pub fn from_current_env() -> Result<Self> {
        let api_key = env::var(env_keys::GROQ_API_KEY)
            .ok()
            .filter(|key| !key.trim().is_empty());

        if api_key.is_none() {
            warn!(
                "{} not set; AI suggestions will fail until it is configured",
                env_keys::GROQ_API_KEY
            );
        }

        let timeout_secs: u64 = env_var_or(
            env_keys::AI_REQUEST_TIMEOUT_SECS,
            &groq::REQUEST_TIMEOUT_SECS.to_string(),
        )
        .parse()
        .with_context(|| format!("Invalid {} value", env_keys::AI_REQUEST_TIMEOUT_SECS))?;
        ensure!(
            timeout_secs > 0,
            "Invalid {} value: must be greater than zero",
            env_keys::AI_REQUEST_TIMEOUT_SECS
        );

        Ok(Self {
            host: env_var_or(env_keys::HOST, defaults::HOST),
            http_port: env_var_or(env_keys::PORT, &defaults::HTTP_PORT.to_string())
                .parse()
                .with_context(|| format!("Invalid {} value", env_keys::PORT))?,
            environment: Environment::from_str_or_default(&env_var_or(
                env_keys::ENVIRONMENT,
                "development",
            )),
            static_dir: PathBuf::from(env_var_or(env_keys::STATIC_DIR, defaults::STATIC_DIR)),
            cors: CorsConfig {
                allowed_origins: parse_origins(&env_var_or(
                    env_keys::CORS_ALLOWED_ORIGINS,
                    defaults::CORS_ALLOWED_ORIGINS,
                )),
            },
            ai: AiConfig {
                api_key,
                base_url: env_var_or(env_keys::GROQ_API_BASE_URL, groq::API_BASE_URL),
                model: env_var_or(env_keys::GROQ_MODEL, groq::DEFAULT_MODEL),
                max_tokens: env_var_or(
                    env_keys::GROQ_MAX_TOKENS,
                    &groq::DEFAULT_MAX_TOKENS.to_string(),
                )
                .parse()
                .with_context(|| format!("Invalid {} value", env_keys::GROQ_MAX_TOKENS))?,
                timeout_secs,
            },
        })
    }

    /// Address the listener binds to
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }

    /// Human-readable summary for startup logs; never includes secrets
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Pantry Server Configuration:\n\
             - Bind Address: {}\n\
             - Environment: {}\n\
             - Static Assets: {}\n\
             - CORS Origins: {}\n\
             - AI Provider: {} ({})\n\
             - AI Model: {}\n\
             - AI Timeout: {}s",
            self.bind_address(),
            self.environment,
            self.static_dir.display(),
            self.cors.allowed_origins.join(", "),
            self.ai.base_url,
            if self.ai.is_configured() {
                "Enabled"
            } else {
                "Disabled"
            },
            self.ai.model,
            self.ai.timeout_secs,
        )
    }
}

/// Load a `.env` file into the process environment when one is present
///
/// Call before logging is initialized so `RUST_LOG` and `LOG_FORMAT` from the
/// file take effect; report the outcome with [`log_dotenv_outcome`] afterwards.
///
/// # Errors
///
/// Returns the `dotenvy` error when no file exists or it cannot be parsed
pub fn load_dotenv() -> std::result::Result<PathBuf, dotenvy::Error> {
    dotenvy::dotenv()
}

/// Log the result of [`load_dotenv`]
pub fn log_dotenv_outcome(outcome: &std::result::Result<PathBuf, dotenvy::Error>) {
    match outcome {
        Ok(path) => info!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => info!("No .env file found, using process environment"),
        Err(e) => warn!("Failed to load .env file: {e}"),
    }
}

/// Read an environment variable, falling back to a default
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse comma-separated CORS origins
fn parse_origins(origins_str: &str) -> Vec<String> {
    if origins_str.trim() == "*" {
        vec!["*".to_owned()]
    } else {
        origins_str
            .split(',')
            .map(|s| s.trim().to_owned())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins() {
        assert_eq!(parse_origins("*"), vec!["*"]);
        assert_eq!(
            parse_origins("http://localhost:3000, https://app.example.com ,"),
            vec!["http://localhost:3000", "https://app.example.com"]
        );
        assert!(parse_origins("").is_empty());
    }

    #[test]
    fn test_environment_parsing() {
        assert_eq!(
            Environment::from_str_or_default("PROD"),
            Environment::Production
        );
        assert_eq!(
            Environment::from_str_or_default("test"),
            Environment::Testing
        );
        assert_eq!(
            Environment::from_str_or_default("whatever"),
            Environment::Development
        );
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let ai = AiConfig {
            api_key: Some("gsk_secret".to_owned()),
            ..AiConfig::default()
        };
        let rendered = format!("{ai:?}");
        assert!(!rendered.contains("gsk_secret"));
        assert!(rendered.contains("REDACTED"));
    }

    #[test]
    fn test_summary_hides_api_key() {
        let mut config = ServerConfig::default();
        config.ai.api_key = Some("gsk_secret".to_owned());

        let summary = config.summary();
        assert!(summary.contains("Enabled"));
        assert!(summary.contains("0.0.0.0:3000"));
        assert!(!summary.contains("gsk_secret"));
    }
}
