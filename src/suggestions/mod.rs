// ABOUTME: Recipe suggestion service that turns ingredient names into an LLM prompt
// ABOUTME: Validates input, checks configuration, calls the provider once and parses the reply
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Server Contributors

//! # Recipe Suggestions
//!
//! [`RecipeSuggester`] owns the prompt and the reply interpretation. The
//! provider behind it is optional: without a credential the service still
//! exists and every call fails with a configuration error.

mod result;

pub use result::{
    parse_suggestion, strip_code_fences, RecipeSuggestion, RecipeSuggestions, SuggestionResult,
};

use std::sync::Arc;

use tracing::{info, instrument};

use crate::config::AiConfig;
use crate::constants::{env_keys, groq};
use crate::errors::{AppError, AppResult};
use crate::llm::{ChatMessage, ChatRequest, GroqProvider, LlmProvider};

/// System message framing the assistant
pub const SYSTEM_PROMPT: &str = "Você é um assistente útil, direto e objetivo.";

/// Build the user prompt for the given ingredient names
#[must_use]
pub fn build_prompt(names: &[String]) -> String {
    format!(
        "Você é um assistente culinário. Com base nestes ingredientes: {}.\n\
         1) Sugira até 5 receitas simples com passo a passo curto (3-5 passos).\n\
         2) Para cada ingrediente, sugira 1 substituto viável (ex: \"Queijo Mussarela -> Queijo Vegano\").\n\
         3) Indique se é possível criar uma versão vegana ou sem glúten de cada receita e como.\n\
         Responda em JSON com chaves: recipes (array), substitutions (object).",
        names.join(", ")
    )
}

/// Suggests recipes from ingredient names through an LLM provider
pub struct RecipeSuggester {
    provider: Option<Arc<dyn LlmProvider>>,
    max_tokens: u32,
}

impl RecipeSuggester {
    /// Create a suggester backed by the given provider
    #[must_use]
    pub fn new(provider: Arc<dyn LlmProvider>, max_tokens: u32) -> Self {
        Self {
            provider: Some(provider),
            max_tokens,
        }
    }

    /// Create a suggester with no provider; every call fails with a configuration error
    #[must_use]
    pub const fn unconfigured() -> Self {
        Self {
            provider: None,
            max_tokens: groq::DEFAULT_MAX_TOKENS,
        }
    }

    /// Build from AI configuration, using Groq when a key is present
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built
    pub fn from_config(config: &AiConfig) -> AppResult<Self> {
        if !config.is_configured() {
            return Ok(Self {
                provider: None,
                max_tokens: config.max_tokens,
            });
        }

        let provider = GroqProvider::from_config(config)?;
        Ok(Self::new(Arc::new(provider), config.max_tokens))
    }

    /// Whether calls can reach a provider
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.provider.is_some()
    }

    /// Suggest recipes for the given ingredient names
    ///
    /// Validation and configuration are checked before any outbound call.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an empty list, a configuration error
    /// when no provider is available, or the provider's upstream error
    #[instrument(skip(self), fields(count = names.len()))]
    pub async fn suggest(&self, names: &[String]) -> AppResult<SuggestionResult> {
        if names.is_empty() {
            return Err(AppError::invalid_input(
                "ingredientNames must be a non-empty array",
            ));
        }

        let provider = self.provider.as_ref().ok_or_else(|| {
            AppError::config(format!(
                "{} not configured. Get your API key from {}",
                env_keys::GROQ_API_KEY,
                groq::KEYS_URL
            ))
        })?;

        let request = ChatRequest::new(vec![
            ChatMessage::system(SYSTEM_PROMPT),
            ChatMessage::user(build_prompt(names)),
        ])
        .with_max_tokens(self.max_tokens);

        let response = provider.complete(&request).await?;
        let result = parse_suggestion(&response.content);

        let usage = response.usage.unwrap_or_default();
        info!(
            provider = provider.name(),
            model = %response.model,
            finish_reason = response.finish_reason.as_deref().unwrap_or("unknown"),
            prompt_tokens = usage.prompt_tokens,
            completion_tokens = usage.completion_tokens,
            total_tokens = usage.total_tokens,
            kind = result.kind(),
            "Recipe suggestion completed"
        );
        Ok(result)
    }
}
