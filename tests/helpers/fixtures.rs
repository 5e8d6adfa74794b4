// ABOUTME: Router fixtures wiring test stores and suggestion services
// ABOUTME: Builds the full application router with controlled dependencies

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use pantry_server::{
    config::ServerConfig,
    llm::GroqProvider,
    resources::ServerResources,
    server::build_router,
    store::InMemoryIngredientStore,
    suggestions::RecipeSuggester,
};

/// Router over a seeded store with AI suggestions unconfigured
#[allow(dead_code)]
pub fn seeded_app() -> Router {
    app_with(
        InMemoryIngredientStore::seeded(),
        RecipeSuggester::unconfigured(),
    )
}

/// Router whose suggestions go to a Groq-compatible server at `base_url`
#[allow(dead_code)]
pub fn app_with_groq(base_url: &str, timeout: Duration) -> Router {
    let provider = GroqProvider::new("test-key", base_url, "groq/compound", timeout)
        .expect("Failed to build Groq provider");

    app_with(
        InMemoryIngredientStore::seeded(),
        RecipeSuggester::new(Arc::new(provider), 800),
    )
}

/// Router over explicit dependencies
pub fn app_with(store: InMemoryIngredientStore, suggester: RecipeSuggester) -> Router {
    let config = ServerConfig {
        static_dir: std::env::temp_dir().join("pantry-server-no-static"),
        ..ServerConfig::default()
    };

    build_router(Arc::new(ServerResources::new(
        Arc::new(store),
        Arc::new(suggester),
        Arc::new(config),
    )))
}
