// ABOUTME: HTTP middleware for CORS and request tracing
// ABOUTME: Provides the CORS layer and per-request span construction

pub mod cors;
pub mod tracing;

// CORS configuration
pub use cors::setup_cors;

// Request tracing
pub use tracing::create_request_span;
