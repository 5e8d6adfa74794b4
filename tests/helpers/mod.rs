// ABOUTME: Shared helpers for integration tests
// ABOUTME: HTTP request utilities and router fixtures

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub mod axum_test;
pub mod fixtures;
