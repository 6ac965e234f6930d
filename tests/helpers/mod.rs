// ABOUTME: Shared test helpers and utilities for integration tests
// ABOUTME: Exports the axum request harness and the stub generation provider
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

pub mod axum_test;
pub mod stub_provider;

use std::sync::Arc;

use pantry_chef::config::ServerConfig;
use pantry_chef::llm::LlmProvider;
use pantry_chef::server::ServerResources;

/// A fixed configuration independent of the process environment
pub fn test_config() -> ServerConfig {
    ServerConfig {
        http_port: 5000,
        environment: "test".into(),
        has_gemini_key: false,
        cors_allowed_origins: String::new(),
    }
}

/// Build server resources around an injected provider, with a fresh history
pub fn test_resources(provider: Arc<dyn LlmProvider>) -> Arc<ServerResources> {
    Arc::new(ServerResources::with_provider(test_config(), provider))
}
