// ABOUTME: Health check, service description, and diagnostic route handlers
// ABOUTME: Provides liveness, root listing, and environment test endpoints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef

//! Service-level routes for monitoring and diagnostics.
//!
//! The `/test` endpoint reports whether an upstream credential is configured
//! as a boolean only, never the credential value.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde_json::Value;

use crate::server::ServerResources;

/// Health and diagnostic routes handler
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all service-level routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/", get(Self::root))
            .route("/health", get(Self::health))
            .route("/test", get(Self::test))
            .with_state(resources)
    }

    /// Service description with endpoint listing
    async fn root() -> Json<Value> {
        Json(serde_json::json!({
            "message": "Pantry Chef API",
            "status": "Server is running!",
            "endpoints": {
                "health": "/health",
                "test": "/test",
                "generateRecipe": "POST /api/recipes/generate",
                "history": "/api/recipes/history",
            },
        }))
    }

    /// Liveness probe
    async fn health() -> Json<Value> {
        Json(serde_json::json!({
            "status": "OK",
            "message": "Recipe API is running",
            "timestamp": chrono::Utc::now().to_rfc3339(),
        }))
    }

    /// Diagnostic endpoint reporting port, environment mode, and credential presence
    async fn test(State(resources): State<Arc<ServerResources>>) -> Json<Value> {
        let config = &resources.config;
        Json(serde_json::json!({
            "message": "Test endpoint working",
            "environment": {
                "port": config.http_port,
                "nodeEnv": config.environment,
                "hasGeminiKey": config.has_gemini_key,
            },
        }))
    }
}
