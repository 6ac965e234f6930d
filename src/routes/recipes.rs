// ABOUTME: Recipe route handlers for generation and history endpoints
// ABOUTME: Thin axum handlers delegating to the RecipeService pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef

//! Recipe routes.
//!
//! - `POST /api/recipes/generate`: run the generation pipeline
//! - `GET /api/recipes/history`: current in-memory history, most-recent-last
//! - `GET /api/recipes/health`: liveness probe

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;
use crate::models::{GenerationResult, HistoryEntry};
use crate::server::ServerResources;

/// Response for the history endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct HistoryResponse {
    /// Past generations, most-recent-last
    pub history: Vec<HistoryEntry>,
}

/// Recipe routes handler
pub struct RecipeRoutes;

impl RecipeRoutes {
    /// Create all recipe routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/recipes/generate", post(Self::generate))
            .route("/api/recipes/history", get(Self::history))
            .route("/api/recipes/health", get(Self::health))
            .with_state(resources)
    }

    /// Generate recipe suggestions from the posted ingredient list
    ///
    /// The body is extracted as a `Result` so an unparseable payload still
    /// gets the JSON error envelope instead of axum's plain-text rejection.
    async fn generate(
        State(resources): State<Arc<ServerResources>>,
        body: Result<Json<Value>, JsonRejection>,
    ) -> Result<Json<GenerationResult>, AppError> {
        let Json(body) = body
            .map_err(|rejection| AppError::invalid_input(format!("Invalid JSON body: {rejection}")))?;
        let result = resources.recipe_service.generate(&body).await?;
        Ok(Json(result))
    }

    /// Return the current in-memory generation history
    async fn history(State(resources): State<Arc<ServerResources>>) -> Json<HistoryResponse> {
        let history = resources.recipe_service.history().all().await;
        Json(HistoryResponse { history })
    }

    /// Liveness probe for the recipe API
    async fn health() -> Json<Value> {
        Json(serde_json::json!({
            "status": "OK",
            "message": "Recipe API is running",
            "timestamp": chrono::Utc::now().to_rfc3339(),
        }))
    }
}
