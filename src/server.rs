// ABOUTME: Server bootstrap: shared resources, router composition, and serving
// ABOUTME: Wires routes, CORS, request tracing, 404 fallback, and the panic boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef

//! Server composition.
//!
//! [`ServerResources`] is the single shared state handed to every route: the
//! environment configuration plus the recipe service (provider + history
//! store). Constructing resources per test gives each test an isolated,
//! empty history and a swappable generation provider.

use std::any::Any;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    body::Body,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    Json, Router,
};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};
use tracing::{error, info};

use crate::config::ServerConfig;
use crate::history::HistoryStore;
use crate::llm::{GeminiProvider, LlmProvider};
use crate::middleware::setup_cors;
use crate::routes::{HealthRoutes, RecipeRoutes};
use crate::services::RecipeService;

/// Shared state for all HTTP routes
pub struct ServerResources {
    /// Environment configuration
    pub config: ServerConfig,
    /// The recipe generation pipeline
    pub recipe_service: RecipeService,
}

impl ServerResources {
    /// Create resources with the Gemini provider from the environment
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        Self::with_provider(config, Arc::new(GeminiProvider::from_env()))
    }

    /// Create resources with an injected generation provider
    ///
    /// Tests use this to substitute a deterministic stub for the upstream
    /// model.
    #[must_use]
    pub fn with_provider(config: ServerConfig, provider: Arc<dyn LlmProvider>) -> Self {
        let history = Arc::new(HistoryStore::new());
        Self {
            config,
            recipe_service: RecipeService::new(provider, history),
        }
    }
}

/// Build the complete application router
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    let cors = setup_cors(&resources.config);

    Router::new()
        .merge(RecipeRoutes::routes(resources.clone()))
        .merge(HealthRoutes::routes(resources))
        .fallback(not_found)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Bind the configured port and serve until the process exits
///
/// # Errors
///
/// Returns an error if the port cannot be bound or the server fails.
pub async fn serve(resources: Arc<ServerResources>) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], resources.config.http_port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Pantry Chef API listening on {addr}");
    let router = build_router(resources);
    axum::serve(listener, router).await?;
    Ok(())
}

/// JSON 404 for unmatched routes
async fn not_found(uri: Uri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({
            "error": "Endpoint not found",
            "message": format!("The endpoint {uri} does not exist"),
        })),
    )
}

/// Catch-all boundary: render unhandled panics as a JSON 500
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response<Body> {
    let detail = err.downcast_ref::<String>().map_or_else(
        || {
            err.downcast_ref::<&str>()
                .map_or("unknown panic", |s| *s)
                .to_owned()
        },
        Clone::clone,
    );
    error!("Unhandled error: {detail}");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(serde_json::json!({
            "error": "Internal server error",
            "message": "Something went wrong on the server",
        })),
    )
        .into_response()
}
