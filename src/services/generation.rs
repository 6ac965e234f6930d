// ABOUTME: Request orchestrator for the recipe generation pipeline
// ABOUTME: Sequences validation, prompt build, model call, parsing, and history commit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef

//! # Recipe Generation Service
//!
//! [`RecipeService`] owns the end-to-end pipeline:
//! validate → snapshot history → build prompt → call the generation provider →
//! parse → commit history → result.
//!
//! On any stage failure the pipeline short-circuits with a typed error and
//! history is left untouched; there is no partial commit and no retry.
//! The history snapshot is taken before the model call, so two
//! concurrent requests may build prompts against the same history state; that
//! staleness only affects stylistic novelty.

use std::sync::Arc;

use chrono::Utc;
use serde_json::Value;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::history::HistoryStore;
use crate::llm::prompts::{build_recipe_prompt, chef_system_prompt};
use crate::llm::{ChatMessage, ChatRequest, LlmProvider};
use crate::models::{GenerationResult, HistoryEntry};
use crate::validation::validate_generation_request;

/// Fixed temperature: some creative variation while remaining schema-compliant
const RECIPE_TEMPERATURE: f32 = 0.7;

/// Bound on generated output length
const RECIPE_MAX_TOKENS: u32 = 1500;

/// Parse raw model output as a [`GenerationResult`]
///
/// Any JSON failure (truncation, prose, a missing `recipes` array) is a
/// `MalformedResponse`; the raw text is never repaired or retried. Deeper
/// schema constraints advertised to the model (ingredient reuse counts,
/// nutrition plausibility) are deliberately not re-checked here.
///
/// # Errors
///
/// Returns [`AppError::malformed_response`] when the text is not valid JSON
/// with a top-level `recipes` array.
pub fn parse_generation_response(raw: &str) -> Result<GenerationResult, AppError> {
    serde_json::from_str(raw).map_err(|_| {
        AppError::malformed_response("The AI response was not in valid JSON format")
    })
}

/// Orchestrates one recipe generation request end to end
///
/// Both collaborators are injected: the provider so tests can substitute a
/// deterministic stub, the history store so each test (and each process) gets
/// its own isolated, empty instance.
pub struct RecipeService {
    provider: Arc<dyn LlmProvider>,
    history: Arc<HistoryStore>,
}

impl RecipeService {
    /// Create a service over a generation provider and history store
    #[must_use]
    pub fn new(provider: Arc<dyn LlmProvider>, history: Arc<HistoryStore>) -> Self {
        Self { provider, history }
    }

    /// The history store backing this service
    #[must_use]
    pub fn history(&self) -> &Arc<HistoryStore> {
        &self.history
    }

    /// Run the full generation pipeline for a raw request payload
    ///
    /// # Errors
    ///
    /// Propagates the failing stage's typed error: `InvalidInput` from
    /// validation, `QuotaExceeded`/`UpstreamAuthFailed`/`TransportFailure`
    /// from the provider, `MalformedResponse` from parsing.
    pub async fn generate(&self, raw_body: &Value) -> Result<GenerationResult, AppError> {
        let request = validate_generation_request(raw_body)?;

        let history_snapshot = if request.use_history {
            self.history.all().await
        } else {
            Vec::new()
        };

        let prompt = build_recipe_prompt(
            &request.ingredients,
            &request.dietary_restrictions,
            &history_snapshot,
        );
        debug!(
            ingredients = request.ingredients.len(),
            history_entries = history_snapshot.len(),
            "Built recipe prompt"
        );

        let chat_request = ChatRequest::new(vec![
            ChatMessage::system(chef_system_prompt()),
            ChatMessage::user(prompt),
        ])
        .with_temperature(RECIPE_TEMPERATURE)
        .with_max_tokens(RECIPE_MAX_TOKENS);

        let response = self.provider.complete(&chat_request).await?;
        let result = parse_generation_response(&response.content)?;

        if !result.recipes.is_empty() {
            self.history
                .append(HistoryEntry {
                    timestamp: Utc::now(),
                    ingredients: request.ingredients,
                    recipes: result.recipes.clone(),
                })
                .await;
        }

        info!(
            recipes = result.recipes.len(),
            provider = self.provider.name(),
            "Recipe generation succeeded"
        );
        Ok(result)
    }
}
