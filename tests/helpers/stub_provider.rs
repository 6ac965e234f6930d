// ABOUTME: Deterministic generation provider for automated testing without network access
// ABOUTME: Returns canned completions or typed failures and records every prompt it sees
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use pantry_chef::errors::AppError;
use pantry_chef::llm::{ChatRequest, ChatResponse, LlmProvider, MessageRole};

/// What the stub should do when asked to complete
#[derive(Clone)]
pub enum StubBehavior {
    /// Return the given text as the completion content
    Respond(String),
    /// Fail with quota exhaustion
    QuotaExceeded,
    /// Fail with a rejected credential
    AuthFailed,
    /// Fail with a transport fault
    Transport,
}

/// Deterministic provider substitute for pipeline and route tests
///
/// Records every request so tests can assert on the prompts that were built,
/// and returns a pre-configured completion or failure.
pub struct StubProvider {
    behavior: StubBehavior,
    requests: Mutex<Vec<ChatRequest>>,
}

impl StubProvider {
    /// Create a stub that responds with the given text
    pub fn responding(content: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            behavior: StubBehavior::Respond(content.into()),
            requests: Mutex::new(Vec::new()),
        })
    }

    /// Create a stub that responds with a canned two-recipe result
    pub fn with_recipes() -> Arc<Self> {
        Self::responding(sample_recipes_json())
    }

    /// Create a stub that fails every completion
    pub fn failing(behavior: StubBehavior) -> Arc<Self> {
        Arc::new(Self {
            behavior,
            requests: Mutex::new(Vec::new()),
        })
    }

    /// All requests seen so far, in order
    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// The user prompt of the most recent request
    pub fn last_user_prompt(&self) -> String {
        let requests = self.requests.lock().unwrap();
        let request = requests.last().expect("no requests recorded");
        request
            .messages
            .iter()
            .find(|m| m.role == MessageRole::User)
            .expect("request had no user message")
            .content
            .clone()
    }
}

#[async_trait]
impl LlmProvider for StubProvider {
    fn name(&self) -> &'static str {
        "stub"
    }

    fn default_model(&self) -> &str {
        "stub-model"
    }

    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        self.requests.lock().unwrap().push(request.clone());

        match &self.behavior {
            StubBehavior::Respond(content) => Ok(ChatResponse {
                content: content.clone(),
                model: "stub-model".to_owned(),
                usage: None,
                finish_reason: Some("stop".to_owned()),
            }),
            StubBehavior::QuotaExceeded => Err(AppError::quota_exceeded(
                "Please check your Gemini account billing",
            )),
            StubBehavior::AuthFailed => Err(AppError::upstream_auth("API key not valid")),
            StubBehavior::Transport => Err(AppError::transport("connection reset by peer")),
        }
    }
}

/// A well-formed two-recipe completion matching the output contract
pub fn sample_recipes_json() -> String {
    serde_json::json!({
        "recipes": [
            {
                "name": "Garlic Chicken Fried Rice",
                "ingredients": ["chicken", "rice", "garlic", "egg"],
                "substitutions": ["tofu for chicken"],
                "instructions": [
                    "Step 1: Dice and sear the chicken",
                    "Step 2: Fry the rice with garlic and egg"
                ],
                "cookingTime": "20 minutes",
                "difficulty": "Easy",
                "nutrition": {"calories": 520, "protein": "34g", "carbs": "58g"}
            },
            {
                "name": "Chicken and Rice Soup",
                "ingredients": ["chicken", "rice", "garlic"],
                "substitutions": ["orzo for rice"],
                "instructions": [
                    "Step 1: Simmer the chicken in broth",
                    "Step 2: Add rice and cook until tender"
                ],
                "cookingTime": "35 minutes",
                "difficulty": "Medium",
                "nutrition": {"calories": 380, "protein": "28g", "carbs": "40g"}
            }
        ]
    })
    .to_string()
}
