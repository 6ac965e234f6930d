// ABOUTME: Core data model for recipe generation requests, results, and history
// ABOUTME: Defines Recipe, NutritionInfo, GenerationResult, and HistoryEntry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef

//! Data model for the recipe generation pipeline.
//!
//! Wire field names follow the JSON contract the generator is instructed to
//! emit (`cookingTime`, `dietaryRestrictions`, ...). Every field of a
//! generator-produced [`Recipe`] except the container defaults when missing:
//! acceptance of model output is intentionally lenient, and structurally
//! present-but-imperfect recipes still parse.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A normalized, validated recipe generation request
///
/// Produced by the input validator; every ingredient and restriction string
/// is non-empty and trimmed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRecipesRequest {
    /// On-hand ingredients driving the generation
    pub ingredients: Vec<String>,
    /// Dietary restrictions every suggested recipe must satisfy
    #[serde(default)]
    pub dietary_restrictions: Vec<String>,
    /// Whether recent history should steer the prompt toward novelty
    #[serde(default = "default_use_history")]
    pub use_history: bool,
}

const fn default_use_history() -> bool {
    true
}

/// Nutrition summary for a single recipe
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionInfo {
    /// Estimated calories per serving
    #[serde(default)]
    pub calories: f64,
    /// Protein content, human-readable (e.g. "12g")
    #[serde(default)]
    pub protein: String,
    /// Carbohydrate content, human-readable (e.g. "60g")
    #[serde(default)]
    pub carbs: String,
}

/// A single recipe suggestion produced by the generator
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Recipe {
    /// Recipe name
    #[serde(default)]
    pub name: String,
    /// Ingredients used by this recipe
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Suggested substitutions for ingredients the caller does not have
    #[serde(default)]
    pub substitutions: Vec<String>,
    /// Ordered preparation steps
    #[serde(default)]
    pub instructions: Vec<String>,
    /// Human-readable duration (e.g. "20 minutes")
    #[serde(default, rename = "cookingTime")]
    pub cooking_time: String,
    /// One of "Easy", "Medium", "Hard" (contract on the generator, accepted leniently)
    #[serde(default)]
    pub difficulty: String,
    /// Estimated nutrition figures
    #[serde(default)]
    pub nutrition: NutritionInfo,
}

/// The structured result of one generation call: 2-3 recipe suggestions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResult {
    /// Suggested recipes, in the order the generator produced them
    pub recipes: Vec<Recipe>,
}

/// A record of one past successful generation
///
/// Created after a successful end-to-end generation and held in the bounded
/// history store; never persisted across process restarts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// When the generation completed
    pub timestamp: DateTime<Utc>,
    /// The request's ingredient list
    pub ingredients: Vec<String>,
    /// The recipes that were generated
    pub recipes: Vec<Recipe>,
}
