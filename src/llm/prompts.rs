// ABOUTME: Prompt construction for recipe generation
// ABOUTME: Renders the chef system prompt and the deterministic user prompt with JSON contract
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef

//! Prompt text for the recipe generator.
//!
//! [`build_recipe_prompt`] is pure and deterministic: identical ingredients,
//! restrictions, and history snapshot always yield byte-identical prompt text.
//! The JSON format block it renders is the de facto wire contract with the
//! generation capability; any change to the [`Recipe`](crate::models::Recipe)
//! schema must be mirrored here and in the response parser.

use std::fmt::Write as _;

use crate::models::HistoryEntry;

/// Number of recent history entries rendered into the prompt
const HISTORY_WINDOW: usize = 3;

/// Fixed role framing for the generation request
#[must_use]
pub fn chef_system_prompt() -> &'static str {
    "You are a professional chef and recipe creator. Always respond with valid JSON \
     format as specified in the user prompt. Generate exactly 2-3 recipe suggestions."
}

/// Build the user prompt from ingredients, restrictions, and a history snapshot
///
/// Renders, in order: the base instruction, a restrictions clause (when any),
/// the substitutions instruction, a novelty clause over the last
/// [`HISTORY_WINDOW`] history entries (when any), and the fixed JSON
/// output-format contract.
#[must_use]
pub fn build_recipe_prompt(
    ingredients: &[String],
    restrictions: &[String],
    history: &[HistoryEntry],
) -> String {
    let mut prompt = format!(
        "Generate 2-3 recipe suggestions using these ingredients: {}.",
        ingredients.join(", ")
    );

    if !restrictions.is_empty() {
        let _ = write!(
            prompt,
            "\n\nDietary restrictions: {}. All recipes must be suitable for these dietary needs.",
            restrictions.join(", ")
        );
    }

    prompt.push_str(
        "\n\nFor any missing ingredients, suggest common substitutions that would work well in the recipe.",
    );

    if !history.is_empty() {
        prompt.push_str("\n\nPrevious recipe preferences (avoid repeating similar recipes):");
        let start = history.len().saturating_sub(HISTORY_WINDOW);
        for entry in &history[start..] {
            let names: Vec<&str> = entry.recipes.iter().map(|r| r.name.as_str()).collect();
            let _ = write!(
                prompt,
                "\n- {} → {}",
                entry.ingredients.join(", "),
                names.join(", ")
            );
        }
    }

    prompt.push_str(OUTPUT_FORMAT_SPEC);
    prompt
}

/// The fixed output-format contract appended to every prompt
const OUTPUT_FORMAT_SPEC: &str = r#"

Please provide the response in the following EXACT JSON format:
{
  "recipes": [
    {
      "name": "Recipe Name",
      "ingredients": ["ingredient1", "ingredient2", "ingredient3"],
      "substitutions": ["substitution1", "substitution2"],
      "instructions": ["Step 1: First instruction", "Step 2: Second instruction"],
      "cookingTime": "20 minutes",
      "difficulty": "Easy",
      "nutrition": {
        "calories": 450,
        "protein": "12g",
        "carbs": "60g"
      }
    }
  ]
}

Requirements:
- Generate exactly 2-3 recipes
- Each recipe must use at least 2 of the provided ingredients
- Include realistic cooking times (in minutes)
- Set difficulty as "Easy", "Medium", or "Hard"
- Provide realistic nutritional information (calories, protein, carbs)
- Suggest ingredient substitutions for missing items
- Make sure the response is valid JSON
- Keep instructions simple and clear"#;
