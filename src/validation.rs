// ABOUTME: Input validation and normalization for recipe generation requests
// ABOUTME: Shape-checks the raw JSON payload and trims all ingredient strings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef

//! Request input validation.
//!
//! [`validate_generation_request`] is a pure function of the raw payload: no
//! network or storage access. It rejects malformed shapes with a 400-class
//! [`AppError`] and returns a normalized [`GenerateRecipesRequest`] with every
//! ingredient and restriction trimmed.

use serde_json::Value;

use crate::errors::AppError;
use crate::models::GenerateRecipesRequest;

/// Validate and normalize a raw generation request payload
///
/// # Errors
///
/// Returns [`AppError::invalid_input`] when:
/// - `ingredients` is missing, not an array, or empty
/// - any ingredient is not a string or trims to empty (the offending index
///   is named in the message)
/// - `dietaryRestrictions` is present but not an array of strings
/// - `useHistory` is present but not a boolean
pub fn validate_generation_request(body: &Value) -> Result<GenerateRecipesRequest, AppError> {
    let ingredients = match body.get("ingredients") {
        Some(Value::Array(items)) if !items.is_empty() => items,
        _ => {
            return Err(AppError::invalid_input(
                "Ingredients are required and must be a non-empty array",
            ))
        }
    };

    let mut normalized = Vec::with_capacity(ingredients.len());
    for (index, item) in ingredients.iter().enumerate() {
        let trimmed = item.as_str().map(str::trim).unwrap_or_default();
        if trimmed.is_empty() {
            return Err(AppError::invalid_input(format!(
                "Ingredient at index {index} must be a non-empty string"
            )));
        }
        normalized.push(trimmed.to_owned());
    }

    let dietary_restrictions = match body.get("dietaryRestrictions") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => {
            let mut restrictions = Vec::with_capacity(items.len());
            for item in items {
                let Some(text) = item.as_str() else {
                    return Err(AppError::invalid_input(
                        "Dietary restrictions must be an array of strings",
                    ));
                };
                restrictions.push(text.trim().to_owned());
            }
            restrictions
        }
        Some(_) => {
            return Err(AppError::invalid_input(
                "Dietary restrictions must be an array",
            ))
        }
    };

    let use_history = match body.get("useHistory") {
        None | Some(Value::Null) => true,
        Some(Value::Bool(flag)) => *flag,
        Some(_) => return Err(AppError::invalid_input("useHistory must be a boolean")),
    };

    Ok(GenerateRecipesRequest {
        ingredients: normalized,
        dietary_restrictions,
        use_history,
    })
}
