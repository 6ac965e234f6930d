// ABOUTME: Service layer module organization
// ABOUTME: Exposes the recipe generation orchestrator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef

/// Recipe generation orchestration
pub mod generation;

pub use generation::{parse_generation_response, RecipeService};
