// ABOUTME: Route module organization for the HTTP surface
// ABOUTME: Routes are thin plumbing delegating to the service layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef

//! HTTP routes, organized by domain. Handlers stay thin: they extract the
//! payload, delegate to the service layer, and map the result to a response.

/// Health check, service description, and diagnostic routes
pub mod health;
/// Recipe generation and history routes
pub mod recipes;

pub use health::HealthRoutes;
pub use recipes::RecipeRoutes;
