// ABOUTME: HTTP middleware module organization
// ABOUTME: Exposes CORS configuration for the API surface
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef

/// CORS configuration
pub mod cors;

pub use cors::setup_cors;
