// ABOUTME: Configuration module organization
// ABOUTME: Exposes environment-based server configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef

/// Environment-based server configuration
pub mod environment;

pub use environment::ServerConfig;
