// ABOUTME: Main library entry point for the Pantry Chef recipe API
// ABOUTME: Provides AI recipe generation, history tracking, and the HTTP surface
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef

#![deny(unsafe_code)]

//! # Pantry Chef API
//!
//! An HTTP service that turns a list of on-hand ingredients into AI-generated
//! recipe suggestions, using the Gemini generative API as the model backend.
//!
//! ## Features
//!
//! - **Recipe generation**: 2-3 structured recipe suggestions per request,
//!   with substitutions and nutrition estimates
//! - **Dietary restrictions**: Optional constraints woven into the prompt
//! - **Session history**: A bounded in-memory record of past generations,
//!   fed back into prompts to steer away from repetition
//! - **Lenient parsing**: Model output is accepted as long as it is valid
//!   JSON with a recipe list; missing fields default rather than fail
//!
//! ## Architecture
//!
//! The service follows a modular architecture:
//! - **Validation**: Request body checks with field-level error messages
//! - **LLM**: Provider abstraction, Gemini client, and prompt construction
//! - **Services**: The generation pipeline from request to stored history
//! - **Routes**: Thin axum handlers over shared [`server::ServerResources`]
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use pantry_chef::config::environment::ServerConfig;
//!
//! fn main() -> anyhow::Result<()> {
//!     // Load configuration
//!     let config = ServerConfig::from_env()?;
//!
//!     println!("Pantry Chef API configured with port: HTTP={}", config.http_port);
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod errors;
pub mod history;
pub mod llm;
pub mod logging;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod server;
pub mod services;
pub mod validation;
