// ABOUTME: Server binary for the Pantry Chef recipe API
// ABOUTME: Loads environment configuration, builds shared resources, and serves HTTP
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef

//! # Pantry Chef API Server Binary
//!
//! This binary starts the recipe generation API with the Gemini provider,
//! an in-memory history store, and structured logging.

use anyhow::Result;
use clap::Parser;
use pantry_chef::{config::environment::ServerConfig, logging, server};
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "pantry-chef-server")]
#[command(about = "Pantry Chef API - AI recipe suggestions from your ingredients")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Handle container environments where clap may not work properly
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Argument parsing failed: {e}");
            eprintln!("Using default configuration");
            Args { http_port: None }
        }
    };

    // Load configuration from environment
    let mut config = ServerConfig::from_env()?;

    // Override port if specified
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    // Initialize logging before anything that might log
    logging::init_from_env()?;

    info!("Starting Pantry Chef API");
    info!("{}", config.summary());

    if !config.has_gemini_key {
        warn!("GEMINI_API_KEY is not set; generation requests will fail until it is configured");
    }

    let port = config.http_port;
    info!("Health check: http://localhost:{port}/health");
    info!("Test endpoint: http://localhost:{port}/test");
    info!("Generate recipes: POST http://localhost:{port}/api/recipes/generate");

    let resources = Arc::new(server::ServerResources::new(config));
    server::serve(resources).await
}
