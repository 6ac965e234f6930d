// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Reads port, environment mode, CORS origins, and upstream credential presence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef

//! Environment-based configuration.
//!
//! All configuration is read from the process environment at startup. The
//! upstream API credential is only probed for presence here (the provider
//! reads the key itself), and a missing credential is not fatal at startup:
//! generation requests will fail at the client stage until it is configured.

use anyhow::{Context, Result};
use std::env;

/// Default HTTP port when `PORT` is unset
const DEFAULT_PORT: u16 = 5000;

/// Server configuration loaded from the process environment
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP listen port
    pub http_port: u16,
    /// Deployment environment (development, staging, production)
    pub environment: String,
    /// Whether a Gemini API key is configured (boolean only, never the value)
    pub has_gemini_key: bool,
    /// Comma-separated CORS origin allowlist; empty or "*" allows any origin
    pub cors_allowed_origins: String,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is set but not a valid port number.
    pub fn from_env() -> Result<Self> {
        let http_port = match env::var("PORT") {
            Ok(value) => value
                .parse()
                .with_context(|| format!("invalid PORT value: {value}"))?,
            Err(_) => DEFAULT_PORT,
        };

        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("NODE_ENV"))
            .unwrap_or_else(|_| "development".into());

        Ok(Self {
            http_port,
            environment,
            has_gemini_key: env::var("GEMINI_API_KEY").map_or(false, |v| !v.is_empty()),
            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS").unwrap_or_default(),
        })
    }

    /// One-line redacted configuration summary for the startup log
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Pantry Chef Configuration: port={}, environment={}, gemini_key_configured={}",
            self.http_port, self.environment, self.has_gemini_key
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for var in ["PORT", "ENVIRONMENT", "NODE_ENV", "GEMINI_API_KEY"] {
            env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();
        let config = ServerConfig::from_env().unwrap();
        assert_eq!(config.http_port, DEFAULT_PORT);
        assert_eq!(config.environment, "development");
        assert!(!config.has_gemini_key);
    }

    #[test]
    #[serial]
    fn test_port_and_node_env() {
        clear_env();
        env::set_var("PORT", "8080");
        env::set_var("NODE_ENV", "production");
        let config = ServerConfig::from_env().unwrap();
        assert_eq!(config.http_port, 8080);
        assert_eq!(config.environment, "production");
        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_port_rejected() {
        clear_env();
        env::set_var("PORT", "not-a-port");
        assert!(ServerConfig::from_env().is_err());
        clear_env();
    }

    #[test]
    #[serial]
    fn test_summary_never_contains_key() {
        clear_env();
        env::set_var("GEMINI_API_KEY", "super-secret-key");
        let config = ServerConfig::from_env().unwrap();
        assert!(config.has_gemini_key);
        assert!(!config.summary().contains("super-secret-key"));
        clear_env();
    }
}
