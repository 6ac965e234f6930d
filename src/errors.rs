// ABOUTME: Unified error taxonomy for the recipe generation pipeline
// ABOUTME: Maps each failure class to an HTTP status and a JSON error body
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef

//! # Error Handling
//!
//! A closed set of error codes covers every way a generation request can fail:
//! client-side validation, upstream quota exhaustion, upstream credential
//! problems, unparseable model output, and transport faults. Each code carries
//! a fixed HTTP status so the route layer never decides status codes ad hoc.
//!
//! No component performs local recovery or retry: errors are created at the
//! failing stage and propagate verbatim to the HTTP boundary.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::{error, warn};

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Malformed or missing request fields (client fault)
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput,
    /// Upstream generation quota or billing limit hit
    #[serde(rename = "QUOTA_EXCEEDED")]
    QuotaExceeded,
    /// Upstream credential missing or rejected
    #[serde(rename = "UPSTREAM_AUTH_FAILED")]
    UpstreamAuthFailed,
    /// Model output failed structural parsing
    #[serde(rename = "MALFORMED_RESPONSE")]
    MalformedResponse,
    /// Network or other unclassified upstream fault
    #[serde(rename = "TRANSPORT_FAILURE")]
    TransportFailure,
    /// Configuration error
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError,
    /// Unexpected internal fault
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        match self {
            Self::InvalidInput => 400,
            Self::UpstreamAuthFailed => 401,
            Self::QuotaExceeded => 429,
            // Malformed model output is a service-side contract violation,
            // not the caller's fault.
            Self::MalformedResponse
            | Self::TransportFailure
            | Self::ConfigError
            | Self::InternalError => 500,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::QuotaExceeded => "Generation service quota exceeded",
            Self::UpstreamAuthFailed => "Authentication with the generation service failed",
            Self::MalformedResponse => "The generation service returned an unparseable response",
            Self::TransportFailure => "Communication with the generation service failed",
            Self::ConfigError => "Configuration error encountered",
            Self::InternalError => "An internal server error occurred",
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Additional human-readable detail, surfaced to the caller
    pub details: Option<String>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Attach a detail string surfaced in the HTTP response body
    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }

    /// Invalid request input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Upstream quota or billing limit exceeded
    pub fn quota_exceeded(details: impl Into<String>) -> Self {
        Self::new(ErrorCode::QuotaExceeded, "Gemini API quota exceeded").with_details(details)
    }

    /// Upstream credential rejected or missing
    pub fn upstream_auth(details: impl Into<String>) -> Self {
        Self::new(ErrorCode::UpstreamAuthFailed, "Invalid Gemini API key").with_details(details)
    }

    /// Model output failed structural parsing
    pub fn malformed_response(details: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::MalformedResponse,
            "Failed to parse recipe response",
        )
        .with_details(details)
    }

    /// Network or unclassified upstream fault
    pub fn transport(details: impl Into<String>) -> Self {
        Self::new(ErrorCode::TransportFailure, "Failed to generate recipe").with_details(details)
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// Internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.details {
            Some(details) => write!(
                f,
                "{}: {} ({details})",
                self.code.description(),
                self.message
            ),
            None => write!(f, "{}: {}", self.code.description(), self.message),
        }
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// HTTP error response body: `{"error": ..., "details": ...}`
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self {
            error: error.message,
            details: error.details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            error!(code = ?self.code, "request failed: {self}");
        } else {
            warn!(code = ?self.code, "request rejected: {self}");
        }

        (status, Json(ErrorResponse::from(self))).into_response()
    }
}
