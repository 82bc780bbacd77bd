//! Error types for lima-census
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// The main error type for lima-census
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    /// Invalid or incomplete configuration
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Base endpoint URL failed to parse
    #[error("Invalid base URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    /// Transport-level failure (connect, TLS, timeout)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response on an endpoint where that is fatal
    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    // ============================================================================
    // Quota Errors
    // ============================================================================
    /// Too little search quota left to start a survey
    #[error("Search quota too low ({remaining}/{limit} remaining), resets at {reset}")]
    QuotaLow {
        remaining: u64,
        limit: u64,
        reset: DateTime<Utc>,
    },

    // ============================================================================
    // Data Errors
    // ============================================================================
    /// Response body was not the expected JSON
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// File content payload could not be decoded to text
    #[error("Failed to decode content: {message}")]
    Decode { message: String },
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }
}

/// Result type alias for lima-census
pub type Result<T> = std::result::Result<T, Error>;
