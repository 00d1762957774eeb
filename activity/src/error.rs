//! Unified error types for the activity pipeline
//!
//! This module defines error types for each layer:
//! - `FetchError`: GitHub API client errors
//! - `ConfigError`: Environment configuration errors
//! - `AppError`: Application layer errors (what the binary reports)

use thiserror::Error;

/// GitHub API client errors
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Invalid username: {0:?}")]
    InvalidUsername(String),
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} must not be empty")]
    Empty { name: &'static str },
}

/// Application layer errors
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to fetch events: {0}")]
    Fetch(#[from] FetchError),

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}
