//! Error handling module for the enrollment wizard
//!
//! Provides centralized error handling with proper error types using thiserror.
//! Nothing in the form itself is an error: a registered email or an incomplete
//! step only disables controls. These types cover the plumbing around it.

use thiserror::Error;

/// Main error type for the enrollment wizard
#[derive(Error, Debug)]
pub enum EnrollError {
    /// IO errors (file operations, terminal, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors (loading, parsing, validation)
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Terminal/UI errors
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Registration service errors (the simulated service never raises one)
    #[error("Registration failed: {0}")]
    Registration(String),
}

/// Result type alias for enrollment operations
pub type Result<T> = std::result::Result<T, EnrollError>;

impl EnrollError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a terminal error
    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }

    /// Create a registration error
    pub fn registration(msg: impl Into<String>) -> Self {
        Self::Registration(msg.into())
    }
}
