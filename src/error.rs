//! Error types for FormStore
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using FormStoreError
pub type Result<T> = std::result::Result<T, FormStoreError>;

/// Unified error type for FormStore operations
#[derive(Debug, Error)]
pub enum FormStoreError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // -------------------------------------------------------------------------
    // Boundary Errors
    // -------------------------------------------------------------------------
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Internal panic: {0}")]
    Panic(String),
}
