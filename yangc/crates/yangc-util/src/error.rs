//! Core error types for yangc-util crate
//!
//! This module defines error types used throughout the util crate.

use thiserror::Error;

/// Error type for diagnostic operations
#[derive(Debug, Error)]
pub enum DiagnosticError {
    /// Writing a rendered diagnostic to the sink failed
    #[error("Failed to write diagnostic: {0}")]
    Write(#[from] std::io::Error),

    /// Invalid diagnostic code
    #[error("Invalid diagnostic code: {0}")]
    InvalidCode(String),
}

/// Result type alias for diagnostic operations
pub type DiagnosticResult<T> = std::result::Result<T, DiagnosticError>;
