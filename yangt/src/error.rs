//! Error handling module for the yangt CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use thiserror::Error;

/// Main error type for the yangt CLI application.
///
/// This enum represents all possible errors that can occur
/// during the execution of yangt commands.
#[derive(Error, Debug)]
pub enum YangtError {
    /// Error when the configuration cannot be loaded or applied.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// One or more input files had lexical errors.
    ///
    /// The errors themselves have already been written to stderr.
    #[error("Lexical errors in {files} file(s)")]
    Lex {
        /// Number of files with at least one lexical error.
        files: usize,
    },

    /// Error when input validation fails.
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias using YangtError.
pub type Result<T> = std::result::Result<T, YangtError>;
