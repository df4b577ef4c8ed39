//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Main Lexer struct, state dispatch and token queue
//! - `ground` - Dispatch between tokens, punctuation and single-quoted strings
//! - `comment` - Line and block comment skipping
//! - `string` - Double-quoted string scanning
//! - `unquoted` - Unquoted string scanning
//! - `error` - Error reporting and the error cutoff

mod comment;
mod core;
mod error;
mod ground;
mod string;
mod unquoted;

pub use core::Lexer;
