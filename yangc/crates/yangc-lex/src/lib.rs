//! yangc-lex - Lexical Analyzer for YANG (RFC 7950)
//!
//! This crate turns YANG module text into a stream of tokens for a
//! statement parser. YANG has no keywords at the lexical level: every
//! statement is a keyword string, an optional argument string and a `;` or
//! a `{ ... }` block, so the lexer only tells strings apart from the three
//! punctuation characters.
//!
//! # Example Usage
//!
//! ```
//! use yangc_util::Handler;
//! use yangc_lex::{Lexer, TokenCode};
//!
//! let source = "leaf name {\n  type string;\n}\n";
//! let mut handler = Handler::silent();
//! let lexer = Lexer::new(source, "example.yang", &mut handler);
//!
//! let tokens: Vec<_> = lexer.collect();
//! assert_eq!(tokens.len(), 7);
//! assert_eq!(tokens[0].text, "leaf");
//! assert_eq!(tokens[2].code, TokenCode::LBrace);
//! assert_eq!(tokens[4].to_string(), "example.yang:2:8: unquoted \"string\"");
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token type definitions
//! - [`lexer`] - State-machine lexer
//! - [`cursor`] - Rune cursor with tab-aware column tracking
//! - [`options`] - Lexer configuration
//!
//! # Token Categories
//!
//! ## Strings
//!
//! - **Unquoted**: any run of runes up to whitespace, a quote, `;`, `{`
//!   or `}`. Comment markers inside a run do not end it.
//! - **Single-quoted**: `'...'`, taken verbatim.
//! - **Double-quoted**: `"..."`, with `\n`, `\t`, `\"` and `\\` escapes
//!   and RFC 7950 indentation stripping on continuation lines.
//!
//! A `+` directly followed by a quote is emitted on its own as an unquoted
//! `+`, so the parser can join `"a" + "b"`.
//!
//! ## Punctuation
//!
//! `;`, `{` and `}`.
//!
//! ## Special
//!
//! - **Error**: a lexical error, also reported to the [`Handler`](yangc_util::Handler)
//! - **EOF**: End of file marker
//!
//! # Errors
//!
//! Lexical errors never stop the iterator early on their own. After
//! [`LexOptions::max_errors`] errors a single "too many errors" notice is
//! reported and the remaining input is discarded.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod lexer;
pub mod options;
pub mod token;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use lexer::Lexer;
pub use options::{LexOptions, DEFAULT_MAX_ERRORS};
pub use token::{Token, TokenCode};
