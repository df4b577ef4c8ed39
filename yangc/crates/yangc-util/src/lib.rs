//! yangc-util - Core Utilities and Foundation Types
//!
//! This crate provides the foundation types shared by the yangc crates:
//!
//! - [`span`] - Source locations (`file:line:column`) and byte spans
//! - [`diagnostic`] - Diagnostics, diagnostic codes, and the [`Handler`]
//!   error sink that renders them
//! - [`error`] - Error types for the utilities themselves
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use yangc_util::{Diagnostic, DiagnosticCode, Handler, SourceLocation};
//!
//! let handler = Handler::silent();
//! let location = SourceLocation::new(Arc::from("a.yang"), 3, 7);
//! handler.emit_diagnostic(Diagnostic::error(
//!     DiagnosticCode::E_LEX_UNTERMINATED_STRING,
//!     "missing closing \"",
//!     location,
//! ));
//! assert_eq!(handler.error_count(), 1);
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticCode, Handler, Level};
pub use error::{DiagnosticError, DiagnosticResult};
pub use span::{SourceLocation, Span};
