//! Diagnostic module - Error reporting infrastructure.
//!
//! This module provides types for creating, rendering, and reporting
//! lexical diagnostics. Every diagnostic renders to exactly one line of
//! the form `<path>:<line>:<col>: <message>`, and the [`Handler`] writes
//! each one to its sink with a single write call, so tools reading the
//! sink can rely on one write per diagnostic.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use yangc_util::diagnostic::{Diagnostic, DiagnosticCode, Handler};
//! use yangc_util::span::SourceLocation;
//!
//! let handler = Handler::silent();
//! let location = SourceLocation::new(Arc::from("a.yang"), 2, 9);
//! let diag = Diagnostic::error(DiagnosticCode::E_LEX_INVALID_ESCAPE, "invalid escape sequence: \\q", location);
//! assert_eq!(diag.render(), "a.yang:2:9: invalid escape sequence: \\q\n");
//!
//! handler.emit_diagnostic(diag);
//! assert!(handler.has_errors());
//! ```

mod codes;
mod level;

pub use codes::DiagnosticCode;
pub use level::Level;

use std::cell::RefCell;
use std::fmt;
use std::io::{self, Write};
use std::panic::Location;

use crate::error::DiagnosticResult;
use crate::span::SourceLocation;

/// A diagnostic message with severity and location
#[derive(Clone, Debug)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Diagnostic code
    pub code: DiagnosticCode,
    /// Main diagnostic message
    pub message: String,
    /// Source location the message refers to
    pub location: SourceLocation,
    /// Call site that reported the diagnostic, for debugging the reporter
    pub origin: Option<&'static Location<'static>>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(
        level: Level,
        code: DiagnosticCode,
        message: impl Into<String>,
        location: SourceLocation,
    ) -> Self {
        Self {
            level,
            code,
            message: message.into(),
            location,
            origin: None,
        }
    }

    /// Create an error diagnostic
    pub fn error(code: DiagnosticCode, message: impl Into<String>, location: SourceLocation) -> Self {
        Self::new(Level::Error, code, message, location)
    }

    /// Create a diagnostic for a violated internal invariant
    pub fn bug(code: DiagnosticCode, message: impl Into<String>, location: SourceLocation) -> Self {
        Self::new(Level::Bug, code, message, location)
    }

    /// Attach the call site that reported this diagnostic
    ///
    /// When present, the rendered line is prefixed with the call site's
    /// `file:line`.
    pub fn with_origin(mut self, origin: &'static Location<'static>) -> Self {
        self.origin = Some(origin);
        self
    }

    /// Render the diagnostic as a single newline-terminated line
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    /// use yangc_util::diagnostic::{Diagnostic, DiagnosticCode};
    /// use yangc_util::span::SourceLocation;
    ///
    /// let location = SourceLocation::new(Arc::from("m.yang"), 1, 4);
    /// let diag = Diagnostic::error(DiagnosticCode::E_LEX_UNTERMINATED_STRING, "missing closing \"", location);
    /// assert_eq!(diag.render(), "m.yang:1:4: missing closing \"\n");
    /// ```
    pub fn render(&self) -> String {
        let mut line = self.to_string();
        if !line.ends_with('\n') {
            line.push('\n');
        }
        line
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(origin) = self.origin {
            write!(f, "{}:{}: ", origin.file(), origin.line())?;
        }
        write!(f, "{}: {}", self.location, self.message)
    }
}

/// Handler for reporting and collecting diagnostics
///
/// The handler owns the destination diagnostics are written to. It
/// defaults to the process's standard error, and any writer can be
/// injected per handler with [`Handler::with_writer`]. Every emitted
/// diagnostic is also kept so callers can query counts afterwards.
///
/// # Examples
///
/// ```
/// use yangc_util::diagnostic::Handler;
///
/// let handler = Handler::with_writer(Vec::new());
/// assert!(!handler.has_errors());
/// ```
pub struct Handler {
    /// Destination for rendered diagnostics
    sink: RefCell<Box<dyn Write + Send>>,
    /// Collected diagnostics
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Create a handler writing to standard error
    pub fn new() -> Self {
        Self::with_writer(io::stderr())
    }

    /// Create a handler writing to the given destination
    pub fn with_writer(writer: impl Write + Send + 'static) -> Self {
        Self {
            sink: RefCell::new(Box::new(writer)),
            diagnostics: RefCell::new(Vec::new()),
        }
    }

    /// Create a handler that records diagnostics but writes nothing
    pub fn silent() -> Self {
        Self::with_writer(io::sink())
    }

    /// Emit a diagnostic, returning any failure of the sink
    ///
    /// The diagnostic is recorded even when writing fails.
    pub fn try_emit(&self, diagnostic: Diagnostic) -> DiagnosticResult<()> {
        let line = diagnostic.render();
        self.diagnostics.borrow_mut().push(diagnostic);

        let mut sink = self.sink.borrow_mut();
        sink.write_all(line.as_bytes())?;
        sink.flush()?;
        Ok(())
    }

    /// Emit a diagnostic
    ///
    /// A sink that fails to accept the line is logged and otherwise
    /// ignored; reporting a diagnostic never fails.
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        if let Err(err) = self.try_emit(diagnostic) {
            tracing::warn!(error = %err, "diagnostic sink rejected a message");
        }
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        self.diagnostics.borrow().iter().any(|d| d.level.is_error())
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level.is_error())
            .count()
    }

    /// Get all diagnostics
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Clear all diagnostics
    pub fn clear(&self) {
        self.diagnostics.borrow_mut().clear();
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler")
            .field("diagnostics", &self.diagnostics.borrow().len())
            .finish_non_exhaustive()
    }
}
