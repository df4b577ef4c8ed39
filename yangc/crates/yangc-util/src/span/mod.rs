//! Span module - Source location tracking.
//!
//! This module provides types for representing source code locations:
//! a [`SourceLocation`] names a point as `file:line:column` for
//! human-readable output, and a [`Span`] is the byte range a token was
//! scanned from.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use yangc_util::span::{SourceLocation, Span};
//!
//! let location = SourceLocation::new(Arc::from("ietf-interfaces.yang"), 12, 5);
//! assert_eq!(location.to_string(), "ietf-interfaces.yang:12:5");
//!
//! let span = Span::new(10, 20);
//! assert_eq!(span.len(), 10);
//! ```

use std::fmt;
use std::sync::Arc;

/// A point in a source file
///
/// `file` is the caller-supplied path label. It is opaque to the lexer and
/// is only ever used for diagnostics, so every token of one file shares the
/// same allocation.
///
/// Lines and columns are 1-based. Columns count tabs as advancing to the
/// next multiple of 8.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SourceLocation {
    /// Path label of the source file
    pub file: Arc<str>,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based, tab-expanded)
    pub column: u32,
}

impl SourceLocation {
    /// Create a new source location
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    /// use yangc_util::span::SourceLocation;
    ///
    /// let location = SourceLocation::new(Arc::from("a.yang"), 1, 1);
    /// assert_eq!(location.line, 1);
    /// ```
    #[inline]
    pub fn new(file: Arc<str>, line: u32, column: u32) -> Self {
        Self { file, line, column }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

/// Byte range in source
///
/// `start` is inclusive and `end` exclusive.
///
/// # Examples
///
/// ```
/// use yangc_util::span::Span;
///
/// let span = Span::new(4, 9);
/// assert!(span.contains(4));
/// assert!(!span.contains(9));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source
    pub end: usize,
}

impl Span {
    /// Dummy span for testing
    pub const DUMMY: Span = Span { start: 0, end: 0 };

    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `start` - Start byte offset
    /// * `end` - End byte offset
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Length of the span in bytes
    #[inline]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span covers no bytes
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if `offset` falls inside the span
    #[inline]
    pub const fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }
}
