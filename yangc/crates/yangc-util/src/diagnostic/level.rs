//! Diagnostic severity levels.

use std::fmt;

/// Diagnostic severity level
///
/// # Examples
///
/// ```
/// use yangc_util::diagnostic::Level;
///
/// assert_eq!(format!("{}", Level::Error), "error");
/// assert!(Level::Bug.is_error());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// A lexical error in the input
    Error,
    /// An internal invariant of the lexer itself was violated
    ///
    /// Bugs still count as errors so the caller stops trusting the token
    /// stream, but they point at the lexer rather than at the input.
    Bug,
}

impl Level {
    /// Returns true if this level counts towards the error total
    #[inline]
    pub const fn is_error(&self) -> bool {
        matches!(self, Level::Error | Level::Bug)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Bug => write!(f, "internal error"),
        }
    }
}
