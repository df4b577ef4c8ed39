//! Diagnostic codes for categorizing lexical errors.
//!
//! This module provides the [`DiagnosticCode`] type for uniquely identifying
//! diagnostic messages, so tools can match on a stable code instead of the
//! message text.
//!
//! # Examples
//!
//! ```
//! use yangc_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::E_LEX_INVALID_ESCAPE;
//! assert_eq!(code.prefix(), "E");
//! assert_eq!(code.number(), 1004);
//! assert_eq!(code.as_str(), "E1004");
//! ```

use std::str::FromStr;

use crate::error::DiagnosticError;

/// A unique code identifying a diagnostic message
///
/// Diagnostic codes follow the format `{prefix}{number}` where:
/// - `prefix` is "E" for errors or "W" for warnings
/// - `number` is a 4-digit number (padded with zeros)
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix (e.g., "E" for error, "W" for warning)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    ///
    /// # Examples
    ///
    /// ```
    /// use yangc_util::diagnostic::DiagnosticCode;
    ///
    /// let code = DiagnosticCode::new("E", 1001);
    /// assert_eq!(code.prefix(), "E");
    /// assert_eq!(code.number(), 1001);
    /// ```
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the prefix (e.g., "E" for error, "W" for warning)
    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Get the numeric identifier
    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Get the full code string (e.g., "E1002")
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    // =========================================================================
    // LEXER ERROR CODES (E1001-E1999)
    // =========================================================================

    /// E1001: Lexer - Single-quoted string without closing quote
    pub const E_LEX_UNTERMINATED_SQUOTE: Self = Self::new("E", 1001);
    /// E1002: Lexer - Double-quoted string without closing quote
    pub const E_LEX_UNTERMINATED_STRING: Self = Self::new("E", 1002);
    /// E1003: Lexer - Block comment without closing `*/`
    pub const E_LEX_UNTERMINATED_COMMENT: Self = Self::new("E", 1003);
    /// E1004: Lexer - Unknown escape sequence in a double-quoted string
    pub const E_LEX_INVALID_ESCAPE: Self = Self::new("E", 1004);
    /// E1005: Lexer - Error limit reached, remaining input discarded
    pub const E_LEX_TOO_MANY_ERRORS: Self = Self::new("E", 1005);
    /// E1999: Lexer - Internal invariant violated
    pub const E_LEX_INTERNAL: Self = Self::new("E", 1999);
}

impl FromStr for DiagnosticCode {
    type Err = DiagnosticError;

    /// Parses codes of the form `E1002` or `W0001`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DiagnosticError::InvalidCode(s.to_string());
        let prefix = match s.get(..1) {
            Some("E") => "E",
            Some("W") => "W",
            _ => return Err(invalid()),
        };
        let digits = &s[1..];
        if digits.len() != 4 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let number = digits.parse().map_err(|_| invalid())?;
        Ok(Self::new(prefix, number))
    }
}

impl std::fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl std::fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
