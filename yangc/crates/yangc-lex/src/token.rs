//! Token type definitions.
//!
//! The YANG lexer knows no keywords. It only distinguishes the three
//! punctuation characters, quoted strings (already dequoted), and unquoted
//! strings, plus the end-of-file and error markers.

use std::fmt;
use std::sync::Arc;

use yangc_util::{SourceLocation, Span};

/// Classification of a token.
///
/// # Example
///
/// ```
/// use yangc_lex::TokenCode;
///
/// assert_eq!(TokenCode::punctuation(';'), Some(TokenCode::Semicolon));
/// assert_eq!(TokenCode::punctuation('x'), None);
/// assert_eq!(TokenCode::LBrace.to_string(), "{");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenCode {
    /// End of input
    Eof,
    /// A lexical error; the message went to the diagnostic handler
    Error,
    /// A quoted string after quote removal (and, for double quotes,
    /// escape processing and indentation stripping)
    String,
    /// An unquoted string, as written in the source
    Unquoted,
    /// `;`
    Semicolon,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
}

impl TokenCode {
    /// Maps a punctuation character to its code.
    #[inline]
    pub const fn punctuation(c: char) -> Option<Self> {
        match c {
            ';' => Some(Self::Semicolon),
            '{' => Some(Self::LBrace),
            '}' => Some(Self::RBrace),
            _ => None,
        }
    }

    /// Returns the punctuation character for punctuation codes.
    #[inline]
    pub const fn as_char(self) -> Option<char> {
        match self {
            Self::Semicolon => Some(';'),
            Self::LBrace => Some('{'),
            Self::RBrace => Some('}'),
            _ => None,
        }
    }

    /// Returns true for `;`, `{` and `}`.
    #[inline]
    pub const fn is_punctuation(self) -> bool {
        self.as_char().is_some()
    }

    /// Returns true for codes whose token carries text.
    #[inline]
    pub const fn has_text(self) -> bool {
        matches!(self, Self::String | Self::Unquoted)
    }
}

impl fmt::Display for TokenCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Eof => write!(f, "EOF"),
            Self::Error => write!(f, "error"),
            Self::String => write!(f, "string"),
            Self::Unquoted => write!(f, "unquoted"),
            Self::Semicolon => write!(f, ";"),
            Self::LBrace => write!(f, "{{"),
            Self::RBrace => write!(f, "}}"),
        }
    }
}

/// A lexical token with its source location.
///
/// Punctuation, error and end-of-file tokens always have empty text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// What kind of token this is.
    pub code: TokenCode,
    /// Token content: dequoted for strings, raw for unquoted strings.
    pub text: String,
    /// Where the token starts.
    pub location: SourceLocation,
    /// Bytes of the (newline-terminated) source the token was scanned from.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    pub fn new(code: TokenCode, text: impl Into<String>, location: SourceLocation, span: Span) -> Self {
        Self {
            code,
            text: text.into(),
            location,
            span,
        }
    }

    /// Creates an end-of-file token.
    pub fn eof(location: SourceLocation) -> Self {
        Self::new(TokenCode::Eof, String::new(), location, Span::DUMMY)
    }

    /// Returns true for the end-of-file token.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.code == TokenCode::Eof
    }

    /// Returns true for error tokens.
    #[inline]
    pub fn is_error(&self) -> bool {
        self.code == TokenCode::Error
    }

    /// Returns the path label of the file the token came from.
    #[inline]
    pub fn file(&self) -> &Arc<str> {
        &self.location.file
    }

    /// Returns the line the token starts on (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.location.line
    }

    /// Returns the tab-expanded column the token starts at (1-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.location.column
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.location, self.code)?;
        if self.code.has_text() {
            write!(f, " {:?}", self.text)?;
        }
        Ok(())
    }
}
