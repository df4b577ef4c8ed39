//! Core lexer implementation.
//!
//! This module contains the main Lexer struct, the state dispatch loop, and
//! the token queue that the states emit into.

use std::collections::VecDeque;
use std::iter::FusedIterator;
use std::sync::Arc;

use yangc_util::{Handler, SourceLocation, Span};

use crate::cursor::Cursor;
use crate::options::LexOptions;
use crate::token::{Token, TokenCode};

/// Number of upcoming characters shown when tracing state transitions.
const TRACE_PREVIEW: usize = 20;

/// Scanning states.
///
/// Each state consumes some input and names the state to run next; `None`
/// in place of a state halts the lexer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum State {
    /// Between tokens: skips whitespace and comments, dispatches on the
    /// next rune.
    Ground,
    /// Inside a double-quoted string, just past the opening quote.
    QuotedString,
    /// Inside an unquoted string.
    Unquoted,
}

impl State {
    fn name(self) -> &'static str {
        match self {
            State::Ground => "ground",
            State::QuotedString => "quoted-string",
            State::Unquoted => "unquoted",
        }
    }
}

/// Lexer for YANG source text.
///
/// The lexer produces a lazy, single-pass sequence of tokens. Lexical
/// errors are written to the [`Handler`] and also appear in the token
/// stream as [`TokenCode::Error`] tokens, so the caller decides whether to
/// keep going.
///
/// # Example
///
/// ```
/// use yangc_util::Handler;
/// use yangc_lex::{Lexer, TokenCode};
///
/// let mut handler = Handler::silent();
/// let mut lexer = Lexer::new("prefix \"ex\";", "ex.yang", &mut handler);
///
/// let token = lexer.next_token();
/// assert_eq!((token.code, token.text.as_str()), (TokenCode::Unquoted, "prefix"));
/// let token = lexer.next_token();
/// assert_eq!((token.code, token.text.as_str()), (TokenCode::String, "ex"));
/// assert_eq!(lexer.next_token().code, TokenCode::Semicolon);
/// assert!(lexer.next_token().is_eof());
/// ```
pub struct Lexer<'a> {
    /// Rune cursor over the source.
    pub(crate) cursor: Cursor<'a>,

    /// Diagnostic handler for error reporting.
    pub(crate) handler: &'a mut Handler,

    /// Path label stamped on every token and diagnostic.
    pub(crate) file: Arc<str>,

    /// State to run next, `None` once the lexer has halted.
    state: Option<State>,

    /// Tokens emitted but not yet handed out.
    pub(crate) pending: VecDeque<Token>,

    /// Line where the current token starts (1-based).
    pub(crate) token_start_line: u32,

    /// Tab-expanded column where the current token starts (1-based).
    pub(crate) token_start_column: u32,

    /// Keep unknown escapes verbatim instead of reporting them.
    pub(crate) in_pattern: bool,

    /// Errors reported so far, including the cutoff notice.
    pub(crate) error_count: usize,

    pub(crate) options: LexOptions,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for `source`, labelled `path` in tokens and
    /// diagnostics, with default options.
    pub fn new(source: &'a str, path: &str, handler: &'a mut Handler) -> Self {
        Self::with_options(source, path, handler, LexOptions::default())
    }

    /// Creates a new lexer with explicit options.
    pub fn with_options(
        source: &'a str,
        path: &str,
        handler: &'a mut Handler,
        options: LexOptions,
    ) -> Self {
        Self {
            cursor: Cursor::new(source),
            handler,
            file: Arc::from(path),
            state: Some(State::Ground),
            pending: VecDeque::with_capacity(4),
            token_start_line: 1,
            token_start_column: 1,
            in_pattern: options.pattern,
            error_count: 0,
            options,
        }
    }

    /// Returns the next token.
    ///
    /// Runs the state machine until a token is queued or the machine
    /// halts. Once it has halted, every call returns an end-of-file token.
    pub fn next_token(&mut self) -> Token {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return token;
            }

            let Some(state) = self.state else {
                return Token::eof(self.location_here());
            };

            if self.options.debug {
                let upcoming: String = self.cursor.remaining().chars().take(TRACE_PREVIEW).collect();
                tracing::debug!(file = %self.file, state = state.name(), upcoming = ?upcoming, "lexer step");
            }

            self.state = self.step(state);
        }
    }

    fn step(&mut self, state: State) -> Option<State> {
        match state {
            State::Ground => self.lex_ground(),
            State::QuotedString => self.lex_quoted_string(),
            State::Unquoted => self.lex_unquoted(),
        }
    }

    /// Switches pattern mode on or off for the strings scanned from now on.
    ///
    /// In pattern mode an unknown escape such as `\d` in a double-quoted
    /// string is kept as written instead of being reported.
    pub fn set_pattern_mode(&mut self, on: bool) {
        self.in_pattern = on;
    }

    /// Returns true while pattern mode is on.
    pub fn pattern_mode(&self) -> bool {
        self.in_pattern
    }

    /// Returns the number of errors reported so far.
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    /// Returns the path label of the source.
    pub fn file(&self) -> &str {
        &self.file
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current tab-expanded column (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Records the current position as the start of the next token.
    pub(crate) fn mark_token_start(&mut self) {
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();
    }

    /// Emits the text scanned since the token start.
    ///
    /// Punctuation tokens are emitted without text.
    pub(crate) fn emit(&mut self, code: TokenCode) {
        let text = if code.has_text() {
            self.cursor.pending().to_string()
        } else {
            String::new()
        };
        self.emit_text(code, text);
    }

    /// Emits a token with the given text, consuming the scanned span.
    pub(crate) fn emit_text(&mut self, code: TokenCode, text: String) {
        let location = self.token_location();
        let span = Span::new(self.cursor.start(), self.cursor.position());
        self.pending.push_back(Token::new(code, text, location, span));
        self.cursor.ignore();
    }

    fn token_location(&self) -> SourceLocation {
        SourceLocation::new(Arc::clone(&self.file), self.token_start_line, self.token_start_column)
    }

    pub(crate) fn location_here(&self) -> SourceLocation {
        SourceLocation::new(Arc::clone(&self.file), self.cursor.line(), self.cursor.column())
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.is_eof() {
            None
        } else {
            Some(token)
        }
    }
}

impl<'a> FusedIterator for Lexer<'a> {}
