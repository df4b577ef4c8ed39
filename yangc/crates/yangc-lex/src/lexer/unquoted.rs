//! Unquoted string lexing.

use super::core::State;
use crate::token::TokenCode;
use crate::Lexer;

/// Runes that end an unquoted string.
const TERMINATORS: &str = " \r\n\t;\"'{}";

impl<'a> Lexer<'a> {
    /// Scans an unquoted string.
    ///
    /// Comment markers are not terminators, so `foo//bar` is a single
    /// token.
    pub(crate) fn lex_unquoted(&mut self) -> Option<State> {
        while let Some(c) = self.cursor.peek() {
            if TERMINATORS.contains(c) {
                break;
            }
            self.cursor.next();
        }
        self.emit(TokenCode::Unquoted);
        Some(State::Ground)
    }
}
