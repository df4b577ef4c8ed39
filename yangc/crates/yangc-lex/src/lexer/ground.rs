//! Ground state.
//!
//! Runs between tokens: skips whitespace, records where the next token
//! starts and dispatches on its first rune.

use yangc_util::DiagnosticCode;

use super::core::State;
use crate::token::TokenCode;
use crate::Lexer;

const WHITESPACE: &str = " \t\r\n";

impl<'a> Lexer<'a> {
    pub(crate) fn lex_ground(&mut self) -> Option<State> {
        self.cursor.accept_run(WHITESPACE);
        self.cursor.ignore();
        self.mark_token_start();

        let c = self.cursor.next()?;

        if let Some(code) = TokenCode::punctuation(c) {
            self.emit(code);
            return Some(State::Ground);
        }

        match c {
            '\'' => self.lex_single_quoted(),
            '"' => Some(State::QuotedString),
            '/' => self.lex_slash(),
            '+' if matches!(self.cursor.peek(), Some('"' | '\'')) => {
                self.emit(TokenCode::Unquoted);
                Some(State::Ground)
            },
            _ => {
                self.cursor.backup();
                Some(State::Unquoted)
            },
        }
    }

    /// Scans a single-quoted string, just past the opening quote.
    ///
    /// The content is taken verbatim.
    fn lex_single_quoted(&mut self) -> Option<State> {
        if !self.cursor.skip_to("'") {
            let (line, column) = (self.cursor.line(), self.cursor.column());
            self.report_error_at(DiagnosticCode::E_LEX_UNTERMINATED_SQUOTE, "missing closing '", line, column);
            return None;
        }

        let text = self.cursor.pending()[1..].to_string();
        self.cursor.next();
        self.emit_text(TokenCode::String, text);
        Some(State::Ground)
    }
}
