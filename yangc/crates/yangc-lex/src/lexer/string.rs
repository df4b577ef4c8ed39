//! Double-quoted string lexing.
//!
//! Implements the RFC 7950 section 6.1.3 rules:
//!
//! - whitespace before a newline inside the string is dropped
//! - on continuation lines, leading whitespace up to the column of the
//!   opening quote is dropped (tabs expanded to 8 columns)
//! - `\n`, `\t`, `\"` and `\\` are the only escapes
//!
//! In pattern mode any other escape is kept as written for the regular
//! expression compiler; otherwise it is reported and the escaped rune
//! dropped.

use yangc_util::DiagnosticCode;

use super::core::State;
use crate::token::TokenCode;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Scans a double-quoted string, just past the opening quote.
    pub(crate) fn lex_quoted_string(&mut self) -> Option<State> {
        // Tab-expanded column of the opening quote.
        let indent = self.cursor.tab_column();
        let mut text = String::new();
        // Trailing spaces and tabs at the end of `text`.
        let mut trailing = 0;
        let mut in_indent = false;

        loop {
            let Some(c) = self.cursor.next() else {
                self.report_error(DiagnosticCode::E_LEX_UNTERMINATED_STRING, "missing closing \"");
                return None;
            };

            match c {
                '"' => {
                    self.emit_text(TokenCode::String, text);
                    return Some(State::Ground);
                },
                '\n' => {
                    text.truncate(text.len() - trailing);
                    text.push('\n');
                    trailing = 0;
                    in_indent = true;
                },
                ' ' | '\t' => {
                    if in_indent && self.cursor.tab_column() <= indent {
                        continue;
                    }
                    in_indent = false;
                    text.push(c);
                    trailing += 1;
                },
                '\\' => {
                    in_indent = false;
                    trailing = 0;
                    let (line, column) = (self.cursor.line(), self.cursor.tab_column());

                    let Some(escaped) = self.cursor.next() else {
                        self.report_error(DiagnosticCode::E_LEX_UNTERMINATED_STRING, "missing closing \"");
                        return None;
                    };
                    match escaped {
                        'n' => text.push('\n'),
                        't' => text.push('\t'),
                        '"' => text.push('"'),
                        '\\' => text.push('\\'),
                        _ if self.in_pattern => {
                            text.push('\\');
                            text.push(escaped);
                        },
                        _ => {
                            // Control runes such as a raw newline are shown escaped.
                            let shown: String = if escaped.is_control() {
                                escaped.escape_default().collect()
                            } else {
                                escaped.to_string()
                            };
                            self.report_error_at(
                                DiagnosticCode::E_LEX_INVALID_ESCAPE,
                                format!("invalid escape sequence: \\{shown}"),
                                line,
                                column,
                            );
                        },
                    }
                },
                _ => {
                    in_indent = false;
                    trailing = 0;
                    text.push(c);
                },
            }
        }
    }
}
