//! Error reporting.
//!
//! Every reported error is written to the handler and queued as an error
//! token. Once the error limit is reached a final "too many errors" notice
//! is written and the rest of the input is discarded, so the lexer drains
//! whatever is queued and then reports end of file.

use std::panic::Location;
use std::sync::Arc;

use yangc_util::{Diagnostic, DiagnosticCode, Level, SourceLocation, Span};

use crate::token::{Token, TokenCode};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Reports an error at the start of the current token.
    #[track_caller]
    pub(crate) fn report_error(&mut self, code: DiagnosticCode, message: impl Into<String>) {
        let (line, column) = (self.token_start_line, self.token_start_column);
        self.report(Level::Error, code, message.into(), line, column, Location::caller());
    }

    /// Reports an error at an explicit line and column.
    #[track_caller]
    pub(crate) fn report_error_at(
        &mut self,
        code: DiagnosticCode,
        message: impl Into<String>,
        line: u32,
        column: u32,
    ) {
        self.report(Level::Error, code, message.into(), line, column, Location::caller());
    }

    /// Reports a violated internal invariant at the start of the current
    /// token.
    #[track_caller]
    pub(crate) fn report_bug(&mut self, message: impl Into<String>) {
        let (line, column) = (self.token_start_line, self.token_start_column);
        self.report(
            Level::Bug,
            DiagnosticCode::E_LEX_INTERNAL,
            message.into(),
            line,
            column,
            Location::caller(),
        );
    }

    fn report(
        &mut self,
        level: Level,
        code: DiagnosticCode,
        message: String,
        line: u32,
        column: u32,
        origin: &'static Location<'static>,
    ) {
        if self.error_count > self.options.max_errors {
            return;
        }

        let location = SourceLocation::new(Arc::clone(&self.file), line, column);
        let mut diagnostic = if self.error_count == self.options.max_errors {
            tracing::warn!(
                file = %self.file,
                limit = self.options.max_errors,
                "error limit reached, discarding remaining input"
            );
            self.cursor.truncate();
            Diagnostic::error(DiagnosticCode::E_LEX_TOO_MANY_ERRORS, "too many errors", location.clone())
        } else {
            Diagnostic::new(level, code, message, location.clone())
        };
        if self.options.debug {
            diagnostic = diagnostic.with_origin(origin);
        }

        self.handler.emit_diagnostic(diagnostic);
        self.error_count += 1;

        let span = Span::new(self.cursor.start(), self.cursor.position());
        self.pending
            .push_back(Token::new(TokenCode::Error, String::new(), location, span));
    }
}

#[cfg(test)]
mod tests {
    use crate::lexer::test_support::{codes, lex, lex_with};
    use crate::{LexOptions, TokenCode};

    #[test]
    fn test_error_token_carries_location() {
        let lexed = lex("foo \"abc");
        assert_eq!(lexed.tokens.len(), 2);
        let error = &lexed.tokens[1];
        assert!(error.is_error());
        assert!(error.text.is_empty());
        assert_eq!((error.line(), error.column()), (1, 5));
    }

    #[test]
    fn test_cutoff_after_max_errors() {
        let source = format!("\"{}", "\\q".repeat(10));
        let lexed = lex(&source);

        assert_eq!(lexed.writes.len(), 9);
        for (i, line) in lexed.writes.iter().take(8).enumerate() {
            let column = 2 + 2 * i;
            assert_eq!(line, &format!("test.yang:1:{column}: invalid escape sequence: \\q\n"));
        }
        assert_eq!(lexed.writes[8], "test.yang:1:18: too many errors\n");
        assert_eq!(codes(&lexed.tokens), vec![TokenCode::Error; 9]);
        assert_eq!(lexed.error_count, 9);
    }

    #[test]
    fn test_cutoff_is_configurable() {
        let lexed = lex_with("\"\\a\\b\\c\"", LexOptions::default().with_max_errors(1));
        assert_eq!(
            lexed.writes,
            vec![
                "test.yang:1:2: invalid escape sequence: \\a\n".to_string(),
                "test.yang:1:4: too many errors\n".to_string(),
            ]
        );
        assert_eq!(codes(&lexed.tokens), vec![TokenCode::Error, TokenCode::Error]);
    }

    #[test]
    fn test_zero_limit_reports_only_cutoff() {
        let lexed = lex_with("'abc", LexOptions::default().with_max_errors(0));
        assert_eq!(lexed.writes, vec!["test.yang:1:2: too many errors\n".to_string()]);
        assert_eq!(lexed.tokens.len(), 1);
    }

    #[test]
    fn test_debug_prefixes_origin() {
        let lexed = lex_with("\"abc", LexOptions::default().with_debug(true));
        assert_eq!(lexed.writes.len(), 1);
        let line = &lexed.writes[0];
        assert!(line.contains("string.rs:"), "{line}");
        assert!(line.ends_with("test.yang:1:1: missing closing \"\n"), "{line}");
    }
}
