//! Comment lexing.
//!
//! This module handles skipping line and block comments. A `/` that does
//! not start a comment begins an unquoted string.

use yangc_util::DiagnosticCode;

use super::core::State;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Dispatches after a `/` seen in the ground state.
    pub(crate) fn lex_slash(&mut self) -> Option<State> {
        match self.cursor.next() {
            Some('/') => self.skip_line_comment(),
            Some('*') => self.skip_block_comment(),
            _ => {
                // The slash stays consumed as the first rune of the token.
                self.cursor.backup();
                Some(State::Unquoted)
            },
        }
    }

    /// Skips a line comment up to, not including, its newline.
    fn skip_line_comment(&mut self) -> Option<State> {
        // The input is always newline-terminated.
        if !self.cursor.skip_to("\n") {
            self.report_bug("comment without trailing newline");
            return None;
        }
        self.cursor.ignore();
        Some(State::Ground)
    }

    /// Skips a block comment. Block comments do not nest.
    fn skip_block_comment(&mut self) -> Option<State> {
        if !self.cursor.skip_to("*/") {
            self.report_error(DiagnosticCode::E_LEX_UNTERMINATED_COMMENT, "missing closing */");
            return None;
        }
        self.cursor.next();
        self.cursor.next();
        self.cursor.ignore();
        Some(State::Ground)
    }
}

#[cfg(test)]
mod tests {
    use crate::lexer::test_support::{codes, lex};
    use crate::TokenCode;

    #[test]
    fn test_line_comment() {
        let lexed = lex("// comment\nfoo;");
        assert_eq!(codes(&lexed.tokens), vec![TokenCode::Unquoted, TokenCode::Semicolon]);
        assert_eq!((lexed.tokens[0].line(), lexed.tokens[0].column()), (2, 1));
        assert_eq!((lexed.tokens[1].line(), lexed.tokens[1].column()), (2, 4));
    }

    #[test]
    fn test_line_comment_at_end_without_newline() {
        let lexed = lex("foo; // trailing");
        assert_eq!(codes(&lexed.tokens), vec![TokenCode::Unquoted, TokenCode::Semicolon]);
        assert!(lexed.writes.is_empty());
    }

    #[test]
    fn test_block_comment() {
        let lexed = lex("a /* one\n two */ b");
        assert_eq!(lexed.texts(), vec!["a", "b"]);
        assert_eq!((lexed.tokens[1].line(), lexed.tokens[1].column()), (2, 9));
    }

    #[test]
    fn test_block_comments_do_not_nest() {
        let lexed = lex("/* /* */ x */");
        assert_eq!(lexed.texts(), vec!["x", "*/"]);
    }

    #[test]
    fn test_unterminated_block_comment() {
        let lexed = lex("foo /* bar");
        assert_eq!(lexed.writes, vec!["test.yang:1:5: missing closing */\n".to_string()]);
        assert_eq!(codes(&lexed.tokens), vec![TokenCode::Unquoted, TokenCode::Error]);
    }

    #[test]
    fn test_lone_slash_is_unquoted() {
        let lexed = lex("/ /a");
        assert_eq!(lexed.texts(), vec!["/", "/a"]);
        assert_eq!(lexed.tokens[1].column(), 3);
    }

    #[test]
    fn test_slash_before_newline() {
        let lexed = lex("a /\nb");
        assert_eq!(lexed.texts(), vec!["a", "/", "b"]);
        assert_eq!((lexed.tokens[1].line(), lexed.tokens[1].column()), (1, 3));
        assert_eq!((lexed.tokens[2].line(), lexed.tokens[2].column()), (2, 1));
    }
}
