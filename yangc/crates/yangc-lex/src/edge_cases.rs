//! Edge case tests for yangc-lex

#[cfg(test)]
mod tests {
    use crate::lexer::test_support::{codes, lex};
    use crate::{Lexer, Token, TokenCode};
    use yangc_util::Handler;

    fn lex_all(source: &str) -> Vec<Token> {
        let mut handler = Handler::silent();
        Lexer::new(source, "edge.yang", &mut handler).collect()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert!(lex_all("").is_empty());
    }

    #[test]
    fn test_edge_whitespace_only() {
        assert!(lex_all(" \t\r\n\n   ").is_empty());
    }

    #[test]
    fn test_edge_comments_only() {
        let lexed = lex("// one\n/* two\n three */\n// four");
        assert!(lexed.tokens.is_empty());
        assert!(lexed.writes.is_empty());
    }

    #[test]
    fn test_edge_source_with_trailing_newline() {
        let with = lex_all("a;\n");
        let without = lex_all("a;");
        assert_eq!(with, without);
    }

    #[test]
    fn test_edge_long_unquoted() {
        let name = "a".repeat(10000);
        let tokens = lex_all(&format!("leaf {name};"));
        assert_eq!(tokens[1].text, name);
        assert_eq!(tokens[2].column(), 10006);
    }

    #[test]
    fn test_edge_tab_before_token() {
        let tokens = lex_all("\tfoo");
        assert_eq!(tokens[0].column(), 9);
        let tokens = lex_all("ab\tfoo");
        assert_eq!(tokens[1].column(), 9);
        let tokens = lex_all("\t\tfoo");
        assert_eq!(tokens[0].column(), 17);
    }

    #[test]
    fn test_edge_unicode_columns() {
        let tokens = lex_all("\"日本語\" x");
        assert_eq!(tokens[0].text, "日本語");
        assert_eq!(tokens[1].column(), 7);
        assert_eq!(tokens[1].span.start, 12);
    }

    #[test]
    fn test_edge_crlf_line_endings() {
        let tokens = lex_all("a;\r\nb;\r\n");
        let positions: Vec<_> = tokens.iter().map(|t| (t.line(), t.column())).collect();
        assert_eq!(positions, vec![(1, 1), (1, 2), (2, 1), (2, 2)]);
    }

    #[test]
    fn test_edge_crlf_in_double_quoted_string() {
        // The carriage return is ordinary content, not trailing whitespace.
        let tokens = lex_all("\"a  \r\n b\"");
        assert_eq!(tokens[0].text, "a  \r\nb");
    }

    #[test]
    fn test_edge_quote_at_end_of_input() {
        let lexed = lex("x \"");
        assert_eq!(codes(&lexed.tokens), vec![TokenCode::Unquoted, TokenCode::Error]);
        assert_eq!(lexed.writes, vec!["test.yang:1:3: missing closing \"\n".to_string()]);
    }

    #[test]
    fn test_edge_adjacent_strings() {
        let tokens = lex_all("'a''b'\"c\"");
        assert_eq!(codes(&tokens), vec![TokenCode::String; 3]);
        let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_edge_nothing_after_halt() {
        let lexed = lex("a /* b\nc; d;");
        assert_eq!(codes(&lexed.tokens), vec![TokenCode::Unquoted, TokenCode::Error]);
    }

    #[test]
    fn test_edge_error_tokens_between_valid_tokens() {
        let lexed = lex("a \"\\x\" b \"\\y\" c");
        assert_eq!(
            codes(&lexed.tokens),
            vec![
                TokenCode::Unquoted,
                TokenCode::Error,
                TokenCode::String,
                TokenCode::Unquoted,
                TokenCode::Error,
                TokenCode::String,
                TokenCode::Unquoted,
            ]
        );
        assert_eq!(lexed.error_count, 2);
    }

    #[test]
    fn test_edge_many_escape_errors_in_one_string() {
        let lexed = lex("\"\\a\\b\\c\\d\" x");
        assert_eq!(lexed.writes.len(), 4);
        assert_eq!(lexed.tokens.len(), 6);
        assert_eq!(lexed.tokens[4].code, TokenCode::String);
        assert_eq!(lexed.tokens[5].text, "x");
    }

    #[test]
    fn test_edge_exactly_max_errors() {
        let source = "\"\\q\" ".repeat(8);
        let lexed = lex(&source);
        assert_eq!(lexed.writes.len(), 8);
        assert!(lexed.writes.iter().all(|w| w.contains("invalid escape sequence")));
        assert_eq!(lexed.tokens.len(), 16);
    }

    #[test]
    fn test_edge_cutoff_across_strings() {
        let source = "\"\\q\" ".repeat(12);
        let lexed = lex(&source);
        assert_eq!(lexed.writes.len(), 9);
        assert_eq!(lexed.writes[8], "test.yang:1:42: too many errors\n");
        // Eight strings survive; the ninth is cut off with the input.
        assert_eq!(
            lexed.tokens.iter().filter(|t| t.code == TokenCode::String).count(),
            8
        );
    }

    // ==================== PROPERTY TESTS ====================

    #[test]
    fn test_proptest_unquoted_round_trip() {
        use proptest::prelude::*;

        proptest!(|(words in prop::collection::vec("[a-z][a-z0-9_.:-]{0,8}", 1..10))| {
            let source = format!("{};", words.join(" "));
            let tokens = lex_all(&source);
            prop_assert_eq!(tokens.len(), words.len() + 1);
            for (token, word) in tokens.iter().zip(&words) {
                prop_assert_eq!(token.code, TokenCode::Unquoted);
                prop_assert_eq!(&token.text, word);
            }
            prop_assert_eq!(tokens[words.len()].code, TokenCode::Semicolon);
        });
    }

    #[test]
    fn test_proptest_single_quoted_verbatim() {
        use proptest::prelude::*;

        proptest!(|(content in "[^']{0,40}")| {
            let tokens = lex_all(&format!("'{content}'"));
            prop_assert_eq!(tokens.len(), 1);
            prop_assert_eq!(tokens[0].code, TokenCode::String);
            prop_assert_eq!(&tokens[0].text, &content);
        });
    }

    #[test]
    fn test_proptest_plain_double_quoted() {
        use proptest::prelude::*;

        proptest!(|(content in "[a-zA-Z0-9 ,.:;{}'/*+-]{0,40}")| {
            let tokens = lex_all(&format!("\"{content}\""));
            prop_assert_eq!(tokens.len(), 1);
            prop_assert_eq!(&tokens[0].text, &content);
        });
    }

    #[test]
    fn test_proptest_no_trailing_whitespace_before_newline() {
        use proptest::prelude::*;

        proptest!(|(lines in prop::collection::vec("[a-z]{1,5}[ \t]{0,4}", 1..6))| {
            let source = format!("\"{}\"", lines.join("\n"));
            let tokens = lex_all(&source);
            prop_assert_eq!(tokens.len(), 1);
            let text = &tokens[0].text;
            for line in text.split('\n').take(lines.len() - 1) {
                prop_assert!(!line.ends_with(' ') && !line.ends_with('\t'), "{:?}", text);
            }
        });
    }

    #[test]
    fn test_proptest_lines_are_monotonic() {
        use proptest::prelude::*;

        proptest!(|(source in "[a-z;{} \n\t]{0,80}")| {
            let tokens = lex_all(&source);
            for pair in tokens.windows(2) {
                let (a, b) = (&pair[0], &pair[1]);
                prop_assert!((a.line(), a.span.start) < (b.line(), b.span.start));
            }
        });
    }

    #[test]
    fn test_proptest_never_panics() {
        use proptest::prelude::*;

        proptest!(|(source in "\\PC{0,120}")| {
            let mut handler = Handler::silent();
            let tokens: Vec<Token> = Lexer::new(&source, "fuzz.yang", &mut handler).collect();
            prop_assert!(tokens.iter().filter(|t| t.is_error()).count() <= crate::DEFAULT_MAX_ERRORS + 1);
        });
    }
}
