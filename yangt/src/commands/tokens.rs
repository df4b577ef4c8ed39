//! Tokens command implementation.
//!
//! Lexes each input file and prints one line per token on stdout. Lexical
//! errors are written to stderr as they are found.

use std::io::{self, Write};
use std::path::PathBuf;

use yangc_lex::{LexOptions, Lexer};
use yangc_util::Handler;

use crate::commands::common::{path_label, read_source, require_inputs};
use crate::error::{Result, YangtError};

/// Arguments for the tokens command.
#[derive(Debug, Clone, Default)]
pub struct TokensArgs {
    /// Files to lex, in order.
    pub files: Vec<PathBuf>,
    /// Lexer options for every file.
    pub options: LexOptions,
}

/// Tokens command handler.
pub struct TokensCommand {
    args: TokensArgs,
}

impl TokensCommand {
    /// Create a new TokensCommand.
    pub fn new(args: TokensArgs) -> Self {
        Self { args }
    }

    /// Execute the command, writing token lines to `out`.
    ///
    /// Returns the number of files that had lexical errors.
    pub fn run_to(&self, out: &mut impl Write) -> Result<usize> {
        require_inputs(&self.args.files)?;

        let mut failed = 0;
        for path in &self.args.files {
            let source = read_source(path)?;
            let label = path_label(path);
            let mut handler = Handler::new();
            let mut lexer = Lexer::with_options(&source, &label, &mut handler, self.args.options);

            let mut count = 0usize;
            for token in lexer.by_ref() {
                writeln!(out, "{token}")?;
                count += 1;
            }

            let errors = lexer.error_count();
            tracing::debug!(file = %label, tokens = count, errors, "lexed file");
            if errors > 0 {
                failed += 1;
            }
        }
        out.flush()?;
        Ok(failed)
    }

    /// Execute the command on stdout.
    pub fn run(&self) -> Result<()> {
        let stdout = io::stdout();
        let failed = self.run_to(&mut stdout.lock())?;
        if failed > 0 {
            return Err(YangtError::Lex { files: failed });
        }
        Ok(())
    }
}

/// Run the tokens command with the given arguments.
pub fn run_tokens(args: TokensArgs) -> Result<()> {
    TokensCommand::new(args).run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_tokens_output() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_file(&temp_dir, "m.yang", "prefix \"m\";\n");
        let label = path.display().to_string();

        let command = TokensCommand::new(TokensArgs {
            files: vec![path],
            options: LexOptions::default(),
        });
        let mut out = Vec::new();
        let failed = command.run_to(&mut out).unwrap();

        assert_eq!(failed, 0);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!(
                "{label}:1:1: unquoted \"prefix\"\n{label}:1:8: string \"m\"\n{label}:1:11: ;\n"
            )
        );
    }

    #[test]
    fn test_tokens_counts_failed_files() {
        let temp_dir = TempDir::new().unwrap();
        let good = write_file(&temp_dir, "good.yang", "a;");
        let bad = write_file(&temp_dir, "bad.yang", "\"abc");

        let command = TokensCommand::new(TokensArgs {
            files: vec![good, bad],
            options: LexOptions::default(),
        });
        let mut out = Vec::new();
        assert_eq!(command.run_to(&mut out).unwrap(), 1);
    }

    #[test]
    fn test_tokens_pattern_option() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_file(&temp_dir, "p.yang", r#""\d""#);

        let command = TokensCommand::new(TokensArgs {
            files: vec![path],
            options: LexOptions::default().with_pattern(true),
        });
        let mut out = Vec::new();
        assert_eq!(command.run_to(&mut out).unwrap(), 0);
        assert!(String::from_utf8(out).unwrap().contains(r#"string "\\d""#));
    }

    #[test]
    fn test_tokens_requires_files() {
        let command = TokensCommand::new(TokensArgs::default());
        let mut out = Vec::new();
        assert!(matches!(command.run_to(&mut out), Err(YangtError::Validation(_))));
    }
}
