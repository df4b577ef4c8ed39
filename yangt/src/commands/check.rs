//! Check command implementation.
//!
//! Lexes many files in parallel, one independent lexer per file on a
//! rayon pool, and reports their diagnostics in input order.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use yangc_lex::{LexOptions, Lexer};
use yangc_util::Handler;

use crate::commands::common::{error_messages, path_label, read_source, require_inputs};
use crate::error::{Result, YangtError};

/// Arguments for the check command.
#[derive(Debug, Clone)]
pub struct CheckArgs {
    /// Enable verbose output.
    pub verbose: bool,
    /// Files to check.
    pub files: Vec<PathBuf>,
    /// Number of parallel jobs.
    pub jobs: u32,
    /// Lexer options for every file.
    pub options: LexOptions,
}

/// Outcome of lexing one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    /// Label of the file in diagnostics.
    pub label: String,
    /// Rendered diagnostics, one line each.
    pub diagnostics: String,
    /// Lexical errors reported, including the cutoff notice.
    pub errors: usize,
    /// Tokens produced, not counting end of file.
    pub tokens: usize,
}

/// Totals over all checked files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckSummary {
    /// Files checked.
    pub files: usize,
    /// Files with at least one lexical error.
    pub failed_files: usize,
    /// Lexical errors over all files.
    pub errors: usize,
}

impl CheckSummary {
    fn from_reports(reports: &[FileReport]) -> Self {
        reports.iter().fold(Self::default(), |mut summary, report| {
            summary.files += 1;
            summary.errors += report.errors;
            if report.errors > 0 {
                summary.failed_files += 1;
            }
            summary
        })
    }
}

/// Lexes one file, collecting its diagnostics instead of printing them.
pub fn check_file(path: &Path, options: LexOptions) -> Result<FileReport> {
    let source = read_source(path)?;
    let label = path_label(path);
    let mut handler = Handler::silent();

    let (tokens, errors) = {
        let mut lexer = Lexer::with_options(&source, &label, &mut handler, options);
        let tokens = lexer.by_ref().count();
        (tokens, lexer.error_count())
    };

    let diagnostics = handler
        .diagnostics()
        .iter()
        .map(|d| d.render())
        .collect::<String>();

    Ok(FileReport {
        label,
        diagnostics,
        errors,
        tokens,
    })
}

/// Check command handler.
pub struct CheckCommand {
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new CheckCommand.
    pub fn new(args: CheckArgs) -> Self {
        Self { args }
    }

    /// Lex every input file on a pool of `jobs` workers.
    ///
    /// Reports come back in input order.
    pub fn check_all(&self) -> Result<Vec<FileReport>> {
        require_inputs(&self.args.files)?;
        if self.args.jobs == 0 {
            return Err(YangtError::Validation(error_messages::ZERO_JOBS.to_string()));
        }

        let pool = ThreadPoolBuilder::new()
            .num_threads(self.args.jobs as usize)
            .build()
            .map_err(|e| YangtError::Config(format!("Failed to start worker pool: {}", e)))?;

        let options = self.args.options;
        pool.install(|| {
            self.args
                .files
                .par_iter()
                .map(|path| check_file(path, options))
                .collect()
        })
    }

    /// Execute the command, writing diagnostics to `err` and the summary
    /// to `out`.
    pub fn run_to(&self, out: &mut impl Write, err: &mut impl Write) -> Result<CheckSummary> {
        let start_time = Instant::now();
        let reports = self.check_all()?;

        for report in &reports {
            err.write_all(report.diagnostics.as_bytes())?;
            tracing::debug!(
                file = %report.label,
                tokens = report.tokens,
                errors = report.errors,
                "checked file"
            );
        }
        err.flush()?;

        let summary = CheckSummary::from_reports(&reports);
        if summary.errors == 0 {
            writeln!(out, "checked {} file(s): no lexical errors", summary.files)?;
        } else {
            writeln!(
                out,
                "checked {} file(s): {} error(s) in {} file(s)",
                summary.files, summary.errors, summary.failed_files
            )?;
        }

        if self.args.verbose {
            tracing::info!(
                jobs = self.args.jobs,
                elapsed_ms = start_time.elapsed().as_millis() as u64,
                "check completed"
            );
        }
        Ok(summary)
    }

    /// Execute the command on stdout and stderr.
    pub fn run(&self) -> Result<()> {
        let stdout = io::stdout();
        let stderr = io::stderr();
        let summary = self.run_to(&mut stdout.lock(), &mut stderr.lock())?;
        if summary.failed_files > 0 {
            return Err(YangtError::Lex {
                files: summary.failed_files,
            });
        }
        Ok(())
    }
}

/// Run the check command with the given arguments.
pub fn run_check(args: CheckArgs) -> Result<()> {
    CheckCommand::new(args).run()
}
