//! Yangt CLI - A developer tool for the YANG lexer.
//!
//! This is the main entry point for the yangt CLI application.
//! It uses clap for argument parsing and dispatches to appropriate
//! command handlers based on user input.

mod commands;
mod config;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{run_check, run_tokens, CheckArgs, TokensArgs};
use config::Config;
use error::{Result, YangtError};

/// Yangt - A developer tool for the YANG lexer
///
/// Yangt runs the lexer over YANG source files, either dumping the token
/// stream or checking many files for lexical errors.
#[derive(Parser, Debug)]
#[command(name = "yangt")]
#[command(author = "yangc Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A developer tool for the YANG lexer", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "YANGT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "YANGT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "YANGT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the yangt CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the token stream of YANG files
    ///
    /// Prints one `<file>:<line>:<col>: <code> "<text>"` line per token.
    /// Lexical errors are written to stderr.
    Tokens(TokensCommand),

    /// Check YANG files for lexical errors
    ///
    /// Lexes the files in parallel and reports their errors in input
    /// order, followed by a summary.
    Check(CheckCommand),
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
struct TokensCommand {
    /// Input files to lex
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Keep unknown escapes in double-quoted strings, as in pattern text
    #[arg(long)]
    pattern: bool,

    /// Trace lexer state transitions and tag errors with their call site
    #[arg(long)]
    debug: bool,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommand {
    /// Input files to check
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Number of parallel jobs (default: from config)
    #[arg(short, long)]
    jobs: Option<u32>,
}

/// Main entry point for the yangt CLI.
///
/// Parses command-line arguments, loads configuration, initializes logging,
/// and dispatches to the appropriate command handler.
fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = load_config(cli.config.as_deref())?;

    // Initialize logging
    let verbose = cli.verbose || config.verbose;
    let trace_lexer = config.lexer.debug || matches!(&cli.command, Commands::Tokens(args) if args.debug);
    init_logging(verbose, trace_lexer, cli.no_color)?;

    // Execute the selected command
    execute_command(cli.command, verbose, config)
}

/// Initialize the logging system.
///
/// Logs go to stderr so they never mix with token output. Lexer traces
/// are debug events, so tracing the lexer raises its filter to `debug`.
fn init_logging(verbose: bool, trace_lexer: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else if trace_lexer {
        EnvFilter::new("info,yangc_lex=debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| YangtError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, verbose: bool, config: Config) -> Result<()> {
    match command {
        Commands::Tokens(args) => execute_tokens(args, config),
        Commands::Check(args) => execute_check(args, verbose, config),
    }
}

/// Execute the tokens command.
fn execute_tokens(args: TokensCommand, config: Config) -> Result<()> {
    let options = config
        .lexer
        .options()
        .with_pattern(args.pattern)
        .with_debug(args.debug || config.lexer.debug);
    run_tokens(TokensArgs {
        files: args.files,
        options,
    })
}

/// Execute the check command.
fn execute_check(args: CheckCommand, verbose: bool, config: Config) -> Result<()> {
    run_check(CheckArgs {
        verbose,
        files: args.files,
        jobs: args.jobs.unwrap_or(config.check.jobs),
        options: config.lexer.options(),
    })
}
