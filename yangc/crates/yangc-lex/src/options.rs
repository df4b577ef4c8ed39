//! Lexer configuration.

/// Number of lexical errors reported before the rest of the input is
/// discarded.
pub const DEFAULT_MAX_ERRORS: usize = 8;

/// Options controlling a [`Lexer`](crate::Lexer).
///
/// # Example
///
/// ```
/// use yangc_lex::LexOptions;
///
/// let options = LexOptions::default().with_pattern(true);
/// assert_eq!(options.max_errors, 8);
/// assert!(options.pattern);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LexOptions {
    /// Errors reported before a final "too many errors" notice truncates
    /// the input.
    pub max_errors: usize,
    /// Trace state transitions and prefix diagnostics with the reporting
    /// call site.
    pub debug: bool,
    /// Start in pattern mode, where unknown escapes in double-quoted
    /// strings are kept verbatim for the regular expression compiler.
    pub pattern: bool,
}

impl LexOptions {
    /// Sets the error cutoff.
    pub fn with_max_errors(mut self, max_errors: usize) -> Self {
        self.max_errors = max_errors;
        self
    }

    /// Enables or disables debug tracing.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Enables or disables pattern mode.
    pub fn with_pattern(mut self, pattern: bool) -> Self {
        self.pattern = pattern;
        self
    }
}

impl Default for LexOptions {
    fn default() -> Self {
        Self {
            max_errors: DEFAULT_MAX_ERRORS,
            debug: false,
            pattern: false,
        }
    }
}
