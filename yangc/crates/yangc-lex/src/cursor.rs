//! Rune cursor for traversing YANG source text.
//!
//! This module provides the `Cursor` struct which reads the source one
//! Unicode code point at a time and tracks the position state the lexer
//! needs: the byte offset, the 1-based line, and two column counters. The
//! raw column counts a tab as one column; the tab column expands a tab to
//! the next multiple of 8, which is what RFC 7950 indentation stripping in
//! double-quoted strings is measured against.
//!
//! The cursor also remembers where the token currently being scanned
//! started, so the lexer can slice out its text when it is emitted.

use std::borrow::Cow;

/// Width of a tab stop for column accounting.
pub const TAB_WIDTH: u32 = 8;

/// A cursor for traversing source code one rune at a time.
///
/// The input is always newline-terminated: [`Cursor::new`] appends a `\n`
/// when the source does not already end with one.
///
/// # Example
///
/// ```
/// use yangc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("leaf x;");
/// assert_eq!(cursor.next(), Some('l'));
/// assert_eq!(cursor.peek(), Some('e'));
/// cursor.backup();
/// assert_eq!(cursor.next(), Some('l'));
/// ```
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: Cow<'a, str>,

    /// Byte offset where the current token started.
    start: usize,

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Runes consumed on the current line, tabs counted as one.
    column: u32,

    /// Columns consumed on the current line, tabs expanded.
    tab_column: u32,

    /// Byte width of the rune returned by the last `next()`, 0 when
    /// there is nothing to back up over.
    width: usize,

    /// Column counters before the last `next()`.
    prev_column: u32,
    prev_tab_column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor for the given source text.
    ///
    /// # Example
    ///
    /// ```
    /// use yangc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("prefix ex;");
    /// assert_eq!(cursor.source(), "prefix ex;\n");
    /// ```
    pub fn new(source: &'a str) -> Self {
        let source = if source.ends_with('\n') {
            Cow::Borrowed(source)
        } else {
            Cow::Owned(format!("{source}\n"))
        };
        Self {
            source,
            start: 0,
            position: 0,
            line: 1,
            column: 0,
            tab_column: 0,
            width: 0,
            prev_column: 0,
            prev_tab_column: 0,
        }
    }

    /// Returns the next rune and advances past it.
    ///
    /// Returns `None` at the end of input. A newline moves to column 0 of
    /// the next line; a tab advances the tab column to the next multiple
    /// of [`TAB_WIDTH`].
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<char> {
        let Some(c) = self.peek() else {
            self.width = 0;
            return None;
        };

        self.width = c.len_utf8();
        self.position += self.width;
        self.prev_column = self.column;
        self.prev_tab_column = self.tab_column;

        match c {
            '\n' => {
                self.line += 1;
                self.column = 0;
                self.tab_column = 0;
            },
            '\t' => {
                self.column += 1;
                self.tab_column = (self.tab_column / TAB_WIDTH + 1) * TAB_WIDTH;
            },
            _ => {
                self.column += 1;
                self.tab_column += 1;
            },
        }

        Some(c)
    }

    /// Undoes the last call to [`Cursor::next`].
    ///
    /// Only one rune can be backed up, and only immediately after `next()`;
    /// any other call is a no-op. Backing up over a newline returns to the
    /// previous line with both column counters at 0, since the cursor does
    /// not keep the length of earlier lines. The next forward read
    /// re-establishes them.
    pub fn backup(&mut self) {
        if self.width == 0 {
            return;
        }

        self.position -= self.width;
        self.width = 0;

        if self.source.as_bytes()[self.position] == b'\n' {
            self.line -= 1;
            self.column = 0;
            self.tab_column = 0;
        } else {
            self.column = self.prev_column;
            self.tab_column = self.prev_tab_column;
        }
    }

    /// Returns the next rune without consuming it.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.source[self.position..].chars().next()
    }

    /// Consumes runes while they are members of `valid`.
    ///
    /// Returns true if at least one rune was consumed.
    ///
    /// # Example
    ///
    /// ```
    /// use yangc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("  \tkey");
    /// assert!(cursor.accept_run(" \t"));
    /// assert!(!cursor.accept_run(" \t"));
    /// assert_eq!(cursor.peek(), Some('k'));
    /// ```
    pub fn accept_run(&mut self, valid: &str) -> bool {
        let mut accepted = false;
        while let Some(c) = self.peek() {
            if !valid.contains(c) {
                break;
            }
            self.next();
            accepted = true;
        }
        accepted
    }

    /// Advances to the next occurrence of `literal`, leaving the cursor
    /// just before it.
    ///
    /// Returns false, without moving, if `literal` does not occur in the
    /// remaining input. Line numbers are kept exact, but every skipped rune
    /// counts as a single column, tabs included.
    ///
    /// # Example
    ///
    /// ```
    /// use yangc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("a comment */ rest");
    /// assert!(cursor.skip_to("*/"));
    /// assert!(cursor.remaining().starts_with("*/"));
    /// assert!(!cursor.skip_to("never"));
    /// ```
    pub fn skip_to(&mut self, literal: &str) -> bool {
        let Some(offset) = self.source[self.position..].find(literal) else {
            return false;
        };

        let (newlines, tail) = {
            let skipped = &self.source[self.position..self.position + offset];
            let tail = match skipped.rfind('\n') {
                Some(i) => &skipped[i + 1..],
                None => skipped,
            };
            (skipped.matches('\n').count() as u32, tail.chars().count() as u32)
        };

        if newlines > 0 {
            self.line += newlines;
            self.column = tail;
            self.tab_column = tail;
        } else {
            self.column += tail;
            self.tab_column += tail;
        }
        self.position += offset;
        self.width = 0;
        true
    }

    /// Marks the current position as the start of the next token.
    #[inline]
    pub fn ignore(&mut self) {
        self.start = self.position;
    }

    /// Returns the text scanned since the token start.
    #[inline]
    pub fn pending(&self) -> &str {
        &self.source[self.start..self.position]
    }

    /// Discards all input after the current position.
    ///
    /// Every following read observes end of input.
    pub fn truncate(&mut self) {
        let position = self.position;
        self.source.to_mut().truncate(position);
    }

    /// Returns the byte offset where the current token started.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Returns the current byte position in the source.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the current line number (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the tab-expanded column of the next rune (1-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.tab_column + 1
    }

    /// Returns the raw column of the next rune (1-based, a tab counts as
    /// one column).
    #[inline]
    pub fn raw_column(&self) -> u32 {
        self.column + 1
    }

    /// Returns the tab-expanded number of columns consumed on this line.
    ///
    /// Right after `next()` this is the 1-based column of the rune it
    /// returned.
    #[inline]
    pub fn tab_column(&self) -> u32 {
        self.tab_column
    }

    /// Returns the source text from the current position to the end.
    #[inline]
    pub fn remaining(&self) -> &str {
        &self.source[self.position..]
    }

    /// Returns the full (newline-terminated) source text.
    #[inline]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns true if the cursor is at the end of the source.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }
}
