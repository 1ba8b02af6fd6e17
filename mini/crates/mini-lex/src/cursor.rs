//! Character cursor for traversing source text.
//!
//! This module provides the `Cursor` struct which maintains position state
//! while iterating through source characters. It steps over whole UTF-8
//! characters and tracks line/column information for spans.

/// A cursor for traversing source text character by character.
///
/// The position is a byte offset that always sits on a character boundary.
/// It only ever moves forward.
///
/// # Example
///
/// ```
/// use mini_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("(ab)");
///
/// assert_eq!(cursor.current_char(), '(');
/// cursor.advance();
/// assert_eq!(cursor.current_char(), 'a');
/// ```
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the character at the cursor position.
    ///
    /// Returns '\0' if at the end of the source. Since the source itself may
    /// contain '\0', use [`Cursor::is_at_end`] to detect the end.
    ///
    /// # Example
    ///
    /// ```
    /// use mini_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("abc");
    /// assert_eq!(cursor.current_char(), 'a');
    /// ```
    #[inline]
    pub fn current_char(&self) -> char {
        // Fast path for ASCII (most common case)
        if let Some(&b) = self.source.as_bytes().get(self.position) {
            if b < 128 {
                return b as char;
            }
        }

        self.remaining().chars().next().unwrap_or('\0')
    }

    /// Advances the cursor past the current character.
    ///
    /// Updates line and column tracking. Does nothing if already at end.
    #[inline]
    pub fn advance(&mut self) {
        let Some(c) = self.remaining().chars().next() else {
            return;
        };

        self.position += c.len_utf8();
        if c == '\n' {
            self.line = self.line.saturating_add(1);
            self.column = 1;
        } else {
            self.column = self.column.saturating_add(1);
        }
    }

    /// Advances past every consecutive character matching `predicate`.
    ///
    /// Returns the number of characters consumed.
    ///
    /// # Example
    ///
    /// ```
    /// use mini_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("  \t\nfoo");
    /// assert_eq!(cursor.eat_while(char::is_whitespace), 4);
    /// assert_eq!(cursor.current_char(), 'f');
    /// ```
    pub fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) -> usize {
        let mut count = 0;
        while !self.is_at_end() && predicate(self.current_char()) {
            self.advance();
            count += 1;
        }
        count
    }

    /// Returns true if the cursor is at the end of the source.
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the source text from the current position to the end.
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }
}
