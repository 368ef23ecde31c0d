//! Character cursor for traversing source code.
//!
//! This module provides the [`Cursor`] struct which holds all of the
//! scanner's positional state: where the token being scanned began, where
//! the next unconsumed character is, and which line that character is on.
//! It handles UTF-8 encoded text correctly; all offsets are byte offsets that
//! lie on character boundaries.
//!
//! The line counter is never bumped implicitly. The scanner calls
//! [`Cursor::new_line`] when it consumes a `'\n'`, so every place a newline
//! can be swallowed is visible at the call site.

/// A cursor for traversing source code character by character.
///
/// Invariant: `0 <= start <= current <= source.len()`.
///
/// # Example
///
/// ```
/// use cpc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("var x");
///
/// assert_eq!(cursor.peek(), 'v');
/// cursor.advance();
/// cursor.advance();
/// cursor.advance();
/// assert_eq!(cursor.lexeme(), "var");
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Byte offset where the current token begins.
    start: usize,

    /// Byte offset of the next unconsumed character.
    current: usize,

    /// Current line number (1-based).
    line: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the beginning of `source`, on line 1.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            start: 0,
            current: 0,
            line: 1,
        }
    }

    /// Returns true if every character has been consumed.
    ///
    /// # Example
    ///
    /// ```
    /// use cpc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("a");
    /// assert!(!cursor.is_at_end());
    /// cursor.advance();
    /// assert!(cursor.is_at_end());
    /// ```
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    /// Marks the next unconsumed character as the start of a new token.
    #[inline]
    pub fn mark_start(&mut self) {
        self.start = self.current;
    }

    /// Returns the character at the given character offset from the
    /// current position without consuming anything.
    ///
    /// Returns '\0' (null character) past the end of the source.
    #[inline]
    fn char_at(&self, offset: usize) -> char {
        let rest = &self.source.as_bytes()[self.current.min(self.source.len())..];

        // Fast path for ASCII (most common case)
        if let Some(&b) = rest.get(offset) {
            if rest[..=offset].is_ascii() {
                return b as char;
            }
        }

        // Slow path for UTF-8
        self.source[self.current..]
            .chars()
            .nth(offset)
            .unwrap_or('\0')
    }

    /// Returns the next unconsumed character, or '\0' at the end.
    ///
    /// # Example
    ///
    /// ```
    /// use cpc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("ab");
    /// assert_eq!(cursor.peek(), 'a');
    /// assert_eq!(Cursor::new("").peek(), '\0');
    /// ```
    #[inline]
    pub fn peek(&self) -> char {
        self.char_at(0)
    }

    /// Returns the character after the next one, or '\0' past the end.
    ///
    /// # Example
    ///
    /// ```
    /// use cpc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("ab");
    /// assert_eq!(cursor.peek_next(), 'b');
    /// assert_eq!(Cursor::new("a").peek_next(), '\0');
    /// ```
    #[inline]
    pub fn peek_next(&self) -> char {
        self.char_at(1)
    }

    /// Consumes and returns the next character.
    ///
    /// Returns '\0' without moving if already at the end. Does not touch
    /// the line counter, even when the consumed character is a newline.
    #[inline]
    pub fn advance(&mut self) -> char {
        if self.is_at_end() {
            return '\0';
        }

        // Fast path for ASCII (most common)
        let b = self.source.as_bytes()[self.current];
        if b < 128 {
            self.current += 1;
            return b as char;
        }

        // Slow path for UTF-8 multi-byte characters
        match self.source[self.current..].chars().next() {
            Some(c) => {
                self.current += c.len_utf8();
                c
            }
            None => '\0',
        }
    }

    /// Consumes the next character only if it equals `expected`.
    ///
    /// Returns true if the character was matched and consumed, false otherwise.
    ///
    /// # Example
    ///
    /// ```
    /// use cpc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("==");
    /// assert!(cursor.match_char('='));
    /// assert!(!cursor.match_char('!'));
    /// assert_eq!(cursor.peek(), '=');
    /// ```
    #[inline]
    pub fn match_char(&mut self, expected: char) -> bool {
        if self.is_at_end() || self.peek() != expected {
            return false;
        }
        self.current += expected.len_utf8();
        true
    }

    /// Records that a newline has just been consumed.
    #[inline]
    pub fn new_line(&mut self) {
        self.line += 1;
    }

    /// Returns the text between the token start and the current position.
    ///
    /// # Example
    ///
    /// ```
    /// use cpc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("<= 1");
    /// cursor.advance();
    /// cursor.advance();
    /// assert_eq!(cursor.lexeme(), "<=");
    /// ```
    #[inline]
    pub fn lexeme(&self) -> &'a str {
        &self.source[self.start..self.current]
    }

    /// Returns the byte offset where the current token begins.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Returns the byte offset of the next unconsumed character.
    #[inline]
    pub fn current(&self) -> usize {
        self.current
    }

    /// Returns the current line number (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }
}
