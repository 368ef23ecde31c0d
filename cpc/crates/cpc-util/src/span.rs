//! Span module - Source location tracking.
//!
//! A [`Span`] names a half-open byte range `[start, end)` of the source text
//! together with the 1-based line the range starts on. The scanner stamps one
//! on every token; diagnostics that only know a line use [`Span::line_only`].
//!
//! # Examples
//!
//! ```
//! use cpc_util::span::Span;
//!
//! let source = "var x = 1;";
//! let span = Span::new(4, 5, 1);
//! assert_eq!(&source[span.start..span.end], "x");
//! ```

use std::fmt;

/// Source location span
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
    /// Line number (1-based) on which the span starts
    pub line: u32,
}

impl Span {
    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `start` - Start byte offset
    /// * `end` - End byte offset (exclusive)
    /// * `line` - Line number (1-based)
    #[inline]
    pub fn new(start: usize, end: usize, line: u32) -> Self {
        debug_assert!(start <= end, "span start {} past end {}", start, end);
        Self { start, end, line }
    }

    /// Create an empty span that only carries a line number.
    ///
    /// Used for reports whose producer knows the line but not the offsets.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpc_util::span::Span;
    ///
    /// let span = Span::line_only(7);
    /// assert_eq!(span.start, span.end);
    /// assert_eq!(span.line, 7);
    /// ```
    #[inline]
    pub fn line_only(line: u32) -> Self {
        Self {
            start: 0,
            end: 0,
            line,
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
