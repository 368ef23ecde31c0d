//! Comment lexing.
//!
//! This module handles skipping `#` line comments and `/* */` block
//! comments. Block comments do not nest.

use crate::error::LexError;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Skips a line comment whose `#` has already been consumed.
    ///
    /// The terminating newline is left for the main loop so that it is
    /// counted like any other.
    pub(crate) fn skip_line_comment(&mut self) {
        while !self.cursor.is_at_end() && self.cursor.peek() != '\n' {
            self.cursor.advance();
        }
    }

    /// Skips a block comment whose `/*` has already been consumed.
    ///
    /// An unclosed comment is reported on the line where it started.
    pub(crate) fn skip_block_comment(&mut self) {
        loop {
            if self.cursor.is_at_end() {
                self.report_at(self.start_line, LexError::UnfinishedComment);
                return;
            }

            if self.cursor.peek() == '*' && self.cursor.peek_next() == '/' {
                self.cursor.advance();
                self.cursor.advance();
                return;
            }

            if self.cursor.advance() == '\n' {
                self.cursor.new_line();
            }
        }
    }
}
