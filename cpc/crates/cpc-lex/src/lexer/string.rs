//! String literal lexing.
//!
//! Strings are delimited by `"` or `'` and closed only by the same
//! character. There are no escape sequences, and a string may not span
//! lines.

use crate::error::LexError;
use crate::token::{Literal, TokenType};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a string whose opening `delimiter` has already been consumed.
    ///
    /// On a newline or end of input the string is reported as unfinished
    /// and no token is emitted. A newline that stopped the scan is consumed
    /// and counted, so the next token starts on the following line.
    pub(crate) fn lex_string(&mut self, delimiter: char) {
        while !self.cursor.is_at_end()
            && self.cursor.peek() != delimiter
            && self.cursor.peek() != '\n'
        {
            self.cursor.advance();
        }

        if self.cursor.is_at_end() || self.cursor.peek() == '\n' {
            self.report(LexError::UnfinishedString);
            if self.cursor.match_char('\n') {
                self.cursor.new_line();
            }
            return;
        }

        // Closing delimiter.
        self.cursor.advance();

        let lexeme = self.cursor.lexeme();
        let value = &lexeme[1..lexeme.len() - 1];
        self.add_token(TokenType::String, Some(Literal::Str(value.to_string())));
    }
}
