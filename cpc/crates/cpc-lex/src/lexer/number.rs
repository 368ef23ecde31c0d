//! Number literal lexing.
//!
//! Cp has decimal integers (`42`) and decimal floats (`3.5`, `.5`). There
//! are no exponents, radix prefixes or digit separators.

use crate::chars::is_digit;
use crate::error::LexError;
use crate::token::{Literal, TokenType};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a number whose first digit has already been consumed.
    ///
    /// A `.` continues the number only when a digit follows it, so `3.`
    /// and `3..5` both leave the dot for the next token.
    pub(crate) fn lex_number(&mut self) {
        self.eat_digits();

        if self.cursor.peek() == '.' && is_digit(self.cursor.peek_next()) {
            self.cursor.advance();
            self.lex_fraction();
            return;
        }

        match self.cursor.lexeme().parse::<i64>() {
            Ok(value) => self.add_token(TokenType::Int, Some(Literal::Int(value))),
            Err(_) => self.report(LexError::IntegerOverflow),
        }
    }

    /// Lexes the digits after a decimal point that has just been consumed.
    ///
    /// A second `.` directly after the fraction is an error; nothing is
    /// emitted and the dot is left in place.
    pub(crate) fn lex_fraction(&mut self) {
        self.eat_digits();

        if self.cursor.peek() == '.' {
            self.report(LexError::MalformedFloat);
            return;
        }

        match self.cursor.lexeme().parse::<f64>() {
            Ok(value) => self.add_token(TokenType::Float, Some(Literal::Float(value))),
            Err(_) => self.report(LexError::MalformedFloat),
        }
    }

    fn eat_digits(&mut self) {
        while is_digit(self.cursor.peek()) {
            self.cursor.advance();
        }
    }
}
