//! Operator lexing.
//!
//! Each function here runs after the first character of the operator has
//! been consumed. The second character is consumed only when it completes a
//! two-character operator.

use crate::chars::is_digit;
use crate::token::TokenType;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes `*` or `**`.
    pub(crate) fn lex_star(&mut self) {
        let kind = if self.cursor.match_char('*') {
            TokenType::StarStar
        } else {
            TokenType::Star
        };
        self.add_token(kind, None);
    }

    /// Lexes `=` or `==`.
    pub(crate) fn lex_equal(&mut self) {
        let kind = if self.cursor.match_char('=') {
            TokenType::EqualEqual
        } else {
            TokenType::Equal
        };
        self.add_token(kind, None);
    }

    /// Lexes `!` or `!=`.
    pub(crate) fn lex_bang(&mut self) {
        let kind = if self.cursor.match_char('=') {
            TokenType::BangEqual
        } else {
            TokenType::Bang
        };
        self.add_token(kind, None);
    }

    /// Lexes `<` or `<=`.
    pub(crate) fn lex_less(&mut self) {
        let kind = if self.cursor.match_char('=') {
            TokenType::LessEqual
        } else {
            TokenType::Less
        };
        self.add_token(kind, None);
    }

    /// Lexes `>` or `>=`.
    pub(crate) fn lex_greater(&mut self) {
        let kind = if self.cursor.match_char('=') {
            TokenType::GreaterEqual
        } else {
            TokenType::Greater
        };
        self.add_token(kind, None);
    }

    /// Lexes `/`, or skips a block comment when `/*` is seen.
    pub(crate) fn lex_slash(&mut self) {
        if self.cursor.match_char('*') {
            self.skip_block_comment();
        } else {
            self.add_token(TokenType::Slash, None);
        }
    }

    /// Lexes `.`, or a leading-dot float such as `.5`.
    ///
    /// The float keeps the dot in its lexeme because the token start was
    /// marked before the dot was consumed.
    pub(crate) fn lex_dot(&mut self) {
        if is_digit(self.cursor.peek()) {
            self.lex_fraction();
        } else {
            self.add_token(TokenType::Dot, None);
        }
    }
}
