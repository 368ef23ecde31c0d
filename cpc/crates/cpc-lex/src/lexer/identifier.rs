//! Identifier and keyword lexing.

use crate::chars::is_ascii_ident_continue;
use crate::token::{keyword, TokenType};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier or keyword whose first character has already
    /// been consumed.
    ///
    /// After reading the identifier, checks whether it is a reserved word.
    /// Neither kind carries a literal.
    pub(crate) fn lex_identifier(&mut self) {
        while is_ascii_ident_continue(self.cursor.peek()) {
            self.cursor.advance();
        }

        let kind = keyword(self.cursor.lexeme()).unwrap_or(TokenType::Identifier);
        self.add_token(kind, None);
    }
}
