//! Core lexer implementation.
//!
//! This module contains the main Lexer struct, the scan loop and the
//! single-character dispatch. The sub-scanners for operators, numbers,
//! strings, identifiers and comments live in sibling modules as further
//! `impl Lexer` blocks.

use cpc_util::{ErrorSink, Span};
use tracing::{debug, trace};

use crate::chars::{is_ascii_ident_start, is_blank, is_digit};
use crate::cursor::Cursor;
use crate::error::LexError;
use crate::token::{Literal, Token, TokenType};

/// Lexer for the Cp scripting language.
///
/// The lexer turns source text into a flat vector of tokens in one eager
/// pass. It never fails: malformed input is reported to the [`ErrorSink`]
/// it was built with, and scanning resumes at the next unconsumed
/// character.
///
/// A lexer is single-use; [`Lexer::scan_tokens`] consumes it.
///
/// # Example
///
/// ```
/// use cpc_lex::{Lexer, TokenType};
/// use cpc_util::Handler;
///
/// let mut handler = Handler::new();
/// let tokens = Lexer::new("print 1 ** 2;", &mut handler).scan_tokens();
///
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind()).collect();
/// assert_eq!(
///     kinds,
///     vec![
///         TokenType::Print,
///         TokenType::Int,
///         TokenType::StarStar,
///         TokenType::Int,
///         TokenType::Semicolon,
///     ]
/// );
/// assert!(!handler.has_errors());
/// ```
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Receiver for lexical error reports.
    sink: &'a mut dyn ErrorSink,

    /// Tokens emitted so far, in source order.
    tokens: Vec<Token>,

    /// Line number where the current token starts (1-based).
    pub(crate) start_line: u32,

    /// Number of errors reported so far.
    errors: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source code.
    pub fn new(source: &'a str, sink: &'a mut dyn ErrorSink) -> Self {
        Self {
            cursor: Cursor::new(source),
            sink,
            tokens: Vec::new(),
            start_line: 1,
            errors: 0,
        }
    }

    /// Scans the whole source and returns every token in order.
    ///
    /// Each iteration marks the start of a new lexeme and consumes at least
    /// one character, so the loop always terminates.
    pub fn scan_tokens(mut self) -> Vec<Token> {
        while !self.cursor.is_at_end() {
            self.cursor.mark_start();
            self.start_line = self.cursor.line();
            self.scan_token();
        }

        debug!(
            tokens = self.tokens.len(),
            errors = self.errors,
            lines = self.cursor.line(),
            "scan finished"
        );
        self.tokens
    }

    /// Scans exactly one token, or skips exactly one piece of insignificant
    /// input.
    fn scan_token(&mut self) {
        let c = self.cursor.advance();
        match c {
            '(' => self.add_token(TokenType::LeftParen, None),
            ')' => self.add_token(TokenType::RightParen, None),
            '{' => self.add_token(TokenType::LeftBrace, None),
            '}' => self.add_token(TokenType::RightBrace, None),
            ',' => self.add_token(TokenType::Comma, None),
            '-' => self.add_token(TokenType::Minus, None),
            '+' => self.add_token(TokenType::Plus, None),
            ';' => self.add_token(TokenType::Semicolon, None),
            '.' => self.lex_dot(),
            '*' => self.lex_star(),
            '=' => self.lex_equal(),
            '!' => self.lex_bang(),
            '<' => self.lex_less(),
            '>' => self.lex_greater(),
            '/' => self.lex_slash(),
            '#' => self.skip_line_comment(),
            '"' | '\'' => self.lex_string(c),
            '\n' => self.cursor.new_line(),
            c if is_blank(c) => {},
            c if is_digit(c) => self.lex_number(),
            c if is_ascii_ident_start(c) => self.lex_identifier(),
            c => self.report(LexError::UnexpectedCharacter(c)),
        }
    }

    /// Emits a token for the current lexeme.
    pub(crate) fn add_token(&mut self, kind: TokenType, literal: Option<Literal>) {
        debug_assert_eq!(kind.has_literal(), literal.is_some());
        let span = Span::new(self.cursor.start(), self.cursor.current(), self.start_line);
        self.tokens
            .push(Token::new(kind, self.cursor.lexeme(), literal, span));
    }

    /// Reports a lexical error on the current line.
    pub(crate) fn report(&mut self, error: LexError) {
        let line = self.cursor.line();
        self.report_at(line, error);
    }

    /// Reports a lexical error on the given line.
    pub(crate) fn report_at(&mut self, line: u32, error: LexError) {
        trace!(line, offset = self.cursor.start(), %error, "lexical error");
        self.errors += 1;
        self.sink.report(line, &error.to_string());
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the number of errors reported so far.
    pub fn error_count(&self) -> usize {
        self.errors
    }
}
