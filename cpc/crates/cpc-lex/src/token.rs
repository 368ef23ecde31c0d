//! Token definitions for the Cp scripting language.
//!
//! A [`Token`] is an immutable record of one lexeme: its [`TokenType`], the
//! exact source text, an optional decoded [`Literal`], and where it started.
//! The reserved words live in a process-wide table built once on first use
//! and never mutated; see [`keyword`].

use std::fmt;

use cpc_util::Span;
use lazy_static::lazy_static;
use rustc_hash::FxHashMap;

/// The lexical category of a token.
///
/// `Display` renders the SCREAMING_SNAKE spelling used in token dumps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenType {
    // Single-character tokens.
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `,`
    Comma,
    /// `.`
    Dot,
    /// `-`
    Minus,
    /// `+`
    Plus,
    /// `;`
    Semicolon,
    /// `/`
    Slash,
    /// `*`
    Star,

    // One or two character tokens.
    /// `**`
    StarStar,
    /// `!`
    Bang,
    /// `!=`
    BangEqual,
    /// `=`
    Equal,
    /// `==`
    EqualEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
    /// `<`
    Less,
    /// `<=`
    LessEqual,

    // Literals.
    /// Any name that is not a reserved word
    Identifier,
    /// `"..."` or `'...'`
    String,
    /// Decimal integer
    Int,
    /// Decimal number with a fractional part
    Float,

    // Keywords.
    /// `and`
    And,
    /// `class`
    Class,
    /// `else`
    Else,
    /// `false`
    False,
    /// `for`
    For,
    /// `fun`
    Fun,
    /// `if`
    If,
    /// `nil`
    Nil,
    /// `or`
    Or,
    /// `print`
    Print,
    /// `return`
    Return,
    /// `super`
    Super,
    /// `this`
    This,
    /// `true`
    True,
    /// `var`
    Var,
    /// `while`
    While,
}

impl TokenType {
    /// Returns the SCREAMING_SNAKE name of this token type.
    pub const fn name(&self) -> &'static str {
        match self {
            TokenType::LeftParen => "LEFT_PAREN",
            TokenType::RightParen => "RIGHT_PAREN",
            TokenType::LeftBrace => "LEFT_BRACE",
            TokenType::RightBrace => "RIGHT_BRACE",
            TokenType::Comma => "COMMA",
            TokenType::Dot => "DOT",
            TokenType::Minus => "MINUS",
            TokenType::Plus => "PLUS",
            TokenType::Semicolon => "SEMICOLON",
            TokenType::Slash => "SLASH",
            TokenType::Star => "STAR",
            TokenType::StarStar => "STAR_STAR",
            TokenType::Bang => "BANG",
            TokenType::BangEqual => "BANG_EQUAL",
            TokenType::Equal => "EQUAL",
            TokenType::EqualEqual => "EQUAL_EQUAL",
            TokenType::Greater => "GREATER",
            TokenType::GreaterEqual => "GREATER_EQUAL",
            TokenType::Less => "LESS",
            TokenType::LessEqual => "LESS_EQUAL",
            TokenType::Identifier => "IDENTIFIER",
            TokenType::String => "STRING",
            TokenType::Int => "INT",
            TokenType::Float => "FLOAT",
            TokenType::And => "AND",
            TokenType::Class => "CLASS",
            TokenType::Else => "ELSE",
            TokenType::False => "FALSE",
            TokenType::For => "FOR",
            TokenType::Fun => "FUN",
            TokenType::If => "IF",
            TokenType::Nil => "NIL",
            TokenType::Or => "OR",
            TokenType::Print => "PRINT",
            TokenType::Return => "RETURN",
            TokenType::Super => "SUPER",
            TokenType::This => "THIS",
            TokenType::True => "TRUE",
            TokenType::Var => "VAR",
            TokenType::While => "WHILE",
        }
    }

    /// Returns true for the token types that carry a decoded [`Literal`].
    pub const fn has_literal(&self) -> bool {
        matches!(self, TokenType::String | TokenType::Int | TokenType::Float)
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

lazy_static! {
    /// Reserved words and the token types they scan as.
    static ref KEYWORDS: FxHashMap<&'static str, TokenType> = [
        ("and", TokenType::And),
        ("class", TokenType::Class),
        ("else", TokenType::Else),
        ("false", TokenType::False),
        ("for", TokenType::For),
        ("fun", TokenType::Fun),
        ("if", TokenType::If),
        ("nil", TokenType::Nil),
        ("or", TokenType::Or),
        ("print", TokenType::Print),
        ("return", TokenType::Return),
        ("super", TokenType::Super),
        ("this", TokenType::This),
        ("true", TokenType::True),
        ("var", TokenType::Var),
        ("while", TokenType::While),
    ]
    .into_iter()
    .collect();
}

/// Looks up a reserved word.
///
/// Matching is exact and case-sensitive; anything not in the table is an
/// ordinary identifier.
///
/// # Example
///
/// ```
/// use cpc_lex::token::{keyword, TokenType};
///
/// assert_eq!(keyword("while"), Some(TokenType::While));
/// assert_eq!(keyword("While"), None);
/// assert_eq!(keyword("whilst"), None);
/// ```
pub fn keyword(ident: &str) -> Option<TokenType> {
    KEYWORDS.get(ident).copied()
}

/// The decoded value carried by string, integer and float tokens.
#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    /// Text between the quotes, with no escape processing
    Str(String),
    /// Value of a decimal digit run
    Int(i64),
    /// Value of a decimal number with a fractional part
    Float(f64),
}

/// Strings print as their raw text and integers in decimal. Floats use the
/// shortest form that reads back to the same `f64`, so `3.0` keeps its
/// fraction and very large or small values switch to exponent form
/// (`99999999999999999999.0` prints as `1e20`).
impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Str(s) => f.write_str(s),
            Literal::Int(i) => write!(f, "{}", i),
            Literal::Float(x) => write!(f, "{:?}", x),
        }
    }
}

/// A scanned token. Built once by the lexer and never mutated.
///
/// # Example
///
/// ```
/// use cpc_lex::token::{Literal, TokenType};
/// use cpc_util::Handler;
///
/// let mut handler = Handler::new();
/// let tokens = cpc_lex::scan("x = 2.5", &mut handler);
///
/// assert_eq!(tokens[2].kind(), TokenType::Float);
/// assert_eq!(tokens[2].lexeme(), "2.5");
/// assert_eq!(tokens[2].literal(), Some(&Literal::Float(2.5)));
/// assert_eq!(tokens[2].to_string(), "FLOAT 2.5 2.5");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    kind: TokenType,
    lexeme: String,
    literal: Option<Literal>,
    line: u32,
    span: Span,
}

impl Token {
    /// Creates a token. The span's line is the token's line.
    pub fn new(
        kind: TokenType,
        lexeme: impl Into<String>,
        literal: Option<Literal>,
        span: Span,
    ) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            literal,
            line: span.line,
            span,
        }
    }

    /// The lexical category.
    #[inline]
    pub fn kind(&self) -> TokenType {
        self.kind
    }

    /// The exact source text of the token.
    #[inline]
    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    /// The decoded value, if this kind of token carries one.
    #[inline]
    pub fn literal(&self) -> Option<&Literal> {
        self.literal.as_ref()
    }

    /// The 1-based line the token started on.
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// The byte range of the lexeme in the source.
    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }
}

impl fmt::Display for Token {
    /// `KIND lexeme literal`, with `null` standing in for a missing literal.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.literal {
            Some(literal) => write!(f, "{} {} {}", self.kind, self.lexeme, literal),
            None => write!(f, "{} {} null", self.kind, self.lexeme),
        }
    }
}
