//! cpc-lex - Lexical scanner for the Cp scripting language
//!
//! This crate turns Cp source text into a flat, ordered vector of tokens
//! for a parser to consume. Scanning is eager: the whole input is read in
//! one pass and the finished vector is returned.
//!
//! # Example Usage
//!
//! ```
//! use cpc_lex::{scan, Literal, TokenType};
//! use cpc_util::Handler;
//!
//! let mut handler = Handler::new();
//! let tokens = scan("var answer = 42; # the answer", &mut handler);
//!
//! assert_eq!(tokens.len(), 5);
//! assert_eq!(tokens[0].kind(), TokenType::Var);
//! assert_eq!(tokens[3].literal(), Some(&Literal::Int(42)));
//! assert!(!handler.has_errors());
//! ```
//!
//! # Error Recovery
//!
//! Malformed input never aborts a scan. Each problem is reported once to
//! the [`ErrorSink`] passed in, as a line number and a message, and
//! scanning resumes right after it:
//!
//! ```
//! use cpc_util::Handler;
//!
//! let mut handler = Handler::new();
//! let tokens = cpc_lex::scan("1 @ 2", &mut handler);
//!
//! assert_eq!(tokens.len(), 2);
//! assert_eq!(
//!     handler.diagnostics()[0].to_string(),
//!     "Error [line 1]: unexpected character '@'"
//! );
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token, token type and literal definitions, keyword table
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Character cursor for source traversal
//! - [`chars`] - Character classes
//! - [`error`] - Lexical error kinds
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! `and`, `class`, `else`, `false`, `for`, `fun`, `if`, `nil`, `or`,
//! `print`, `return`, `super`, `this`, `true`, `var`, `while`
//!
//! ## Identifiers
//!
//! Pattern: `[a-zA-Z_][a-zA-Z0-9_]*`
//!
//! ## Literals
//!
//! - **Integer**: `42`
//! - **Float**: `3.14`, `.5`
//! - **String**: `"hello"`, `'hello'` (no escapes, single line)
//!
//! ## Operators and Delimiters
//!
//! `( ) { } , . - + ; / * ** ! != = == > >= < <=`
//!
//! ## Comments
//!
//! `# to end of line` and `/* block, may span lines */`

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod chars;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod token;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use error::LexError;
pub use lexer::Lexer;
pub use token::{keyword, Literal, Token, TokenType};

use cpc_util::ErrorSink;

/// Scans `source` into tokens, reporting malformed input to `sink`.
///
/// Equivalent to `Lexer::new(source, sink).scan_tokens()`.
pub fn scan(source: &str, sink: &mut dyn ErrorSink) -> Vec<Token> {
    Lexer::new(source, sink).scan_tokens()
}
