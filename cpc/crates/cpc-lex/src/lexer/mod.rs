//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Main Lexer struct, scan loop and dispatch
//! - `identifier` - Identifier and keyword lexing
//! - `number` - Integer and float literal lexing
//! - `string` - String literal lexing
//! - `operator` - One and two character operators
//! - `comment` - Line and block comment skipping

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use self::core::Lexer;
