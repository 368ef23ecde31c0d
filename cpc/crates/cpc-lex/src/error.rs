//! Lexical errors.
//!
//! Nothing here is ever returned from [`scan`](crate::scan). Each error is
//! rendered with `Display` and handed to the [`ErrorSink`](cpc_util::ErrorSink)
//! together with the line it belongs to, and scanning carries on.

use thiserror::Error;

/// A malformed piece of input found while scanning.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LexError {
    /// A character that cannot start any token.
    #[error("unexpected character '{0}'")]
    UnexpectedCharacter(char),

    /// A string literal hit a newline or the end of input before its
    /// closing delimiter.
    #[error("Unfinished string")]
    UnfinishedString,

    /// A `/*` comment with no closing `*/`.
    #[error("unfinished multiline comment")]
    UnfinishedComment,

    /// A float followed directly by another `.`, as in `1.2.3`.
    #[error("unexpected leading '.' in float")]
    MalformedFloat,

    /// A decimal digit run that does not fit in an `i64`.
    #[error("integer literal out of range")]
    IntegerOverflow,
}
