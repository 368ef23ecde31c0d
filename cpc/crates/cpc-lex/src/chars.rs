//! Character classes used by the scanner.
//!
//! Cp source is classified on ASCII: identifiers are `[A-Za-z_][A-Za-z0-9_]*`
//! and numbers use the decimal digits `0-9`. Any other character outside a
//! string or comment is unexpected.

/// Checks if a character can start an identifier.
///
/// # Example
///
/// ```
/// use cpc_lex::chars::is_ascii_ident_start;
///
/// assert!(is_ascii_ident_start('a'));
/// assert!(is_ascii_ident_start('Z'));
/// assert!(is_ascii_ident_start('_'));
/// assert!(!is_ascii_ident_start('α'));
/// assert!(!is_ascii_ident_start('1'));
/// ```
#[inline]
pub fn is_ascii_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Checks if a character can continue an identifier.
///
/// # Example
///
/// ```
/// use cpc_lex::chars::is_ascii_ident_continue;
///
/// assert!(is_ascii_ident_continue('a'));
/// assert!(is_ascii_ident_continue('_'));
/// assert!(is_ascii_ident_continue('1'));
/// assert!(!is_ascii_ident_continue('+'));
/// ```
#[inline]
pub fn is_ascii_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Checks if a character is a decimal digit.
#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Checks if a character is insignificant whitespace other than a newline.
///
/// Newlines are handled separately because they advance the line counter.
#[inline]
pub fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r')
}
