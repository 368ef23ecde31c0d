//! Diagnostic module - Error reporting infrastructure.
//!
//! This module provides the [`Diagnostic`] record, the collecting
//! [`Handler`], and the [`ErrorSink`] capability that producers such as the
//! scanner report through.
//!
//! # Examples
//!
//! ```
//! use cpc_util::diagnostic::{ErrorSink, Handler};
//!
//! let mut handler = Handler::new();
//! handler.report(1, "Unfinished string");
//!
//! if handler.has_errors() {
//!     eprintln!("scan failed with {} errors", handler.error_count());
//! }
//! ```

mod sink;

pub use sink::ErrorSink;

use crate::Span;
use std::cell::RefCell;
use std::fmt;
use thiserror::Error;

/// A scan error with the line it was reported on.
///
/// Renders as `Error [line 3]: message`.
///
/// # Examples
///
/// ```
/// use cpc_util::diagnostic::Diagnostic;
/// use cpc_util::Span;
///
/// let diag = Diagnostic::new("unexpected character '$'", Span::line_only(3));
/// assert_eq!(diag.line(), 3);
/// assert_eq!(diag.to_string(), "Error [line 3]: unexpected character '$'");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span,
        }
    }

    /// The line this diagnostic points at
    #[inline]
    pub fn line(&self) -> u32 {
        self.span.line
    }

    /// Render with the `Error` title in bold red.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpc_util::{Diagnostic, Span};
    ///
    /// let diag = Diagnostic::new("oops", Span::line_only(1));
    /// assert_eq!(diag.render_colored(), "\x1b[1;31mError\x1b[0m [line 1]: oops");
    /// ```
    pub fn render_colored(&self) -> String {
        format!(
            "\x1b[1;31mError\x1b[0m [line {}]: {}",
            self.span.line, self.message
        )
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error [line {}]: {}", self.span.line, self.message)
    }
}

/// Summary error for a run that reported errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiagnosticError {
    /// At least one diagnostic was collected.
    #[error("{count} error(s) reported")]
    ErrorsReported {
        /// Number of diagnostics
        count: usize,
    },
}

/// Handler for collecting diagnostics
///
/// The `Handler` collects diagnostics and answers questions about them. It
/// is the stock [`ErrorSink`] handed to the scanner by the driver.
///
/// # Examples
///
/// ```
/// use cpc_util::diagnostic::{Diagnostic, Handler};
/// use cpc_util::Span;
///
/// let handler = Handler::new();
/// handler.emit_diagnostic(Diagnostic::new("unexpected token", Span::line_only(1)));
///
/// assert_eq!(handler.error_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct Handler {
    /// Collected diagnostics
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
        }
    }

    /// Emit a pre-built diagnostic
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.borrow().is_empty()
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.diagnostics.borrow().len()
    }

    /// Get all diagnostics, in the order they were emitted
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Turn the collected state into a result: `Err` if any error was emitted.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpc_util::diagnostic::{DiagnosticError, ErrorSink, Handler};
    ///
    /// let mut handler = Handler::new();
    /// assert!(handler.check().is_ok());
    ///
    /// handler.report(1, "Unfinished string");
    /// assert_eq!(handler.check(), Err(DiagnosticError::ErrorsReported { count: 1 }));
    /// ```
    pub fn check(&self) -> Result<(), DiagnosticError> {
        match self.error_count() {
            0 => Ok(()),
            count => Err(DiagnosticError::ErrorsReported { count }),
        }
    }
}

impl ErrorSink for Handler {
    fn report(&mut self, line: u32, message: &str) {
        self.emit_diagnostic(Diagnostic::new(message, Span::line_only(line)));
    }
}
