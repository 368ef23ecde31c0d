//! cpc-util - Shared foundation types for the Cp toolchain.
//!
//! This crate holds the pieces every phase needs but none of them owns:
//!
//! - [`span`] - byte ranges into source text, tagged with a line number
//! - [`diagnostic`] - error diagnostics, the collecting
//!   [`Handler`], and the [`ErrorSink`] capability the scanner reports through
//!
//! # Example
//!
//! ```
//! use cpc_util::{ErrorSink, Handler};
//!
//! let mut handler = Handler::new();
//! handler.report(3, "unexpected character '@'");
//!
//! assert!(handler.has_errors());
//! assert_eq!(handler.diagnostics()[0].to_string(), "Error [line 3]: unexpected character '@'");
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticError, ErrorSink, Handler};
pub use span::Span;
