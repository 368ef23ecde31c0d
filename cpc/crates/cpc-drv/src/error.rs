//! Error handling module for the cpc driver.
//!
//! Every failure the driver can hit maps to one `DriverError` variant, and
//! every variant maps to a sysexits(3) exit status.

use std::path::PathBuf;

use cpc_util::DiagnosticError;
use thiserror::Error;

/// The command line was used incorrectly.
pub const EX_USAGE: u8 = 64;
/// The input data was incorrect.
pub const EX_DATAERR: u8 = 65;
/// An error occurred while doing I/O.
pub const EX_IOERR: u8 = 74;
/// Something was found in an unconfigured or misconfigured state.
pub const EX_CONFIG: u8 = 78;

/// Main error type for the cpc driver.
#[derive(Error, Debug)]
pub enum DriverError {
    /// Bad command line. Holds the full message clap rendered.
    #[error("{0}")]
    Usage(String),

    /// The source file could not be read.
    #[error("cannot read '{}': {source}", .path.display())]
    Read {
        /// File that failed to open or decode
        path: PathBuf,
        /// Underlying failure
        source: std::io::Error,
    },

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when the configuration cannot be loaded.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The scanner reported errors. They have already been printed.
    #[error(transparent)]
    Diagnostics(#[from] DiagnosticError),
}

impl DriverError {
    /// The process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            DriverError::Usage(_) => EX_USAGE,
            DriverError::Diagnostics(_) => EX_DATAERR,
            DriverError::Read { .. } | DriverError::Io(_) => EX_IOERR,
            DriverError::Config(_) => EX_CONFIG,
        }
    }
}

/// Result type alias using DriverError.
pub type Result<T> = std::result::Result<T, DriverError>;
