//! cpc-drv - Driver for the Cp scanner
//!
//! The `cpc` binary scans a Cp source file, or lines typed at a prompt, and
//! prints every token on its own line:
//!
//! ```text
//! $ echo 'print (1 + .5);' > demo.cp
//! $ cpc demo.cp
//! PRINT print null
//! LEFT_PAREN ( null
//! INT 1 1
//! PLUS + null
//! FLOAT .5 0.5
//! RIGHT_PAREN ) null
//! SEMICOLON ; null
//! ```
//!
//! Diagnostics go to stderr as `Error [line N]: message`. The exit status
//! follows sysexits(3): 0 on success, 64 for usage errors, 65 when the
//! source had lexical errors, 74 for I/O failures and 78 for a bad
//! configuration file.
//!
//! # Module Structure
//!
//! - [`config`] - `cpc.toml` loading
//! - [`error`] - Driver errors and exit codes
//! - [`session`] - File and interactive runs

pub mod config;
pub mod error;
pub mod session;

pub use config::Config;
pub use error::{DriverError, Result};
pub use session::Session;
