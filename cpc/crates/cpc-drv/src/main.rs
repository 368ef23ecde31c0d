//! cpc - scan Cp source files or an interactive prompt into tokens.
//!
//! Parses the command line with clap, sets up logging, loads the
//! configuration and hands off to a [`Session`].

use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use cpc_drv::{Config, DriverError, Result, Session};
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Scan Cp source into tokens
///
/// With a FILE, scans the whole file and exits 65 if any lexical error was
/// found. Without one, reads lines from an interactive prompt until EOF.
#[derive(Parser, Debug)]
#[command(name = "cpc")]
#[command(author = "Cp Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Scan Cp source into tokens", long_about = None)]
struct Cli {
    /// Source file to scan (omit for an interactive prompt)
    file: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, env = "CPC_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, env = "CPC_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, env = "CPC_NO_COLOR")]
    no_color: bool,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => return report(DriverError::Usage(e.to_string())),
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report(e),
    }
}

/// Print an error (unless it was already printed) and turn it into an exit status.
fn report(error: DriverError) -> ExitCode {
    match &error {
        DriverError::Usage(message) => eprint!("{}", message),
        DriverError::Diagnostics(_) => {},
        other => eprintln!("error: {}", other),
    }
    ExitCode::from(error.exit_code())
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    init_logging(cli.verbose || config.verbose, cli.no_color)?;
    debug!(?config, "configuration loaded");

    let color = !cli.no_color && io::stderr().is_terminal();
    let session = Session::new(config).with_color(color);

    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();
    match cli.file {
        Some(path) => session.run_file(&path, &mut out, &mut err),
        None => session.run_prompt(&mut io::stdin().lock(), &mut out, &mut err),
    }
}

/// Initialize the logging system.
///
/// Logs go to stderr so they never mix with the token dump on stdout.
/// `RUST_LOG` takes precedence over `verbose`.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    let subscriber = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| DriverError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}
